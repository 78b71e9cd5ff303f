//! Fight scoring engine.
//!
//! Pure functions only: budget enforcement, effective-weight derivation,
//! bias generation, single-fight scoring (Part 1) and the three-session
//! best-of-three with its fixed output layer (Part 2). Deterministic paths
//! must stay bit-identical for identical inputs — championship validation
//! depends on it.

pub mod best_of_three;
pub mod bias;
pub mod budget;
pub mod fight;
pub mod weights;

pub use best_of_three::{calculate_best_of_three, OUTPUT_LAYER_BIAS};
pub use bias::{calculate_bias, deterministic_bias, mood_message, MOOD_SWING};
pub use budget::{budget_status, enforce_time_budget, BudgetStatus};
pub use fight::{calculate_fight, calculate_fight_deterministic};
pub use weights::{calculate_effective_weights, WEIGHT_NORMALIZATION_TOTAL};

//! # mma_core - Perceptron-Teaching MMA Training Game Core
//!
//! This library is the computation core of an educational game that teaches
//! perceptron and basic two-layer-network concepts through an MMA-training
//! metaphor. The player splits a time budget across seven training stats
//! (the perceptron weights analogue), the core scores the resulting fight
//! against a per-opponent threshold, and Part 2 extends this to three
//! parallel sessions combined by a fixed majority-vote output layer.
//!
//! ## Features
//! - Pure, synchronous scoring functions (no internal state, no I/O)
//! - Deterministic validation path (same inputs = bit-identical results)
//! - Single-tip advice diagnostics for lost fights
//! - JSON API for easy integration with game engine hosts

pub mod advice;
pub mod api;
pub mod championship;
pub mod data;
pub mod engine;
pub mod error;
pub mod models;
pub mod state;
pub mod stats;

// Re-export main API functions
pub use api::{execute_game_json, GameRequest, GameResponse};
pub use error::{GameError, Result};

// Re-export the engine surface
pub use engine::{
    budget_status, calculate_best_of_three, calculate_bias, calculate_effective_weights,
    calculate_fight, calculate_fight_deterministic, deterministic_bias, enforce_time_budget,
    mood_message, BudgetStatus, MOOD_SWING, OUTPUT_LAYER_BIAS, WEIGHT_NORMALIZATION_TOTAL,
};

pub use advice::{generate_advice, AdviceTip};
pub use championship::{validate_championship_weights, validate_championship_weights_part2};

// Re-export core data types
pub use data::{find_athlete, find_opponent, get_game_config, GameConfig};
pub use models::{
    Athlete, BestOfThreeResult, ChampionshipValidation, FightResult, GamePart, Opponent,
    OpponentValidationResult, TrainingSession, SESSION_COUNT,
};
pub use state::GameState;
pub use stats::{AllocationVector, StatVector, TrainingStat, STAT_COUNT};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SCHEMA_VERSION: u8 = 1;

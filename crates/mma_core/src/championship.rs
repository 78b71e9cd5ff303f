//! Championship validation.
//!
//! Re-runs the engine against every opponent in the roster with the
//! player's current configuration to test generalization. Always uses the
//! deterministic bias path: the verdict must not hinge on the same mood
//! randomness that produced the original win or loss.

use crate::engine::bias::deterministic_bias;
use crate::engine::calculate_best_of_three;
use crate::engine::fight::calculate_fight_deterministic;
use crate::error::{GameError, Result};
use crate::models::{
    Athlete, ChampionshipValidation, FightResult, Opponent, OpponentValidationResult,
    TrainingSession, SESSION_COUNT,
};
use crate::stats::AllocationVector;

/// Part 1: validate one allocation against the full opponent roster.
///
/// One deterministic fight per opponent; `all_passed` is the conjunction
/// over every individual result.
pub fn validate_championship_weights(
    athlete: &Athlete,
    opponents: &[Opponent],
    allocation: &AllocationVector,
    time_budget: u32,
    fixed_talent: f32,
) -> ChampionshipValidation {
    let results: Vec<OpponentValidationResult> = opponents
        .iter()
        .map(|opponent| {
            let result = calculate_fight_deterministic(
                athlete,
                opponent,
                allocation,
                time_budget,
                fixed_talent,
            );
            OpponentValidationResult {
                opponent: opponent.clone(),
                passed: result.won,
                result,
            }
        })
        .collect();

    let all_passed = results.iter().all(|r| r.passed);

    ChampionshipValidation { results, all_passed }
}

/// Part 2: validate the three session allocations against the full roster.
///
/// Every session mood is replaced by the fixed talent (no variation), then
/// each opponent gets a best-of-three. The per-opponent display score is
/// the mean of the three session scores; the pass verdict itself still
/// comes from the >= 2 wins rule.
pub fn validate_championship_weights_part2(
    athlete: &Athlete,
    opponents: &[Opponent],
    sessions: &[TrainingSession],
    time_budget: u32,
    fixed_talent: f32,
) -> Result<ChampionshipValidation> {
    if sessions.len() != SESSION_COUNT {
        return Err(GameError::InvalidSessionCount {
            expected: SESSION_COUNT,
            found: sessions.len(),
        });
    }

    let deterministic_sessions: Vec<TrainingSession> = sessions
        .iter()
        .map(|session| TrainingSession {
            mood: deterministic_bias(fixed_talent),
            fight_result: None,
            ..session.clone()
        })
        .collect();

    let mut results = Vec::with_capacity(opponents.len());
    for opponent in opponents {
        let best_of_three =
            calculate_best_of_three(athlete, opponent, &deterministic_sessions, time_budget)?;

        let mean_score = best_of_three
            .sessions
            .iter()
            .filter_map(|s| s.fight_result.as_ref())
            .map(|r| r.score)
            .sum::<f32>()
            / SESSION_COUNT as f32;

        let effective_weights = best_of_three.sessions[0]
            .fight_result
            .as_ref()
            .map(|r| r.effective_weights)
            .unwrap_or_default();

        let result = FightResult {
            score: mean_score,
            won: best_of_three.won,
            bias_used: fixed_talent,
            effective_weights,
            threshold: opponent.threshold,
        };

        results.push(OpponentValidationResult {
            opponent: opponent.clone(),
            passed: best_of_three.won,
            result,
        });
    }

    let all_passed = results.iter().all(|r| r.passed);

    Ok(ChampionshipValidation { results, all_passed })
}

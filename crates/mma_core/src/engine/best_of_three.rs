// Part 2: Best of Three (hidden node 3개 + 고정 output layer)
use crate::engine::budget::enforce_time_budget;
use crate::engine::fight::score_fight;
use crate::engine::weights::calculate_effective_weights;
use crate::error::{GameError, Result};
use crate::models::{Athlete, BestOfThreeResult, Opponent, TrainingSession, SESSION_COUNT};

/// output layer 고정 bias. weight는 세션당 전부 1이라서
/// 판정은 winCount + OUTPUT_LAYER_BIAS >= 0, 즉 2승 이상이다.
/// 손으로 고정한 output layer를 보여주는 게 목적이라 설정 불가.
pub const OUTPUT_LAYER_BIAS: f32 = -2.0;

/// 세션 3개를 각자의 배분/mood로 독립 채점하고 다수결로 합산한다.
///
/// bias는 세션이 미리 뽑아둔 `mood`를 그대로 쓴다 (여기서 재추첨하지
/// 않음). 세션이 정확히 3개가 아니면 즉시 실패한다 — 호출 측 버그이며
/// 조용히 보정하지 않는다.
pub fn calculate_best_of_three(
    athlete: &Athlete,
    opponent: &Opponent,
    sessions: &[TrainingSession],
    time_budget: u32,
) -> Result<BestOfThreeResult> {
    if sessions.len() != SESSION_COUNT {
        return Err(GameError::InvalidSessionCount {
            expected: SESSION_COUNT,
            found: sessions.len(),
        });
    }

    // effective weight는 (선수, 상대) 쌍에만 의존하므로 세션 간 공유
    let effective = calculate_effective_weights(&athlete.weights, &opponent.stats);

    let updated: Vec<TrainingSession> = sessions
        .iter()
        .map(|session| {
            let enforced = enforce_time_budget(&session.allocation, time_budget);
            let result = score_fight(&effective, &enforced, session.mood, opponent.threshold);
            TrainingSession {
                fight_result: Some(result),
                ..session.clone()
            }
        })
        .collect();

    let wins = updated
        .iter()
        .filter(|s| s.fight_result.as_ref().is_some_and(|r| r.won))
        .count() as u8;

    // output layer: 승리 1, 패배 0의 가중합(weight 전부 1) + bias(-2)
    let output_layer_score = wins;
    let won = output_layer_score as f32 + OUTPUT_LAYER_BIAS >= 0.0;

    Ok(BestOfThreeResult {
        sessions: updated,
        wins,
        won,
        output_layer_score,
    })
}

// 단일 경기 채점 (Part 1 perceptron)
use rand::Rng;

use crate::engine::bias::{calculate_bias, deterministic_bias};
use crate::engine::budget::enforce_time_budget;
use crate::engine::weights::calculate_effective_weights;
use crate::models::{Athlete, FightResult, Opponent};
use crate::stats::{AllocationVector, StatVector, TrainingStat};

/// 공통 채점: score = bias + Σ effective[i] * enforced[i], 동점은 승리.
pub(crate) fn score_fight(
    effective: &StatVector,
    enforced: &AllocationVector,
    bias: f32,
    threshold: f32,
) -> FightResult {
    let mut score = bias;
    for stat in TrainingStat::ALL {
        score += effective.get(stat) * enforced.get(stat) as f32;
    }

    FightResult {
        score,
        won: score >= threshold,
        bias_used: bias,
        effective_weights: *effective,
        threshold,
    }
}

/// 경기 계산 (확률 모드: mood 변동 포함)
///
/// 예산 집행 → effective weight 유도 → bias 추첨 → 가중합 → 판정.
/// 순수 함수이며 승리/언락 상태 갱신은 호출 측 책임이다.
pub fn calculate_fight<R: Rng + ?Sized>(
    athlete: &Athlete,
    opponent: &Opponent,
    allocation: &AllocationVector,
    time_budget: u32,
    fixed_talent: f32,
    rng: &mut R,
) -> FightResult {
    let enforced = enforce_time_budget(allocation, time_budget);
    let effective = calculate_effective_weights(&athlete.weights, &opponent.stats);
    let bias = calculate_bias(fixed_talent, rng);

    score_fight(&effective, &enforced, bias, opponent.threshold)
}

/// 경기 계산 (결정 모드: 챔피언십 검증용, mood 변동 없음)
pub fn calculate_fight_deterministic(
    athlete: &Athlete,
    opponent: &Opponent,
    allocation: &AllocationVector,
    time_budget: u32,
    fixed_talent: f32,
) -> FightResult {
    let enforced = enforce_time_budget(allocation, time_budget);
    let effective = calculate_effective_weights(&athlete.weights, &opponent.stats);
    let bias = deterministic_bias(fixed_talent);

    score_fight(&effective, &enforced, bias, opponent.threshold)
}

//! 패배 후 코치 조언 생성
//!
//! 진 경기의 점수/가중치/배분을 진단해서 후보 팁을 만들고, 그중
//! 우선순위가 가장 높은(숫자가 가장 낮은) 팁 하나만 돌려준다.
//! "한 번에 한 가지 힌트"는 의도된 UX 규칙이다.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::models::FightResult;
use crate::stats::{AllocationVector, TrainingStat};

/// 코치 조언 팁. priority가 낮을수록 먼저 보여준다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdviceTip {
    pub message: String,
    pub priority: u8,
}

/// 진 경기에 대한 조언을 생성한다. 길이 0 또는 1의 벡터를 돌려준다.
///
/// 규칙 (독립 평가, 최저 priority 하나만 생존):
/// 1. 아깝게 짐 (threshold의 10% 이내) + 고가중치 스탯에 여유(배분 < 8)
/// 2. 고가중치 스탯(effective > 0.5)인데 배분 부족(< 5)
/// 3. 저가중치 스탯(effective < 0.3)에 과투자(> 7)
/// 4. 단일 스탯 쏠림 (최대 배분 > 총합의 80%, 총합 > 10)
///
/// 이긴 경기에는 빈 벡터. 같은 priority끼리는 가중치 내림차순
/// (동률은 canonical 스탯 순서) 평가에서 먼저 만난 쪽이 이긴다.
pub fn generate_advice(
    fight_result: &FightResult,
    allocation: &AllocationVector,
) -> Vec<AdviceTip> {
    if fight_result.won {
        return Vec::new();
    }

    let score = fight_result.score;
    let threshold = fight_result.threshold;
    let effective = &fight_result.effective_weights;

    // effective weight 내림차순 정렬 (stable — 동률은 canonical 순서 유지)
    let mut ranked: Vec<(TrainingStat, f32, u8)> = TrainingStat::ALL
        .iter()
        .map(|stat| (*stat, effective.get(*stat), allocation.get(*stat)))
        .collect();
    ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

    let high_weight = &ranked[..2];
    let low_weight = &ranked[ranked.len() - 2..];

    let mut tips: Vec<AdviceTip> = Vec::new();

    // 1. 아깝게 진 경기 (threshold의 90% 이상)
    if score >= threshold * 0.9 && score < threshold {
        if let Some((stat, _, _)) = high_weight.iter().find(|(_, _, alloc)| *alloc < 8) {
            tips.push(AdviceTip {
                message: format!(
                    "So close! Add a small boost to **{}**.",
                    stat.display_name()
                ),
                priority: 1,
            });
        }
    }

    // 2. 고가중치 스탯 투자 부족
    for (stat, weight, alloc) in high_weight {
        if *weight > 0.5 && *alloc < 5 {
            tips.push(AdviceTip {
                message: format!(
                    "We needed a bit more **{}** to match them.",
                    stat.display_name()
                ),
                priority: 2,
            });
        }
    }

    // 3. 저가중치 스탯 과투자
    for (stat, weight, alloc) in low_weight {
        if *weight < 0.3 && *alloc > 7 {
            tips.push(AdviceTip {
                message: format!(
                    "We trained **{}** a lot, but it didn't help much here.",
                    stat.display_name()
                ),
                priority: 3,
            });
        }
    }

    // 4. 단일 스탯 쏠림
    let total_used = allocation.total();
    let max_stat = allocation.max_component() as u32;
    if max_stat as f32 > total_used as f32 * 0.8 && total_used > 10 {
        tips.push(AdviceTip {
            message: "Try spreading your time a bit.".to_string(),
            priority: 4,
        });
    }

    // 최저 priority 하나만 남긴다 (sort는 stable이라 동률은 먼저 만난 팁)
    tips.sort_by_key(|tip| tip.priority);
    tips.truncate(1);
    tips
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::StatVector;

    fn lost_result(score: f32, threshold: f32, effective: StatVector) -> FightResult {
        FightResult {
            score,
            won: false,
            bias_used: 0.0,
            effective_weights: effective,
            threshold,
        }
    }

    /// striking/muay_thai가 고가중치, tactical/recovery가 저가중치인 분포
    fn skewed_weights() -> StatVector {
        StatVector {
            conditioning: 0.4,
            striking: 0.8,
            wrestling: 0.35,
            bjj: 0.3,
            muay_thai: 0.7,
            tactical: 0.25,
            recovery: 0.2,
        }
    }

    #[test]
    fn test_winning_fight_gets_no_advice() {
        let result = FightResult {
            score: 6.0,
            won: true,
            bias_used: 0.1,
            effective_weights: skewed_weights(),
            threshold: 5.0,
        };
        assert!(generate_advice(&result, &AllocationVector::default()).is_empty());
    }

    #[test]
    fn test_near_miss_suggests_top_weight_stat() {
        // 4.6 >= 5.0 * 0.9, striking 배분 3 < 8
        let result = lost_result(4.6, 5.0, skewed_weights());
        let mut allocation = AllocationVector::default();
        allocation.striking = 3;

        let tips = generate_advice(&result, &allocation);
        assert_eq!(tips.len(), 1);
        assert_eq!(tips[0].priority, 1);
        assert!(tips[0].message.contains("Striking"));
    }

    #[test]
    fn test_near_miss_skips_maxed_stat() {
        // striking은 이미 8이라 여유 없음 → 2순위 스탯(muay_thai) 제안
        let result = lost_result(4.6, 5.0, skewed_weights());
        let mut allocation = AllocationVector::default();
        allocation.striking = 8;
        allocation.muay_thai = 2;

        let tips = generate_advice(&result, &allocation);
        assert_eq!(tips.len(), 1);
        assert_eq!(tips[0].priority, 1);
        assert!(tips[0].message.contains("Muay Thai"));
    }

    #[test]
    fn test_under_invested_high_leverage() {
        // 큰 차이로 진 경기 (near miss 아님), striking effective 0.8 > 0.5, 배분 2 < 5
        let result = lost_result(2.0, 5.0, skewed_weights());
        let mut allocation = AllocationVector::default();
        allocation.striking = 2;
        allocation.muay_thai = 6;

        let tips = generate_advice(&result, &allocation);
        assert_eq!(tips.len(), 1);
        assert_eq!(tips[0].priority, 2);
        assert!(tips[0].message.contains("Striking"));
    }

    #[test]
    fn test_wasted_investment_on_low_leverage() {
        // 저가중치 recovery(0.2 < 0.3)에 9 > 7 투자
        let result = lost_result(2.0, 5.0, skewed_weights());
        let mut allocation = AllocationVector::default();
        allocation.striking = 6;
        allocation.muay_thai = 5;
        allocation.recovery = 9;

        let tips = generate_advice(&result, &allocation);
        assert_eq!(tips.len(), 1);
        assert_eq!(tips[0].priority, 3);
        assert!(tips[0].message.contains("Recovery"));
    }

    #[test]
    fn test_imbalance_rule() {
        // 평평한 가중치라 규칙 1~3 해당 없음, 쏠림 규칙 4만 발동
        // striking 10 + muay_thai 2 = 12 > 10, 10 > 12 * 0.8 = 9.6
        let result = lost_result(2.0, 5.0, StatVector::uniform(3.0 / 7.0));
        let mut allocation = AllocationVector::default();
        allocation.striking = 10;
        allocation.muay_thai = 2;

        let tips = generate_advice(&result, &allocation);
        assert_eq!(tips.len(), 1);
        assert_eq!(tips[0].priority, 4);
        assert_eq!(tips[0].message, "Try spreading your time a bit.");
    }

    #[test]
    fn test_only_lowest_priority_tip_survives() {
        // near miss(1) + 과투자(3) 동시 발동 → priority 1만 생존
        let result = lost_result(4.6, 5.0, skewed_weights());
        let mut allocation = AllocationVector::default();
        allocation.striking = 3;
        allocation.recovery = 9;

        let tips = generate_advice(&result, &allocation);
        assert_eq!(tips.len(), 1);
        assert_eq!(tips[0].priority, 1);
    }

    #[test]
    fn test_no_rule_fires_returns_empty() {
        // 큰 점수차 패배, 배분도 무난 → 팁 없음
        let result = lost_result(1.0, 5.0, skewed_weights());
        let mut allocation = AllocationVector::default();
        allocation.striking = 6;
        allocation.muay_thai = 6;
        allocation.conditioning = 4;

        assert!(generate_advice(&result, &allocation).is_empty());
    }
}

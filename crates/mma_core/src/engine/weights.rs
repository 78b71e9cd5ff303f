// effective weight 계산 (경기별 perceptron 가중치 유도)
use crate::stats::{StatVector, TrainingStat};

/// 정규화 상수 K. effective weight 합이 항상 이 값이 되도록 rescale 해서
/// 상대가 바뀌어도 전체 난이도 스케일이 유지된다.
pub const WEIGHT_NORMALIZATION_TOTAL: f32 = 3.0;

/// 선수 base weight와 상대 스탯을 합성해 경기별 effective weight를 만든다.
///
/// - 일반 스탯: (base + opponent) / 2
/// - recovery: 자기 관리 스탯이라 상대 영향 없이 base 그대로
/// - 이후 전체 합이 K(=3.0)가 되도록 정규화
///
/// pre-normalization 합이 0이면 정규화를 건너뛰고 전부 0인 벡터를
/// 그대로 돌려준다 (uniform 분배로 바꾸지 않는다).
pub fn calculate_effective_weights(
    base_weights: &StatVector,
    opponent_stats: &StatVector,
) -> StatVector {
    let mut effective = StatVector::default();

    for stat in TrainingStat::ALL {
        let raw = if stat.is_self_only() {
            base_weights.get(stat)
        } else {
            (base_weights.get(stat) + opponent_stats.get(stat)) / 2.0
        };
        effective.set(stat, raw);
    }

    let sum = effective.sum();
    if sum > 0.0 {
        for stat in TrainingStat::ALL {
            effective.set(stat, effective.get(stat) * WEIGHT_NORMALIZATION_TOTAL / sum);
        }
    }

    effective
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> StatVector {
        StatVector {
            conditioning: 0.5,
            striking: 0.8,
            wrestling: 0.2,
            bjj: 0.3,
            muay_thai: 0.6,
            tactical: 0.4,
            recovery: 0.5,
        }
    }

    fn opponent() -> StatVector {
        StatVector {
            conditioning: 0.4,
            striking: 0.6,
            wrestling: 0.3,
            bjj: 0.2,
            muay_thai: 0.5,
            tactical: 0.3,
            recovery: 0.9, // recovery는 무시되어야 함
        }
    }

    #[test]
    fn test_normalized_sum_is_k() {
        let effective = calculate_effective_weights(&base(), &opponent());
        assert!((effective.sum() - WEIGHT_NORMALIZATION_TOTAL).abs() < 1e-5);
    }

    #[test]
    fn test_recovery_ignores_opponent() {
        let with_high = calculate_effective_weights(&base(), &opponent());

        let mut opp_low = opponent();
        opp_low.recovery = 0.0;
        let with_low = calculate_effective_weights(&base(), &opp_low);

        // 상대 recovery 스탯이 달라져도 결과는 동일
        assert_eq!(with_high, with_low);
    }

    #[test]
    fn test_averaging_formula() {
        let effective = calculate_effective_weights(&base(), &opponent());

        // pre-normalization: striking = (0.8+0.6)/2 = 0.7, recovery = 0.5
        // 합 S = 0.45+0.7+0.25+0.25+0.55+0.35+0.5 = 3.05
        let s = 3.05_f32;
        assert!((effective.striking - 0.7 * WEIGHT_NORMALIZATION_TOTAL / s).abs() < 1e-5);
        assert!((effective.recovery - 0.5 * WEIGHT_NORMALIZATION_TOTAL / s).abs() < 1e-5);
    }

    #[test]
    fn zero_weight_vector_stays_zero() {
        // 전부 0이면 uniform으로 바꾸지 않고 0 벡터 유지가 의도된 동작
        let zero = StatVector::default();
        let effective = calculate_effective_weights(&zero, &zero);
        assert_eq!(effective, StatVector::default());
    }

    #[test]
    fn test_bit_identical_across_calls() {
        let a = calculate_effective_weights(&base(), &opponent());
        let b = calculate_effective_weights(&base(), &opponent());
        for stat in TrainingStat::ALL {
            assert_eq!(a.get(stat).to_bits(), b.get(stat).to_bits());
        }
    }
}

// 시간 예산 집행
use serde::{Deserialize, Serialize};

use crate::stats::{AllocationVector, TrainingStat};

/// 배분 총합이 예산을 넘으면 비례 축소한다.
///
/// 각 성분은 `floor(component * budget / total)`. floor라서 결과 합이
/// 예산에 못 미칠 수 있는데, 이건 의도된 동작이다 — round로 바꾸면
/// 기존 점수 밸런스가 달라진다. 어떤 성분도 커지지 않는다.
pub fn enforce_time_budget(allocation: &AllocationVector, budget: u32) -> AllocationVector {
    let total = allocation.total();
    if total <= budget {
        return *allocation;
    }

    let scale = budget as f32 / total as f32;
    let mut scaled = AllocationVector::default();
    for stat in TrainingStat::ALL {
        scaled.set(stat, (allocation.get(stat) as f32 * scale).floor() as u8);
    }
    scaled
}

/// 예산 사용 상태 (UI 색상 코딩용)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetStatus {
    Normal,
    Warning,
    Caution,
    Error,
}

/// 현재 배분의 예산 상태를 판정한다.
///
/// 초과면 Error, 단일 스탯이 예산의 80% 초과 또는 사용량 95% 초과면
/// Caution, 사용량 80% 초과면 Warning.
pub fn budget_status(allocation: &AllocationVector, budget: u32) -> BudgetStatus {
    let used = allocation.total();
    let max_stat = allocation.max_component() as u32;

    if used > budget {
        BudgetStatus::Error
    } else if max_stat as f32 > budget as f32 * 0.8 || used as f32 > budget as f32 * 0.95 {
        BudgetStatus::Caution
    } else if used as f32 > budget as f32 * 0.8 {
        BudgetStatus::Warning
    } else {
        BudgetStatus::Normal
    }
}

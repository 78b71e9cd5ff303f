// 훈련 스탯 기본 타입 정의
use serde::{Deserialize, Serialize};

/// 훈련 스탯 개수 (perceptron 입력 차원)
pub const STAT_COUNT: usize = 7;

/// 훈련 스탯 (7가지 고정)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrainingStat {
    /// 컨디셔닝 - 체력, 심폐 지구력
    Conditioning,
    /// 타격 - 복싱, 펀치
    Striking,
    /// 레슬링 - 테이크다운, 클린치
    Wrestling,
    /// 주짓수 - 그라운드, 서브미션
    Bjj,
    /// 무에타이 - 킥, 엘보
    MuayThai,
    /// 전술 - 경기 운영, 상대 분석
    Tactical,
    /// 회복 - 자기 관리 (상대 영향 없음)
    Recovery,
}

impl TrainingStat {
    /// 표시 순서 기준 전체 스탯 목록 (canonical ordering)
    pub const ALL: [TrainingStat; STAT_COUNT] = [
        TrainingStat::Conditioning,
        TrainingStat::Striking,
        TrainingStat::Wrestling,
        TrainingStat::Bjj,
        TrainingStat::MuayThai,
        TrainingStat::Tactical,
        TrainingStat::Recovery,
    ];

    /// 디스플레이 이름
    pub fn display_name(&self) -> &'static str {
        match self {
            TrainingStat::Conditioning => "Conditioning",
            TrainingStat::Striking => "Striking",
            TrainingStat::Wrestling => "Wrestling",
            TrainingStat::Bjj => "BJJ",
            TrainingStat::MuayThai => "Muay Thai",
            TrainingStat::Tactical => "Tactical",
            TrainingStat::Recovery => "Recovery",
        }
    }

    /// 자기 관리 스탯 여부. effective weight 계산에서 상대 스탯의 영향을 받지 않는다.
    pub fn is_self_only(&self) -> bool {
        matches!(self, TrainingStat::Recovery)
    }
}

/// 스탯별 실수 벡터
///
/// base weight(선수), opponent stat(상대), effective weight(유도값)가
/// 모두 이 모양을 공유한다. 스탯당 정확히 하나의 필드를 가지므로
/// 키 누락/중복이 구조적으로 불가능하다.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct StatVector {
    pub conditioning: f32,
    pub striking: f32,
    pub wrestling: f32,
    pub bjj: f32,
    pub muay_thai: f32,
    pub tactical: f32,
    pub recovery: f32,
}

impl StatVector {
    /// 모든 스탯이 같은 값인 벡터
    pub fn uniform(value: f32) -> Self {
        Self {
            conditioning: value,
            striking: value,
            wrestling: value,
            bjj: value,
            muay_thai: value,
            tactical: value,
            recovery: value,
        }
    }

    pub fn get(&self, stat: TrainingStat) -> f32 {
        match stat {
            TrainingStat::Conditioning => self.conditioning,
            TrainingStat::Striking => self.striking,
            TrainingStat::Wrestling => self.wrestling,
            TrainingStat::Bjj => self.bjj,
            TrainingStat::MuayThai => self.muay_thai,
            TrainingStat::Tactical => self.tactical,
            TrainingStat::Recovery => self.recovery,
        }
    }

    pub fn set(&mut self, stat: TrainingStat, value: f32) {
        match stat {
            TrainingStat::Conditioning => self.conditioning = value,
            TrainingStat::Striking => self.striking = value,
            TrainingStat::Wrestling => self.wrestling = value,
            TrainingStat::Bjj => self.bjj = value,
            TrainingStat::MuayThai => self.muay_thai = value,
            TrainingStat::Tactical => self.tactical = value,
            TrainingStat::Recovery => self.recovery = value,
        }
    }

    /// 전체 합
    pub fn sum(&self) -> f32 {
        TrainingStat::ALL.iter().map(|stat| self.get(*stat)).sum()
    }

    /// canonical 순서로 (스탯, 값) 순회
    pub fn iter(&self) -> impl Iterator<Item = (TrainingStat, f32)> + '_ {
        TrainingStat::ALL.iter().map(move |stat| (*stat, self.get(*stat)))
    }
}

/// 스탯별 훈련 시간 배분 (슬라이더 값, 스탯당 0~10 정수)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AllocationVector {
    pub conditioning: u8,
    pub striking: u8,
    pub wrestling: u8,
    pub bjj: u8,
    pub muay_thai: u8,
    pub tactical: u8,
    pub recovery: u8,
}

impl AllocationVector {
    pub fn get(&self, stat: TrainingStat) -> u8 {
        match stat {
            TrainingStat::Conditioning => self.conditioning,
            TrainingStat::Striking => self.striking,
            TrainingStat::Wrestling => self.wrestling,
            TrainingStat::Bjj => self.bjj,
            TrainingStat::MuayThai => self.muay_thai,
            TrainingStat::Tactical => self.tactical,
            TrainingStat::Recovery => self.recovery,
        }
    }

    pub fn set(&mut self, stat: TrainingStat, value: u8) {
        match stat {
            TrainingStat::Conditioning => self.conditioning = value,
            TrainingStat::Striking => self.striking = value,
            TrainingStat::Wrestling => self.wrestling = value,
            TrainingStat::Bjj => self.bjj = value,
            TrainingStat::MuayThai => self.muay_thai = value,
            TrainingStat::Tactical => self.tactical = value,
            TrainingStat::Recovery => self.recovery = value,
        }
    }

    /// 배분된 시간 총합
    pub fn total(&self) -> u32 {
        TrainingStat::ALL.iter().map(|stat| self.get(*stat) as u32).sum()
    }

    /// 가장 큰 단일 배분값
    pub fn max_component(&self) -> u8 {
        TrainingStat::ALL.iter().map(|stat| self.get(*stat)).max().unwrap_or(0)
    }

    /// canonical 순서로 (스탯, 값) 순회
    pub fn iter(&self) -> impl Iterator<Item = (TrainingStat, u8)> + '_ {
        TrainingStat::ALL.iter().map(move |stat| (*stat, self.get(*stat)))
    }
}

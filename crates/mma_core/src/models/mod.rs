//! Core data model: athletes, opponents, fight results, Part 2 sessions.
//!
//! Everything here is plain serde data. Values are produced by the engine
//! functions and consumed by the host UI; nothing in this module computes.

use serde::{Deserialize, Serialize};

use crate::stats::{AllocationVector, StatVector};

/// Part 2 고정 세션 수 (hidden node 3개)
pub const SESSION_COUNT: usize = 3;

/// 선수 (플레이어가 선택하는 파이터)
///
/// `weights`는 선수 정의 시점에 고정된 base weight(0~1)이고 세션 동안
/// 변하지 않는다. `fixed_talent`가 설정돼 있으면 그 값을 그대로 쓰고,
/// 없으면 선택 시점에 `bias_range`에서 한 번만 뽑는다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Athlete {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    /// base weight 벡터 (0~1)
    pub weights: StatVector,
    /// 재능 bias 범위 [min, max] (표시용 + talent 추첨용)
    pub bias_range: (f32, f32),
    /// 고정 talent 값 (없으면 bias_range에서 추첨)
    #[serde(default)]
    pub fixed_talent: Option<f32>,
}

/// 상대 파이터
///
/// id 순서(1..N)가 언락 경로가 된다. threshold 이상의 점수를 내면 승리.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Opponent {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    /// 승리에 필요한 최소 점수
    pub threshold: f32,
    /// 상대 능력치 벡터 (0~1)
    pub stats: StatVector,
}

/// 한 경기의 결과
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FightResult {
    pub score: f32,
    /// score >= threshold (동점은 승리)
    pub won: bool,
    pub bias_used: f32,
    pub effective_weights: StatVector,
    pub threshold: f32,
}

/// Part 2 훈련 세션 (hidden layer node 하나에 대응)
///
/// 세션마다 자체 배분과 자체 mood(bias)를 가지며 서로 독립이다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingSession {
    /// 1, 2, 3
    pub session_id: u8,
    pub allocation: AllocationVector,
    /// 이 세션의 bias (fixed talent + mood 변동)
    pub mood: f32,
    /// 경기 전에는 None
    #[serde(default)]
    pub fight_result: Option<FightResult>,
}

impl TrainingSession {
    pub fn new(session_id: u8) -> Self {
        Self {
            session_id,
            allocation: AllocationVector::default(),
            mood: 0.0,
            fight_result: None,
        }
    }

    /// 빈 세션 3개 생성 (Part 2 초기 상태)
    pub fn empty_trio() -> Vec<TrainingSession> {
        (1..=SESSION_COUNT as u8).map(TrainingSession::new).collect()
    }
}

/// Part 2 Best of Three 결과
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BestOfThreeResult {
    /// 각자 fight_result가 채워진 세션 3개
    pub sessions: Vec<TrainingSession>,
    /// 승리한 세션 수 (0~3)
    pub wins: u8,
    /// output layer 판정: wins >= 2
    pub won: bool,
    /// output layer 점수 = 승수 (weight 전부 1인 가중합)
    pub output_layer_score: u8,
}

/// 챔피언십 검증에서 상대 한 명에 대한 결과
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpponentValidationResult {
    pub opponent: Opponent,
    pub result: FightResult,
    pub passed: bool,
}

/// 챔피언십 검증 전체 결과 (전체 로스터 1패스)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChampionshipValidation {
    pub results: Vec<OpponentValidationResult>,
    pub all_passed: bool,
}

/// 게임 파트 (Part 1: 단일 perceptron, Part 2: hidden node 3개 + output layer)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GamePart {
    One,
    Two,
}

impl Default for GamePart {
    fn default() -> Self {
        GamePart::One
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_trio_ids() {
        let sessions = TrainingSession::empty_trio();
        assert_eq!(sessions.len(), SESSION_COUNT);
        assert_eq!(
            sessions.iter().map(|s| s.session_id).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
        for session in &sessions {
            assert_eq!(session.allocation.total(), 0);
            assert_eq!(session.mood, 0.0);
            assert!(session.fight_result.is_none());
        }
    }

    #[test]
    fn test_athlete_roundtrip_with_optional_talent() {
        let json = r#"{
            "id": "t",
            "name": "Test",
            "weights": {
                "conditioning": 0.1, "striking": 0.2, "wrestling": 0.3,
                "bjj": 0.4, "muay_thai": 0.5, "tactical": 0.6, "recovery": 0.7
            },
            "bias_range": [-0.1, 0.2]
        }"#;
        let athlete: Athlete = serde_json::from_str(json).unwrap();
        assert_eq!(athlete.fixed_talent, None);
        assert_eq!(athlete.bias_range, (-0.1, 0.2));
        assert_eq!(athlete.weights.recovery, 0.7);
    }
}

//! 임베딩된 게임 데이터
//!
//! `include_str!` 매크로를 사용하여 컴파일 시점에 JSON 데이터를 바이너리에 포함합니다.
//! 런타임에 파일 I/O 없이 즉시 사용 가능합니다.

use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

use crate::models::{Athlete, Opponent};

/// 로스터 + 시간 예산 JSON (컴파일 시점에 바이너리에 포함)
pub const ROSTER_JSON: &str = include_str!("../../../../data/roster.json");

/// 정적 게임 설정 (읽기 전용)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// 훈련 라운드당 시간 예산
    pub time_budget: u32,
    pub athletes: Vec<Athlete>,
    pub opponents: Vec<Opponent>,
}

static GAME_CONFIG: OnceLock<GameConfig> = OnceLock::new();

/// 임베딩된 게임 설정을 반환 (최초 호출 시 1회 파싱)
pub fn get_game_config() -> &'static GameConfig {
    GAME_CONFIG.get_or_init(|| {
        serde_json::from_str(ROSTER_JSON).expect("embedded roster.json must be valid")
    })
}

/// id로 선수 조회
pub fn find_athlete(athlete_id: &str) -> Option<&'static Athlete> {
    get_game_config().athletes.iter().find(|a| a.id == athlete_id)
}

/// id로 상대 조회
pub fn find_opponent(opponent_id: u32) -> Option<&'static Opponent> {
    get_game_config().opponents.iter().find(|o| o.id == opponent_id)
}

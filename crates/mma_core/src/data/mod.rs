//! 게임 데이터 모듈
//!
//! 바이너리에 임베딩된 정적 설정 데이터를 제공합니다.
//! - 시간 예산 (global time budget)
//! - 선수 로스터 (athletes)
//! - 상대 로스터 (opponents, id 순서 = 언락 경로)

pub mod embedded;

pub use embedded::{find_athlete, find_opponent, get_game_config, GameConfig, ROSTER_JSON};

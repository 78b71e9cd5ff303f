use thiserror::Error;

#[derive(Error, Debug)]
pub enum GameError {
    #[error("Invalid session count: expected {expected}, found {found}")]
    InvalidSessionCount { expected: usize, found: usize },

    #[error("Unknown athlete: {0}")]
    UnknownAthlete(String),

    #[error("Unknown opponent: {0}")]
    UnknownOpponent(u32),

    #[error("Unsupported schema version: {0}")]
    UnsupportedSchemaVersion(u8),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

// 문법/데이터/EOF 실패는 전부 파싱 쪽이므로 Deserialization,
// io 실패만 Serialization으로 분류한다
impl From<serde_json::Error> for GameError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_io() {
            GameError::Serialization(err.to_string())
        } else {
            GameError::Deserialization(err.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, GameError>;

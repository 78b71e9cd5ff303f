// 게임 코어 JSON API
//
// 호스트 엔진(UI 레이어)은 이 경계로만 코어를 호출한다. 요청/응답 모두
// JSON 문자열이고, 코어는 호출 사이에 아무 상태도 유지하지 않는다.
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::advice::{generate_advice, AdviceTip};
use crate::championship::{validate_championship_weights, validate_championship_weights_part2};
use crate::data::{find_athlete, find_opponent, get_game_config, GameConfig};
use crate::engine::{
    budget_status, calculate_best_of_three, calculate_fight, mood_message, BudgetStatus,
};
use crate::error::GameError;
use crate::models::{BestOfThreeResult, ChampionshipValidation, FightResult, TrainingSession};
use crate::stats::AllocationVector;

/// 게임 요청 - 호스트에서 전송
#[derive(Debug, Deserialize)]
pub struct GameRequest {
    pub schema_version: u8,
    pub request_type: GameRequestType,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
pub enum GameRequestType {
    /// Part 1 경기 실행 (mood 변동 포함, seed로 재현 가능)
    CalculateFight {
        athlete_id: String,
        opponent_id: u32,
        allocation: AllocationVector,
        fixed_talent: f32,
        seed: u64,
    },

    /// Part 2 Best of Three 실행 (세션별 mood는 호스트가 미리 뽑아서 전달)
    CalculateBestOfThree {
        athlete_id: String,
        opponent_id: u32,
        sessions: Vec<TrainingSession>,
    },

    /// 패배 후 코치 조언 생성
    GenerateAdvice { fight_result: FightResult, allocation: AllocationVector },

    /// Part 1 챔피언십 검증 (결정 모드, 전체 로스터)
    ValidateChampionship { athlete_id: String, allocation: AllocationVector, fixed_talent: f32 },

    /// Part 2 챔피언십 검증
    ValidateChampionshipPart2 {
        athlete_id: String,
        sessions: Vec<TrainingSession>,
        fixed_talent: f32,
    },

    /// 예산 상태 조회 (UI 색상 코딩)
    GetBudgetStatus { allocation: AllocationVector },

    /// 정적 설정 조회 (로스터, 시간 예산)
    GetConfig,
}

/// 게임 응답 - 호스트로 전송
#[derive(Debug, Serialize)]
pub struct GameResponse {
    pub schema_version: u8,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_type: Option<GameResponseType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type")]
pub enum GameResponseType {
    /// Part 1 경기 결과
    FightResult { result: FightResult, mood_message: String },

    /// Part 2 Best of Three 결과
    BestOfThree { result: BestOfThreeResult },

    /// 조언 (0개 또는 1개)
    Advice { tips: Vec<AdviceTip> },

    /// 챔피언십 검증 결과
    Championship { validation: ChampionshipValidation },

    /// 예산 상태
    BudgetStatus { status: BudgetStatus, used: u32, budget: u32 },

    /// 정적 설정
    Config { config: GameConfig },
}

fn success(response_type: GameResponseType) -> GameResponse {
    GameResponse {
        schema_version: crate::SCHEMA_VERSION,
        success: true,
        response_type: Some(response_type),
        error_message: None,
    }
}

fn failure(err: GameError) -> GameResponse {
    warn!("game request failed: {}", err);
    GameResponse {
        schema_version: crate::SCHEMA_VERSION,
        success: false,
        response_type: None,
        error_message: Some(err.to_string()),
    }
}

/// JSON 요청을 실행하고 JSON 응답을 돌려준다.
///
/// 잘못된 JSON / 스키마 버전은 Err. 도메인 실패(없는 선수, 세션 수
/// 불일치 등)는 success=false 응답으로 전달한다. 실패 메시지는 모두
/// `GameError`의 Display 문자열이다.
pub fn execute_game_json(request_json: &str) -> Result<String, String> {
    // 요청 파싱
    let request: GameRequest =
        serde_json::from_str(request_json).map_err(|e| GameError::from(e).to_string())?;

    // 스키마 버전 확인
    if request.schema_version != crate::SCHEMA_VERSION {
        return Err(GameError::UnsupportedSchemaVersion(request.schema_version).to_string());
    }

    debug!("game request: {:?}", request.request_type);

    let config = get_game_config();
    let response = dispatch(request.request_type, config);

    serde_json::to_string(&response)
        .map_err(|e| GameError::Serialization(e.to_string()).to_string())
}

fn dispatch(request_type: GameRequestType, config: &GameConfig) -> GameResponse {
    match request_type {
        GameRequestType::CalculateFight {
            athlete_id,
            opponent_id,
            allocation,
            fixed_talent,
            seed,
        } => {
            let athlete = match find_athlete(&athlete_id) {
                Some(a) => a,
                None => return failure(GameError::UnknownAthlete(athlete_id)),
            };
            let opponent = match find_opponent(opponent_id) {
                Some(o) => o,
                None => return failure(GameError::UnknownOpponent(opponent_id)),
            };

            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let result = calculate_fight(
                athlete,
                opponent,
                &allocation,
                config.time_budget,
                fixed_talent,
                &mut rng,
            );
            let message = mood_message(result.bias_used, &athlete.name);

            success(GameResponseType::FightResult { result, mood_message: message })
        }

        GameRequestType::CalculateBestOfThree { athlete_id, opponent_id, sessions } => {
            let athlete = match find_athlete(&athlete_id) {
                Some(a) => a,
                None => return failure(GameError::UnknownAthlete(athlete_id)),
            };
            let opponent = match find_opponent(opponent_id) {
                Some(o) => o,
                None => return failure(GameError::UnknownOpponent(opponent_id)),
            };

            match calculate_best_of_three(athlete, opponent, &sessions, config.time_budget) {
                Ok(result) => success(GameResponseType::BestOfThree { result }),
                Err(e) => failure(e),
            }
        }

        GameRequestType::GenerateAdvice { fight_result, allocation } => {
            let tips = generate_advice(&fight_result, &allocation);
            success(GameResponseType::Advice { tips })
        }

        GameRequestType::ValidateChampionship { athlete_id, allocation, fixed_talent } => {
            let athlete = match find_athlete(&athlete_id) {
                Some(a) => a,
                None => return failure(GameError::UnknownAthlete(athlete_id)),
            };

            let validation = validate_championship_weights(
                athlete,
                &config.opponents,
                &allocation,
                config.time_budget,
                fixed_talent,
            );
            success(GameResponseType::Championship { validation })
        }

        GameRequestType::ValidateChampionshipPart2 { athlete_id, sessions, fixed_talent } => {
            let athlete = match find_athlete(&athlete_id) {
                Some(a) => a,
                None => return failure(GameError::UnknownAthlete(athlete_id)),
            };

            match validate_championship_weights_part2(
                athlete,
                &config.opponents,
                &sessions,
                config.time_budget,
                fixed_talent,
            ) {
                Ok(validation) => success(GameResponseType::Championship { validation }),
                Err(e) => failure(e),
            }
        }

        GameRequestType::GetBudgetStatus { allocation } => {
            let status = budget_status(&allocation, config.time_budget);
            success(GameResponseType::BudgetStatus {
                status,
                used: allocation.total(),
                budget: config.time_budget,
            })
        }

        GameRequestType::GetConfig => {
            success(GameResponseType::Config { config: config.clone() })
        }
    }
}

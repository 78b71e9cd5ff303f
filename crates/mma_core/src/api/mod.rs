pub mod game_json;

pub use game_json::{execute_game_json, GameRequest, GameRequestType, GameResponse, GameResponseType};

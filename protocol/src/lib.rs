use thiserror::Error;

pub mod client;
pub mod server;

pub use client::Request;
pub use server::{
    GamePayload, PlayCode, PlayerScoreRow, RoundInfo, ScoreBoardPayload, StoryEntry, TeamPair,
    TeamRef, TeamScores, parse_game, parse_player_scores, parse_scoreboard, parse_team_list,
};

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Invalid payload: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Field {field} out of range: {value}")]
    OutOfRange { field: String, value: i64 },

    #[error("Inconsistent payload: {0}")]
    Inconsistent(String),
}

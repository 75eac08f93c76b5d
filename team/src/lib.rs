//! Player and team score aggregation for sandlot.
//!
//! Per-player totals come either from the service's pre-aggregated rows
//! ([`PlayerScoreBoard::from_protocol`]) or from folding plays
//! ([`aggregate`], [`aggregate_appearances`]). Team totals are a plain
//! element-wise sum ([`total_player_score_count`]), so player order never
//! matters.

mod aggregate;
mod board;
mod player;

pub use aggregate::{Roster, aggregate, aggregate_appearances};
pub use board::{ScoreBoard, TeamScoreBoard};
pub use player::{PlayerScore, PlayerScoreBoard, total_player_score_count};

mod board;
mod game;

pub use board::{PlayerScoreRow, ScoreBoardPayload, TeamPair, TeamScores};
pub use game::{GamePayload, PlayCode, RoundInfo, StoryEntry, TeamRef};

use crate::ParseError;
use serde_json::Value;

const ROUND_INFO_FIELDS: &[&str] = &[
    "round",
    "strike",
    "ball",
    "out",
    "firstBase",
    "secondBase",
    "thirdBase",
];

const PLAYER_ROW_FIELDS: &[&str] = &["id", "name", "tpa", "hits", "out"];

/// Parse a game payload (start or refresh response)
pub fn parse_game(body: &str) -> Result<GamePayload, ParseError> {
    let value: Value = serde_json::from_str(body)?;

    require(&value, "roundInfo", &[])?;
    require(&value, "offenseTeam", &["offenceTeam"])?;
    require(&value, "defenseTeam", &[])?;
    require(&value, "homeTeam", &[])?;
    require(&value, "awayTeam", &[])?;
    if let Some(info) = value.get("roundInfo") {
        require_all(info, "roundInfo", ROUND_INFO_FIELDS)?;
    }

    let payload: GamePayload = serde_json::from_value(value)?;
    payload.validate()?;
    Ok(payload)
}

/// Parse the inning-by-inning scoreboard
pub fn parse_scoreboard(body: &str) -> Result<ScoreBoardPayload, ParseError> {
    let value: Value = serde_json::from_str(body)?;

    require(&value, "homeTeam", &[])?;
    require(&value, "awayTeam", &[])?;

    let payload: ScoreBoardPayload = serde_json::from_value(value)?;
    payload.validate()?;
    Ok(payload)
}

/// Parse the per-player score rows of one team
pub fn parse_player_scores(body: &str) -> Result<Vec<PlayerScoreRow>, ParseError> {
    let value: Value = serde_json::from_str(body)?;
    if let Some(rows) = value.as_array() {
        for row in rows {
            require_all(row, "player", PLAYER_ROW_FIELDS)?;
        }
    }

    let rows: Vec<PlayerScoreRow> = serde_json::from_value(value)?;
    for row in &rows {
        row.validate()?;
    }
    Ok(rows)
}

/// Parse the list of games available to join
pub fn parse_team_list(body: &str) -> Result<Vec<TeamPair>, ParseError> {
    let pairs: Vec<TeamPair> = serde_json::from_str(body)?;
    for pair in &pairs {
        pair.validate()?;
    }
    Ok(pairs)
}

/// Fail with MissingField unless `field` (or one of its aliases) is present and non-null
fn require(value: &Value, field: &str, aliases: &[&str]) -> Result<(), ParseError> {
    let present = std::iter::once(field)
        .chain(aliases.iter().copied())
        .any(|key| value.get(key).is_some_and(|v| !v.is_null()));

    if present {
        Ok(())
    } else {
        Err(ParseError::MissingField(field.to_string()))
    }
}

/// Fail with MissingField naming `parent.field` for the first absent or null field
fn require_all(value: &Value, parent: &str, fields: &[&str]) -> Result<(), ParseError> {
    match fields
        .iter()
        .find(|field| value.get(**field).is_none_or(Value::is_null))
    {
        Some(field) => Err(ParseError::MissingField(format!("{}.{}", parent, field))),
        None => Ok(()),
    }
}

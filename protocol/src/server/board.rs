//! Scoreboard payload types
//!
//! Per-inning team scores, per-player score rows, and the game list.

use serde::Deserialize;

use super::game::{in_range, non_empty};
use crate::ParseError;

/// Inning-by-inning runs for both teams
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBoardPayload {
    pub home_team: TeamScores,
    pub away_team: TeamScores,
}

impl ScoreBoardPayload {
    pub fn validate(&self) -> Result<(), ParseError> {
        self.home_team.validate("homeTeam")?;
        self.away_team.validate("awayTeam")?;

        if self.home_team.team_name == self.away_team.team_name {
            return Err(ParseError::Inconsistent(format!(
                "home and away team are both {}",
                self.home_team.team_name
            )));
        }
        Ok(())
    }
}

/// Runs scored by one team, one entry per inning played
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamScores {
    pub team_name: String,
    #[serde(default)]
    pub scores: Vec<i64>,
}

impl TeamScores {
    fn validate(&self, side: &str) -> Result<(), ParseError> {
        non_empty(&format!("{}.teamName", side), &self.team_name)?;
        for runs in &self.scores {
            in_range(&format!("{}.scores", side), *runs, 0, i64::from(u32::MAX))?;
        }
        Ok(())
    }
}

/// Pre-aggregated totals for one player
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PlayerScoreRow {
    pub id: i64,
    pub name: String,
    pub tpa: i64,
    pub hits: i64,
    pub out: i64,
}

impl PlayerScoreRow {
    pub fn validate(&self) -> Result<(), ParseError> {
        let max = i64::from(u32::MAX);
        in_range("player.id", self.id, 0, max)?;
        non_empty("player.name", &self.name)?;
        in_range("player.tpa", self.tpa, 0, max)?;
        in_range("player.hits", self.hits, 0, max)?;
        in_range("player.out", self.out, 0, max)?;

        if self.hits + self.out > self.tpa {
            return Err(ParseError::Inconsistent(format!(
                "player {} has {} hits and {} outs in {} plate appearances",
                self.id, self.hits, self.out, self.tpa
            )));
        }
        Ok(())
    }
}

/// One entry of the game list
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamPair {
    pub home_team: String,
    pub away_team: String,
}

impl TeamPair {
    pub fn validate(&self) -> Result<(), ParseError> {
        non_empty("homeTeam", &self.home_team)?;
        non_empty("awayTeam", &self.away_team)
    }

    /// Check if a team plays in this game
    pub fn contains(&self, team: &str) -> bool {
        self.home_team == team || self.away_team == team
    }
}

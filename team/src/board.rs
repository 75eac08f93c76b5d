//! Team and game scoreboards

use sandlot_game::{GameError, Side};
use sandlot_protocol::{PlayerScoreRow, ScoreBoardPayload, TeamScores};

use crate::player::{PlayerScore, PlayerScoreBoard, total_player_score_count};

/// One team's inning runs and player totals
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TeamScoreBoard {
    pub team_name: String,

    /// Runs per inning, in inning order
    pub inning_runs: Vec<u32>,

    /// Players in batting order
    pub players: Vec<PlayerScoreBoard>,
}

impl TeamScoreBoard {
    pub fn new(team_name: impl Into<String>) -> Self {
        Self {
            team_name: team_name.into(),
            inning_runs: Vec::new(),
            players: Vec::new(),
        }
    }

    /// Build from the team's wire scores and its player rows
    pub fn from_protocol(scores: &TeamScores, rows: &[PlayerScoreRow]) -> Result<Self, GameError> {
        let players = rows
            .iter()
            .map(PlayerScoreBoard::from_protocol)
            .collect::<Result<Vec<_>, _>>()?;

        let inning_runs = scores
            .scores
            .iter()
            .map(|&runs| {
                u32::try_from(runs).map_err(|_| {
                    GameError::MalformedInput(format!(
                        "{} scored {} runs in an inning",
                        scores.team_name, runs
                    ))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            team_name: scores.team_name.clone(),
            inning_runs,
            players,
        })
    }

    /// Total runs across all innings, saturating at `u32::MAX`
    pub fn runs(&self) -> u32 {
        self.inning_runs.iter().fold(0, |total, &runs| total.saturating_add(runs))
    }

    pub fn total(&self) -> PlayerScore {
        total_player_score_count(&self.players)
    }

    pub fn player(&self, id: sandlot_game::PlayerId) -> Option<&PlayerScoreBoard> {
        self.players.iter().find(|p| p.id == id)
    }
}

/// Both teams' scoreboards
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoreBoard {
    pub home: TeamScoreBoard,
    pub away: TeamScoreBoard,
}

impl ScoreBoard {
    pub fn new(home: TeamScoreBoard, away: TeamScoreBoard) -> Self {
        Self { home, away }
    }

    /// Build from the scoreboard payload and each team's player rows
    pub fn from_protocol(
        payload: &ScoreBoardPayload,
        home_rows: &[PlayerScoreRow],
        away_rows: &[PlayerScoreRow],
    ) -> Result<Self, GameError> {
        payload.validate()?;

        Ok(Self {
            home: TeamScoreBoard::from_protocol(&payload.home_team, home_rows)?,
            away: TeamScoreBoard::from_protocol(&payload.away_team, away_rows)?,
        })
    }

    pub fn team(&self, side: Side) -> &TeamScoreBoard {
        match side {
            Side::Home => &self.home,
            Side::Away => &self.away,
        }
    }

    /// Side playing under the given team name
    pub fn side_of(&self, team_name: &str) -> Option<Side> {
        if self.home.team_name == team_name {
            Some(Side::Home)
        } else if self.away.team_name == team_name {
            Some(Side::Away)
        } else {
            None
        }
    }

    /// Player totals for one side
    pub fn total_player_score_count(&self, side: Side) -> PlayerScore {
        self.team(side).total()
    }

    pub fn runs(&self, side: Side) -> u32 {
        self.team(side).runs()
    }

    /// Innings with a recorded score for either side
    pub fn innings_played(&self) -> usize {
        self.home.inning_runs.len().max(self.away.inning_runs.len())
    }
}

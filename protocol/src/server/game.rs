//! Game payload types
//!
//! These types represent the JSON body returned when a game is started or
//! refreshed: the current round info, the two team references, and the
//! ordered play story for the current round.

use serde::Deserialize;

use crate::ParseError;

/// Full game state as delivered by the service
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GamePayload {
    /// Team the user picked when starting the game
    #[serde(default)]
    pub play_team: Option<String>,

    /// Count and base state at the time the payload was produced
    pub round_info: RoundInfo,

    /// Team batting when the story begins
    #[serde(alias = "offenceTeam")]
    pub offense_team: TeamRef,

    /// Team fielding when the story begins
    pub defense_team: TeamRef,

    /// Home team name
    pub home_team: String,

    /// Away team name
    pub away_team: String,

    /// Ordered play events for the current round (absent means empty)
    #[serde(default)]
    pub story: Option<Vec<StoryEntry>>,
}

impl GamePayload {
    /// Story entries in chronological order
    pub fn story(&self) -> &[StoryEntry] {
        self.story.as_deref().unwrap_or_default()
    }

    /// Check ranges and cross-field consistency
    pub fn validate(&self) -> Result<(), ParseError> {
        non_empty("homeTeam", &self.home_team)?;
        non_empty("awayTeam", &self.away_team)?;
        non_empty("offenseTeam.teamName", &self.offense_team.team_name)?;
        non_empty("defenseTeam.teamName", &self.defense_team.team_name)?;

        if self.home_team == self.away_team {
            return Err(ParseError::Inconsistent(format!(
                "home and away team are both {}",
                self.home_team
            )));
        }

        let known = |name: &str| name == self.home_team || name == self.away_team;

        if !known(&self.offense_team.team_name) || !known(&self.defense_team.team_name) {
            return Err(ParseError::Inconsistent(format!(
                "offense {} / defense {} do not match teams {} / {}",
                self.offense_team.team_name,
                self.defense_team.team_name,
                self.home_team,
                self.away_team
            )));
        }

        if self.offense_team.team_name == self.defense_team.team_name {
            return Err(ParseError::Inconsistent(format!(
                "{} is both batting and fielding",
                self.offense_team.team_name
            )));
        }

        if let Some(team) = &self.play_team
            && !known(team)
        {
            return Err(ParseError::Inconsistent(format!(
                "play team {} is not in this game",
                team
            )));
        }

        self.round_info.validate()?;

        for entry in self.story() {
            entry.validate()?;
        }

        Ok(())
    }
}

/// Reference to a team inside a game payload
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamRef {
    pub team_name: String,
}

/// Count, outs and base occupancy
///
/// Counts are signed on the wire so that negative values can be reported
/// instead of failing deserialization with an opaque error. Every field is
/// required.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundInfo {
    pub round: i64,
    pub strike: i64,
    pub ball: i64,
    pub out: i64,
    pub first_base: bool,
    pub second_base: bool,
    pub third_base: bool,
}

impl RoundInfo {
    /// Check every count against its settled bound
    pub fn validate(&self) -> Result<(), ParseError> {
        in_range("roundInfo.round", self.round, 1, i64::from(u32::MAX))?;
        in_range("roundInfo.strike", self.strike, 0, 2)?;
        in_range("roundInfo.ball", self.ball, 0, 3)?;
        in_range("roundInfo.out", self.out, 0, 2)?;
        Ok(())
    }
}

/// One play in the round story
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoryEntry {
    /// Acting player (batter)
    pub player_id: i64,
    pub play: PlayCode,
}

impl StoryEntry {
    pub fn validate(&self) -> Result<(), ParseError> {
        in_range("story.playerId", self.player_id, 0, i64::from(u32::MAX))
    }
}

/// Wire code of a play
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayCode {
    Ball,
    Strike,
    #[serde(alias = "foul_strike")]
    Foul,
    Out,
    Single,
    Double,
    Triple,
    #[serde(alias = "homerun")]
    HomeRun,
    Walk,
}

impl PlayCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlayCode::Ball => "ball",
            PlayCode::Strike => "strike",
            PlayCode::Foul => "foul",
            PlayCode::Out => "out",
            PlayCode::Single => "single",
            PlayCode::Double => "double",
            PlayCode::Triple => "triple",
            PlayCode::HomeRun => "home_run",
            PlayCode::Walk => "walk",
        }
    }
}

impl std::fmt::Display for PlayCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

pub(crate) fn non_empty(field: &str, value: &str) -> Result<(), ParseError> {
    if value.trim().is_empty() {
        return Err(ParseError::MissingField(field.to_string()));
    }
    Ok(())
}

pub(crate) fn in_range(field: &str, value: i64, min: i64, max: i64) -> Result<(), ParseError> {
    if value < min || value > max {
        return Err(ParseError::OutOfRange {
            field: field.to_string(),
            value,
        });
    }
    Ok(())
}

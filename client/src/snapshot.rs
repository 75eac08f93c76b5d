//! Immutable views of a game, rebuilt from service payloads

use sandlot_game::{CountBaseState, GameError, Score, Side};
use sandlot_protocol::{GamePayload, PlayerScoreRow, ScoreBoardPayload};
use sandlot_replay::{ReplayError, ReplayLog, load};
use sandlot_team::ScoreBoard;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SnapshotError {
    #[error(transparent)]
    Game(#[from] GameError),

    #[error(transparent)]
    Replay(#[from] ReplayError),

    #[error("Scoreboard is for {found}, game is {expected}")]
    TeamMismatch { expected: String, found: String },

    #[error("Team {0} is not playing in this game")]
    UnknownTeam(String),
}

/// Everything one refresh fetched from the service
#[derive(Debug, Clone, PartialEq)]
pub struct RefreshPayload {
    pub game: GamePayload,
    pub scoreboard: ScoreBoardPayload,
    pub home_players: Vec<PlayerScoreRow>,
    pub away_players: Vec<PlayerScoreRow>,
}

/// A consistent view of one game at one point in time
///
/// Snapshots are never mutated after publication. Observers share them as
/// `Arc<Snapshot>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    /// Ticket of the refresh that produced this snapshot
    pub revision: u64,
    pub state: CountBaseState,
    pub batting: Side,
    pub home_team: String,
    pub away_team: String,
    pub score: Score,
    pub scoreboard: ScoreBoard,
    pub replay: ReplayLog,

    /// Side of the team the user follows
    pub perspective: Option<Side>,
}

impl Snapshot {
    /// Build a snapshot from a full refresh
    ///
    /// `roundInfo.round` and `offenseTeam` locate the start of the story;
    /// `state` and `batting` are what the engine derives after its last
    /// play. `perspective_team` wins over the payload's `playTeam`. The
    /// whole payload is checked before anything is built. On error nothing
    /// is returned, so a caller can keep showing its previous snapshot.
    pub fn rebuild(
        payload: &RefreshPayload,
        perspective_team: Option<&str>,
    ) -> Result<Self, SnapshotError> {
        let game = &payload.game;
        game.validate().map_err(GameError::from)?;

        check_team(&game.home_team, &payload.scoreboard.home_team.team_name)?;
        check_team(&game.away_team, &payload.scoreboard.away_team.team_name)?;

        let perspective = match perspective_team.or(game.play_team.as_deref()) {
            Some(team) if team == game.home_team => Some(Side::Home),
            Some(team) if team == game.away_team => Some(Side::Away),
            Some(team) => return Err(SnapshotError::UnknownTeam(team.to_string())),
            None => None,
        };

        let scoreboard = ScoreBoard::from_protocol(
            &payload.scoreboard,
            &payload.home_players,
            &payload.away_players,
        )?;
        let replay = load(game)?;

        Ok(Self {
            revision: 0,
            state: replay.final_state(),
            batting: replay.batting_after(),
            home_team: game.home_team.clone(),
            away_team: game.away_team.clone(),
            score: Score::new(scoreboard.runs(Side::Home), scoreboard.runs(Side::Away)),
            scoreboard,
            replay,
            perspective,
        })
    }

    pub fn round(&self) -> u32 {
        self.state.round
    }

    pub fn team(&self, side: Side) -> &str {
        match side {
            Side::Home => &self.home_team,
            Side::Away => &self.away_team,
        }
    }

    pub fn batting_team(&self) -> &str {
        self.team(self.batting)
    }

    pub fn fielding_team(&self) -> &str {
        self.team(self.batting.opposite())
    }

    pub fn offense_score(&self) -> u32 {
        self.score.of(self.batting)
    }

    pub fn defense_score(&self) -> u32 {
        self.score.of(self.batting.opposite())
    }

    /// True when the followed team is at bat
    pub fn is_user_batting(&self) -> bool {
        self.perspective == Some(self.batting)
    }
}

fn check_team(expected: &str, found: &str) -> Result<(), SnapshotError> {
    if expected == found {
        Ok(())
    } else {
        Err(SnapshotError::TeamMismatch {
            expected: expected.to_string(),
            found: found.to_string(),
        })
    }
}

//! Folding plays into per-player totals

use std::collections::BTreeMap;

use sandlot_game::{GameError, PlateAppearance, PlayEvent, PlayerId};
use sandlot_protocol::PlayerScoreRow;

use crate::player::PlayerScoreBoard;

/// Per-player totals from raw plays
///
/// Only plays that conclude an at-bat by themselves count: `Out`, the four
/// hits, and `Walk`. Pitches (`Ball`, `Strike`, `FoulStrike`) are skipped.
/// Names are left empty; see [`Roster::label`].
pub fn aggregate<'a, I>(events: I) -> BTreeMap<PlayerId, PlayerScoreBoard>
where
    I: IntoIterator<Item = &'a PlayEvent>,
{
    aggregate_appearances(
        events
            .into_iter()
            .filter_map(|e| e.kind.terminal().map(|pa| (e.player, pa))),
    )
}

/// Per-player totals from resolved plate appearances
///
/// Use this with the appearances of a replay log, where a third strike or a
/// fourth ball has already been resolved into a strikeout or a walk.
pub fn aggregate_appearances<I>(appearances: I) -> BTreeMap<PlayerId, PlayerScoreBoard>
where
    I: IntoIterator<Item = (PlayerId, PlateAppearance)>,
{
    let mut boards = BTreeMap::new();
    for (player, appearance) in appearances {
        boards
            .entry(player)
            .or_insert_with(|| PlayerScoreBoard::new(player, String::new()))
            .record(appearance);
    }
    boards
}

/// A team's players in batting order
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Roster {
    pub team_name: String,
    pub players: Vec<(PlayerId, String)>,
}

impl Roster {
    pub fn new(team_name: impl Into<String>) -> Self {
        Self {
            team_name: team_name.into(),
            players: Vec::new(),
        }
    }

    pub fn with_player(mut self, id: PlayerId, name: impl Into<String>) -> Self {
        self.players.push((id, name.into()));
        self
    }

    /// Roster taken from a team's player score rows, rejecting invalid rows
    pub fn from_rows(
        team_name: impl Into<String>,
        rows: &[PlayerScoreRow],
    ) -> Result<Self, GameError> {
        let players = rows
            .iter()
            .map(|row| PlayerScoreBoard::from_protocol(row).map(|board| (board.id, board.name)))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            team_name: team_name.into(),
            players,
        })
    }

    pub fn name_of(&self, id: PlayerId) -> Option<&str> {
        self.players
            .iter()
            .find(|(pid, _)| *pid == id)
            .map(|(_, name)| name.as_str())
    }

    pub fn contains(&self, id: PlayerId) -> bool {
        self.name_of(id).is_some()
    }

    /// A zeroed board for every rostered player
    pub fn boards(&self) -> Vec<PlayerScoreBoard> {
        self.players
            .iter()
            .map(|(id, name)| PlayerScoreBoard::new(*id, name.clone()))
            .collect()
    }

    /// Merge aggregated totals into roster order and attach names
    ///
    /// Rostered players without plays keep zero totals. Players that appear
    /// in the totals but not on the roster are appended in id order.
    pub fn label(&self, mut totals: BTreeMap<PlayerId, PlayerScoreBoard>) -> Vec<PlayerScoreBoard> {
        let mut boards: Vec<PlayerScoreBoard> = self
            .players
            .iter()
            .map(|(id, name)| {
                let mut board = totals
                    .remove(id)
                    .unwrap_or_else(|| PlayerScoreBoard::new(*id, String::new()));
                board.name = name.clone();
                board
            })
            .collect();

        boards.extend(totals.into_values());
        boards
    }
}

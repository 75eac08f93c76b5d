//! TrackedGame - running state across a sequence of plays

use crate::error::GameError;
use crate::types::{CountBaseState, PlayEvent, Score, Side};

use super::transition::{Transition, apply};

/// A game being followed play by play
///
/// Holds the settled count/base state, which side is batting, and the
/// running score. Each call to [`TrackedGame::update`] replaces the state
/// wholesale; a failed update leaves the tracker untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackedGame {
    state: CountBaseState,
    batting: Side,
    score: Score,
}

impl TrackedGame {
    /// Start tracking at the top of `round` with `batting` on offense
    pub fn new(round: u32, batting: Side) -> Self {
        Self::resume(CountBaseState::new(round), batting, Score::default())
    }

    /// Resume from a known state and score
    pub fn resume(state: CountBaseState, batting: Side, score: Score) -> Self {
        Self {
            state,
            batting,
            score,
        }
    }

    /// Apply a play, crediting runs to the batting side and swapping sides on the third out
    pub fn update(&mut self, event: &PlayEvent) -> Result<Transition, GameError> {
        let transition = apply(self.state, event)?;

        self.score = self.score.credit(self.batting, transition.runs_scored);
        self.state = transition.state;
        if transition.inning_ended {
            self.batting = self.batting.opposite();
        }

        Ok(transition)
    }

    pub fn state(&self) -> CountBaseState {
        self.state
    }

    /// Side currently on offense
    pub fn batting(&self) -> Side {
        self.batting
    }

    /// Side currently on defense
    pub fn fielding(&self) -> Side {
        self.batting.opposite()
    }

    pub fn score(&self) -> Score {
        self.score
    }
}

impl Default for TrackedGame {
    fn default() -> Self {
        Self::new(1, Side::LEADOFF)
    }
}

//! Playback controls over a replay log

use sandlot_game::{CountBaseState, Score};

use crate::log::{HistoryEntry, ReplayLog};

/// A cursor stepping through a replay log
///
/// The cursor starts before the first play, where [`Playback::state`]
/// is the log's starting state.
#[derive(Debug, Clone)]
pub struct Playback<'a> {
    log: &'a ReplayLog,
    position: Option<usize>,
}

impl<'a> Playback<'a> {
    pub fn new(log: &'a ReplayLog) -> Self {
        Self {
            log,
            position: None,
        }
    }

    /// Index of the current entry (None = before the first play)
    pub fn position(&self) -> Option<usize> {
        self.position
    }

    pub fn current(&self) -> Option<&'a HistoryEntry> {
        self.position.and_then(|idx| self.log.get(idx))
    }

    /// State shown at the cursor
    pub fn state(&self) -> CountBaseState {
        self.current().map_or(self.log.start_state(), |e| e.state)
    }

    /// Score shown at the cursor
    pub fn score(&self) -> Score {
        self.current().map_or(self.log.start_score(), |e| e.score)
    }

    pub fn is_at_end(&self) -> bool {
        match self.position {
            Some(idx) => idx + 1 >= self.log.len(),
            None => self.log.is_empty(),
        }
    }

    /// Advance one play
    pub fn step(&mut self) -> Option<&'a HistoryEntry> {
        let next = self.position.map_or(0, |idx| idx + 1);
        if next < self.log.len() {
            self.position = Some(next);
        }
        self.current()
    }

    /// Go back one play
    pub fn back(&mut self) -> Option<&'a HistoryEntry> {
        self.position = match self.position {
            Some(0) | None => None,
            Some(idx) => Some(idx - 1),
        };
        self.current()
    }

    /// Jump to a play, clamping to the last one
    pub fn seek(&mut self, index: usize) -> Option<&'a HistoryEntry> {
        self.position = match self.log.len() {
            0 => None,
            len => Some(index.min(len - 1)),
        };
        self.current()
    }

    /// Return to before the first play
    pub fn rewind(&mut self) {
        self.position = None;
    }

    pub fn to_end(&mut self) -> Option<&'a HistoryEntry> {
        self.seek(usize::MAX)
    }

    /// Jump to the first play of the next half-inning
    ///
    /// Stays put and returns None when the cursor is already in the last
    /// half-inning.
    pub fn next_half_inning(&mut self) -> Option<&'a HistoryEntry> {
        let from = self.position.map_or(0, |idx| idx + 1);
        let target = self
            .log
            .half_innings()
            .into_iter()
            .map(|range| range.start)
            .find(|&start| start >= from && start > 0);

        match target {
            Some(start) => {
                self.position = Some(start);
                self.current()
            }
            None => None,
        }
    }
}

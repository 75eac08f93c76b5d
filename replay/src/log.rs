//! ReplayLog - the ordered per-play history

use std::ops::Range;

use sandlot_game::{CountBaseState, PlateAppearance, PlayEvent, PlayerId, Score, Side};

/// One play and everything it produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryEntry {
    pub event: PlayEvent,

    /// Settled state after the play
    pub state: CountBaseState,

    /// Side that was batting when the play happened
    pub batting: Side,

    pub runs_scored: u32,

    /// Whether this play made the third out
    pub inning_ended: bool,

    /// At-bat concluded by this play, if any
    pub appearance: Option<PlateAppearance>,

    /// Cumulative score after the play
    pub score: Score,
}

impl HistoryEntry {
    /// Cumulative (offense, defense) score, relative to the side batting for this play
    pub fn accumulated_score(&self) -> (u32, u32) {
        self.score.offense_defense(self.batting)
    }
}

/// Ordered replay of a story, one entry per play
///
/// Index order is the chronological play order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplayLog {
    pub(crate) start: CountBaseState,
    pub(crate) start_batting: Side,
    pub(crate) start_score: Score,
    pub(crate) entries: Vec<HistoryEntry>,
}

impl ReplayLog {
    /// An empty log anchored at the given starting point
    pub fn empty(start: CountBaseState, batting: Side) -> Self {
        Self {
            start,
            start_batting: batting,
            start_score: Score::default(),
            entries: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&HistoryEntry> {
        self.entries.get(index)
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    pub fn last(&self) -> Option<&HistoryEntry> {
        self.entries.last()
    }

    /// State before the first play
    pub fn start_state(&self) -> CountBaseState {
        self.start
    }

    /// Score before the first play
    pub fn start_score(&self) -> Score {
        self.start_score
    }

    /// State after the last play (the starting state when empty)
    pub fn final_state(&self) -> CountBaseState {
        self.last().map_or(self.start, |e| e.state)
    }

    /// Score after the last play
    pub fn final_score(&self) -> Score {
        self.last().map_or(self.start_score, |e| e.score)
    }

    /// Side batting after the last play
    pub fn batting_after(&self) -> Side {
        match self.last() {
            Some(entry) if entry.inning_ended => entry.batting.opposite(),
            Some(entry) => entry.batting,
            None => self.start_batting,
        }
    }

    /// Index ranges of each half-inning, split after every third out
    pub fn half_innings(&self) -> Vec<Range<usize>> {
        let mut ranges = Vec::new();
        let mut begin = 0;

        for (idx, entry) in self.entries.iter().enumerate() {
            if entry.inning_ended {
                ranges.push(begin..idx + 1);
                begin = idx + 1;
            }
        }
        if begin < self.entries.len() {
            ranges.push(begin..self.entries.len());
        }

        ranges
    }

    /// Concluded plate appearances in play order
    pub fn appearances(&self) -> impl Iterator<Item = (PlayerId, Side, PlateAppearance)> + '_ {
        self.entries
            .iter()
            .filter_map(|e| e.appearance.map(|pa| (e.event.player, e.batting, pa)))
    }

    /// Total runs scored by a side within this log
    pub fn runs_for(&self, side: Side) -> u32 {
        self.entries
            .iter()
            .filter(|e| e.batting == side)
            .map(|e| e.runs_scored)
            .sum()
    }
}

impl<'a> IntoIterator for &'a ReplayLog {
    type Item = &'a HistoryEntry;
    type IntoIter = std::slice::Iter<'a, HistoryEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_log() {
        let log = ReplayLog::empty(CountBaseState::new(3), Side::Home);
        assert!(log.is_empty());
        assert_eq!(log.final_state(), CountBaseState::new(3));
        assert_eq!(log.final_score(), Score::default());
        assert_eq!(log.batting_after(), Side::Home);
        assert!(log.half_innings().is_empty());
        assert_eq!(log.appearances().count(), 0);
    }

    #[test]
    fn test_accumulated_score_follows_batting_side() {
        let entry = HistoryEntry {
            event: PlayEvent::new(PlayerId(1), sandlot_game::PlayKind::Single),
            state: CountBaseState::new(1),
            batting: Side::Home,
            runs_scored: 0,
            inning_ended: false,
            appearance: None,
            score: Score::new(4, 1),
        };
        assert_eq!(entry.accumulated_score(), (4, 1));

        let away = HistoryEntry {
            batting: Side::Away,
            ..entry
        };
        assert_eq!(away.accumulated_score(), (1, 4));
    }
}

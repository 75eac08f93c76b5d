//! Per-player plate appearance totals

use std::iter::Sum;
use std::ops::Add;

use sandlot_game::{GameError, PlateAppearance, PlayerId};
use sandlot_protocol::PlayerScoreRow;

/// Plate appearances, hits and outs for one player
///
/// `hits + out <= tpa` always holds; the difference is walks.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerScoreBoard {
    pub id: PlayerId,
    pub name: String,
    pub tpa: u32,
    pub hits: u32,
    pub out: u32,
}

impl PlayerScoreBoard {
    /// A player with no plate appearances yet
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            tpa: 0,
            hits: 0,
            out: 0,
        }
    }

    /// Convert a pre-aggregated wire row, rejecting impossible totals
    pub fn from_protocol(row: &PlayerScoreRow) -> Result<Self, GameError> {
        row.validate()?;

        Ok(Self {
            id: PlayerId(row.id as u32),
            name: row.name.clone(),
            tpa: row.tpa as u32,
            hits: row.hits as u32,
            out: row.out as u32,
        })
    }

    /// Count one concluded plate appearance
    pub fn record(&mut self, appearance: PlateAppearance) {
        self.tpa = self.tpa.saturating_add(1);
        match appearance {
            PlateAppearance::Out | PlateAppearance::Strikeout => {
                self.out = self.out.saturating_add(1)
            }
            PlateAppearance::Hit(_) => self.hits = self.hits.saturating_add(1),
            PlateAppearance::Walk => {}
        }
    }

    /// Plate appearances that were neither a hit nor an out
    pub fn walks(&self) -> u32 {
        self.tpa - self.hits - self.out
    }

    /// Hits per plate appearance that ended in a hit or an out
    pub fn average(&self) -> Option<f64> {
        let at_bats = self.hits + self.out;
        (at_bats > 0).then(|| f64::from(self.hits) / f64::from(at_bats))
    }

    pub fn score(&self) -> PlayerScore {
        PlayerScore {
            tpa: self.tpa,
            hits: self.hits,
            out: self.out,
        }
    }
}

/// Totals without identity, summed element-wise
///
/// Sums saturate at `u32::MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerScore {
    pub tpa: u32,
    pub hits: u32,
    pub out: u32,
}

impl Add for PlayerScore {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            tpa: self.tpa.saturating_add(rhs.tpa),
            hits: self.hits.saturating_add(rhs.hits),
            out: self.out.saturating_add(rhs.out),
        }
    }
}

impl Sum for PlayerScore {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}

impl<'a> Sum<&'a PlayerScoreBoard> for PlayerScore {
    fn sum<I: Iterator<Item = &'a PlayerScoreBoard>>(iter: I) -> Self {
        iter.map(PlayerScoreBoard::score).sum()
    }
}

/// Team totals: the element-wise sum over every player
pub fn total_player_score_count<'a, I>(players: I) -> PlayerScore
where
    I: IntoIterator<Item = &'a PlayerScoreBoard>,
{
    players.into_iter().sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use sandlot_game::Hit;

    fn row(tpa: i64, hits: i64, out: i64) -> PlayerScoreRow {
        PlayerScoreRow {
            id: 7,
            name: "Choo".to_string(),
            tpa,
            hits,
            out,
        }
    }

    #[test]
    fn test_record() {
        let mut board = PlayerScoreBoard::new(PlayerId(1), "Kim");
        board.record(PlateAppearance::Hit(Hit::Double));
        board.record(PlateAppearance::Strikeout);
        board.record(PlateAppearance::Walk);
        board.record(PlateAppearance::Out);

        assert_eq!(board.score(), PlayerScore { tpa: 4, hits: 1, out: 2 });
        assert_eq!(board.walks(), 1);
        assert_eq!(board.average(), Some(1.0 / 3.0));
    }

    #[test]
    fn test_average_without_at_bats() {
        let mut board = PlayerScoreBoard::new(PlayerId(1), "Kim");
        assert_eq!(board.average(), None);
        board.record(PlateAppearance::Walk);
        assert_eq!(board.average(), None);
    }

    #[test]
    fn test_from_protocol() {
        let board = PlayerScoreBoard::from_protocol(&row(3, 1, 1)).unwrap();
        assert_eq!(board.id, PlayerId(7));
        assert_eq!(board.walks(), 1);
    }

    #[test]
    fn test_from_protocol_rejects_bad_rows() {
        assert!(matches!(
            PlayerScoreBoard::from_protocol(&row(1, 1, 1)),
            Err(GameError::MalformedInput(_))
        ));
        assert!(PlayerScoreBoard::from_protocol(&row(-1, 0, 0)).is_err());
    }

    #[test]
    fn test_total_of_nobody_is_zero() {
        let nobody: Vec<PlayerScoreBoard> = Vec::new();
        assert_eq!(total_player_score_count(&nobody), PlayerScore::default());
    }

    #[test]
    fn test_total_saturates() {
        let max = i64::from(u32::MAX);
        let players = [
            PlayerScoreBoard::from_protocol(&row(max, max, 0)).unwrap(),
            PlayerScoreBoard::from_protocol(&row(2, 1, 1)).unwrap(),
        ];
        assert_eq!(
            total_player_score_count(&players),
            PlayerScore { tpa: u32::MAX, hits: u32::MAX, out: 1 }
        );
    }

    #[test]
    fn test_total() {
        let players = [
            PlayerScoreBoard::from_protocol(&row(1, 1, 0)).unwrap(),
            PlayerScoreBoard::from_protocol(&row(2, 0, 1)).unwrap(),
            PlayerScoreBoard::from_protocol(&row(4, 2, 2)).unwrap(),
        ];
        assert_eq!(
            total_player_score_count(&players),
            PlayerScore { tpa: 7, hits: 3, out: 3 }
        );
    }
}

//! Which team bats, and the running score

/// One of the two teams in a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    Home,
    Away,
}

impl Side {
    /// The team that bats first
    pub const LEADOFF: Side = Side::Away;

    pub fn opposite(&self) -> Self {
        match self {
            Side::Home => Side::Away,
            Side::Away => Side::Home,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Home => "home",
            Side::Away => "away",
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Runs scored by each team
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Score {
    pub home: u32,
    pub away: u32,
}

impl Score {
    pub fn new(home: u32, away: u32) -> Self {
        Self { home, away }
    }

    pub fn of(&self, side: Side) -> u32 {
        match side {
            Side::Home => self.home,
            Side::Away => self.away,
        }
    }

    /// Copy of this score with `runs` added to `side`
    pub fn credit(self, side: Side, runs: u32) -> Self {
        match side {
            Side::Home => Self {
                home: self.home + runs,
                ..self
            },
            Side::Away => Self {
                away: self.away + runs,
                ..self
            },
        }
    }

    /// (offense, defense) pair for the given batting side
    pub fn offense_defense(&self, offense: Side) -> (u32, u32) {
        (self.of(offense), self.of(offense.opposite()))
    }

    pub fn total(&self) -> u32 {
        self.home + self.away
    }

    /// The side that is ahead, or None when tied
    pub fn leader(&self) -> Option<Side> {
        match self.home.cmp(&self.away) {
            std::cmp::Ordering::Greater => Some(Side::Home),
            std::cmp::Ordering::Less => Some(Side::Away),
            std::cmp::Ordering::Equal => None,
        }
    }
}

//! Count, out and base occupancy for one moment of a half-inning

use sandlot_protocol::RoundInfo;

use crate::error::GameError;

/// Strikes that retire a batter
pub const STRIKES_PER_OUT: u8 = 3;

/// Balls that award first base
pub const BALLS_PER_WALK: u8 = 4;

/// Outs that end a half-inning
pub const OUTS_PER_HALF_INNING: u8 = 3;

/// Snapshot of the count and the bases
///
/// A settled state never stores a boundary value: reaching three strikes,
/// four balls or three outs always resolves into a reset before a state is
/// handed out by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CountBaseState {
    /// Half-inning number (1-based)
    pub round: u32,
    pub strikes: u8,
    pub balls: u8,
    pub outs: u8,
    pub first_base: bool,
    pub second_base: bool,
    pub third_base: bool,
}

impl CountBaseState {
    /// Empty count and bases at the start of a half-inning
    pub fn new(round: u32) -> Self {
        Self {
            round,
            strikes: 0,
            balls: 0,
            outs: 0,
            first_base: false,
            second_base: false,
            third_base: false,
        }
    }

    /// Convert the wire round info, rejecting unsettled or negative counts
    pub fn from_protocol(info: &RoundInfo) -> Result<Self, GameError> {
        info.validate()?;

        // validate() bounds every field, so the narrowing below is lossless
        Ok(Self {
            round: info.round as u32,
            strikes: info.strike as u8,
            balls: info.ball as u8,
            outs: info.out as u8,
            first_base: info.first_base,
            second_base: info.second_base,
            third_base: info.third_base,
        })
    }

    /// Copy of this state with the given base occupancy
    pub fn with_bases(self, first: bool, second: bool, third: bool) -> Self {
        Self {
            first_base: first,
            second_base: second,
            third_base: third,
            ..self
        }
    }

    /// Copy of this state with a fresh count for the next batter
    pub fn with_fresh_count(self) -> Self {
        Self {
            strikes: 0,
            balls: 0,
            ..self
        }
    }

    /// Check that no counter sits on its boundary
    pub fn is_settled(&self) -> bool {
        self.round >= 1
            && self.strikes < STRIKES_PER_OUT
            && self.balls < BALLS_PER_WALK
            && self.outs < OUTS_PER_HALF_INNING
    }

    /// Number of occupied bases
    pub fn runners(&self) -> u8 {
        [self.first_base, self.second_base, self.third_base]
            .iter()
            .filter(|&&b| b)
            .count() as u8
    }

    pub fn bases_empty(&self) -> bool {
        self.runners() == 0
    }

    pub fn bases_loaded(&self) -> bool {
        self.runners() == 3
    }

    /// Occupancy as a bitmask (bit 0 = first base)
    pub(crate) fn base_mask(&self) -> u8 {
        u8::from(self.first_base) | u8::from(self.second_base) << 1 | u8::from(self.third_base) << 2
    }

    pub(crate) fn with_base_mask(self, mask: u8) -> Self {
        self.with_bases(mask & 0b001 != 0, mask & 0b010 != 0, mask & 0b100 != 0)
    }
}

impl Default for CountBaseState {
    fn default() -> Self {
        Self::new(1)
    }
}

impl std::fmt::Display for CountBaseState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let base = |occupied: bool, mark: char| if occupied { mark } else { '-' };
        write!(
            f,
            "R{} {}-{} {} out [{}{}{}]",
            self.round,
            self.balls,
            self.strikes,
            self.outs,
            base(self.first_base, '1'),
            base(self.second_base, '2'),
            base(self.third_base, '3'),
        )
    }
}

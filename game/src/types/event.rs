//! Play events and plate appearance outcomes

use sandlot_protocol::{PlayCode, StoryEntry};

use crate::error::GameError;

/// Player identity as assigned by the service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerId(pub u32);

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Kind of a single atomic play
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PlayKind {
    Ball,
    Strike,
    FoulStrike,
    Out,
    Single,
    Double,
    Triple,
    HomeRun,
    Walk,
}

impl PlayKind {
    /// All play kinds, in wire-code order
    pub const ALL: [PlayKind; 9] = [
        PlayKind::Ball,
        PlayKind::Strike,
        PlayKind::FoulStrike,
        PlayKind::Out,
        PlayKind::Single,
        PlayKind::Double,
        PlayKind::Triple,
        PlayKind::HomeRun,
        PlayKind::Walk,
    ];

    pub fn from_protocol(code: PlayCode) -> Self {
        match code {
            PlayCode::Ball => PlayKind::Ball,
            PlayCode::Strike => PlayKind::Strike,
            PlayCode::Foul => PlayKind::FoulStrike,
            PlayCode::Out => PlayKind::Out,
            PlayCode::Single => PlayKind::Single,
            PlayCode::Double => PlayKind::Double,
            PlayCode::Triple => PlayKind::Triple,
            PlayCode::HomeRun => PlayKind::HomeRun,
            PlayCode::Walk => PlayKind::Walk,
        }
    }

    pub fn to_protocol(&self) -> PlayCode {
        match self {
            PlayKind::Ball => PlayCode::Ball,
            PlayKind::Strike => PlayCode::Strike,
            PlayKind::FoulStrike => PlayCode::Foul,
            PlayKind::Out => PlayCode::Out,
            PlayKind::Single => PlayCode::Single,
            PlayKind::Double => PlayCode::Double,
            PlayKind::Triple => PlayCode::Triple,
            PlayKind::HomeRun => PlayCode::HomeRun,
            PlayKind::Walk => PlayCode::Walk,
        }
    }

    /// The plate appearance this play concludes on its own, if any
    ///
    /// Pitch events return `None`: whether a ball or strike ends the at-bat
    /// depends on the count, which only the engine knows.
    pub fn terminal(&self) -> Option<PlateAppearance> {
        match self {
            PlayKind::Ball | PlayKind::Strike | PlayKind::FoulStrike => None,
            PlayKind::Out => Some(PlateAppearance::Out),
            PlayKind::Single => Some(PlateAppearance::Hit(Hit::Single)),
            PlayKind::Double => Some(PlateAppearance::Hit(Hit::Double)),
            PlayKind::Triple => Some(PlateAppearance::Hit(Hit::Triple)),
            PlayKind::HomeRun => Some(PlateAppearance::Hit(Hit::HomeRun)),
            PlayKind::Walk => Some(PlateAppearance::Walk),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PlayKind::Ball => "Ball",
            PlayKind::Strike => "Strike",
            PlayKind::FoulStrike => "Foul",
            PlayKind::Out => "Out",
            PlayKind::Single => "Single",
            PlayKind::Double => "Double",
            PlayKind::Triple => "Triple",
            PlayKind::HomeRun => "Home Run",
            PlayKind::Walk => "Walk",
        }
    }
}

impl std::fmt::Display for PlayKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A play attributed to the acting batter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayEvent {
    pub player: PlayerId,
    pub kind: PlayKind,
}

impl PlayEvent {
    pub fn new(player: PlayerId, kind: PlayKind) -> Self {
        Self { player, kind }
    }

    /// Convert one story entry from the wire
    pub fn from_protocol(entry: &StoryEntry) -> Result<Self, GameError> {
        entry.validate()?;
        Ok(Self {
            player: PlayerId(entry.player_id as u32),
            kind: PlayKind::from_protocol(entry.play),
        })
    }

    /// Convert a whole story, failing on the first malformed entry
    pub fn from_story(story: &[StoryEntry]) -> Result<Vec<Self>, GameError> {
        story.iter().map(Self::from_protocol).collect()
    }
}

impl std::fmt::Display for PlayEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.player, self.kind)
    }
}

/// Base hit, by the number of bases the batter takes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Hit {
    Single,
    Double,
    Triple,
    HomeRun,
}

impl Hit {
    pub fn bases(&self) -> u8 {
        match self {
            Hit::Single => 1,
            Hit::Double => 2,
            Hit::Triple => 3,
            Hit::HomeRun => 4,
        }
    }
}

/// How a plate appearance concluded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PlateAppearance {
    Out,
    Strikeout,
    Walk,
    Hit(Hit),
}

impl PlateAppearance {
    pub fn is_hit(&self) -> bool {
        matches!(self, PlateAppearance::Hit(_))
    }

    pub fn is_out(&self) -> bool {
        matches!(self, PlateAppearance::Out | PlateAppearance::Strikeout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_protocol_roundtrip() {
        for kind in PlayKind::ALL {
            assert_eq!(PlayKind::from_protocol(kind.to_protocol()), kind);
        }
    }

    #[test]
    fn test_terminal() {
        assert_eq!(PlayKind::Ball.terminal(), None);
        assert_eq!(PlayKind::FoulStrike.terminal(), None);
        assert_eq!(PlayKind::Out.terminal(), Some(PlateAppearance::Out));
        assert_eq!(PlayKind::Walk.terminal(), Some(PlateAppearance::Walk));
        assert_eq!(
            PlayKind::Triple.terminal(),
            Some(PlateAppearance::Hit(Hit::Triple))
        );
    }

    #[test]
    fn test_from_story() {
        let story = [
            StoryEntry {
                player_id: 4,
                play: PlayCode::Strike,
            },
            StoryEntry {
                player_id: 4,
                play: PlayCode::Double,
            },
        ];
        let events = PlayEvent::from_story(&story).unwrap();
        assert_eq!(events[0], PlayEvent::new(PlayerId(4), PlayKind::Strike));
        assert_eq!(events[1].kind, PlayKind::Double);
    }

    #[test]
    fn test_from_story_negative_player() {
        let story = [StoryEntry {
            player_id: -2,
            play: PlayCode::Out,
        }];
        assert!(matches!(
            PlayEvent::from_story(&story),
            Err(GameError::MalformedInput(_))
        ));
    }

    #[test]
    fn test_appearance_predicates() {
        assert!(PlateAppearance::Strikeout.is_out());
        assert!(!PlateAppearance::Walk.is_out());
        assert!(!PlateAppearance::Walk.is_hit());
        assert!(PlateAppearance::Hit(Hit::Single).is_hit());
        assert_eq!(Hit::HomeRun.bases(), 4);
    }
}

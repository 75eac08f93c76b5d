//! Applying one play to a count/base state

use crate::error::GameError;
use crate::types::{
    BALLS_PER_WALK, CountBaseState, Hit, OUTS_PER_HALF_INNING, PlateAppearance, PlayEvent,
    PlayKind, STRIKES_PER_OUT,
};

/// Outcome of applying one play
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transition {
    /// Settled state after the play
    pub state: CountBaseState,

    /// Runners (including the batter) who crossed home on this play
    pub runs_scored: u32,

    /// Whether this play made the third out; batting and fielding swap
    pub inning_ended: bool,

    /// The plate appearance this play concluded, if any
    pub appearance: Option<PlateAppearance>,
}

impl Transition {
    /// A pitch that keeps the same batter at the plate
    fn pitch(state: CountBaseState) -> Self {
        Self {
            state,
            runs_scored: 0,
            inning_ended: false,
            appearance: None,
        }
    }
}

/// Apply a play to a settled state
///
/// Every play kind is defined for every settled state. An unsettled state
/// (a boundary count, three outs, or round 0) is rejected rather than
/// clamped: the caller must rotate the inning before the next play.
pub fn apply(state: CountBaseState, event: &PlayEvent) -> Result<Transition, GameError> {
    if !state.is_settled() {
        return Err(GameError::InvalidState { state });
    }

    let transition = match event.kind {
        PlayKind::Ball => {
            let balls = state.balls + 1;
            if balls == BALLS_PER_WALK {
                walk(state)
            } else {
                Transition::pitch(CountBaseState { balls, ..state })
            }
        }

        PlayKind::Strike => {
            let strikes = state.strikes + 1;
            if strikes == STRIKES_PER_OUT {
                retire(state, PlateAppearance::Strikeout)
            } else {
                Transition::pitch(CountBaseState { strikes, ..state })
            }
        }

        PlayKind::FoulStrike => {
            // A foul never produces the third strike
            let strikes = (state.strikes + 1).min(STRIKES_PER_OUT - 1);
            Transition::pitch(CountBaseState { strikes, ..state })
        }

        PlayKind::Out => retire(state, PlateAppearance::Out),
        PlayKind::Walk => walk(state),
        PlayKind::Single => hit(state, Hit::Single),
        PlayKind::Double => hit(state, Hit::Double),
        PlayKind::Triple => hit(state, Hit::Triple),
        PlayKind::HomeRun => hit(state, Hit::HomeRun),
    };

    Ok(transition)
}

/// Record an out; the third one rotates into the next half-inning
fn retire(state: CountBaseState, appearance: PlateAppearance) -> Transition {
    let outs = state.outs + 1;

    if outs == OUTS_PER_HALF_INNING {
        return Transition {
            state: CountBaseState::new(state.round.saturating_add(1)),
            runs_scored: 0,
            inning_ended: true,
            appearance: Some(appearance),
        };
    }

    Transition {
        state: CountBaseState { outs, ..state }.with_fresh_count(),
        runs_scored: 0,
        inning_ended: false,
        appearance: Some(appearance),
    }
}

/// Award first base; runners move only when forced
fn walk(state: CountBaseState) -> Transition {
    let mut runs_scored = 0;
    let next = if !state.first_base {
        state.with_bases(true, state.second_base, state.third_base)
    } else if !state.second_base {
        state.with_bases(true, true, state.third_base)
    } else if !state.third_base {
        state.with_bases(true, true, true)
    } else {
        runs_scored = 1;
        state
    };

    Transition {
        state: next.with_fresh_count(),
        runs_scored,
        inning_ended: false,
        appearance: Some(PlateAppearance::Walk),
    }
}

/// Batter takes `hit.bases()` bases and every runner advances the same amount
fn hit(state: CountBaseState, hit: Hit) -> Transition {
    let bases = hit.bases();

    // Bits 0..=2 are the bases; anything pushed to bit 3 or above crossed home
    let advanced = (state.base_mask() << bases) | (1 << (bases - 1));
    let runs_scored = (advanced >> 3).count_ones();

    Transition {
        state: state.with_base_mask(advanced & 0b111).with_fresh_count(),
        runs_scored,
        inning_ended: false,
        appearance: Some(PlateAppearance::Hit(hit)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PlayerId;

    fn play(kind: PlayKind) -> PlayEvent {
        PlayEvent::new(PlayerId(1), kind)
    }

    fn run(state: CountBaseState, kinds: &[PlayKind]) -> (CountBaseState, Vec<Transition>) {
        let mut current = state;
        let mut transitions = Vec::new();
        for kind in kinds {
            let t = apply(current, &play(*kind)).unwrap();
            current = t.state;
            transitions.push(t);
        }
        (current, transitions)
    }

    #[test]
    fn test_ball() {
        let t = apply(CountBaseState::new(1), &play(PlayKind::Ball)).unwrap();
        assert_eq!(t.state.balls, 1);
        assert_eq!(t.appearance, None);
        assert!(!t.inning_ended);
    }

    #[test]
    fn test_four_balls_walk() {
        let (state, transitions) = run(CountBaseState::new(1), &[PlayKind::Ball; 4]);

        let walks = transitions
            .iter()
            .filter(|t| t.appearance == Some(PlateAppearance::Walk))
            .count();
        assert_eq!(walks, 1);
        assert_eq!(transitions[3].appearance, Some(PlateAppearance::Walk));
        assert!(state.first_base);
        assert!(!state.second_base && !state.third_base);
        assert_eq!((state.strikes, state.balls), (0, 0));
        assert!(transitions.iter().all(|t| t.runs_scored == 0));
    }

    #[test]
    fn test_third_strike_is_out() {
        let (state, transitions) = run(CountBaseState::new(1), &[PlayKind::Strike; 3]);
        assert_eq!(state.outs, 1);
        assert_eq!(state.strikes, 0);
        assert_eq!(transitions[2].appearance, Some(PlateAppearance::Strikeout));
    }

    #[test]
    fn test_foul_absorbed_at_two_strikes() {
        let (state, transitions) = run(
            CountBaseState::new(1),
            &[
                PlayKind::FoulStrike,
                PlayKind::FoulStrike,
                PlayKind::FoulStrike,
                PlayKind::FoulStrike,
            ],
        );
        assert_eq!(state.strikes, 2);
        assert_eq!(state.outs, 0);
        assert!(transitions.iter().all(|t| t.appearance.is_none()));

        // A real strike after the fouls still retires the batter
        let t = apply(state, &play(PlayKind::Strike)).unwrap();
        assert_eq!(t.state.outs, 1);
    }

    #[test]
    fn test_out_resets_count() {
        let state = CountBaseState {
            strikes: 2,
            balls: 3,
            ..CountBaseState::new(1)
        };
        let t = apply(state, &play(PlayKind::Out)).unwrap();
        assert_eq!(t.state.outs, 1);
        assert_eq!((t.state.strikes, t.state.balls), (0, 0));
        assert_eq!(t.appearance, Some(PlateAppearance::Out));
    }

    #[test]
    fn test_three_outs_end_half_inning() {
        let start = CountBaseState::new(3).with_bases(true, false, true);
        let (state, transitions) = run(start, &[PlayKind::Out; 3]);

        assert!(!transitions[0].inning_ended);
        assert!(!transitions[1].inning_ended);
        assert!(transitions[2].inning_ended);
        assert_eq!(state, CountBaseState::new(4));
        assert_eq!(transitions[2].runs_scored, 0);
    }

    #[test]
    fn test_walk_forces_runners() {
        let empty = CountBaseState::new(1);

        let t = apply(empty.with_bases(false, true, false), &play(PlayKind::Walk)).unwrap();
        assert_eq!(t.state.base_mask(), 0b011);
        assert_eq!(t.runs_scored, 0);

        let t = apply(empty.with_bases(true, false, true), &play(PlayKind::Walk)).unwrap();
        assert_eq!(t.state.base_mask(), 0b111);
        assert_eq!(t.runs_scored, 0);

        let t = apply(empty.with_bases(true, true, false), &play(PlayKind::Walk)).unwrap();
        assert_eq!(t.state.base_mask(), 0b111);

        let t = apply(empty.with_bases(true, true, true), &play(PlayKind::Walk)).unwrap();
        assert!(t.state.bases_loaded());
        assert_eq!(t.runs_scored, 1);
    }

    #[test]
    fn test_single_advances_every_runner() {
        let state = CountBaseState::new(1).with_bases(false, true, true);
        let t = apply(state, &play(PlayKind::Single)).unwrap();
        assert_eq!(t.state.base_mask(), 0b101);
        assert_eq!(t.runs_scored, 1);
        assert_eq!(t.appearance, Some(PlateAppearance::Hit(Hit::Single)));
    }

    #[test]
    fn test_double() {
        let state = CountBaseState::new(1).with_bases(true, true, false);
        let t = apply(state, &play(PlayKind::Double)).unwrap();
        assert_eq!(t.state.base_mask(), 0b110);
        assert_eq!(t.runs_scored, 1);
    }

    #[test]
    fn test_triple_clears_runners() {
        let state = CountBaseState::new(1).with_bases(true, false, true);
        let t = apply(state, &play(PlayKind::Triple)).unwrap();
        assert_eq!(t.state.base_mask(), 0b100);
        assert_eq!(t.runs_scored, 2);
    }

    #[test]
    fn test_grand_slam() {
        let state = CountBaseState {
            strikes: 1,
            balls: 2,
            outs: 2,
            ..CountBaseState::new(7)
        }
        .with_bases(true, true, true);
        let t = apply(state, &play(PlayKind::HomeRun)).unwrap();

        assert!(t.state.bases_empty());
        assert_eq!(t.runs_scored, 4);
        assert_eq!(t.state.outs, 2);
        assert_eq!((t.state.strikes, t.state.balls), (0, 0));
    }

    #[test]
    fn test_solo_home_run() {
        let t = apply(CountBaseState::new(1), &play(PlayKind::HomeRun)).unwrap();
        assert_eq!(t.runs_scored, 1);
        assert!(t.state.bases_empty());
    }

    #[test]
    fn test_hit_resets_count() {
        let state = CountBaseState {
            strikes: 2,
            balls: 1,
            ..CountBaseState::new(1)
        };
        let t = apply(state, &play(PlayKind::Single)).unwrap();
        assert_eq!((t.state.strikes, t.state.balls), (0, 0));
    }

    #[test]
    fn test_three_outs_is_invalid() {
        let state = CountBaseState {
            outs: 3,
            ..CountBaseState::new(1)
        };
        for kind in PlayKind::ALL {
            assert_eq!(
                apply(state, &play(kind)),
                Err(GameError::InvalidState { state })
            );
        }
    }

    #[test]
    fn test_boundary_counts_are_invalid() {
        let strikes = CountBaseState {
            strikes: 3,
            ..CountBaseState::new(1)
        };
        let balls = CountBaseState {
            balls: 4,
            ..CountBaseState::new(1)
        };
        assert!(apply(strikes, &play(PlayKind::Ball)).is_err());
        assert!(apply(balls, &play(PlayKind::Strike)).is_err());
        assert!(apply(CountBaseState::new(0), &play(PlayKind::Ball)).is_err());
    }

    #[test]
    fn test_every_play_settles() {
        // Exhaust every settled state against every play kind
        for mask in 0..8u8 {
            for outs in 0..OUTS_PER_HALF_INNING {
                for strikes in 0..STRIKES_PER_OUT {
                    for balls in 0..BALLS_PER_WALK {
                        let state = CountBaseState {
                            strikes,
                            balls,
                            outs,
                            ..CountBaseState::new(1)
                        }
                        .with_base_mask(mask);

                        for kind in PlayKind::ALL {
                            let t = apply(state, &play(kind)).unwrap();
                            assert!(t.state.is_settled(), "{} after {} from {}", t.state, kind, state);
                            assert!(t.runs_scored <= 4);
                        }
                    }
                }
            }
        }
    }
}

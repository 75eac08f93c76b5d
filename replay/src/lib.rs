//! Replay building and playback for sandlot game stories.
//!
//! A story is the ordered list of plays the service reports for a round.
//! [`build`] folds it through the transition engine into a [`ReplayLog`]
//! with one [`HistoryEntry`] per play; [`Playback`] steps through a log the
//! way a replay view would.
//!
//! ```
//! use sandlot_game::{PlayEvent, PlayKind, PlayerId, Side};
//! use sandlot_replay::{Playback, RoundContext, build};
//!
//! let story = [
//!     PlayEvent::new(PlayerId(1), PlayKind::Double),
//!     PlayEvent::new(PlayerId(2), PlayKind::Single),
//! ];
//! let log = build(RoundContext::new(1, Side::Away).unwrap(), &story).unwrap();
//!
//! // Every runner moves as far as the batter: second to third on a single
//! assert_eq!(log.final_score().away, 0);
//! assert!(log.final_state().first_base && log.final_state().third_base);
//!
//! let mut playback = Playback::new(&log);
//! playback.step();
//! assert!(playback.state().second_base);
//! ```

mod builder;
mod log;
mod playback;

pub use builder::{ReplayError, RoundContext, build, build_from, load};
pub use log::{HistoryEntry, ReplayLog};
pub use playback::Playback;

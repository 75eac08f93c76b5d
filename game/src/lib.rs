//! Game state tracking and domain types for sandlot.
//!
//! This crate turns an ordered story of plays into settled count/base/out
//! states and run totals. It has no I/O and no async; every function is a
//! plain transition over values.
//!
//! # Overview
//!
//! `sandlot-game` sits between `sandlot-protocol` (wire format) and the
//! consumers of derived state:
//!
//! ```text
//! sandlot-protocol (wire format)
//!        │
//!        ▼
//! sandlot-game (domain types + transitions) ← THIS CRATE
//!        │
//!        ├─> sandlot-replay (per-play history log)
//!        ├─> sandlot-team (player and team totals)
//!        └─> sandlot-client (published snapshots)
//! ```
//!
//! # Main Types
//!
//! - [`CountBaseState`] - Strikes, balls, outs and base occupancy
//! - [`PlayEvent`] / [`PlayKind`] - One atomic play by a batter
//! - [`PlateAppearance`] - How an at-bat concluded
//! - [`Side`] / [`Score`] - Home and away, and runs per side
//! - [`apply`] - The transition function
//! - [`TrackedGame`] - Running state across many plays
//!
//! # Example Usage
//!
//! ```
//! use sandlot_game::{CountBaseState, PlayEvent, PlayKind, PlayerId, apply};
//!
//! let loaded = CountBaseState::new(1).with_bases(true, true, true);
//! let t = apply(loaded, &PlayEvent::new(PlayerId(3), PlayKind::HomeRun)).unwrap();
//!
//! assert_eq!(t.runs_scored, 4);
//! assert!(t.state.bases_empty());
//! ```

pub mod engine;
mod error;
pub mod types;

pub use engine::{TrackedGame, Transition, apply};
pub use error::GameError;
pub use types::{
    BALLS_PER_WALK, CountBaseState, Hit, OUTS_PER_HALF_INNING, PlateAppearance, PlayEvent,
    PlayKind, PlayerId, STRIKES_PER_OUT, Score, Side,
};

// Re-export the wire types domain values convert from
pub use sandlot_protocol::{PlayCode, RoundInfo, StoryEntry};

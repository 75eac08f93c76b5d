//! State transitions from play events

mod tracker;
mod transition;

pub use tracker::TrackedGame;
pub use transition::{Transition, apply};

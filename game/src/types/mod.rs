//! Domain types for game state tracking

mod event;
mod side;
mod state;

pub use event::{Hit, PlateAppearance, PlayEvent, PlayKind, PlayerId};
pub use side::{Score, Side};
pub use state::{BALLS_PER_WALK, CountBaseState, OUTS_PER_HALF_INNING, STRIKES_PER_OUT};

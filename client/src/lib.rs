//! Async snapshot provider for sandlot games.
//!
//! A [`Session`] pulls payloads from a [`GameSource`], rebuilds an immutable
//! [`Snapshot`] and publishes it through a [`SnapshotProvider`]. Observers
//! either await [`Subscription::changed`] or implement [`SnapshotHandler`].
//!
//! Refreshes are ordered by [`Ticket`]: a result is only published when no
//! newer refresh has published already, so a slow response never overwrites
//! a fresher view.

mod config;
mod handler;
mod provider;
mod session;
mod snapshot;
mod source;

pub use config::{DEFAULT_POLL_INTERVAL, SessionConfig};
pub use handler::SnapshotHandler;
pub use provider::{SnapshotProvider, Subscription, Ticket};
pub use session::Session;
pub use snapshot::{RefreshPayload, Snapshot, SnapshotError};
pub use source::{GameSource, StaticSource};

pub use sandlot_protocol::Request;

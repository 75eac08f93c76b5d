use std::sync::Arc;

use async_trait::async_trait;

use crate::snapshot::Snapshot;

/// Trait for observing published snapshots.
///
/// Implement this trait to react to game updates. All methods have
/// default no-op implementations, so you only need to implement the
/// events you care about.
///
/// # Example
///
/// ```ignore
/// struct Printer;
///
/// #[async_trait]
/// impl SnapshotHandler for Printer {
///     async fn on_snapshot(&mut self, snapshot: Arc<Snapshot>) {
///         println!("{} {}", snapshot.state, snapshot.score);
///     }
/// }
/// ```
#[async_trait]
pub trait SnapshotHandler: Send {
    /// Called with every snapshot the subscription observes.
    /// Snapshots published faster than the handler runs are skipped;
    /// the latest one is always delivered.
    async fn on_snapshot(&mut self, snapshot: Arc<Snapshot>) {
        let _ = snapshot;
    }

    /// Called once when the provider is gone and no more snapshots will come.
    async fn on_closed(&mut self) {}
}

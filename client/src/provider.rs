use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::watch;

use crate::handler::SnapshotHandler;
use crate::snapshot::{RefreshPayload, Snapshot, SnapshotError};

/// Order of a refresh request; later tickets supersede earlier ones
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

impl Ticket {
    pub fn value(&self) -> u64 {
        self.0
    }
}

struct Shared {
    tx: watch::Sender<Option<Arc<Snapshot>>>,
    next_ticket: AtomicU64,
    perspective: Option<String>,
}

/// Publishes the latest game snapshot to any number of observers
///
/// Cloning is cheap and every clone publishes to the same observers.
#[derive(Clone)]
pub struct SnapshotProvider {
    shared: Arc<Shared>,
}

impl SnapshotProvider {
    pub fn new() -> Self {
        Self::with_perspective(None)
    }

    /// Provider whose snapshots are seen from `team`'s side
    pub fn with_perspective(team: Option<String>) -> Self {
        let (tx, _) = watch::channel(None);
        Self {
            shared: Arc::new(Shared {
                tx,
                next_ticket: AtomicU64::new(0),
                perspective: team,
            }),
        }
    }

    /// Reserve the ticket for a new refresh
    pub fn begin(&self) -> Ticket {
        Ticket(self.shared.next_ticket.fetch_add(1, Ordering::Relaxed) + 1)
    }

    /// Rebuild from `payload` and publish it unless a newer ticket already has
    ///
    /// Returns `Ok(None)` when the result was superseded. On error the
    /// current snapshot is left untouched.
    pub fn publish(
        &self,
        ticket: Ticket,
        payload: &RefreshPayload,
    ) -> Result<Option<Arc<Snapshot>>, SnapshotError> {
        tracing::debug!(
            ticket = ticket.0,
            story = payload.game.story().len(),
            "Rebuilding snapshot"
        );

        let mut snapshot = match Snapshot::rebuild(payload, self.shared.perspective.as_deref()) {
            Ok(snapshot) => snapshot,
            Err(e) => {
                tracing::warn!(ticket = ticket.0, error = %e, "Snapshot rebuild failed");
                return Err(e);
            }
        };
        snapshot.revision = ticket.0;
        let snapshot = Arc::new(snapshot);

        let mut published = None;
        self.shared.tx.send_if_modified(|current| {
            if current.as_ref().is_some_and(|c| c.revision >= ticket.0) {
                return false;
            }
            *current = Some(Arc::clone(&snapshot));
            published = Some(Arc::clone(&snapshot));
            true
        });

        match &published {
            Some(s) => tracing::info!(
                revision = s.revision,
                round = s.round(),
                home = s.score.home,
                away = s.score.away,
                "Published snapshot"
            ),
            None => tracing::warn!(ticket = ticket.0, "Refresh superseded by a newer one"),
        }

        Ok(published)
    }

    /// Rebuild and publish under a fresh ticket
    pub fn refresh(&self, payload: &RefreshPayload) -> Result<Option<Arc<Snapshot>>, SnapshotError> {
        let ticket = self.begin();
        self.publish(ticket, payload)
    }

    /// Latest published snapshot, if any
    pub fn current(&self) -> Option<Arc<Snapshot>> {
        self.shared.tx.borrow().clone()
    }

    pub fn subscribe(&self) -> Subscription {
        Subscription {
            rx: self.shared.tx.subscribe(),
        }
    }

    pub fn perspective(&self) -> Option<&str> {
        self.shared.perspective.as_deref()
    }
}

impl Default for SnapshotProvider {
    fn default() -> Self {
        Self::new()
    }
}

/// Receives snapshots published after it was created
pub struct Subscription {
    rx: watch::Receiver<Option<Arc<Snapshot>>>,
}

impl Subscription {
    /// Wait for the next published snapshot
    ///
    /// Returns `None` once every provider handle is dropped.
    pub async fn changed(&mut self) -> Option<Arc<Snapshot>> {
        loop {
            self.rx.changed().await.ok()?;
            let latest = self.rx.borrow_and_update().clone();
            if let Some(snapshot) = latest {
                return Some(snapshot);
            }
        }
    }

    /// Latest snapshot without waiting
    pub fn current(&self) -> Option<Arc<Snapshot>> {
        self.rx.borrow().clone()
    }

    /// Feed snapshots to `handler` until the provider is gone
    pub async fn run<H: SnapshotHandler>(mut self, handler: &mut H) {
        while let Some(snapshot) = self.changed().await {
            handler.on_snapshot(snapshot).await;
        }
        handler.on_closed().await;
    }
}

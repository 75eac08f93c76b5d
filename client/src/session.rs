use std::sync::Arc;

use anyhow::{Context, Result};
use sandlot_protocol::TeamPair;

use crate::config::SessionConfig;
use crate::provider::{SnapshotProvider, Subscription};
use crate::snapshot::{RefreshPayload, Snapshot};
use crate::source::GameSource;

/// Keeps one game's snapshot current from a [`GameSource`]
pub struct Session<S> {
    config: SessionConfig,
    source: S,
    provider: SnapshotProvider,
}

impl<S: GameSource> Session<S> {
    pub fn new(config: SessionConfig, source: S) -> Self {
        let provider = SnapshotProvider::with_perspective(config.team.clone());
        Self {
            config,
            source,
            provider,
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn provider(&self) -> &SnapshotProvider {
        &self.provider
    }

    pub fn subscribe(&self) -> Subscription {
        self.provider.subscribe()
    }

    pub fn current(&self) -> Option<Arc<Snapshot>> {
        self.provider.current()
    }

    pub async fn games(&self) -> Result<Vec<TeamPair>> {
        self.source.games().await
    }

    /// Fetch every payload and publish them together under one ticket
    ///
    /// Returns `Ok(None)` when a newer refresh published first. Dropping the
    /// returned future before it completes publishes nothing.
    pub async fn refresh(&self) -> Result<Option<Arc<Snapshot>>> {
        let ticket = self.provider.begin();

        let payload = match self.fetch().await {
            Ok(payload) => payload,
            Err(e) => {
                tracing::warn!(ticket = ticket.value(), error = %e, "Refresh failed");
                return Err(e);
            }
        };

        Ok(self.provider.publish(ticket, &payload)?)
    }

    /// Refresh every `poll_interval` until a refresh fails
    pub async fn follow(&self) -> Result<()> {
        let mut interval = tokio::time::interval(self.config.poll_interval);
        interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

        loop {
            interval.tick().await;
            self.refresh().await?;
        }
    }

    async fn fetch(&self) -> Result<RefreshPayload> {
        let game = self.source.game().await.context("Failed to fetch game")?;
        let scoreboard = self
            .source
            .scoreboard()
            .await
            .context("Failed to fetch scoreboard")?;
        let home_players = self
            .source
            .player_scores(&game.home_team)
            .await
            .with_context(|| format!("Failed to fetch players of {}", game.home_team))?;
        let away_players = self
            .source
            .player_scores(&game.away_team)
            .await
            .with_context(|| format!("Failed to fetch players of {}", game.away_team))?;

        Ok(RefreshPayload {
            game,
            scoreboard,
            home_players,
            away_players,
        })
    }
}

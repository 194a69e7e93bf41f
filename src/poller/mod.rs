//! Periodic status polling.
//!
//! Runs one fetch per tick on a background task and forwards successful
//! snapshots to the UI over a bounded channel. A tick awaits its fetch before
//! the next tick is taken, so at most one request is ever in flight; ticks
//! that fall due during a slow fetch are skipped.

mod config;

pub use config::*;

use crate::status::{StatusSnapshot, StatusSource};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Background service that polls a [`StatusSource`].
pub struct StatusPoller<S: StatusSource + 'static> {
    source: Arc<S>,
    config: PollConfig,
}

impl<S: StatusSource + 'static> StatusPoller<S> {
    pub fn new(source: Arc<S>, config: PollConfig) -> Self {
        Self { source, config }
    }

    /// Create the snapshot channel sized from the poll configuration.
    pub fn channel(
        &self,
    ) -> (
        mpsc::Sender<StatusSnapshot>,
        mpsc::Receiver<StatusSnapshot>,
    ) {
        mpsc::channel(self.config.channel_capacity.max(1))
    }

    /// Run a single poll. Returns true when a snapshot was forwarded.
    pub async fn poll_once(&self, tx: &mpsc::Sender<StatusSnapshot>) -> bool {
        match self.source.get_status().await {
            Some(snapshot) => tx.send(snapshot).await.is_ok(),
            None => false,
        }
    }

    /// Start the poller background task.
    ///
    /// The first poll runs immediately. The task ends when the token is
    /// cancelled or the receiving side is dropped.
    pub fn start(
        self,
        tx: mpsc::Sender<StatusSnapshot>,
        cancel_token: CancellationToken,
    ) -> JoinHandle<()> {
        tokio::spawn(async move {
            let mut interval =
                tokio::time::interval(Duration::from_millis(self.config.interval_ms.max(1)));
            interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

            tracing::info!(interval_ms = self.config.interval_ms, "Status poller started");

            loop {
                tokio::select! {
                    _ = cancel_token.cancelled() => {
                        tracing::info!("Status poller shutting down");
                        break;
                    }
                    _ = interval.tick() => {
                        let forwarded = tokio::select! {
                            _ = cancel_token.cancelled() => break,
                            forwarded = self.poll_once(&tx) => forwarded,
                        };
                        if tx.is_closed() {
                            tracing::debug!("Snapshot receiver dropped, stopping poller");
                            break;
                        }
                        tracing::trace!(forwarded, "Poll tick completed");
                    }
                }
            }
        })
    }
}

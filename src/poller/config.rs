//! Configuration for the poll loop.

use serde::{Deserialize, Serialize};

/// Poll loop timing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PollConfig {
    /// Milliseconds between poll ticks
    pub interval_ms: u64,
    /// Snapshots buffered between the poller and the UI
    pub channel_capacity: usize,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            interval_ms: 1000,
            channel_capacity: 16,
        }
    }
}

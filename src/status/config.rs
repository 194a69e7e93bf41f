//! Configuration for the status endpoint.

use serde::{Deserialize, Serialize};

/// Where and how to fetch status snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EndpointConfig {
    /// Full URL of the status endpoint
    pub url: String,
    /// Timeout for each status request
    pub timeout_seconds: u64,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            url: "http://127.0.0.1:5000/api/status".to_string(),
            timeout_seconds: 5,
        }
    }
}

//! HTTP client for the training status endpoint.

use super::config::EndpointConfig;
use super::error::StatusError;
use super::types::StatusSnapshot;
use async_trait::async_trait;
use std::time::{Duration, Instant};

/// Anything that can produce status snapshots.
///
/// Implemented by [`StatusClient`]; tests substitute scripted sources.
#[async_trait]
pub trait StatusSource: Send + Sync {
    /// Fetch one snapshot. `None` means "no update this tick".
    async fn get_status(&self) -> Option<StatusSnapshot>;
}

/// Fetches snapshots from a single status endpoint.
pub struct StatusClient {
    client: reqwest::Client,
    config: EndpointConfig,
}

impl StatusClient {
    /// Create a client with its own connection pool.
    pub fn new(config: EndpointConfig) -> Result<Self, StatusError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| StatusError::ClientBuild(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Create a client around an existing HTTP client (for testing).
    pub fn with_client(config: EndpointConfig, client: reqwest::Client) -> Self {
        Self { client, config }
    }

    pub fn url(&self) -> &str {
        &self.config.url
    }

    /// Fetch and decode one snapshot, classifying any failure.
    pub async fn fetch(&self) -> Result<StatusSnapshot, StatusError> {
        let start = Instant::now();

        let response = self
            .client
            .get(&self.config.url)
            .timeout(Duration::from_secs(self.config.timeout_seconds))
            .send()
            .await
            .map_err(|e| Self::classify_error(e, self.config.timeout_seconds))?;

        if !response.status().is_success() {
            return Err(StatusError::HttpError(response.status().as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| Self::classify_error(e, self.config.timeout_seconds))?;

        let snapshot: StatusSnapshot =
            serde_json::from_str(&body).map_err(|e| StatusError::ParseError(e.to_string()))?;

        tracing::debug!(
            workers = snapshot.workers.len(),
            latency_ms = start.elapsed().as_millis() as u64,
            "Fetched status snapshot"
        );

        Ok(snapshot)
    }

    /// Classify reqwest error into StatusError.
    fn classify_error(e: reqwest::Error, timeout_seconds: u64) -> StatusError {
        if e.is_timeout() {
            StatusError::Timeout(timeout_seconds)
        } else if e.is_decode() {
            StatusError::ParseError(e.to_string())
        } else {
            StatusError::ConnectionFailed(e.to_string())
        }
    }
}

#[async_trait]
impl StatusSource for StatusClient {
    async fn get_status(&self) -> Option<StatusSnapshot> {
        match self.fetch().await {
            Ok(snapshot) => Some(snapshot),
            Err(error) => {
                tracing::warn!(
                    url = %self.config.url,
                    error = %error,
                    "Status unavailable, waiting for server"
                );
                None
            }
        }
    }
}

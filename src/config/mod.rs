//! Configuration module for spmon
//!
//! Provides layered configuration loading from files, environment variables, and defaults.
//!
//! # Configuration Precedence
//!
//! 1. CLI arguments (highest priority)
//! 2. Environment variables (`SPMON_*`)
//! 3. Configuration file (TOML)
//! 4. Default values (lowest priority)
//!
//! # Example
//!
//! ```rust
//! use spmon::config::MonitorConfig;
//!
//! // Load defaults
//! let config = MonitorConfig::default();
//! assert_eq!(config.poll.interval_ms, 1000);
//!
//! // Parse from TOML
//! let toml = r#"
//! [endpoint]
//! url = "http://trainer:5000/api/status"
//! "#;
//! let config: MonitorConfig = toml::from_str(toml).unwrap();
//! assert_eq!(config.endpoint.url, "http://trainer:5000/api/status");
//! ```

pub mod charts;
pub mod display;
pub mod error;
pub mod logging;

pub use charts::ChartsConfig;
pub use display::DisplayConfig;
pub use error::ConfigError;
pub use logging::{LogFormat, LoggingConfig};

// Re-export section configs owned by their modules
pub use crate::poller::PollConfig;
pub use crate::status::EndpointConfig;

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Unified configuration for the monitor.
///
/// # Example
///
/// ```rust
/// use spmon::config::MonitorConfig;
///
/// let config = MonitorConfig::default();
/// assert_eq!(config.endpoint.url, "http://127.0.0.1:5000/api/status");
/// assert_eq!(config.charts.eval_window, 60);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct MonitorConfig {
    /// Status endpoint
    pub endpoint: EndpointConfig,
    /// Poll loop timing
    pub poll: PollConfig,
    /// Chart window sizes
    pub charts: ChartsConfig,
    /// Display options
    pub display: DisplayConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

impl MonitorConfig {
    /// Load configuration from a TOML file
    ///
    /// If path is None, returns default configuration.
    /// If path doesn't exist, returns NotFound error.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(p) => {
                if !p.exists() {
                    return Err(ConfigError::NotFound(p.to_path_buf()));
                }
                let content = std::fs::read_to_string(p)?;
                toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
            }
            None => Ok(Self::default()),
        }
    }

    /// Apply environment variable overrides
    ///
    /// Supports SPMON_* environment variables for common settings.
    /// Invalid values are silently ignored (defaults are kept).
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(url) = std::env::var("SPMON_URL") {
            self.endpoint.url = url;
        }
        if let Ok(timeout) = std::env::var("SPMON_TIMEOUT_SECONDS") {
            if let Ok(t) = timeout.parse() {
                self.endpoint.timeout_seconds = t;
            }
        }
        if let Ok(interval) = std::env::var("SPMON_POLL_INTERVAL_MS") {
            if let Ok(i) = interval.parse() {
                self.poll.interval_ms = i;
            }
        }
        if let Ok(worker) = std::env::var("SPMON_WORKER") {
            self.display.default_worker = worker;
        }
        if let Ok(theme) = std::env::var("SPMON_PIECE_THEME") {
            if let Ok(t) = theme.parse() {
                self.display.piece_theme = t;
            }
        }

        // Logging settings
        if let Ok(level) = std::env::var("SPMON_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("SPMON_LOG_FORMAT") {
            if let Ok(f) = format.parse() {
                self.logging.format = f;
            }
        }

        self
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = self.endpoint.url.trim();
        if url.is_empty() {
            return Err(ConfigError::Validation {
                field: "endpoint.url".to_string(),
                message: "URL cannot be empty".to_string(),
            });
        }
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::Validation {
                field: "endpoint.url".to_string(),
                message: format!("URL must start with http:// or https://, got '{}'", url),
            });
        }
        if self.endpoint.timeout_seconds == 0 {
            return Err(ConfigError::Validation {
                field: "endpoint.timeout_seconds".to_string(),
                message: "timeout must be non-zero".to_string(),
            });
        }
        if self.poll.interval_ms == 0 {
            return Err(ConfigError::Validation {
                field: "poll.interval_ms".to_string(),
                message: "interval must be non-zero".to_string(),
            });
        }

        for (name, window) in self.charts.windows() {
            if window == 0 {
                return Err(ConfigError::Validation {
                    field: format!("charts.{}", name),
                    message: "window must hold at least one sample".to_string(),
                });
            }
        }

        if self.display.default_worker.is_empty() {
            return Err(ConfigError::MissingField("display.default_worker".to_string()));
        }

        Ok(())
    }
}

//! Display configuration

use crate::dashboard::PieceTheme;
use serde::{Deserialize, Serialize};

/// Display configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Worker selected at start-up
    pub default_worker: String,
    pub piece_theme: PieceTheme,
    /// Drop roster cards for workers missing from the latest snapshot
    pub prune_stale_workers: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            default_worker: "0".to_string(),
            piece_theme: PieceTheme::Unicode,
            prune_stale_workers: false,
        }
    }
}

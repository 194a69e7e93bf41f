//! Chart window configuration

use serde::{Deserialize, Serialize};

/// Rolling window sizes, in samples (one sample per searching poll tick)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartsConfig {
    pub eval_window: usize,
    pub depth_window: usize,
    pub entropy_window: usize,
    pub latency_window: usize,
    pub waste_window: usize,
}

impl Default for ChartsConfig {
    fn default() -> Self {
        Self {
            eval_window: 60,
            depth_window: 60,
            entropy_window: 50,
            latency_window: 50,
            waste_window: 50,
        }
    }
}

impl ChartsConfig {
    /// `(field name, window)` pairs, for validation
    pub fn windows(&self) -> [(&'static str, usize); 5] {
        [
            ("eval_window", self.eval_window),
            ("depth_window", self.depth_window),
            ("entropy_window", self.entropy_window),
            ("latency_window", self.latency_window),
            ("waste_window", self.waste_window),
        ]
    }
}

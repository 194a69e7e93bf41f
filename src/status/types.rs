//! Wire types for the training status endpoint

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Snapshot of the whole training fleet, as returned by `GET /api/status`.
///
/// Replaced wholesale on every poll; nothing here outlives a tick.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusSnapshot {
    /// Number of samples currently held in the replay buffer
    pub buffer_count: Option<u64>,
    /// Per-worker telemetry keyed by worker id
    pub workers: BTreeMap<String, WorkerStats>,
}

/// Telemetry published by one self-play worker.
///
/// Between games the producer publishes a partial record (`"In Queue"`,
/// `fen: "start"`), so everything except `status` is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkerStats {
    pub status: String,
    /// Current position, or the literal `"start"`
    pub fen: Option<String>,
    /// Positions of the game in progress, oldest first
    pub history_fens: Option<Vec<String>>,
    /// Side to move (`"White"` / `"Black"`)
    pub turn: Option<String>,
    pub move_count: Option<u64>,
    /// Deepest ply reached by the last search
    pub last_depth: Option<u64>,
    pub total_games: Option<u64>,
    pub total_samples: Option<u64>,
    /// Network value estimate in [-1, 1] from the side to move
    pub value: Option<f64>,
    /// Entropy (bits) of the search policy
    pub entropy: Option<f64>,
    pub inference_ms: Option<f64>,
    /// Search nodes per second
    pub nps: Option<u64>,
    /// Simulations run by the last search
    pub simulations: Option<u64>,
    /// Distinct nodes expanded by the last search
    pub unique_nodes: Option<u64>,
    pub phase_times: Option<PhaseTimes>,
    /// Visit share per square name (`"e4"` → 0.31)
    pub heatmap: Option<HashMap<String, f64>>,
}

impl WorkerStats {
    /// True while the worker is running a search.
    ///
    /// Matches on the status label; batched workers report `"Thinking (Batched)"`.
    pub fn is_searching(&self) -> bool {
        self.status.contains("Thinking") || self.status.contains("Searching")
    }
}

/// Accumulated search seconds per game phase
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhaseTimes {
    /// Moves 1-20
    pub opening: f64,
    /// Moves 21-40
    pub midgame: f64,
    /// Moves 41+
    pub endgame: f64,
}

//! Shared test utilities for spmon integration tests.
//!
//! Builders for status payloads and a mock status endpoint.

#![allow(dead_code)]

use serde_json::{json, Value};
use spmon::config::MonitorConfig;
use spmon::status::{EndpointConfig, StatusSnapshot, WorkerStats};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const STATUS_PATH: &str = "/api/status";

// =============================================================================
// Payload Builders
// =============================================================================

/// JSON for a worker mid-search with every telemetry field present.
pub fn searching_worker_json(move_count: u64) -> Value {
    json!({
        "status": "Thinking",
        "fen": "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq - 0 1",
        "history_fens": ["start", "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq - 0 1"],
        "turn": "Black",
        "move_count": move_count,
        "last_depth": 12,
        "total_games": 4,
        "total_samples": 310,
        "value": 0.1,
        "entropy": 2.5,
        "inference_ms": 4.2,
        "nps": 1800,
        "phase_times": {"opening": 3.0, "midgame": 1.0, "endgame": 0.0},
        "heatmap": {"e4": 0.4, "d4": 0.2}
    })
}

/// JSON for a worker between games.
pub fn queued_worker_json() -> Value {
    json!({"status": "In Queue", "fen": "start"})
}

pub fn status_json(buffer_count: u64, workers: &[(&str, Value)]) -> Value {
    let workers: serde_json::Map<String, Value> = workers
        .iter()
        .map(|(id, worker)| (id.to_string(), worker.clone()))
        .collect();
    json!({"buffer_count": buffer_count, "workers": workers})
}

/// Typed snapshot with one worker.
pub fn snapshot_with(id: &str, stats: WorkerStats) -> StatusSnapshot {
    let mut snapshot = StatusSnapshot {
        buffer_count: Some(0),
        ..Default::default()
    };
    snapshot.workers.insert(id.to_string(), stats);
    snapshot
}

/// Searching worker whose history holds `len` positions.
pub fn searching_stats(len: usize, value: f64) -> WorkerStats {
    let history: Vec<String> = (0..len).map(king_on_file).collect();
    WorkerStats {
        status: "Searching".to_string(),
        fen: history.last().cloned(),
        history_fens: Some(history),
        value: Some(value),
        last_depth: Some(len as u64),
        ..Default::default()
    }
}

/// Position with a lone white king on the back rank, file `i % 8`.
pub fn king_on_file(i: usize) -> String {
    let before = i % 8;
    let after = 7 - before;
    let mut rank = String::new();
    if before > 0 {
        rank.push_str(&before.to_string());
    }
    rank.push('K');
    if after > 0 {
        rank.push_str(&after.to_string());
    }
    format!("8/8/8/8/8/8/8/{} w - - 0 1", rank)
}

// =============================================================================
// Mock Endpoint
// =============================================================================

/// Start a mock server answering the status path with `body`.
pub async fn mock_status_server(body: Value) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(STATUS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;
    server
}

pub fn endpoint_for(server: &MockServer) -> EndpointConfig {
    EndpointConfig {
        url: format!("{}{}", server.uri(), STATUS_PATH),
        timeout_seconds: 2,
    }
}

pub fn config_with_windows(window: usize) -> MonitorConfig {
    let mut config = MonitorConfig::default();
    config.charts.eval_window = window;
    config.charts.depth_window = window;
    config.charts.entropy_window = window;
    config.charts.latency_window = window;
    config.charts.waste_window = window;
    config
}

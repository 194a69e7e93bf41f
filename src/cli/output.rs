//! Output formatting helpers for CLI commands

use crate::dashboard::roster::worker_order;
use crate::dashboard::view::label;
use crate::dashboard::{format_win_rate, win_probability};
use crate::status::{StatusSnapshot, WorkerStats};
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, ContentArrangement, Table};
use serde_json::json;

/// View model for one worker row
#[derive(Debug, Clone, serde::Serialize)]
pub struct WorkerView {
    pub id: String,
    pub status: String,
    pub turn: Option<String>,
    pub move_count: Option<u64>,
    pub last_depth: Option<u64>,
    pub win_probability: Option<f64>,
    pub total_games: Option<u64>,
    pub total_samples: Option<u64>,
    pub nps: Option<u64>,
}

impl WorkerView {
    pub fn new(id: &str, stats: &WorkerStats) -> Self {
        Self {
            id: id.to_string(),
            status: stats.status.clone(),
            turn: stats.turn.clone(),
            move_count: stats.move_count,
            last_depth: stats.last_depth,
            win_probability: stats.value.map(win_probability),
            total_games: stats.total_games,
            total_samples: stats.total_samples,
            nps: stats.nps,
        }
    }
}

/// Build row views in roster order
pub fn worker_views(snapshot: &StatusSnapshot) -> Vec<WorkerView> {
    let mut views: Vec<WorkerView> = snapshot
        .workers
        .iter()
        .map(|(id, stats)| WorkerView::new(id, stats))
        .collect();
    views.sort_by(|a, b| worker_order(&a.id, &b.id));
    views
}

fn status_cell(status: &str) -> String {
    if status.contains("Thinking") || status.contains("Searching") {
        status.green().to_string()
    } else if status.contains("Queue") {
        status.yellow().to_string()
    } else if status.contains("Resign") {
        status.red().to_string()
    } else {
        status.to_string()
    }
}

/// Format workers as a table
pub fn format_workers_table(buffer_count: Option<u64>, workers: &[WorkerView]) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        "Worker", "Status", "Turn", "Moves", "Depth", "Win", "Games", "Samples", "NPS",
    ]);

    for w in workers {
        table.add_row(vec![
            Cell::new(format!("ACTOR_0{}", w.id)),
            Cell::new(status_cell(&w.status)),
            Cell::new(label(w.turn.as_deref())),
            Cell::new(label(w.move_count)),
            Cell::new(label(w.last_depth)),
            Cell::new(label(w.win_probability.map(format_win_rate))),
            Cell::new(label(w.total_games)),
            Cell::new(label(w.total_samples)),
            Cell::new(label(w.nps)),
        ]);
    }

    format!("Buffer: {}\n{}", label(buffer_count), table)
}

/// Format workers as JSON
pub fn format_workers_json(
    buffer_count: Option<u64>,
    workers: &[WorkerView],
) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&json!({
        "buffer_count": buffer_count,
        "workers": workers
    }))
}

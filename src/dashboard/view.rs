//! Typed view-model the controller writes and renderers read

use super::board::Board;
use chrono::{DateTime, Utc};

/// Text shown for a value the worker has not reported
pub const MISSING: &str = "-";

/// Sidebar statistics for the active worker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatLabels {
    pub turn: String,
    pub moves: String,
    pub depth: String,
    pub games: String,
    pub samples: String,
    pub nps: String,
    pub win_rate: String,
}

impl Default for StatLabels {
    fn default() -> Self {
        Self {
            turn: MISSING.to_string(),
            moves: MISSING.to_string(),
            depth: MISSING.to_string(),
            games: MISSING.to_string(),
            samples: MISSING.to_string(),
            nps: MISSING.to_string(),
            win_rate: MISSING.to_string(),
        }
    }
}

/// Everything a renderer needs apart from the chart/roster components.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewModel {
    pub buffer_count: String,
    pub active_worker_id: String,
    pub stats: StatLabels,
    /// `MOVE: <index>` once a history has been shown
    pub move_label: Option<String>,
    /// Live indicator
    pub live: bool,
    /// Position currently on the board
    pub position: String,
    pub board: Board,
    /// When the last snapshot was applied
    pub last_sync: Option<DateTime<Utc>>,
}

impl ViewModel {
    pub fn new(active_worker_id: &str) -> Self {
        Self {
            buffer_count: MISSING.to_string(),
            active_worker_id: active_worker_id.to_string(),
            stats: StatLabels::default(),
            move_label: None,
            live: true,
            position: "start".to_string(),
            board: Board::start(),
            last_sync: None,
        }
    }
}

/// Label text for an optional value
pub fn label<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(|| MISSING.to_string(), |v| v.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label() {
        assert_eq!(label(Some(42u64)), "42");
        assert_eq!(label(Some("White")), "White");
        assert_eq!(label::<u64>(None), "-");
    }

    #[test]
    fn test_new_view_model() {
        let view = ViewModel::new("3");
        assert_eq!(view.active_worker_id, "3");
        assert!(view.live);
        assert_eq!(view.stats.win_rate, MISSING);
        assert_eq!(view.board, Board::start());
    }
}

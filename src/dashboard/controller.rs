//! Dashboard state machine
//!
//! Owns the session state (active worker, move history, live/history mode)
//! and applies each poll result to the view-model and chart components.
//! Nothing here touches a terminal, so every transition is testable headless.

use super::charts::ChartSet;
use super::heatmap::Heatmap;
use super::roster::WorkerRoster;
use super::view::{label, StatLabels, ViewModel};
use super::board::Board;
use crate::config::MonitorConfig;
use crate::status::{StatusSnapshot, WorkerStats};

/// Whether the board tracks the newest position or a pinned history entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Live,
    History,
}

/// UI session state for the active worker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    pub active_worker_id: String,
    /// Positions of the active worker's current game, oldest first
    pub game_history: Vec<String>,
    /// Position of the board within `game_history`; `None` before any history
    pub history_index: Option<usize>,
    pub mode: ViewMode,
}

impl SessionState {
    pub fn new(active_worker_id: &str) -> Self {
        Self {
            active_worker_id: active_worker_id.to_string(),
            game_history: Vec::new(),
            history_index: None,
            mode: ViewMode::Live,
        }
    }

    pub fn is_live(&self) -> bool {
        self.mode == ViewMode::Live
    }

    fn last_index(&self) -> Option<usize> {
        self.game_history.len().checked_sub(1)
    }
}

/// Map a value estimate in [-1, 1] to a win percentage in [0, 100]
pub fn win_probability(value: f64) -> f64 {
    (value + 1.0) / 2.0 * 100.0
}

/// Win percentage with one decimal, e.g. `62.5%`
pub fn format_win_rate(probability: f64) -> String {
    format!("{:.1}%", probability)
}

/// Applies snapshots and navigation actions to the dashboard state.
#[derive(Debug, Clone)]
pub struct DashboardController {
    session: SessionState,
    view: ViewModel,
    charts: ChartSet,
    heatmap: Heatmap,
    roster: WorkerRoster,
}

impl DashboardController {
    pub fn new(config: &MonitorConfig) -> Self {
        let active = config.display.default_worker.as_str();
        Self {
            session: SessionState::new(active),
            view: ViewModel::new(active),
            charts: ChartSet::new(&config.charts),
            heatmap: Heatmap::default(),
            roster: WorkerRoster::new(config.display.prune_stale_workers),
        }
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn view(&self) -> &ViewModel {
        &self.view
    }

    pub fn charts(&self) -> &ChartSet {
        &self.charts
    }

    pub fn heatmap(&self) -> &Heatmap {
        &self.heatmap
    }

    pub fn roster(&self) -> &WorkerRoster {
        &self.roster
    }

    pub fn mode(&self) -> ViewMode {
        self.session.mode
    }

    /// Apply one poll result. `None` (snapshot unavailable) changes nothing.
    pub fn sync(&mut self, snapshot: Option<&StatusSnapshot>) {
        match snapshot {
            Some(snapshot) => self.apply(snapshot),
            None => tracing::trace!("No snapshot this tick, keeping last state"),
        }
    }

    /// Apply a snapshot to the view-model and components.
    pub fn apply(&mut self, snapshot: &StatusSnapshot) {
        self.view.last_sync = Some(chrono::Utc::now());
        self.view.buffer_count = label(snapshot.buffer_count);

        self.roster
            .render(&snapshot.workers, &self.session.active_worker_id);

        let Some(stats) = snapshot.workers.get(&self.session.active_worker_id) else {
            tracing::trace!(
                worker_id = %self.session.active_worker_id,
                "Active worker not in snapshot"
            );
            return;
        };

        self.apply_history(stats);
        self.apply_labels(stats);

        if stats.is_searching() && self.session.is_live() {
            self.push_telemetry(stats);
        }
    }

    fn apply_history(&mut self, stats: &WorkerStats) {
        let Some(history) = &stats.history_fens else {
            return;
        };
        self.session.game_history = history.clone();

        match self.session.mode {
            ViewMode::Live => {
                self.session.history_index = self.session.last_index();
                let position = stats
                    .fen
                    .clone()
                    .or_else(|| self.session.game_history.last().cloned());
                if let Some(position) = position {
                    self.set_position(&position);
                }
                self.refresh_move_label();
            }
            ViewMode::History => {
                // A new game may have started underneath the pinned index.
                self.session.history_index = match (self.session.history_index, self.session.last_index()) {
                    (Some(index), Some(last)) => Some(index.min(last)),
                    _ => None,
                };
            }
        }
    }

    fn apply_labels(&mut self, stats: &WorkerStats) {
        self.view.active_worker_id = self.session.active_worker_id.clone();
        self.view.stats = StatLabels {
            turn: label(stats.turn.as_deref()),
            moves: label(stats.move_count),
            depth: label(stats.last_depth),
            games: label(stats.total_games),
            samples: label(stats.total_samples),
            nps: label(stats.nps),
            win_rate: label(stats.value.map(|v| format_win_rate(win_probability(v)))),
        };
    }

    fn push_telemetry(&mut self, stats: &WorkerStats) {
        if let Some(value) = stats.value {
            self.charts.eval.push(win_probability(value));
        }
        if let Some(depth) = stats.last_depth {
            self.charts.depth.push(depth as f64);
        }
        if let Some(entropy) = stats.entropy {
            self.charts.entropy.push(entropy);
        }
        if let Some(latency) = stats.inference_ms {
            self.charts.latency.push(latency);
        }
        if let (Some(sims), Some(unique)) = (stats.simulations, stats.unique_nodes) {
            self.charts.push_waste(sims, unique);
        }
        self.charts.phase.update(stats.phase_times.as_ref());
        if stats.heatmap.is_some() {
            self.heatmap.render(stats.heatmap.as_ref());
        }
    }

    /// Switch to another worker. Returns false if it was already active.
    pub fn select_worker(&mut self, id: &str) -> bool {
        if id == self.session.active_worker_id {
            return false;
        }

        tracing::info!(
            from = %self.session.active_worker_id,
            to = %id,
            "Switching active worker"
        );

        self.session = SessionState::new(id);
        self.charts.reset();
        self.heatmap.clear();
        self.roster.mark_active(id);

        self.view.active_worker_id = id.to_string();
        self.view.stats = StatLabels::default();
        self.view.move_label = None;
        self.view.live = true;
        true
    }

    /// Select the worker shown on the roster card at `index`.
    pub fn select_card(&mut self, index: usize) -> bool {
        match self.roster.select(index).map(str::to_string) {
            Some(id) => self.select_worker(&id),
            None => false,
        }
    }

    /// Step one move back and pin the board. No-op at the first move.
    pub fn previous_move(&mut self) -> bool {
        match self.session.history_index {
            Some(index) if index > 0 => {
                self.session.history_index = Some(index - 1);
                self.session.mode = ViewMode::History;
                self.refresh_history_view();
                true
            }
            _ => false,
        }
    }

    /// Step one move forward; reaching the newest move resumes live mode.
    pub fn next_move(&mut self) -> bool {
        let Some(last) = self.session.last_index() else {
            return false;
        };
        match self.session.history_index {
            Some(index) if index < last => {
                let next = index + 1;
                self.session.history_index = Some(next);
                if next == last {
                    self.session.mode = ViewMode::Live;
                }
                self.refresh_history_view();
                true
            }
            _ => false,
        }
    }

    /// Resume live mode at the newest move.
    pub fn go_live(&mut self) {
        self.session.mode = ViewMode::Live;
        self.session.history_index = self.session.last_index();
        self.refresh_history_view();
    }

    fn refresh_history_view(&mut self) {
        if let Some(index) = self.session.history_index {
            if let Some(position) = self.session.game_history.get(index).cloned() {
                self.set_position(&position);
                self.refresh_move_label();
            }
        }
        self.view.live = self.session.is_live();
    }

    fn refresh_move_label(&mut self) {
        self.view.move_label = self
            .session
            .history_index
            .map(|index| format!("MOVE: {}", index));
        self.view.live = self.session.is_live();
    }

    fn set_position(&mut self, position: &str) {
        if position == self.view.position {
            return;
        }
        match Board::from_fen(position) {
            Ok(board) => {
                self.view.board = board;
                self.view.position = position.to_string();
            }
            Err(error) => {
                tracing::warn!(
                    position = %position,
                    error = %error,
                    "Unparseable position, keeping previous board"
                );
            }
        }
    }
}

impl Default for DashboardController {
    fn default() -> Self {
        Self::new(&MonitorConfig::default())
    }
}

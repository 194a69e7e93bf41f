//! Dashboard model: the sync loop's state and its chart components
//!
//! - [`DashboardController`] owns the session state and applies snapshots
//! - [`RollingSeries`] backs the eval, depth, entropy, latency and waste charts
//! - [`Heatmap`], [`WorkerRoster`] and [`PhaseGauge`] hold the remaining panels
//!
//! Renderers only read from here; see [`crate::tui`].

pub mod board;
pub mod charts;
pub mod controller;
pub mod heatmap;
pub mod phase;
pub mod roster;
pub mod series;
pub mod view;

pub use board::{Board, BoardError, Piece, PieceTheme};
pub use charts::{waste_percent, ChartSet};
pub use controller::{
    format_win_rate, win_probability, DashboardController, SessionState, ViewMode,
};
pub use heatmap::Heatmap;
pub use phase::PhaseGauge;
pub use roster::{WorkerCard, WorkerRoster};
pub use series::{RollingSeries, RollingWindow};
pub use view::ViewModel;

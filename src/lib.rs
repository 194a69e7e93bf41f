//! spmon - terminal monitor for self-play training workers
//!
//! Polls a training process's status endpoint once per second and renders
//! the active worker's board, search telemetry and the worker roster.

pub mod cli;
pub mod config;
pub mod dashboard;
pub mod logging;
pub mod poller;
pub mod status;
pub mod tui;

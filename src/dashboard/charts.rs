//! Chart buffers fed by the sync loop

use super::phase::PhaseGauge;
use super::series::RollingSeries;
use crate::config::ChartsConfig;

/// Axis ceiling for the depth bars
pub const DEPTH_AXIS_MAX: f64 = 30.0;

/// Suggested axis ceiling for policy entropy (bits)
pub const ENTROPY_AXIS_MAX: f64 = 4.0;

/// Percentage of simulations that revisited already-expanded nodes.
///
/// Undefined when no simulations ran; returns `None` in that case.
pub fn waste_percent(simulations: u64, unique_nodes: u64) -> Option<f64> {
    if simulations == 0 {
        return None;
    }
    let sims = simulations as f64;
    Some((sims - unique_nodes as f64) / sims * 100.0)
}

/// Every chart the dashboard draws.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSet {
    /// Win probability, 0-100
    pub eval: RollingSeries,
    pub depth: RollingSeries,
    pub entropy: RollingSeries,
    /// Inference latency in milliseconds
    pub latency: RollingSeries,
    /// Search waste, 0-100
    pub waste: RollingSeries,
    pub phase: PhaseGauge,
}

impl ChartSet {
    pub fn new(config: &ChartsConfig) -> Self {
        Self {
            eval: RollingSeries::new(config.eval_window),
            depth: RollingSeries::new(config.depth_window),
            entropy: RollingSeries::new(config.entropy_window),
            latency: RollingSeries::new(config.latency_window),
            waste: RollingSeries::new(config.waste_window),
            phase: PhaseGauge::default(),
        }
    }

    /// Push a waste sample derived from search counters; skipped when undefined
    pub fn push_waste(&mut self, simulations: u64, unique_nodes: u64) {
        if let Some(waste) = waste_percent(simulations, unique_nodes) {
            self.waste.push(waste);
        }
    }

    /// Empty every series and the phase gauge
    pub fn reset(&mut self) {
        self.eval.reset();
        self.depth.reset();
        self.entropy.reset();
        self.latency.reset();
        self.waste.reset();
        self.phase.reset();
    }

    pub fn is_empty(&self) -> bool {
        self.eval.is_empty()
            && self.depth.is_empty()
            && self.entropy.is_empty()
            && self.latency.is_empty()
            && self.waste.is_empty()
    }
}

impl Default for ChartSet {
    fn default() -> Self {
        Self::new(&ChartsConfig::default())
    }
}

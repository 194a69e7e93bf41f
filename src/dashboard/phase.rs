//! Opening / midgame / endgame time split

use crate::status::PhaseTimes;

/// Phase labels in gauge order
pub const PHASE_LABELS: [&str; 3] = ["Opening (1-20)", "Midgame (21-40)", "Endgame (41+)"];

/// Three-bucket proportion gauge. Holds the last reported split verbatim.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PhaseGauge {
    times: Option<PhaseTimes>,
}

impl PhaseGauge {
    /// Replace the split; `None` leaves the gauge unchanged.
    pub fn update(&mut self, times: Option<&PhaseTimes>) {
        if let Some(times) = times {
            self.times = Some(*times);
        }
    }

    pub fn reset(&mut self) {
        self.times = None;
    }

    /// Raw values in gauge order
    pub fn values(&self) -> [f64; 3] {
        match self.times {
            Some(t) => [t.opening, t.midgame, t.endgame],
            None => [0.0; 3],
        }
    }

    /// Each phase as a fraction of the total, or `None` before any time accrued
    pub fn shares(&self) -> Option<[f64; 3]> {
        let values = self.values().map(|v| if v.is_finite() { v.max(0.0) } else { 0.0 });
        let total: f64 = values.iter().sum();
        if total <= 0.0 {
            return None;
        }
        Some(values.map(|v| v / total))
    }
}

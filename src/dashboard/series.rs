//! Rolling window buffer backing every time-series chart
//!
//! Keeps the most recent N samples; pushing past capacity evicts the oldest.

use std::collections::VecDeque;

/// Bounded FIFO buffer of the most recent `capacity` values.
#[derive(Debug, Clone, PartialEq)]
pub struct RollingWindow<T> {
    values: VecDeque<T>,
    capacity: usize,
    revision: u64,
}

/// Window of chart samples.
pub type RollingSeries = RollingWindow<f64>;

impl<T: Clone> RollingWindow<T> {
    /// Creates an empty window holding at most `capacity` values (minimum 1)
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            values: VecDeque::with_capacity(capacity),
            capacity,
            revision: 0,
        }
    }

    /// Appends a value, evicting the oldest first if the window is full
    pub fn push(&mut self, value: T) {
        if self.values.len() >= self.capacity {
            self.values.pop_front();
        }
        self.values.push_back(value);
        self.revision += 1;
    }

    /// Drops every value
    pub fn reset(&mut self) {
        self.values.clear();
        self.revision += 1;
    }

    /// Returns all values in push order (oldest first)
    pub fn to_vec(&self) -> Vec<T> {
        self.values.iter().cloned().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.values.iter()
    }

    pub fn latest(&self) -> Option<&T> {
        self.values.back()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Bumped on every mutation; renderers redraw when it changes.
    pub fn revision(&self) -> u64 {
        self.revision
    }
}

impl RollingWindow<f64> {
    /// Values as `(x, y)` points with x = position in the window
    pub fn points(&self) -> Vec<(f64, f64)> {
        self.values
            .iter()
            .enumerate()
            .map(|(i, v)| (i as f64, *v))
            .collect()
    }

    /// Largest value in the window, ignoring non-finite samples
    pub fn max(&self) -> Option<f64> {
        self.values
            .iter()
            .copied()
            .filter(|v| v.is_finite())
            .fold(None, |acc, v| Some(acc.map_or(v, |m: f64| m.max(v))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_new_creates_empty_window() {
        let window: RollingSeries = RollingWindow::new(60);
        assert_eq!(window.len(), 0);
        assert!(window.is_empty());
        assert_eq!(window.capacity(), 60);
        assert!(window.latest().is_none());
    }

    #[test]
    fn test_zero_capacity_is_clamped() {
        let mut window: RollingSeries = RollingWindow::new(0);
        window.push(1.0);
        window.push(2.0);
        assert_eq!(window.to_vec(), vec![2.0]);
    }

    #[test]
    fn test_eviction_fifo() {
        let mut window = RollingWindow::new(50);

        for i in 0..55 {
            window.push(i as f64);
        }

        assert_eq!(window.len(), 50);
        let values = window.to_vec();
        assert_eq!(values[0], 5.0);
        assert_eq!(values[49], 54.0);
        assert_eq!(window.latest(), Some(&54.0));
    }

    #[test]
    fn test_reset_clears_and_bumps_revision() {
        let mut window = RollingWindow::new(60);
        window.push(10.0);
        window.push(20.0);
        let before = window.revision();

        window.reset();

        assert!(window.is_empty());
        assert!(window.revision() > before);
    }

    #[test]
    fn test_points_and_max() {
        let mut window = RollingWindow::new(3);
        window.push(4.0);
        window.push(f64::NAN);
        window.push(7.5);
        window.push(1.0);

        let points = window.points();
        assert_eq!(points.len(), 3);
        assert_eq!(points[0].0, 0.0);
        assert_eq!(points[2], (2.0, 1.0));
        assert_eq!(window.max(), Some(7.5));
    }

    proptest! {
        #[test]
        fn prop_window_keeps_most_recent_values(
            capacity in 1usize..80,
            values in proptest::collection::vec(-1000.0f64..1000.0, 0..200),
        ) {
            let mut window = RollingWindow::new(capacity);
            for (i, v) in values.iter().enumerate() {
                window.push(*v);
                prop_assert!(window.len() <= capacity);
                prop_assert_eq!(window.len(), (i + 1).min(capacity));
            }

            let keep = values.len().min(capacity);
            let expected = values[values.len() - keep..].to_vec();
            prop_assert_eq!(window.to_vec(), expected);
        }

        #[test]
        fn prop_every_push_bumps_revision(n in 0u64..150) {
            let mut window: RollingSeries = RollingWindow::new(50);
            for i in 0..n {
                window.push(i as f64);
            }
            prop_assert_eq!(window.revision(), n);
        }
    }
}

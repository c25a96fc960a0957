//! Fixed-capacity FIFO window with recomputed statistics.

use std::collections::VecDeque;

use anomaly_spi::{AnomalyError, Result, StatisticsEngine};

/// Sliding window over the most recent `capacity` values.
///
/// Mean and population standard deviation are recomputed from the full
/// contents after every update, so the per-update cost is O(capacity).
#[derive(Debug, Clone)]
pub struct SlidingWindow {
    values: VecDeque<f64>,
    capacity: usize,
    mean: f64,
    std_dev: f64,
}

impl SlidingWindow {
    /// Create an empty window holding at most `capacity` values.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(AnomalyError::invalid("window_size", "must be at least 1"));
        }

        Ok(Self {
            values: VecDeque::with_capacity(capacity),
            capacity,
            mean: 0.0,
            std_dev: 0.0,
        })
    }

    /// Append a value and return the evicted one, if the window was full.
    pub fn push(&mut self, value: f64) -> Option<f64> {
        let evicted = if self.values.len() == self.capacity {
            self.values.pop_front()
        } else {
            None
        };
        self.values.push_back(value);
        self.recompute();
        evicted
    }

    /// Contents in insertion order, oldest first.
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().copied()
    }

    pub fn to_vec(&self) -> Vec<f64> {
        self.values.iter().copied().collect()
    }

    fn recompute(&mut self) {
        let n = self.values.len() as f64;
        let Some(&pivot) = self.values.front() else {
            self.mean = 0.0;
            self.std_dev = 0.0;
            return;
        };

        // Shifted by the oldest value so a constant window has exactly zero spread.
        let shift = self.values.iter().map(|x| x - pivot).sum::<f64>() / n;
        self.mean = pivot + shift;

        let variance = self
            .values
            .iter()
            .map(|x| (x - self.mean).powi(2))
            .sum::<f64>()
            / n;
        self.std_dev = variance.sqrt();
    }
}

impl StatisticsEngine for SlidingWindow {
    fn update(&mut self, value: f64) {
        self.push(value);
    }

    fn mean(&self) -> f64 {
        self.mean
    }

    fn std_dev(&self) -> f64 {
        self.std_dev
    }

    fn len(&self) -> usize {
        self.values.len()
    }

    fn capacity(&self) -> usize {
        self.capacity
    }
}

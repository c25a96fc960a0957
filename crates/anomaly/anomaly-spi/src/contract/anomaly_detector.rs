//! Streaming detector trait definitions.

use crate::error::{AnomalyError, Result};
use crate::model::{DetectorState, Observation, WindowStats};

/// Bounded FIFO window with derived mean and population standard deviation.
pub trait StatisticsEngine {
    /// Append a value, evicting the oldest one when the window is full, and
    /// recompute the statistics.
    fn update(&mut self, value: f64);

    /// Mean of the current contents, `0.0` when empty.
    fn mean(&self) -> f64;

    /// Population standard deviation of the current contents, `0.0` when empty.
    fn std_dev(&self) -> f64;

    /// Number of values currently held.
    fn len(&self) -> usize;

    /// Fixed capacity of the window.
    fn capacity(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn is_full(&self) -> bool {
        self.len() >= self.capacity()
    }

    /// Snapshot of the current statistics.
    fn stats(&self) -> WindowStats {
        WindowStats {
            len: self.len(),
            mean: self.mean(),
            std_dev: self.std_dev(),
        }
    }
}

/// Streaming anomaly detector.
///
/// Implementations judge each point against statistics of the points before
/// it. Callers must classify a value before updating with it; [`observe`]
/// does both in that order.
///
/// [`observe`]: StreamingDetector::observe
pub trait StreamingDetector: Send + Sync {
    /// Classify a candidate against the current window. Does not mutate.
    fn is_anomaly(&self, value: f64) -> bool;

    /// Absolute Z-score of a candidate, or `None` while warming up or when the
    /// window has zero variance.
    fn z_score(&self, value: f64) -> Option<f64>;

    /// Admit a value into the window.
    fn update(&mut self, value: f64);

    /// Current lifecycle state.
    fn state(&self) -> DetectorState;

    /// Number of values admitted so far.
    fn observed(&self) -> usize;

    /// Capacity of the window.
    fn window_size(&self) -> usize;

    /// Z-score cutoff; a point is anomalous only strictly above it.
    fn threshold(&self) -> f64;

    /// Snapshot of the window statistics.
    fn stats(&self) -> WindowStats;

    /// A new detector with the same parameters and an empty window.
    ///
    /// An instance never leaves [`DetectorState::Active`] once it gets there;
    /// starting over means replacing it with the renewed one.
    fn renewed(&self) -> Result<Self>
    where
        Self: Sized;

    /// Classify `value` against the prior window, then admit it.
    ///
    /// Non-finite values are rejected and leave the window untouched.
    fn observe(&mut self, value: f64) -> Result<Observation> {
        if !value.is_finite() {
            return Err(AnomalyError::NonFiniteValue { value });
        }

        let position = self.observed();
        let is_anomaly = self.is_anomaly(value);
        let z_score = self.z_score(value);
        self.update(value);

        Ok(Observation {
            position,
            value,
            is_anomaly,
            z_score,
        })
    }
}

/// Real-time monitoring trait.
pub trait MonitoringStream: Send {
    /// Push a new value, classify it, and forward the result downstream.
    fn push(&mut self, value: f64) -> Result<Observation>;

    /// Statistics of the underlying window.
    fn window_stats(&self) -> WindowStats;

    /// Start over on a fresh detector with the same parameters.
    fn reset(&mut self) -> Result<()>;
}

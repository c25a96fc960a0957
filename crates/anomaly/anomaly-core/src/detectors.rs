//! Sliding-window Z-score detector.

use anomaly_api::DetectorConfig;
use anomaly_spi::{DetectorState, Result, StatisticsEngine, StreamingDetector, WindowStats};
use tracing::debug;

use crate::window::SlidingWindow;

// ============================================================================
// Z-Score Detector
// ============================================================================

/// Streaming Z-score anomaly detector.
///
/// Keeps the last `window_size` values and flags a candidate when its
/// distance from the window mean exceeds `threshold` population standard
/// deviations. Candidates are judged against the window as it stood before
/// they were admitted.
///
/// Non-finite input: `is_anomaly` never panics and never returns `true` for
/// NaN. Admitting NaN or an infinity through [`update`](Self::update) poisons
/// the statistics until it is evicted; [`observe`](StreamingDetector::observe)
/// rejects such values instead.
#[derive(Debug, Clone)]
pub struct ZScoreDetector {
    window: SlidingWindow,
    threshold: f64,
    observed: usize,
}

impl ZScoreDetector {
    /// Create a detector with the given window size and threshold.
    pub fn new(window_size: usize, threshold: f64) -> Result<Self> {
        Self::from_config(DetectorConfig::new(window_size, threshold))
    }

    /// Create from configuration.
    pub fn from_config(config: DetectorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            window: SlidingWindow::new(config.window_size)?,
            threshold: config.threshold,
            observed: 0,
        })
    }

    pub fn config(&self) -> DetectorConfig {
        DetectorConfig::new(self.window_size(), self.threshold)
    }

    /// Read-only view of the window.
    pub fn window(&self) -> &SlidingWindow {
        &self.window
    }

    pub fn mean(&self) -> f64 {
        self.window.mean()
    }

    pub fn std_dev(&self) -> f64 {
        self.window.std_dev()
    }
}

impl Default for ZScoreDetector {
    fn default() -> Self {
        Self::from_config(DetectorConfig::default()).expect("default configuration is valid")
    }
}

impl StreamingDetector for ZScoreDetector {
    fn is_anomaly(&self, value: f64) -> bool {
        match self.z_score(value) {
            Some(z) => z > self.threshold,
            None => false,
        }
    }

    fn z_score(&self, value: f64) -> Option<f64> {
        if !self.window.is_full() {
            return None;
        }
        let std_dev = self.window.std_dev();
        if std_dev == 0.0 {
            return None;
        }
        Some((value - self.window.mean()).abs() / std_dev)
    }

    fn update(&mut self, value: f64) {
        let was_full = self.window.is_full();
        self.window.update(value);
        self.observed += 1;

        if !was_full && self.window.is_full() {
            debug!(
                window_size = self.window.capacity(),
                mean = self.window.mean(),
                std_dev = self.window.std_dev(),
                "window full, detector active"
            );
        }
    }

    fn state(&self) -> DetectorState {
        if self.window.is_full() {
            DetectorState::Active
        } else {
            DetectorState::WarmingUp
        }
    }

    fn observed(&self) -> usize {
        self.observed
    }

    fn window_size(&self) -> usize {
        self.window.capacity()
    }

    fn threshold(&self) -> f64 {
        self.threshold
    }

    fn stats(&self) -> WindowStats {
        self.window.stats()
    }

    fn renewed(&self) -> Result<Self> {
        Self::from_config(self.config())
    }
}

//! Per-point detection types.

use serde::{Deserialize, Serialize};

/// Lifecycle of a streaming detector.
///
/// A detector starts in `WarmingUp` and moves to `Active` exactly once, on the
/// update that fills its window. It never goes back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DetectorState {
    /// Fewer than `window_size` values seen; every point classifies as normal.
    WarmingUp,
    /// Window is full; the Z-score rule applies.
    Active,
}

/// Snapshot of the window statistics.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct WindowStats {
    /// Number of values currently in the window.
    pub len: usize,
    pub mean: f64,
    /// Population standard deviation.
    pub std_dev: f64,
}

/// Outcome of observing one stream point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Zero-based position in the stream.
    pub position: usize,
    pub value: f64,
    pub is_anomaly: bool,
    /// Absolute Z-score against the prior window, when one could be computed.
    pub z_score: Option<f64>,
}

impl Observation {
    /// The anomaly record for this point, if it was flagged.
    pub fn anomaly_record(&self) -> Option<AnomalyRecord> {
        self.is_anomaly.then(|| AnomalyRecord {
            position: self.position,
            value: self.value,
        })
    }
}

/// A flagged point: where it occurred and its value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnomalyRecord {
    pub position: usize,
    pub value: f64,
}

//! Results of a detection run.

use serde::{Deserialize, Serialize};

use super::AnomalyRecord;

/// Summary of a detection run over a stream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectionSummary {
    /// Number of points pulled from the source.
    pub total_points: usize,
    /// Flagged points, in stream order.
    pub anomalies: Vec<AnomalyRecord>,
    /// Window size of the detector used.
    pub window_size: usize,
    /// Z-score threshold of the detector used.
    pub threshold: f64,
}

impl DetectionSummary {
    /// Create an empty summary for a detector configuration.
    pub fn new(window_size: usize, threshold: f64) -> Self {
        Self {
            total_points: 0,
            anomalies: Vec::new(),
            window_size,
            threshold,
        }
    }

    /// Count of detected anomalies.
    pub fn anomaly_count(&self) -> usize {
        self.anomalies.len()
    }

    /// Fraction of points flagged, `0.0` for an empty run.
    pub fn anomaly_rate(&self) -> f64 {
        if self.total_points == 0 {
            return 0.0;
        }
        self.anomalies.len() as f64 / self.total_points as f64
    }

    /// Stream positions of detected anomalies.
    pub fn positions(&self) -> Vec<usize> {
        self.anomalies.iter().map(|a| a.position).collect()
    }
}

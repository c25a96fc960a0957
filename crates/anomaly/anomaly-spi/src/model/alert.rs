//! Alert types for anomaly detection.

use serde::{Deserialize, Serialize};

/// Alert severity levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlertSeverity {
    Warning,
    Critical,
}

/// An alert raised for a flagged stream point.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alert {
    pub timestamp: u64,
    /// Zero-based position of the point in the stream.
    pub position: usize,
    pub value: f64,
    /// Absolute Z-score of the point against the window it was judged by.
    pub score: f64,
    pub severity: AlertSeverity,
    pub message: String,
}

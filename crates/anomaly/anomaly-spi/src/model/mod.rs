//! Data models for anomaly detection.
//!
//! This module contains data structures used throughout the anomaly detection system.

mod alert;
mod detection_summary;
mod observation;

pub use alert::{Alert, AlertSeverity};
pub use detection_summary::DetectionSummary;
pub use observation::{AnomalyRecord, DetectorState, Observation, WindowStats};

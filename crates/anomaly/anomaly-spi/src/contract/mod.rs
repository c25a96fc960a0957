//! Contract definitions for anomaly detection.
//!
//! This module contains trait definitions that providers must implement.

mod anomaly_detector;
mod anomaly_sink;

pub use anomaly_detector::{MonitoringStream, StatisticsEngine, StreamingDetector};
pub use anomaly_sink::AnomalySink;

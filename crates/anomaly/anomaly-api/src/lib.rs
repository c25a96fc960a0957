//! Anomaly Detection API
//!
//! Configuration types and builders for streaming anomaly detection.

mod builder;
mod config;

// Re-export SPI types
pub use anomaly_spi::{
    Alert, AlertSeverity, AnomalyError, AnomalyRecord, DetectionSummary, DetectorState,
    Observation, Result, WindowStats,
};

pub use builder::DetectorConfigBuilder;
pub use config::{DetectorConfig, SimulationConfig, SimulatorConfig};

//! Anomaly detection error types.

use thiserror::Error;

/// Anomaly detection errors.
///
/// Only configuration mistakes and rejected input surface as errors. Warm-up
/// and zero-variance windows are ordinary `false` classifications.
#[derive(Debug, Error)]
pub enum AnomalyError {
    #[error("Invalid parameter: {name} - {reason}")]
    InvalidParameter { name: String, reason: String },

    #[error("Non-finite value rejected: {value}")]
    NonFiniteValue { value: f64 },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl AnomalyError {
    /// Shorthand for an [`AnomalyError::InvalidParameter`].
    pub fn invalid(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

/// Result type for anomaly detection operations.
pub type Result<T> = std::result::Result<T, AnomalyError>;

//! Detector configuration builder.

use anomaly_spi::Result;

use crate::DetectorConfig;

/// Builder for [`DetectorConfig`].
///
/// Unset fields fall back to the defaults; `build` validates the result.
#[derive(Debug, Default, Clone)]
pub struct DetectorConfigBuilder {
    window_size: Option<usize>,
    threshold: Option<f64>,
}

impl DetectorConfigBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the window size.
    pub fn window_size(mut self, window_size: usize) -> Self {
        self.window_size = Some(window_size);
        self
    }

    /// Set the Z-score threshold.
    pub fn threshold(mut self, threshold: f64) -> Self {
        self.threshold = Some(threshold);
        self
    }

    /// Build and validate the configuration.
    pub fn build(self) -> Result<DetectorConfig> {
        let defaults = DetectorConfig::default();
        let config = DetectorConfig {
            window_size: self.window_size.unwrap_or(defaults.window_size),
            threshold: self.threshold.unwrap_or(defaults.threshold),
        };
        config.validate()?;
        Ok(config)
    }
}

//! Detector, simulator, and run configuration types.

use std::fs;
use std::path::Path;

use anomaly_spi::{AnomalyError, Result};
use serde::{Deserialize, Serialize};

// ============================================================================
// Detector Configuration
// ============================================================================

/// Sliding-window Z-score detector configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectorConfig {
    /// Number of most recent values kept in the window (default: 100).
    pub window_size: usize,
    /// Z-score above which a point is anomalous (default: 3.0).
    pub threshold: f64,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            window_size: 100,
            threshold: 3.0,
        }
    }
}

impl DetectorConfig {
    pub fn new(window_size: usize, threshold: f64) -> Self {
        Self {
            window_size,
            threshold,
        }
    }

    /// Check that the window is non-empty and the threshold positive and finite.
    pub fn validate(&self) -> Result<()> {
        if self.window_size == 0 {
            return Err(AnomalyError::invalid("window_size", "must be at least 1"));
        }
        if !self.threshold.is_finite() {
            return Err(AnomalyError::invalid("threshold", "must be finite"));
        }
        if self.threshold <= 0.0 {
            return Err(AnomalyError::invalid("threshold", "must be positive"));
        }
        Ok(())
    }
}

// ============================================================================
// Simulator Configuration
// ============================================================================

/// Synthetic stream configuration.
///
/// Each value is `base + seasonal + noise`, with an occasional injected
/// outlier of random sign and magnitude.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulatorConfig {
    /// Amplitude of the base sine wave (default: 10.0).
    pub base_amplitude: f64,
    /// Angular step of the base sine wave per tick (default: 0.1).
    pub base_frequency: f64,
    /// Amplitude of the slow seasonal wave (default: 5.0).
    pub seasonal_amplitude: f64,
    /// Angular step of the seasonal wave per tick (default: 0.01).
    pub seasonal_frequency: f64,
    /// Standard deviation of the Gaussian noise (default: 1.0).
    pub noise_std: f64,
    /// Probability of injecting an outlier at each tick (default: 0.01).
    pub anomaly_probability: f64,
    /// Lower bound of the injected outlier magnitude (default: 10.0).
    pub anomaly_magnitude_min: f64,
    /// Upper bound of the injected outlier magnitude (default: 20.0).
    pub anomaly_magnitude_max: f64,
    /// Seed for reproducible streams; entropy-seeded when `None`.
    pub seed: Option<u64>,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            base_amplitude: 10.0,
            base_frequency: 0.1,
            seasonal_amplitude: 5.0,
            seasonal_frequency: 0.01,
            noise_std: 1.0,
            anomaly_probability: 0.01,
            anomaly_magnitude_min: 10.0,
            anomaly_magnitude_max: 20.0,
            seed: None,
        }
    }
}

impl SimulatorConfig {
    /// Default configuration with a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    /// A noiseless, outlier-free signal. Useful for deterministic tests.
    pub fn clean() -> Self {
        Self {
            noise_std: 0.0,
            anomaly_probability: 0.0,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        let finite = [
            ("base_amplitude", self.base_amplitude),
            ("base_frequency", self.base_frequency),
            ("seasonal_amplitude", self.seasonal_amplitude),
            ("seasonal_frequency", self.seasonal_frequency),
            ("noise_std", self.noise_std),
            ("anomaly_magnitude_min", self.anomaly_magnitude_min),
            ("anomaly_magnitude_max", self.anomaly_magnitude_max),
        ];
        for (name, value) in finite {
            if !value.is_finite() {
                return Err(AnomalyError::invalid(name, "must be finite"));
            }
        }

        if self.noise_std < 0.0 {
            return Err(AnomalyError::invalid("noise_std", "must be non-negative"));
        }
        if !(0.0..=1.0).contains(&self.anomaly_probability) {
            return Err(AnomalyError::invalid(
                "anomaly_probability",
                "must be in range [0, 1]",
            ));
        }
        if self.anomaly_magnitude_min < 0.0 {
            return Err(AnomalyError::invalid(
                "anomaly_magnitude_min",
                "must be non-negative",
            ));
        }
        if self.anomaly_magnitude_min > self.anomaly_magnitude_max {
            return Err(AnomalyError::invalid(
                "anomaly_magnitude_max",
                "must not be less than anomaly_magnitude_min",
            ));
        }
        Ok(())
    }
}

// ============================================================================
// Simulation Configuration
// ============================================================================

/// Batch simulation configuration: how many points, which detector, which stream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Number of points to pull from the stream (default: 1000).
    pub num_points: usize,
    pub detector: DetectorConfig,
    pub simulator: SimulatorConfig,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            num_points: 1000,
            detector: DetectorConfig::default(),
            simulator: SimulatorConfig::default(),
        }
    }
}

impl SimulationConfig {
    pub fn new(num_points: usize) -> Self {
        Self {
            num_points,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.detector.validate()?;
        self.simulator.validate()
    }

    /// Parse a JSON document. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| AnomalyError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON configuration file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .map_err(|e| AnomalyError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_json_str(&json)
    }
}

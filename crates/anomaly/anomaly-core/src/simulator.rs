//! Synthetic data stream with seasonal structure and injected outliers.

use anomaly_api::SimulatorConfig;
use anomaly_spi::{AnomalyError, Result};
use rand::prelude::*;
use rand::rngs::StdRng;
use rand_distr::{Normal, Uniform};

/// One generated point with its ground truth.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// Tick at which the value was generated, starting at 0.
    pub tick: u64,
    pub value: f64,
    /// Whether an outlier offset was added to this value.
    pub injected: bool,
}

/// Infinite stream of `base + seasonal + noise` values.
///
/// Iterating never ends; bound it with [`Iterator::take`] or a monitor limit.
/// The stream cannot be restarted, build a new simulator with the same seed to
/// replay it.
#[derive(Debug, Clone)]
pub struct DataStreamSimulator {
    config: SimulatorConfig,
    tick: u64,
    rng: StdRng,
    noise: Normal<f64>,
    magnitude: Uniform<f64>,
}

impl DataStreamSimulator {
    pub fn new(config: SimulatorConfig) -> Result<Self> {
        config.validate()?;

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let noise = Normal::new(0.0, config.noise_std)
            .map_err(|e| AnomalyError::invalid("noise_std", e.to_string()))?;
        let magnitude =
            Uniform::new_inclusive(config.anomaly_magnitude_min, config.anomaly_magnitude_max);

        Ok(Self {
            config,
            tick: 0,
            rng,
            noise,
            magnitude,
        })
    }

    /// Deterministic simulator with default shape.
    pub fn seeded(seed: u64) -> Result<Self> {
        Self::new(SimulatorConfig::seeded(seed))
    }

    pub fn config(&self) -> &SimulatorConfig {
        &self.config
    }

    /// Tick of the next value to be generated.
    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Noise-free signal at tick `t`.
    pub fn signal_at(&self, t: u64) -> f64 {
        let t = t as f64;
        let base = self.config.base_amplitude * (self.config.base_frequency * t).sin();
        let seasonal = self.config.seasonal_amplitude * (self.config.seasonal_frequency * t).sin();
        base + seasonal
    }

    /// Generate the next point.
    pub fn next_sample(&mut self) -> Sample {
        let tick = self.tick;
        let mut value = self.signal_at(tick) + self.noise.sample(&mut self.rng);

        let injected = self.rng.gen_bool(self.config.anomaly_probability);
        if injected {
            let sign = if self.rng.gen_bool(0.5) { 1.0 } else { -1.0 };
            value += sign * self.magnitude.sample(&mut self.rng);
        }

        self.tick += 1;
        Sample {
            tick,
            value,
            injected,
        }
    }
}

impl Iterator for DataStreamSimulator {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        Some(self.next_sample().value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_invalid_config() {
        let config = SimulatorConfig {
            anomaly_probability: -0.5,
            ..SimulatorConfig::default()
        };
        assert!(DataStreamSimulator::new(config).is_err());
    }

    #[test]
    fn test_seeded_streams_are_reproducible() {
        let a: Vec<f64> = DataStreamSimulator::seeded(42).unwrap().take(200).collect();
        let b: Vec<f64> = DataStreamSimulator::seeded(42).unwrap().take(200).collect();
        assert_eq!(a, b);

        let c: Vec<f64> = DataStreamSimulator::seeded(43).unwrap().take(200).collect();
        assert_ne!(a, c);
    }

    #[test]
    fn test_clean_signal_matches_formula() {
        let mut sim = DataStreamSimulator::new(SimulatorConfig::clean()).unwrap();
        for t in 0..50u64 {
            let sample = sim.next_sample();
            let x = t as f64;
            let expected = 10.0 * (0.1 * x).sin() + 5.0 * (0.01 * x).sin();
            assert_eq!(sample.tick, t);
            assert!(!sample.injected);
            assert!((sample.value - expected).abs() < 1e-12);
        }
        assert_eq!(sim.tick(), 50);
    }

    #[test]
    fn test_tick_advances() {
        let mut sim = DataStreamSimulator::seeded(1).unwrap();
        assert_eq!(sim.next_sample().tick, 0);
        assert_eq!(sim.next_sample().tick, 1);
        assert_eq!(sim.next().map(|_| sim.tick()), Some(3));
    }

    #[test]
    fn test_always_injects_with_probability_one() {
        let config = SimulatorConfig {
            noise_std: 0.0,
            anomaly_probability: 1.0,
            seed: Some(9),
            ..SimulatorConfig::default()
        };
        let mut sim = DataStreamSimulator::new(config).unwrap();
        for _ in 0..100 {
            let tick = sim.tick();
            let clean = sim.signal_at(tick);
            let sample = sim.next_sample();
            assert!(sample.injected);
            let offset = (sample.value - clean).abs();
            assert!((10.0 - 1e-9..=20.0 + 1e-9).contains(&offset), "offset {}", offset);
        }
    }

    #[test]
    fn test_injection_rate_is_rare_by_default() {
        let mut sim = DataStreamSimulator::seeded(7).unwrap();
        let injected = (0..10_000).filter(|_| sim.next_sample().injected).count();
        assert!((50..=200).contains(&injected), "injected {}", injected);
    }

    #[test]
    fn test_values_are_finite() {
        assert!(DataStreamSimulator::seeded(3)
            .unwrap()
            .take(5_000)
            .all(f64::is_finite));
    }

    #[test]
    fn test_equal_magnitude_bounds() {
        let config = SimulatorConfig {
            noise_std: 0.0,
            anomaly_probability: 1.0,
            anomaly_magnitude_min: 15.0,
            anomaly_magnitude_max: 15.0,
            seed: Some(2),
            ..SimulatorConfig::default()
        };
        let mut sim = DataStreamSimulator::new(config).unwrap();
        let clean = sim.signal_at(0);
        let sample = sim.next_sample();
        assert!(((sample.value - clean).abs() - 15.0).abs() < 1e-9);
    }
}

//! Real-time monitoring: pull from a source, classify, feed a sink.

use anomaly_api::SimulationConfig;
use anomaly_spi::{
    AnomalySink, DetectionSummary, MonitoringStream, Observation, Result, StreamingDetector,
    WindowStats,
};
use tracing::{debug, info, warn};

use crate::detectors::ZScoreDetector;
use crate::simulator::DataStreamSimulator;

/// Real-time monitor for streaming anomaly detection.
///
/// Owns one detector and one sink. Every pushed value is classified against
/// the prior window, admitted, and then handed to the sink.
pub struct StreamMonitor<D: StreamingDetector, S: AnomalySink> {
    detector: D,
    sink: S,
}

impl<D: StreamingDetector, S: AnomalySink> StreamMonitor<D, S> {
    /// Create a new monitor with the given detector and sink.
    pub fn new(detector: D, sink: S) -> Self {
        Self { detector, sink }
    }

    /// Get the underlying detector.
    pub fn detector(&self) -> &D {
        &self.detector
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Consume the monitor, returning the detector and sink.
    pub fn into_parts(self) -> (D, S) {
        (self.detector, self.sink)
    }

    /// Classify one value, admit it, and hand the result to the sink.
    pub fn push(&mut self, value: f64) -> Result<Observation> {
        let observation = self.detector.observe(value)?;
        self.sink.record(&observation);
        Ok(observation)
    }

    /// Pull up to `limit` values from `source` and classify each in order.
    ///
    /// Stops early if the source ends. A non-finite value aborts the run with
    /// [`AnomalyError::NonFiniteValue`](anomaly_spi::AnomalyError::NonFiniteValue);
    /// everything before it has already been admitted and delivered, and the
    /// sink is finished either way.
    pub fn run<I>(&mut self, source: I, limit: usize) -> Result<DetectionSummary>
    where
        I: IntoIterator<Item = f64>,
    {
        let mut summary =
            DetectionSummary::new(self.detector.window_size(), self.detector.threshold());

        let outcome = source
            .into_iter()
            .take(limit)
            .try_for_each(|value| -> Result<()> {
                let observation = self.push(value)?;
                summary.total_points += 1;
                if let Some(record) = observation.anomaly_record() {
                    summary.anomalies.push(record);
                }
                Ok(())
            });
        self.sink.finish();

        if let Err(e) = outcome {
            warn!(points = summary.total_points, error = %e, "detection run aborted");
            return Err(e);
        }

        info!(
            points = summary.total_points,
            anomalies = summary.anomaly_count(),
            window_size = summary.window_size,
            threshold = summary.threshold,
            "detection run complete"
        );
        Ok(summary)
    }
}

impl<D: StreamingDetector, S: AnomalySink + Send> MonitoringStream for StreamMonitor<D, S> {
    fn push(&mut self, value: f64) -> Result<Observation> {
        StreamMonitor::push(self, value)
    }

    fn window_stats(&self) -> WindowStats {
        self.detector.stats()
    }

    fn reset(&mut self) -> Result<()> {
        self.detector = self.detector.renewed()?;
        debug!(window_size = self.detector.window_size(), "monitor reset");
        Ok(())
    }
}

/// Run the batch simulation: synthetic stream through a Z-score detector.
pub fn run_simulation(config: &SimulationConfig) -> Result<DetectionSummary> {
    run_simulation_with(config, ())
}

/// Run the batch simulation, delivering every point to `sink`.
pub fn run_simulation_with<S>(config: &SimulationConfig, sink: S) -> Result<DetectionSummary>
where
    S: AnomalySink + Send,
{
    config.validate()?;
    let detector = ZScoreDetector::from_config(config.detector)?;
    let source = DataStreamSimulator::new(config.simulator.clone())?;

    debug!(
        num_points = config.num_points,
        window_size = config.detector.window_size,
        threshold = config.detector.threshold,
        "starting simulation"
    );
    StreamMonitor::new(detector, sink).run(source, config.num_points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sinks::SeriesRecorder;
    use anomaly_spi::{AnomalyError, DetectorState};

    fn monitor(window: usize, threshold: f64) -> StreamMonitor<ZScoreDetector, SeriesRecorder> {
        StreamMonitor::new(
            ZScoreDetector::new(window, threshold).unwrap(),
            SeriesRecorder::new(),
        )
    }

    #[test]
    fn test_push_forwards_to_sink() {
        let mut m = monitor(3, 1.0);
        for v in [1.0, 2.0, 3.0, 10.0] {
            m.push(v).unwrap();
        }
        assert_eq!(m.sink().values(), &[1.0, 2.0, 3.0, 10.0]);
        assert_eq!(m.sink().anomalies().len(), 1);
        assert_eq!(m.sink().anomalies()[0].position, 3);
    }

    #[test]
    fn test_run_respects_limit_and_source_end() {
        let mut m = monitor(3, 1.0);
        let summary = m.run(vec![1.0, 2.0, 3.0, 10.0, 2.0], 4).unwrap();
        assert_eq!(summary.total_points, 4);
        assert_eq!(summary.positions(), vec![3]);

        let mut m = monitor(3, 1.0);
        let summary = m.run(vec![1.0, 2.0], 100).unwrap();
        assert_eq!(summary.total_points, 2);
        assert_eq!(m.detector().state(), DetectorState::WarmingUp);
    }

    #[test]
    fn test_run_aborts_on_non_finite() {
        let mut m = monitor(2, 1.0);
        let err = m.run(vec![1.0, f64::NAN, 3.0], 10).unwrap_err();
        assert!(matches!(err, AnomalyError::NonFiniteValue { .. }));
        assert_eq!(m.sink().values(), &[1.0]);
    }

    #[test]
    fn test_reset_replaces_detector() {
        let mut m = monitor(2, 1.5);
        m.push(1.0).unwrap();
        m.push(3.0).unwrap();
        assert_eq!(m.window_stats().len, 2);
        assert_eq!(m.detector().state(), DetectorState::Active);

        m.reset().unwrap();
        assert_eq!(m.window_stats().len, 0);
        assert_eq!(m.detector().state(), DetectorState::WarmingUp);
        assert_eq!(m.detector().threshold(), 1.5);
        assert_eq!(m.push(5.0).unwrap().position, 0);
        assert_eq!(m.sink().values(), &[1.0, 3.0, 5.0]);
    }

    #[derive(Default)]
    struct FinishFlag {
        seen: usize,
        finished: bool,
    }

    impl AnomalySink for FinishFlag {
        fn record(&mut self, _observation: &Observation) {
            self.seen += 1;
        }

        fn finish(&mut self) {
            self.finished = true;
        }
    }

    #[test]
    fn test_sink_finished_after_aborted_run() {
        let mut m = StreamMonitor::new(ZScoreDetector::new(2, 1.0).unwrap(), FinishFlag::default());
        assert!(m.run(vec![1.0, f64::NAN, 3.0], 10).is_err());
        assert_eq!(m.sink().seen, 1);
        assert!(m.sink().finished);
    }

    #[test]
    fn test_sink_finished_after_complete_run() {
        let mut m = StreamMonitor::new(ZScoreDetector::new(2, 1.0).unwrap(), FinishFlag::default());
        m.run(vec![1.0, 2.0], 10).unwrap();
        assert_eq!(m.sink().seen, 2);
        assert!(m.sink().finished);
    }

    #[test]
    fn test_simulation_is_reproducible() {
        let config = SimulationConfig {
            num_points: 1000,
            simulator: anomaly_api::SimulatorConfig::seeded(11),
            ..SimulationConfig::default()
        };
        let a = run_simulation(&config).unwrap();
        let b = run_simulation(&config).unwrap();
        assert_eq!(a.total_points, 1000);
        assert_eq!(a.positions(), b.positions());
        assert!(a.positions().iter().all(|&p| p >= 100));
    }

    #[test]
    fn test_simulation_rejects_bad_config() {
        let config = SimulationConfig {
            detector: anomaly_api::DetectorConfig::new(0, 3.0),
            ..SimulationConfig::default()
        };
        assert!(run_simulation(&config).is_err());
    }
}

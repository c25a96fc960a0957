//! Sinks for classified points: recording and logging.

use anomaly_spi::{AnomalyRecord, AnomalySink, Observation};
use tracing::{info, warn};

/// Records the full series and the flagged points, for plotting or export.
#[derive(Debug, Default, Clone)]
pub struct SeriesRecorder {
    values: Vec<f64>,
    anomalies: Vec<AnomalyRecord>,
    flagged: Vec<usize>,
}

impl SeriesRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every value recorded, in stream order.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Flagged points, in stream order.
    pub fn anomalies(&self) -> &[AnomalyRecord] {
        &self.anomalies
    }

    /// Indices into [`values`](Self::values) of the flagged points.
    ///
    /// These differ from the detector positions when the recorder was
    /// attached to a detector that had already seen values.
    pub fn flagged_indices(&self) -> &[usize] {
        &self.flagged
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Minimum and maximum recorded value, `None` when empty.
    pub fn bounds(&self) -> Option<(f64, f64)> {
        self.values.iter().fold(None, |acc, &v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
    }
}

impl AnomalySink for SeriesRecorder {
    fn record(&mut self, observation: &Observation) {
        if let Some(record) = observation.anomaly_record() {
            self.flagged.push(self.values.len());
            self.anomalies.push(record);
        }
        self.values.push(observation.value);
    }
}

/// Logs every flagged point through `tracing`.
#[derive(Debug, Default, Clone)]
pub struct TracingSink {
    seen: usize,
    flagged: usize,
}

impl TracingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn flagged(&self) -> usize {
        self.flagged
    }
}

impl AnomalySink for TracingSink {
    fn record(&mut self, observation: &Observation) {
        self.seen += 1;
        if observation.is_anomaly {
            self.flagged += 1;
            warn!(
                position = observation.position,
                value = observation.value,
                z_score = observation.z_score,
                "anomaly detected"
            );
        }
    }

    fn finish(&mut self) {
        info!(points = self.seen, anomalies = self.flagged, "stream finished");
    }
}

//! Alerting for flagged stream points.

use std::time::{SystemTime, UNIX_EPOCH};

use anomaly_spi::{Alert, AlertSeverity, AnomalySink, Observation};

/// Z-score beyond which an alert is critical rather than a warning.
pub const CRITICAL_SCORE: f64 = 5.0;

fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}

fn severity_for(score: f64) -> AlertSeverity {
    if score.abs() > CRITICAL_SCORE {
        AlertSeverity::Critical
    } else {
        AlertSeverity::Warning
    }
}

/// Create an alert for an observation, or `None` if it was not flagged.
pub fn create_alert(observation: &Observation) -> Option<Alert> {
    if !observation.is_anomaly {
        return None;
    }
    let score = observation.z_score.unwrap_or(0.0);
    Some(AlertBuilder::new(observation.position, observation.value, score).build())
}

/// Alert builder for custom alert creation.
#[derive(Debug, Clone)]
pub struct AlertBuilder {
    position: usize,
    value: f64,
    score: f64,
    severity: Option<AlertSeverity>,
    message: Option<String>,
}

impl AlertBuilder {
    /// Create a new alert builder.
    pub fn new(position: usize, value: f64, score: f64) -> Self {
        Self {
            position,
            value,
            score,
            severity: None,
            message: None,
        }
    }

    /// Set custom severity.
    pub fn severity(mut self, severity: AlertSeverity) -> Self {
        self.severity = Some(severity);
        self
    }

    /// Set custom message.
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Build the alert.
    pub fn build(self) -> Alert {
        let severity = self.severity.unwrap_or_else(|| severity_for(self.score));
        let message = self.message.unwrap_or_else(|| {
            format!(
                "Anomaly at point {}: value={:.4}, score={:.4}",
                self.position, self.value, self.score
            )
        });

        Alert {
            timestamp: now_secs(),
            position: self.position,
            value: self.value,
            score: self.score,
            severity,
            message,
        }
    }
}

/// Sink that raises an [`Alert`] for every flagged point.
#[derive(Debug, Default)]
pub struct AlertSink {
    alerts: Vec<Alert>,
}

impl AlertSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alerts(&self) -> &[Alert] {
        &self.alerts
    }

    pub fn critical_count(&self) -> usize {
        self.alerts
            .iter()
            .filter(|a| a.severity == AlertSeverity::Critical)
            .count()
    }

    pub fn into_alerts(self) -> Vec<Alert> {
        self.alerts
    }
}

impl AnomalySink for AlertSink {
    fn record(&mut self, observation: &Observation) {
        if let Some(alert) = create_alert(observation) {
            self.alerts.push(alert);
        }
    }
}

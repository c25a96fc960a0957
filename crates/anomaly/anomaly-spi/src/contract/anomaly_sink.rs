//! Sink trait for classified stream points.

use crate::model::Observation;

/// Consumer of classified points, called once per point in stream order.
///
/// Sinks only observe results; they have no way to influence detection.
pub trait AnomalySink {
    /// Receive one classified point.
    fn record(&mut self, observation: &Observation);

    /// Called once when a run ends, whether it completed or aborted.
    fn finish(&mut self) {}
}

impl<S: AnomalySink + ?Sized> AnomalySink for &mut S {
    fn record(&mut self, observation: &Observation) {
        (**self).record(observation);
    }

    fn finish(&mut self) {
        (**self).finish();
    }
}

impl<S: AnomalySink + ?Sized> AnomalySink for Box<S> {
    fn record(&mut self, observation: &Observation) {
        (**self).record(observation);
    }

    fn finish(&mut self) {
        (**self).finish();
    }
}

impl<A: AnomalySink, B: AnomalySink> AnomalySink for (A, B) {
    fn record(&mut self, observation: &Observation) {
        self.0.record(observation);
        self.1.record(observation);
    }

    fn finish(&mut self) {
        self.0.finish();
        self.1.finish();
    }
}

/// Sink that discards everything.
impl AnomalySink for () {
    fn record(&mut self, _observation: &Observation) {}
}

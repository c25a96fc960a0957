//! Detector shared between producer threads.

use std::sync::Arc;

use anomaly_spi::{DetectorState, Observation, Result, StreamingDetector, WindowStats};
use parking_lot::Mutex;

use crate::detectors::ZScoreDetector;

/// A detector behind one lock, shareable across threads.
///
/// Only the paired classify-then-update operation is exposed for writes, so
/// another producer can never slip an update in between a point's
/// classification and its admission.
#[derive(Debug)]
pub struct SharedDetector<D: StreamingDetector = ZScoreDetector> {
    inner: Arc<Mutex<D>>,
}

impl<D: StreamingDetector> Clone for SharedDetector<D> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<D: StreamingDetector> SharedDetector<D> {
    pub fn new(detector: D) -> Self {
        Self {
            inner: Arc::new(Mutex::new(detector)),
        }
    }

    /// Classify and admit `value` while holding the lock.
    pub fn observe(&self, value: f64) -> Result<Observation> {
        self.inner.lock().observe(value)
    }

    pub fn stats(&self) -> WindowStats {
        self.inner.lock().stats()
    }

    pub fn state(&self) -> DetectorState {
        self.inner.lock().state()
    }

    pub fn observed(&self) -> usize {
        self.inner.lock().observed()
    }

    /// Run a read-only closure against the detector under the lock.
    pub fn inspect<R>(&self, f: impl FnOnce(&D) -> R) -> R {
        f(&self.inner.lock())
    }
}

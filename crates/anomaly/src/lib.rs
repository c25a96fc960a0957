//! # anomaly
//!
//! Streaming anomaly detection for rustful-ts.
//!
//! Single entry point to the whole stack:
//! - `StreamingDetector`, `AnomalySink`, and the result models from SPI
//! - Configuration types and builders from API
//! - `ZScoreDetector`, `SlidingWindow`, `DataStreamSimulator`, monitoring,
//!   sinks, and alerting from Core
//!
//! ```
//! use anomaly::{StreamingDetector, ZScoreDetector};
//!
//! let mut detector = ZScoreDetector::new(3, 1.0)?;
//! for v in [1.0, 2.0, 3.0] {
//!     detector.observe(v)?;
//! }
//! assert!(detector.observe(10.0)?.is_anomaly);
//! # Ok::<(), anomaly::AnomalyError>(())
//! ```

// Re-export everything from SPI
pub use anomaly_spi::*;

// Re-export everything from API
pub use anomaly_api::*;

// Re-export everything from Core
pub use anomaly_core::*;

//! Anomaly Detection Core
//!
//! Sliding-window Z-score detection, the synthetic stream simulator,
//! monitoring, sinks, and alerting.

mod alerting;
mod detectors;
mod monitoring;
mod shared;
mod simulator;
mod sinks;
mod window;

pub use alerting::*;
pub use detectors::*;
pub use monitoring::*;
pub use shared::*;
pub use simulator::*;
pub use sinks::*;
pub use window::*;

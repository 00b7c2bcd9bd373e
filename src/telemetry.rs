//! Telemetry domain: API categories, the usage counter, and exported snapshots.

pub mod category;
pub mod counter;
pub mod message;

pub use category::ApiCategory;
pub use counter::{Telemetry, DEFAULT_CACHE_SIZE};
pub use message::{ApiMetrics, TelemetryMessage};

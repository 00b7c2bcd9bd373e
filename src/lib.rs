//! API usage telemetry
//!
//! An in-process counter recording how often each client API surface was
//! invoked. The owning driver tracks calls, checks the advisory
//! [`Telemetry::is_cache_full`] signal, and exports a
//! [`TelemetryMessage`] snapshot before clearing.

pub mod config;
pub mod error;
pub mod logging;
pub mod telemetry;

pub use error::TelemetryError;
pub use telemetry::{ApiCategory, Telemetry, TelemetryMessage, DEFAULT_CACHE_SIZE};

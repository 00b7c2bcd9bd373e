//! Error types for the API usage telemetry crate.
//!
//! Counter operations never fail; these errors come from parsing category
//! codes, loading configuration, and installing the logging subscriber.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("Unknown API category code: {0}")]
    UnknownCategory(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Logging error: {0}")]
    LoggingError(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl From<config::ConfigError> for TelemetryError {
    fn from(err: config::ConfigError) -> Self {
        TelemetryError::ConfigError(err.to_string())
    }
}

//! Configuration System
//!
//! Layered configuration for the usage counter and logging: built-in
//! defaults, a global file, workspace files, then environment overrides.

use crate::logging::LoggingConfig;
use crate::telemetry::DEFAULT_CACHE_SIZE;
use serde::{Deserialize, Serialize};

mod facade;
mod merge;
mod sources;

pub use facade::ConfigLoader;
pub use sources::environment::ENV_PREFIX;
pub use sources::global_file::global_config_path;
pub use sources::workspace_file::ENV_NAME_VAR;

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiTelemetryConfig {
    /// Usage counter settings
    #[serde(default)]
    pub telemetry: TelemetryConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Usage counter settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TelemetryConfig {
    /// Aggregate count at which the counter reports itself full. Zero means
    /// always full.
    #[serde(default = "default_cache_size")]
    pub cache_size: u64,

    /// When set, no counter is built and call sites skip tracking.
    #[serde(default)]
    pub disabled: bool,
}

fn default_cache_size() -> u64 {
    DEFAULT_CACHE_SIZE
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            cache_size: default_cache_size(),
            disabled: false,
        }
    }
}

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Logging(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Logging(msg) => write!(f, "Logging: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

impl ApiTelemetryConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Err(e) = self.logging.validate() {
            errors.push(ValidationError::Logging(e));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

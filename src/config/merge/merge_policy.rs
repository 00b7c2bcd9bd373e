//! Merge rules: defaults, override order, conflict handling.
//!
//! Sources are added lowest precedence first; later sources override earlier
//! keys individually rather than replacing whole sections.

use config::Config;
use config::ConfigBuilder;
use config::ConfigError;

use crate::telemetry::DEFAULT_CACHE_SIZE;

/// Create a Config builder with merge policy defaults applied.
pub fn builder_with_defaults() -> Result<ConfigBuilder<config::builder::DefaultState>, ConfigError>
{
    Config::builder()
        .set_default("telemetry.cache_size", DEFAULT_CACHE_SIZE)?
        .set_default("telemetry.disabled", false)?
        .set_default("logging.level", "info")?
        .set_default("logging.format", "text")?
        .set_default("logging.output", "stderr")?
        .set_default("logging.color", true)
}

//! Configuration loading facade over the merge policy and sources.

use std::path::Path;

use config::File;
use tracing::debug;

use super::merge::merge_policy;
use super::sources::{environment, global_file, workspace_file};
use super::ApiTelemetryConfig;
use crate::error::TelemetryError;

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load defaults, the global file, workspace files, then environment.
    pub fn load(workspace_root: &Path) -> Result<ApiTelemetryConfig, TelemetryError> {
        let builder = merge_policy::builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder)?;
        let builder = workspace_file::add_to_builder(builder, workspace_root)?;
        let builder = environment::add_to_builder(builder);

        let config: ApiTelemetryConfig = builder.build()?.try_deserialize()?;
        debug!(
            workspace_root = %workspace_root.display(),
            cache_size = config.telemetry.cache_size,
            disabled = config.telemetry.disabled,
            "loaded telemetry configuration"
        );
        Ok(config)
    }

    /// Load defaults, one required file, then environment.
    pub fn load_file(path: &Path) -> Result<ApiTelemetryConfig, TelemetryError> {
        let builder = merge_policy::builder_with_defaults()?
            .add_source(File::from(path.to_path_buf()).required(true));
        let builder = environment::add_to_builder(builder);

        let config: ApiTelemetryConfig = builder.build()?.try_deserialize()?;
        Ok(config)
    }

    /// Like [`ConfigLoader::load`], but also rejects invalid values.
    pub fn load_validated(workspace_root: &Path) -> Result<ApiTelemetryConfig, TelemetryError> {
        let config = Self::load(workspace_root)?;
        config.validate().map_err(|errors| {
            let error_msgs: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            TelemetryError::ConfigError(format!(
                "Configuration validation failed:\n{}",
                error_msgs.join("\n")
            ))
        })?;
        Ok(config)
    }
}

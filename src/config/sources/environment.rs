//! Environment source: API_TELEMETRY_<SECTION>__<KEY>, e.g.
//! API_TELEMETRY_TELEMETRY__CACHE_SIZE=50

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::Environment;

pub const ENV_PREFIX: &str = "API_TELEMETRY";

pub fn add_to_builder(builder: ConfigBuilder<DefaultState>) -> ConfigBuilder<DefaultState> {
    builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    )
}

//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate, with every section defaulting so a missing file yields
//! a fully usable configuration.

pub mod logging;
pub mod resolver;
pub mod trash;

use serde::{Deserialize, Serialize};

pub use self::logging::LoggingConfig;
pub use self::resolver::ResolverConfig;
pub use self::trash::TrashConfig;

use crate::error::AppError;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Trash retention settings.
    pub trash: TrashConfig,
    /// Breadcrumb resolver settings.
    pub resolver: ResolverConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from TOML files.
    ///
    /// Merges the default configuration with an environment-specific
    /// overlay and environment variables prefixed with `DRIVEDECK_`.
    pub fn load(env: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("DRIVEDECK")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_sections() {
        let config = AppConfig::default();
        assert_eq!(config.trash.retention_days, 30);
        assert_eq!(config.resolver.max_depth, 64);
        assert_eq!(config.logging.level, "info");
    }
}

//! Service configuration

use serde::Deserialize;

use core_kernel::{CoreError, Identity};

/// Environment variable prefix; nested keys use `__`, as in
/// `INSURANCE__LOG__LEVEL`
pub const ENV_PREFIX: &str = "INSURANCE";

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LogConfig {
    /// Filter directive used when `RUST_LOG` is unset
    #[serde(default = "default_level")]
    pub level: String,
    /// Emit JSON lines instead of plain text
    #[serde(default)]
    pub json: bool,
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            json: false,
        }
    }
}

/// Service configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceConfig {
    /// Initial owner
    pub owner: Identity,
    /// Initial insurer
    pub insurer: Identity,
    /// Logging
    #[serde(default)]
    pub log: LogConfig,
}

impl ServiceConfig {
    /// Loads configuration from the environment
    ///
    /// A `.env` file in the working directory is read first if present.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        dotenvy::dotenv().ok();

        config::Config::builder()
            .add_source(config::Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build()?
            .try_deserialize()
    }

    /// Loads configuration from a TOML document
    pub fn from_toml_str(source: &str) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::from_str(source, config::FileFormat::Toml))
            .build()?
            .try_deserialize()
    }

    /// Rejects role assignments to the null identity
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.owner.is_null() {
            return Err(CoreError::configuration("owner must not be the null identity"));
        }
        if self.insurer.is_null() {
            return Err(CoreError::configuration("insurer must not be the null identity"));
        }
        Ok(())
    }
}

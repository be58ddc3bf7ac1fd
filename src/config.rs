//! # Runtime Configuration
//!
//! Typed settings for the comparison engine.
//!
//! Settings layer an optional `wash-compare.toml` file under a
//! `WASH_COMPARE_`-prefixed environment source, with `.env` support for
//! local development.
//!
//! # Examples
//!
//! ```
//! use wash_compare::config::CompareSettings;
//!
//! let settings = CompareSettings::default();
//! assert_eq!(settings.cache_ttl().as_secs(), 30);
//! ```

use crate::application::services::comparison::EngineConfig;
use serde::Deserialize;
use std::time::Duration;

/// Default cache TTL in seconds.
const DEFAULT_CACHE_TTL_SECS: u64 = 30;

/// Runtime settings for the comparison engine.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CompareSettings {
    /// Lifetime of cached comparison responses, in seconds.
    #[serde(default = "default_cache_ttl_secs")]
    pub cache_ttl_secs: u64,
}

fn default_cache_ttl_secs() -> u64 {
    DEFAULT_CACHE_TTL_SECS
}

impl Default for CompareSettings {
    fn default() -> Self {
        Self {
            cache_ttl_secs: DEFAULT_CACHE_TTL_SECS,
        }
    }
}

impl CompareSettings {
    /// Loads settings from file and environment.
    ///
    /// Reads an optional `wash-compare` config file from the working
    /// directory, then overlays `WASH_COMPARE_`-prefixed environment
    /// variables (e.g. `WASH_COMPARE_CACHE_TTL_SECS=60`). A `.env` file
    /// is honored when present.
    ///
    /// # Errors
    ///
    /// Returns a `config::ConfigError` if a source is malformed.
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenvy::dotenv().ok();

        config::Config::builder()
            .add_source(config::File::with_name("wash-compare").required(false))
            .add_source(config::Environment::with_prefix("WASH_COMPARE"))
            .build()?
            .try_deserialize()
    }

    /// Returns the cache TTL as a [`Duration`].
    #[must_use]
    pub const fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }

    /// Converts the settings into an engine configuration.
    #[must_use]
    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig::default().with_cache_ttl(self.cache_ttl())
    }
}

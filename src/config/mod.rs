//! Application configuration module
//!
//! Type-safe configuration loading from environment variables using the
//! `config` and `dotenvy` crates. Configuration is loaded with the
//! `DERM_SHERPA` prefix and nested values use double underscores as
//! separators. Every value has a default, so an empty environment loads.
//!
//! # Example
//!
//! ```no_run
//! use derm_sherpa::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! let engine = config.engine.engine();
//! ```

mod engine;
mod error;
mod knowledge;

pub use engine::EngineConfig;
pub use error::{ConfigError, ValidationError};
pub use knowledge::KnowledgeConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment
/// variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Interview engine tuning (threshold, channel capacity)
    #[serde(default)]
    pub engine: EngineConfig,

    /// Knowledge base content source
    #[serde(default)]
    pub knowledge: KnowledgeConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `DERM_SHERPA` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `DERM_SHERPA__ENGINE__CONFIRMATION_THRESHOLD=3`
    ///   -> `engine.confirmation_threshold = 3`
    /// - `DERM_SHERPA__KNOWLEDGE__CONTENT_DIR=/srv/content`
    ///   -> `knowledge.content_dir = /srv/content`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into the
    /// expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("DERM_SHERPA")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.engine.validate()?;
        self.knowledge.validate()?;
        Ok(())
    }
}

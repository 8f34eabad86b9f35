//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `DECISION_READINESS` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use decision_readiness::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Stale after {} days", config.classifier.max_data_age_days);
//! ```

mod classifier;
mod error;
mod logging;
mod source;

pub use classifier::ClassifierConfig;
pub use error::{ConfigError, ValidationError};
pub use logging::LoggingConfig;
pub use source::SourceConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a working
/// configuration that serves the embedded analyses.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Log filter and output format
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Staleness window
    #[serde(default)]
    pub classifier: ClassifierConfig,

    /// Analyses directory
    #[serde(default)]
    pub source: SourceConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `DECISION_READINESS` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `DECISION_READINESS__LOGGING__JSON=true` -> `logging.json = true`
    /// - `DECISION_READINESS__CLASSIFIER__MAX_DATA_AGE_DAYS=90` -> `classifier.max_data_age_days = 90`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("DECISION_READINESS")
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
    /// Returns `ValidationError` for an empty or malformed log directive,
    /// a zero-day staleness window, or an empty analyses directory.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.logging.validate()?;
        self.classifier.validate()?;
        self.source.validate()?;
        Ok(())
    }
}

//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `HEALTH_RISK` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use health_risk::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! println!("listening on port {}", config.server.port);
//! ```

mod error;
mod model;
mod scoring;
mod server;

pub use error::{ConfigError, ValidationError};
pub use model::{ModelConfig, DEFAULT_ARTIFACT_PATHS};
pub use scoring::ScoringConfig;
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a runnable
/// configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// Classifier artifact location
    #[serde(default)]
    pub model: ModelConfig,

    /// Scoring policy constants
    #[serde(default)]
    pub scoring: ScoringConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `HEALTH_RISK` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    /// 5. Validates every section
    ///
    /// # Environment Variable Format
    ///
    /// - `HEALTH_RISK__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `HEALTH_RISK__MODEL__ARTIFACT_PATH=...` -> `model.artifact_path = ...`
    /// - `HEALTH_RISK__SCORING__NO_PROBABILITY_FALLBACK=neutral`
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("HEALTH_RISK")
                    .separator("__"),
            )
            .build()?
            .try_deserialize::<Self>()?;

        config.validate()?;
        Ok(config)
    }

    /// Validate all configuration values
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.model.validate()?;
        self.scoring.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}

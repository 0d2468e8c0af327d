//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `DEEPCAL` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use deepcal::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {}", config.server.socket_addr().unwrap());
//! ```

mod error;
mod ranking;
mod server;
mod storage;

pub use error::{ConfigError, ValidationError};
pub use ranking::RankingConfig;
pub use server::{Environment, ServerConfig};
pub use storage::StorageConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a usable config.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// Ranking engine tunables
    #[serde(default)]
    pub ranking: RankingConfig,

    /// Decision store limits
    #[serde(default)]
    pub storage: StorageConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `DEEPCAL` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    ///
    /// # Environment Variable Format
    ///
    /// - `DEEPCAL__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `DEEPCAL__RANKING__WHITENING_COEFFICIENT=0.25` -> `ranking.whitening_coefficient = 0.25`
    /// - `DEEPCAL__STORAGE__MAX_DECISIONS=500` -> `storage.max_decisions = 500`
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
                    .prefix("DEEPCAL")
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
        self.server.validate()?;
        self.ranking.validate()?;
        self.storage.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn clear_env() {
        env::remove_var("DEEPCAL__SERVER__PORT");
        env::remove_var("DEEPCAL__SERVER__ENVIRONMENT");
        env::remove_var("DEEPCAL__RANKING__WHITENING_COEFFICIENT");
        env::remove_var("DEEPCAL__RANKING__SENSITIVITY_DELTA");
        env::remove_var("DEEPCAL__STORAGE__MAX_DECISIONS");
    }

    #[test]
    fn test_load_defaults_from_empty_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let config = AppConfig::load().unwrap();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.environment, Environment::Development);
        assert_eq!(config.ranking.whitening_coefficient, 0.5);
        assert_eq!(config.storage.max_decisions, 10_000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_is_production() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("DEEPCAL__SERVER__ENVIRONMENT", "production");
        let result = AppConfig::load();
        clear_env();

        assert!(result.unwrap().is_production());
    }

    #[test]
    fn test_custom_server_port() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("DEEPCAL__SERVER__PORT", "3000");
        let result = AppConfig::load();
        clear_env();

        assert_eq!(result.unwrap().server.port, 3000);
    }

    #[test]
    fn test_ranking_overrides() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("DEEPCAL__RANKING__WHITENING_COEFFICIENT", "0.25");
        env::set_var("DEEPCAL__RANKING__SENSITIVITY_DELTA", "0.05");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.ranking.whitening_coefficient, 0.25);
        assert_eq!(config.ranking.sensitivity_delta, 0.05);
    }

    #[test]
    fn test_storage_capacity_override() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("DEEPCAL__STORAGE__MAX_DECISIONS", "500");
        let result = AppConfig::load();
        clear_env();

        assert_eq!(result.unwrap().storage.max_decisions, 500);
    }

    #[test]
    fn test_zero_storage_capacity_fails_validation() {
        let mut config = AppConfig::default();
        config.storage.max_decisions = 0;
        assert_eq!(config.validate(), Err(ValidationError::InvalidMaxDecisions));
    }

    #[test]
    fn test_invalid_ranking_config_fails_validation() {
        let mut config = AppConfig::default();
        config.ranking.whitening_coefficient = -0.1;
        assert_eq!(config.validate(), Err(ValidationError::InvalidWhitening));
    }
}

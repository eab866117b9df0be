//! Configuration loader with layered sources.

use crate::AppConfig;
use config::{Config, ConfigError, Environment, File};
use dating_core::DatingError;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

/// Prefix of environment variable overrides, e.g. `DATING__SERVER__PORT`.
pub const ENV_PREFIX: &str = "DATING";

/// Configuration loader with runtime refresh support.
#[derive(Clone)]
pub struct ConfigLoader {
    config: Arc<RwLock<AppConfig>>,
    config_dir: String,
}

impl ConfigLoader {
    /// Creates a new configuration loader.
    ///
    /// Configuration is loaded from multiple sources in order:
    /// 1. `config/default.toml` - Default values
    /// 2. `config/{environment}.toml` - Environment-specific overrides
    /// 3. `config/local.toml` - Local overrides
    /// 4. Environment variables with `DATING__` prefix
    pub fn new(config_dir: impl Into<String>) -> Result<Self, DatingError> {
        let config_dir = config_dir.into();
        let config = Self::load_config(&config_dir)?;

        Ok(Self {
            config: Arc::new(RwLock::new(config)),
            config_dir,
        })
    }

    /// Loads configuration from the default location (`./config`).
    pub fn from_default_location() -> Result<Self, DatingError> {
        Self::new("./config")
    }

    /// Returns the current configuration.
    pub async fn get(&self) -> AppConfig {
        self.config.read().await.clone()
    }

    /// Reloads the configuration from disk.
    pub async fn reload(&self) -> Result<(), DatingError> {
        let new_config = Self::load_config(&self.config_dir)?;
        let mut config = self.config.write().await;
        *config = new_config;
        info!("Configuration reloaded successfully");
        Ok(())
    }

    fn load_config(config_dir: &str) -> Result<AppConfig, DatingError> {
        if let Err(e) = dotenvy::dotenv() {
            debug!("No .env file found or error loading it: {}", e);
        }

        let environment =
            std::env::var("DATING_ENVIRONMENT").unwrap_or_else(|_| "development".to_string());
        info!("Loading configuration for environment: {}", environment);

        let mut builder = Config::builder();

        for name in ["default", environment.as_str(), "local"] {
            let path = format!("{config_dir}/{name}.toml");
            if Path::new(&path).exists() {
                debug!("Loading config from: {}", path);
                builder = builder.add_source(File::with_name(&path).required(false));
            }
        }

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        );

        let app_config: AppConfig = builder
            .build()
            .and_then(Config::try_deserialize)
            .map_err(config_error_to_dating_error)?;

        validate_config(&app_config)?;

        Ok(app_config)
    }
}

/// Checks settings the server cannot start without.
pub fn validate_config(config: &AppConfig) -> Result<(), DatingError> {
    if config.app.is_production() && config.security.uses_default_secret() {
        warn!("Using default JWT secret in production! This is a security risk.");
    }

    if config.database.url.trim().is_empty() {
        return Err(DatingError::Configuration("Database URL is required".to_string()));
    }

    if config.security.jwt_secret.is_empty() {
        return Err(DatingError::Configuration("JWT secret is required".to_string()));
    }

    if config.database.max_connections < config.database.min_connections {
        return Err(DatingError::Configuration(
            "database.max_connections must be >= database.min_connections".to_string(),
        ));
    }

    Ok(())
}

fn config_error_to_dating_error(err: ConfigError) -> DatingError {
    DatingError::Configuration(err.to_string())
}

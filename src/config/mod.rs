//! Configuration management
//!
//! This module handles loading and validation of all service configuration.
//! Everything comes from environment variables (a `.env` file is honored by
//! `main`), with working defaults for local development.

pub mod models;

pub use models::{AuthConfig, DEFAULT_JWT_SECRET, ServerConfig, StorageConfig};

use crate::utils::error::{ApiError, Result};
use tracing::{debug, info};

/// Main configuration struct for the service
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// HTTP server configuration
    pub server: ServerConfig,
    /// Token and password configuration
    pub auth: AuthConfig,
    /// Seed data configuration
    pub storage: StorageConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let config = Self {
            server: ServerConfig::from_env().map_err(ApiError::config)?,
            auth: AuthConfig::from_env().map_err(ApiError::config)?,
            storage: StorageConfig::from_env().map_err(ApiError::config)?,
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.server
            .validate()
            .map_err(|e| ApiError::Config(format!("Server config error: {}", e)))?;

        self.auth
            .validate()
            .map_err(|e| ApiError::Config(format!("Auth config error: {}", e)))?;

        models::auth::warn_insecure_config(&self.auth);

        debug!("Configuration validation completed");
        Ok(())
    }
}

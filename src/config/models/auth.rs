//! Authentication configuration

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Fallback signing secret used when `JWT_SECRET_KEY` is not set.
///
/// Deliberately fixed and documented so local development works out of the
/// box; `warn_insecure_config` flags it at startup.
pub const DEFAULT_JWT_SECRET: &str = "jwt-secret-key";

/// Authentication configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret for signing and verifying tokens
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,
    /// Token lifetime in seconds
    #[serde(default = "default_token_ttl")]
    pub token_ttl_secs: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: default_jwt_secret(),
            token_ttl_secs: default_token_ttl(),
        }
    }
}

impl AuthConfig {
    /// Load from `JWT_SECRET_KEY` / `TOKEN_TTL_SECS`, falling back to defaults.
    pub fn from_env() -> Result<Self, String> {
        let mut config = Self::default();
        if let Ok(secret) = std::env::var("JWT_SECRET_KEY") {
            config.jwt_secret = secret;
        }
        if let Ok(ttl) = std::env::var("TOKEN_TTL_SECS") {
            config.token_ttl_secs = ttl
                .parse::<u64>()
                .map_err(|_| format!("Invalid TOKEN_TTL_SECS value: {}", ttl))?;
        }
        Ok(config)
    }

    /// Validate authentication configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.jwt_secret.is_empty() {
            return Err("JWT secret cannot be empty".to_string());
        }
        if self.token_ttl_secs == 0 {
            return Err("Token lifetime must be at least 1 second".to_string());
        }
        Ok(())
    }
}

/// Warn about insecure configurations
pub fn warn_insecure_config(config: &AuthConfig) {
    if config.jwt_secret == DEFAULT_JWT_SECRET {
        warn!(
            "JWT_SECRET_KEY is not set; using the built-in development secret. Set a strong secret before deploying."
        );
    }
}

fn default_jwt_secret() -> String {
    DEFAULT_JWT_SECRET.to_string()
}

fn default_token_ttl() -> u64 {
    3600
}

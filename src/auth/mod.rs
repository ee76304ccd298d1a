//! Authentication and authorization core
//!
//! Password hashing, the bearer token lifecycle, and the login/logout flows
//! composed on top of them. The HTTP layer consumes this module through
//! [`AuthService`] and the token service it exposes.

pub mod claims;
pub mod password;
pub mod revocation;
pub mod tokens;


pub use claims::{Claims, PrincipalView};
pub use revocation::RevocationSet;
pub use tokens::{TOKEN_PREFIX, TokenService};

use crate::domain::{LoginRequest, User};
use crate::storage::UserStore;
use crate::utils::error::{ApiError, Result};
use std::sync::Arc;
use tracing::{debug, info};

/// Main authentication service
#[derive(Clone)]
pub struct AuthService {
    /// Credential store
    users: Arc<dyn UserStore>,
    /// Token service
    tokens: Arc<TokenService>,
}

impl AuthService {
    /// Create a new authentication service
    pub fn new(users: Arc<dyn UserStore>, tokens: Arc<TokenService>) -> Self {
        Self { users, tokens }
    }

    /// Exchange credentials for a fresh token.
    ///
    /// Unknown usernames and wrong passwords collapse into the same error
    /// so the response never reveals which half was wrong.
    pub async fn login(&self, credentials: &LoginRequest) -> Result<String> {
        info!("User login attempt: {}", credentials.username);

        let user = self.lookup_principal(&credentials.username).await?;

        if !password::verify_password(&credentials.password, &user.password_hash)? {
            return Err(ApiError::unauthenticated("Invalid username or password"));
        }

        let token = self.tokens.issue(&user)?;
        info!("User logged in successfully: {}", credentials.username);
        Ok(token)
    }

    /// Revoke the presented token.
    pub async fn logout(&self, token: &str) -> Result<()> {
        self.tokens.revoke(token).await?;
        debug!("Token revoked on logout");
        Ok(())
    }

    /// Get the token service
    pub fn tokens(&self) -> &TokenService {
        &self.tokens
    }

    async fn lookup_principal(&self, username: &str) -> Result<User> {
        match self.users.get_by_username(username).await {
            Ok(user) => Ok(user),
            Err(ApiError::NotFound(_)) => {
                Err(ApiError::unauthenticated("Invalid username or password"))
            }
            Err(e) => Err(e),
        }
    }
}

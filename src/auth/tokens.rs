//! Bearer token issuance, validation, and revocation

use super::claims::{Claims, PrincipalView};
use super::revocation::RevocationSet;
use crate::config::AuthConfig;
use crate::domain::User;
use crate::storage::UserStore;
use crate::utils::error::{ApiError, Result};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::debug;

/// Prefix carried by every token the service hands out.
pub const TOKEN_PREFIX: &str = "Bearer ";

/// Token service for the full bearer token lifecycle
///
/// Issues signed tokens from stored principals, re-verifies them against
/// current credentials, and retires them through the injected revocation
/// set. Validation is fail-closed: any doubt about a token is a refusal.
pub struct TokenService {
    /// Encoding key for signing tokens
    encoding_key: EncodingKey,
    /// Decoding key for verifying tokens
    decoding_key: DecodingKey,
    /// Signing algorithm
    algorithm: Algorithm,
    /// Token lifetime in seconds
    ttl_secs: u64,
    /// Credential store consulted on every validation
    users: Arc<dyn UserStore>,
    /// Explicitly revoked tokens
    revoked: Arc<RevocationSet>,
}

impl std::fmt::Debug for TokenService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenService")
            .field("algorithm", &self.algorithm)
            .field("ttl_secs", &self.ttl_secs)
            .field("revoked", &self.revoked.len())
            .field("encoding_key", &"[REDACTED]")
            .field("decoding_key", &"[REDACTED]")
            .finish()
    }
}

impl TokenService {
    /// Create a new token service
    pub fn new(
        config: &AuthConfig,
        users: Arc<dyn UserStore>,
        revoked: Arc<RevocationSet>,
    ) -> Self {
        let secret = config.jwt_secret.as_bytes();

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
            ttl_secs: config.token_ttl_secs,
            users,
            revoked,
        }
    }

    /// Issue a formatted token for a stored principal.
    pub fn issue(&self, user: &User) -> Result<String> {
        let now = unix_now()?;

        let claims = Claims {
            sub: user.username.clone(),
            password_hash: user.password_hash.clone(),
            roles: user.roles.clone(),
            department: user.department,
            iat: now,
            exp: now + self.ttl_secs,
        };

        let header = Header::new(self.algorithm);
        let token = encode(&header, &claims, &self.encoding_key)
            .map_err(|e| ApiError::internal(format!("Failed to sign token: {}", e)))?;

        debug!("Issued token for user: {}", user.username);
        Ok(format!("{}{}", TOKEN_PREFIX, token))
    }

    /// Verify and decode a formatted token without touching storage.
    ///
    /// Checks the prefix, the signature, and the expiry (no clock leeway:
    /// a token one second past `exp` is already dead). Does not consult
    /// the revocation set.
    pub fn decode(&self, token: &str) -> Result<Claims> {
        let raw = extract_token(token)?;

        let mut validation = Validation::new(self.algorithm);
        validation.leeway = 0;

        let token_data = decode::<Claims>(raw, &self.decoding_key, &validation).map_err(|e| {
            debug!("Token verification failed: {}", e);
            ApiError::from(e)
        })?;

        Ok(token_data.claims)
    }

    /// Full validity check against current state.
    ///
    /// True iff the token decodes, the principal still exists, the embedded
    /// password hash matches the currently stored one, and the token has
    /// not been revoked. A principal deleted after issuance fails closed.
    pub async fn validate(&self, token: &str) -> Result<bool> {
        let claims = self.decode(token)?;

        let user = match self.users.get_by_username(&claims.sub).await {
            Ok(user) => user,
            Err(ApiError::NotFound(_)) => {
                return Err(ApiError::unauthenticated("Invalid Token"));
            }
            Err(e) => return Err(e),
        };

        Ok(user.password_hash == claims.password_hash && !self.revoked.contains(token))
    }

    /// Revoke a token after proving it is currently valid.
    ///
    /// Revocation of an invalid token is an error, which makes a second
    /// revoke of the same token fail: once revoked, it no longer validates.
    pub async fn revoke(&self, token: &str) -> Result<()> {
        if self.validate(token).await? {
            self.revoked.insert(token);
            debug!("Token revoked");
            Ok(())
        } else {
            Err(ApiError::unauthenticated("Invalid Token"))
        }
    }

    /// Decode the authorization-relevant projection of a token.
    ///
    /// Runs behind the authentication gate in the same request pipeline,
    /// so it skips the storage and revocation re-checks; signature and
    /// expiry failures still propagate.
    pub fn principal_view(&self, token: &str) -> Result<PrincipalView> {
        Ok(self.decode(token)?.principal_view())
    }

    /// Drop revoked entries whose expiry has passed.
    ///
    /// An expired token can never validate again, so the set only needs to
    /// remember it until `exp`. Returns how many entries were dropped.
    pub fn prune_expired(&self) -> usize {
        let mut validation = Validation::new(self.algorithm);
        validation.leeway = 0;
        validation.validate_exp = false;

        let before = self.revoked.len();
        self.revoked.retain(|token| {
            let Some(raw) = token.strip_prefix(TOKEN_PREFIX) else {
                return false;
            };
            match decode::<Claims>(raw, &self.decoding_key, &validation) {
                Ok(data) => !is_past(data.claims.exp),
                Err(_) => false,
            }
        });

        let dropped = before - self.revoked.len();
        if dropped > 0 {
            debug!("Pruned {} expired revocation entries", dropped);
        }
        dropped
    }

    /// Get the configured token lifetime
    pub fn ttl_secs(&self) -> u64 {
        self.ttl_secs
    }
}

/// Strip the transport prefix from a formatted token.
fn extract_token(formatted: &str) -> Result<&str> {
    formatted
        .strip_prefix(TOKEN_PREFIX)
        .ok_or_else(|| ApiError::token_malformed("Token is missing the Bearer prefix"))
}

fn unix_now() -> Result<u64> {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .map_err(|e| ApiError::internal(format!("System time error: {}", e)))
}

// Clock failure keeps entries around rather than dropping live ones.
fn is_past(exp: u64) -> bool {
    unix_now().map(|now| exp < now).unwrap_or(false)
}

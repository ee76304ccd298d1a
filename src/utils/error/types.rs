//! Error types for the service

use thiserror::Error;

/// Result type alias for the service
pub type Result<T> = std::result::Result<T, ApiError>;

/// Main error type for the service
///
/// Every fallible operation in the crate resolves to one of these variants.
/// The variant decides the HTTP status and error code at the response
/// boundary; the payload is the human-readable message.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Missing, expired, revoked, or otherwise unacceptable credentials
    #[error("Authentication error: {0}")]
    Unauthenticated(String),

    /// Authenticated principal lacks the required role or department
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Token string that cannot be decoded at all
    #[error("Malformed token: {0}")]
    TokenMalformed(String),

    /// Request shape errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Missing entities
    #[error("Not found: {0}")]
    NotFound(String),

    /// Uniqueness violations
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Password hashing primitive failures
    #[error("Password hashing error: {0}")]
    Hashing(String),

    /// Storage failures
    #[error("Storage error: {0}")]
    Storage(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal server errors
    #[error("Internal server error: {0}")]
    Internal(String),
}

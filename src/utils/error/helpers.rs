//! Helper functions for creating specific error types

use super::types::ApiError;

/// Helper functions for creating specific errors
impl ApiError {
    pub fn unauthenticated<S: Into<String>>(message: S) -> Self {
        Self::Unauthenticated(message.into())
    }

    pub fn forbidden<S: Into<String>>(message: S) -> Self {
        Self::Forbidden(message.into())
    }

    pub fn token_malformed<S: Into<String>>(message: S) -> Self {
        Self::TokenMalformed(message.into())
    }

    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation(message.into())
    }

    pub fn not_found<S: Into<String>>(message: S) -> Self {
        Self::NotFound(message.into())
    }

    pub fn conflict<S: Into<String>>(message: S) -> Self {
        Self::Conflict(message.into())
    }

    pub fn hashing<S: Into<String>>(message: S) -> Self {
        Self::Hashing(message.into())
    }

    pub fn storage<S: Into<String>>(message: S) -> Self {
        Self::Storage(message.into())
    }

    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal(message.into())
    }
}

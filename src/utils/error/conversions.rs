//! Type conversions for ApiError

use super::types::ApiError;

// Token decode failures split into two classes: payloads that cannot be
// decoded at all are malformed, everything else (bad signature, expiry,
// claim checks) is an authentication failure.
impl From<jsonwebtoken::errors::Error> for ApiError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        use jsonwebtoken::errors::ErrorKind;

        match err.kind() {
            ErrorKind::InvalidToken
            | ErrorKind::Base64(_)
            | ErrorKind::Json(_)
            | ErrorKind::Utf8(_) => ApiError::TokenMalformed(err.to_string()),
            _ => ApiError::Unauthenticated(err.to_string()),
        }
    }
}

impl From<std::io::Error> for ApiError {
    fn from(err: std::io::Error) -> Self {
        ApiError::Storage(err.to_string())
    }
}

// serde_json only surfaces outside the HTTP layer when reading seed
// fixtures, so parse failures count as storage failures.
impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Storage(err.to_string())
    }
}

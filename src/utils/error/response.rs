//! HTTP response handling for errors

use super::types::ApiError;
use actix_web::{HttpResponse, ResponseError, http::StatusCode};

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Unauthenticated(_) | ApiError::TokenMalformed(_) => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Hashing(_)
            | ApiError::Storage(_)
            | ApiError::Config(_)
            | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let (error_code, message) = match self {
            ApiError::Unauthenticated(msg) => ("UNAUTHORIZED", msg.clone()),
            ApiError::Forbidden(msg) => ("FORBIDDEN", msg.clone()),
            ApiError::TokenMalformed(msg) => ("TOKEN_MALFORMED", msg.clone()),
            ApiError::Validation(msg) => ("VALIDATION_ERROR", msg.clone()),
            ApiError::NotFound(msg) => ("NOT_FOUND", msg.clone()),
            ApiError::Conflict(msg) => ("CONFLICT", msg.clone()),
            // Server faults keep their details in the log, not the body.
            ApiError::Hashing(_) => ("HASHING_ERROR", "Password processing failed".to_string()),
            ApiError::Storage(_) => ("DATABASE_ERROR", "Storage operation failed".to_string()),
            ApiError::Config(_) => ("CONFIG_ERROR", "Server misconfiguration".to_string()),
            ApiError::Internal(_) => (
                "INTERNAL_SERVER_ERROR",
                "An internal error occurred".to_string(),
            ),
        };

        let status_code = self.status_code();
        if status_code.is_server_error() {
            tracing::error!("{}", self);
        } else {
            tracing::warn!("{}", self);
        }

        HttpResponse::build(status_code).json(ErrorResponse {
            error: error_code.to_string(),
            message,
        })
    }
}

/// Standard error response format
#[derive(serde::Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

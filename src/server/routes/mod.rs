//! HTTP route modules
//!
//! This module contains all HTTP route handlers organized by functionality.

pub mod auth;
pub mod courses;
pub mod health;
pub mod users;

use crate::utils::error::{ApiError, Result};
use actix_web::HttpResponse;

/// Fallback handler for requests matching no registered route
pub async fn route_not_found() -> Result<HttpResponse> {
    Err(ApiError::not_found("Route Not Found"))
}

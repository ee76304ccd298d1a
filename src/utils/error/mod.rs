//! Error handling for the service
//!
//! This module defines the single error type used throughout the crate and
//! its mapping onto HTTP responses.

mod conversions;
mod helpers;
mod response;
mod types;

pub use response::ErrorResponse;
pub use types::{ApiError, Result};

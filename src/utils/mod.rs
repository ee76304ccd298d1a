//! Utility modules
//!
//! Cross-cutting concerns shared by every layer of the service.

pub mod error;

pub use error::{ApiError, ErrorResponse, Result};

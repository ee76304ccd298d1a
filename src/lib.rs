//! # Coursegate
//!
//! Role and department gated REST backend for course administration.
//!
//! ## Features
//!
//! - **Bearer token auth**: signed, time-bound tokens with explicit logout
//!   revocation
//! - **Argon2 password hashing**: credentials are hashed at rest and on the
//!   way in from seed fixtures
//! - **Route policies**: roles and departments declared statically next to
//!   the routes they protect
//! - **In-memory storage**: JSON-seeded user and course stores behind async
//!   traits
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use coursegate::config::AppConfig;
//! use coursegate::server;
//!
//! #[tokio::main]
//! async fn main() -> coursegate::Result<()> {
//!     let config = AppConfig::from_env()?;
//!     server::run(config).await
//! }
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

// Public module exports
pub mod auth;
pub mod config;
pub mod domain;
pub mod server;
pub mod storage;
pub mod utils;

// Re-export main types
pub use config::AppConfig;
pub use utils::error::{ApiError, Result};

//! Configuration models

pub mod auth;
pub mod server;
pub mod storage;

pub use auth::{AuthConfig, DEFAULT_JWT_SECRET};
pub use server::ServerConfig;
pub use storage::StorageConfig;

//! Application state shared across HTTP handlers

use crate::auth::AuthService;
use crate::config::AppConfig;
use crate::storage::StorageLayer;
use std::sync::Arc;

/// HTTP server state shared across handlers
///
/// All fields are wrapped in Arc for efficient sharing across workers.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration (shared read-only)
    pub config: Arc<AppConfig>,
    /// Authentication service
    pub auth: Arc<AuthService>,
    /// Storage layer
    pub storage: Arc<StorageLayer>,
}

impl AppState {
    /// Create a new AppState with shared resources
    pub fn new(config: AppConfig, auth: AuthService, storage: StorageLayer) -> Self {
        Self {
            config: Arc::new(config),
            auth: Arc::new(auth),
            storage: Arc::new(storage),
        }
    }
}

//! Storage layer
//!
//! Credential and course persistence behind small async traits. The traits
//! keep the auth core testable against mocks; the bundled implementations
//! are in-memory, populated from JSON fixtures at startup.

pub mod memory;
pub mod seed;

mod tests;

pub use memory::{MemoryCourseStore, MemoryUserStore};

use crate::config::StorageConfig;
use crate::domain::{Course, User};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

/// Credential store the auth core reads principals from
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Fetch a user by username. Absence is a `NotFound` error.
    async fn get_by_username(&self, username: &str) -> Result<User>;

    /// Insert a new user. A taken username is a `Conflict` error.
    async fn insert(&self, user: User) -> Result<User>;
}

/// Course catalog store
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CourseStore: Send + Sync {
    async fn list(&self) -> Result<Vec<Course>>;

    /// Fetch a course by id. Absence is a `NotFound` error.
    async fn get(&self, id: Uuid) -> Result<Course>;

    async fn insert(&self, course: Course) -> Result<Course>;

    /// Replace the stored course with the same id.
    async fn update(&self, course: Course) -> Result<Course>;

    async fn delete(&self, id: Uuid) -> Result<()>;
}

/// Main storage layer bundling the concrete stores
#[derive(Debug, Clone)]
pub struct StorageLayer {
    /// User accounts
    pub users: Arc<MemoryUserStore>,
    /// Course catalog
    pub courses: Arc<MemoryCourseStore>,
}

impl StorageLayer {
    /// Create the in-memory stores and load the configured seed fixtures.
    ///
    /// Seeding failures are logged and do not abort startup; the service
    /// comes up with whatever loaded.
    pub async fn new(config: &StorageConfig) -> Self {
        info!("Initializing storage layer");

        let users = Arc::new(MemoryUserStore::new());
        let courses = Arc::new(MemoryCourseStore::new());

        seed::seed_users(&config.users_seed_path, users.as_ref()).await;
        seed::seed_courses(&config.courses_seed_path, courses.as_ref()).await;

        Self { users, courses }
    }
}

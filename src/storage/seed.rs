//! JSON seed fixtures
//!
//! Loads startup data into the in-memory stores. User fixtures carry
//! plaintext passwords and are hashed on the way in, so the stores never
//! hold anything but hashes.

use super::{CourseStore, MemoryCourseStore, MemoryUserStore, UserStore};
use crate::auth::password::hash_password;
use crate::domain::{Course, CreateCourseRequest, CreateUserRequest, User};
use crate::utils::error::Result;
use std::path::Path;
use tracing::{info, warn};
use uuid::Uuid;

/// Load user fixtures from `path`. Failures are logged, not fatal.
pub async fn seed_users(path: &Path, store: &MemoryUserStore) {
    match load_users(path, store).await {
        Ok(count) => info!("Seeded {} users from {}", count, path.display()),
        Err(e) => warn!("User seeding skipped ({}): {}", path.display(), e),
    }
}

/// Load course fixtures from `path`. Failures are logged, not fatal.
pub async fn seed_courses(path: &Path, store: &MemoryCourseStore) {
    match load_courses(path, store).await {
        Ok(count) => info!("Seeded {} courses from {}", count, path.display()),
        Err(e) => warn!("Course seeding skipped ({}): {}", path.display(), e),
    }
}

async fn load_users(path: &Path, store: &MemoryUserStore) -> Result<usize> {
    let raw = tokio::fs::read_to_string(path).await?;
    let entries: Vec<CreateUserRequest> = serde_json::from_str(&raw)?;

    let mut count = 0;
    for entry in entries {
        let user = User {
            id: Uuid::new_v4(),
            username: entry.username,
            password_hash: hash_password(&entry.password)?,
            roles: entry.roles,
            department: entry.department,
        };
        store.insert(user).await?;
        count += 1;
    }
    Ok(count)
}

async fn load_courses(path: &Path, store: &MemoryCourseStore) -> Result<usize> {
    let raw = tokio::fs::read_to_string(path).await?;
    let entries: Vec<CreateCourseRequest> = serde_json::from_str(&raw)?;

    let mut count = 0;
    for entry in entries {
        let course = Course {
            id: Uuid::new_v4(),
            title: entry.title,
            topic: entry.topic,
            learning_formats: entry.learning_formats,
            bestseller: entry.bestseller,
            start_date: entry.start_date,
        };
        store.insert(course).await?;
        count += 1;
    }
    Ok(count)
}

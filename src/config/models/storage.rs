//! Storage configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Storage configuration
///
/// The stores are in-memory; the paths point at the JSON fixtures loaded
/// into them at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Seed file for user accounts
    #[serde(default = "default_users_seed")]
    pub users_seed_path: PathBuf,
    /// Seed file for the course catalog
    #[serde(default = "default_courses_seed")]
    pub courses_seed_path: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            users_seed_path: default_users_seed(),
            courses_seed_path: default_courses_seed(),
        }
    }
}

impl StorageConfig {
    /// Load from `USERS_SEED_PATH` / `COURSES_SEED_PATH`.
    pub fn from_env() -> Result<Self, String> {
        let mut config = Self::default();
        if let Ok(path) = std::env::var("USERS_SEED_PATH") {
            config.users_seed_path = PathBuf::from(path);
        }
        if let Ok(path) = std::env::var("COURSES_SEED_PATH") {
            config.courses_seed_path = PathBuf::from(path);
        }
        Ok(config)
    }
}

fn default_users_seed() -> PathBuf {
    PathBuf::from("data/users.json")
}

fn default_courses_seed() -> PathBuf {
    PathBuf::from("data/courses.json")
}

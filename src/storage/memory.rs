//! In-memory store implementations

use super::{CourseStore, UserStore};
use crate::domain::{Course, User};
use crate::utils::error::{ApiError, Result};
use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use uuid::Uuid;

/// User store keyed by username
#[derive(Debug, Default)]
pub struct MemoryUserStore {
    users: DashMap<String, User>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self {
            users: DashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn get_by_username(&self, username: &str) -> Result<User> {
        self.users
            .get(username)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| {
                ApiError::not_found(format!("User With Username {} Not Found", username))
            })
    }

    async fn insert(&self, user: User) -> Result<User> {
        match self.users.entry(user.username.clone()) {
            Entry::Occupied(_) => Err(ApiError::conflict(format!(
                "Username {} Not Available",
                user.username
            ))),
            Entry::Vacant(slot) => {
                let stored = user.clone();
                slot.insert(user);
                Ok(stored)
            }
        }
    }
}

/// Course store keyed by id
#[derive(Debug, Default)]
pub struct MemoryCourseStore {
    courses: DashMap<Uuid, Course>,
}

impl MemoryCourseStore {
    pub fn new() -> Self {
        Self {
            courses: DashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}

#[async_trait]
impl CourseStore for MemoryCourseStore {
    async fn list(&self) -> Result<Vec<Course>> {
        Ok(self
            .courses
            .iter()
            .map(|entry| entry.value().clone())
            .collect())
    }

    async fn get(&self, id: Uuid) -> Result<Course> {
        self.courses
            .get(&id)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| ApiError::not_found(format!("Course With Id {} Not Found", id)))
    }

    async fn insert(&self, course: Course) -> Result<Course> {
        let stored = course.clone();
        self.courses.insert(course.id, course);
        Ok(stored)
    }

    async fn update(&self, course: Course) -> Result<Course> {
        match self.courses.entry(course.id) {
            Entry::Occupied(mut slot) => {
                slot.insert(course.clone());
                Ok(course)
            }
            Entry::Vacant(_) => Err(ApiError::not_found(format!(
                "Course With Id {} Not Found",
                course.id
            ))),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<()> {
        self.courses
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| ApiError::not_found(format!("Course With Id {} Not Found", id)))
    }
}

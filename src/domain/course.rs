//! Course catalog types and CRUD request payloads

use crate::utils::error::{ApiError, Result};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Course catalog entry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: Uuid,
    pub title: String,
    pub topic: String,
    /// Offered delivery formats (at least one)
    pub learning_formats: Vec<LearningFormat>,
    pub bestseller: bool,
    /// ISO 8601 date the course starts
    pub start_date: String,
}

/// Delivery format for a course
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LearningFormat {
    Online,
    Classroom,
    Blended,
}

impl std::fmt::Display for LearningFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LearningFormat::Online => write!(f, "ONLINE"),
            LearningFormat::Classroom => write!(f, "CLASSROOM"),
            LearningFormat::Blended => write!(f, "BLENDED"),
        }
    }
}

/// Payload for creating a course
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCourseRequest {
    pub title: String,
    pub topic: String,
    pub learning_formats: Vec<LearningFormat>,
    pub bestseller: bool,
    pub start_date: String,
}

impl CreateCourseRequest {
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(ApiError::validation("Title must not be empty"));
        }
        if self.topic.trim().is_empty() {
            return Err(ApiError::validation("Topic must not be empty"));
        }
        if self.learning_formats.is_empty() {
            return Err(ApiError::validation(
                "At least one learning format is required",
            ));
        }
        if !is_iso_date(&self.start_date) {
            return Err(ApiError::validation("Start date must be an ISO 8601 date"));
        }
        Ok(())
    }
}

/// Payload for editing a course; absent fields are left untouched
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCourseRequest {
    pub title: Option<String>,
    pub topic: Option<String>,
    pub learning_formats: Option<Vec<LearningFormat>>,
    pub bestseller: Option<bool>,
    pub start_date: Option<String>,
}

impl UpdateCourseRequest {
    pub fn validate(&self) -> Result<()> {
        if let Some(title) = &self.title {
            if title.trim().is_empty() {
                return Err(ApiError::validation("Title must not be empty"));
            }
        }
        if let Some(topic) = &self.topic {
            if topic.trim().is_empty() {
                return Err(ApiError::validation("Topic must not be empty"));
            }
        }
        if let Some(formats) = &self.learning_formats {
            if formats.is_empty() {
                return Err(ApiError::validation(
                    "At least one learning format is required",
                ));
            }
        }
        if let Some(start_date) = &self.start_date {
            if !is_iso_date(start_date) {
                return Err(ApiError::validation("Start date must be an ISO 8601 date"));
            }
        }
        Ok(())
    }

    /// Merge the present fields into an existing course.
    pub fn apply(&self, course: &mut Course) {
        if let Some(title) = &self.title {
            course.title = title.clone();
        }
        if let Some(topic) = &self.topic {
            course.topic = topic.clone();
        }
        if let Some(formats) = &self.learning_formats {
            course.learning_formats = formats.clone();
        }
        if let Some(bestseller) = self.bestseller {
            course.bestseller = bestseller;
        }
        if let Some(start_date) = &self.start_date {
            course.start_date = start_date.clone();
        }
    }
}

// Accepts a plain ISO date or a full RFC 3339 timestamp.
fn is_iso_date(value: &str) -> bool {
    chrono::NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok()
        || chrono::DateTime::parse_from_rfc3339(value).is_ok()
}

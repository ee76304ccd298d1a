//! Domain models
//!
//! Users with their roles and departments, and the course catalog entries
//! they administer. Request payload types live next to the models they
//! create or edit.

pub mod course;
pub mod user;

pub use course::{Course, CreateCourseRequest, LearningFormat, UpdateCourseRequest};
pub use user::{CreateUserRequest, Department, LoginRequest, Role, User};

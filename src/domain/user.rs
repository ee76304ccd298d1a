//! User account types and authentication request payloads

use crate::utils::error::{ApiError, Result};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User account
///
/// `username` is the natural key; lookups and token claims both use it.
/// The password hash never serializes into a response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Stable identifier
    pub id: Uuid,
    /// Username (unique)
    pub username: String,
    /// Argon2 password hash
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Granted roles (at least one)
    pub roles: Vec<Role>,
    /// Home department
    pub department: Department,
}

/// User role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    /// Full administrative access
    Administrator,
    /// Department management
    Manager,
    /// Read-mostly day-to-day access
    Consultant,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Administrator => write!(f, "ADMINISTRATOR"),
            Role::Manager => write!(f, "MANAGER"),
            Role::Consultant => write!(f, "CONSULTANT"),
        }
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "ADMINISTRATOR" => Ok(Role::Administrator),
            "MANAGER" => Ok(Role::Manager),
            "CONSULTANT" => Ok(Role::Consultant),
            _ => Err(format!("Invalid role: {}", s)),
        }
    }
}

/// Department a user belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Department {
    Sales,
    Marketing,
    Accounting,
}

impl std::fmt::Display for Department {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Department::Sales => write!(f, "SALES"),
            Department::Marketing => write!(f, "MARKETING"),
            Department::Accounting => write!(f, "ACCOUNTING"),
        }
    }
}

impl std::str::FromStr for Department {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "SALES" => Ok(Department::Sales),
            "MARKETING" => Ok(Department::Marketing),
            "ACCOUNTING" => Ok(Department::Accounting),
            _ => Err(format!("Invalid department: {}", s)),
        }
    }
}

/// Login request payload
///
/// Transient carrier for credentials: never stored, never logged.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl LoginRequest {
    pub fn validate(&self) -> Result<()> {
        if self.username.trim().is_empty() {
            return Err(ApiError::validation("Username must not be empty"));
        }
        if self.password.is_empty() {
            return Err(ApiError::validation("Password must not be empty"));
        }
        Ok(())
    }
}

/// Payload for creating a user account
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUserRequest {
    pub username: String,
    pub password: String,
    pub roles: Vec<Role>,
    pub department: Department,
}

impl CreateUserRequest {
    pub fn validate(&self) -> Result<()> {
        if self.username.trim().is_empty() {
            return Err(ApiError::validation("Username must not be empty"));
        }
        if self.password.is_empty() {
            return Err(ApiError::validation("Password must not be empty"));
        }
        if self.roles.is_empty() {
            return Err(ApiError::validation("At least one role is required"));
        }
        Ok(())
    }
}

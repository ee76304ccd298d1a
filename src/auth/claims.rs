//! Token claims and their authorization projection

use crate::domain::{Department, Role};
use serde::{Deserialize, Serialize};

/// JWT claims structure
///
/// A signed snapshot of the principal at issuance time. The password hash
/// rides along deliberately: validation compares it against the currently
/// stored hash, so rotating a password invalidates every outstanding token
/// for that account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (username)
    pub sub: String,
    /// Password hash at issuance
    pub password_hash: String,
    /// Roles at issuance
    pub roles: Vec<Role>,
    /// Department at issuance
    pub department: Department,
    /// Issued at timestamp
    pub iat: u64,
    /// Expiration timestamp
    pub exp: u64,
}

impl Claims {
    /// Project out what permission checks need.
    pub fn principal_view(&self) -> PrincipalView {
        PrincipalView {
            username: self.sub.clone(),
            roles: self.roles.clone(),
            department: self.department,
        }
    }
}

/// What the permission gate sees of an authenticated principal
#[derive(Debug, Clone, PartialEq)]
pub struct PrincipalView {
    pub username: String,
    pub roles: Vec<Role>,
    pub department: Department,
}

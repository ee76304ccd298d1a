//! Middleware gates for authentication and authorization
//!
//! Protected routes are wrapped by [`RequireAuth`] and, where a role or
//! department restriction applies, additionally by [`RequirePermission`].

pub mod authentication;
pub mod helpers;
pub mod permissions;

mod tests;

pub use authentication::RequireAuth;
pub use permissions::{PermissionPolicy, RequirePermission};

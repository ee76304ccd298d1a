//! Permission middleware
//!
//! Evaluates a route's static role/department policy against the principal
//! embedded in the bearer token. Assumes [`RequireAuth`] already ran, so a
//! missing or undecodable header here is still rejected as unauthenticated.
//!
//! [`RequireAuth`]: crate::server::middleware::RequireAuth

use crate::auth::PrincipalView;
use crate::domain::{Department, Role};
use crate::server::middleware::helpers::authorization_header;
use crate::server::AppState;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::web;
use futures::future::{ready, Ready};
use std::future::Future;
use std::pin::Pin;
use tracing::debug;

use crate::utils::error::ApiError;

/// Static role/department requirements declared alongside a route
#[derive(Debug, Clone, Copy)]
pub struct PermissionPolicy {
    /// Roles granting access; one match suffices
    pub roles: &'static [Role],
    /// Departments granting access
    pub departments: &'static [Department],
}

impl PermissionPolicy {
    /// Create a new policy
    pub const fn new(roles: &'static [Role], departments: &'static [Department]) -> Self {
        Self { roles, departments }
    }

    /// A principal passes iff it holds at least one allowed role and its
    /// department is allowed. Both conditions are required.
    pub fn allows(&self, principal: &PrincipalView) -> bool {
        let role_allowed = principal.roles.iter().any(|role| self.roles.contains(role));
        let department_allowed = self.departments.contains(&principal.department);
        role_allowed && department_allowed
    }
}

/// Permission gate for Actix-web
pub struct RequirePermission {
    policy: PermissionPolicy,
}

impl RequirePermission {
    /// Create a gate enforcing `policy`
    pub fn new(policy: PermissionPolicy) -> Self {
        Self { policy }
    }
}

impl<S, B> Transform<S, ServiceRequest> for RequirePermission
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = actix_web::Error;
    type InitError = ();
    type Transform = RequirePermissionService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequirePermissionService {
            service,
            policy: self.policy,
        }))
    }
}

/// Service implementation for the permission gate
pub struct RequirePermissionService<S> {
    service: S,
    policy: PermissionPolicy,
}

impl<S, B> Service<ServiceRequest> for RequirePermissionService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = actix_web::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let header = authorization_header(req.headers());
        let state = req.app_data::<web::Data<AppState>>().cloned();
        let policy = self.policy;
        let fut = self.service.call(req);

        Box::pin(async move {
            let state = state
                .ok_or_else(|| ApiError::internal("Application state is not configured"))?;

            let token = header
                .ok_or_else(|| ApiError::unauthenticated("No Token Provided"))?;

            let principal = state.auth.tokens().principal_view(&token)?;

            if policy.allows(&principal) {
                fut.await
            } else {
                debug!(
                    username = %principal.username,
                    "Principal rejected by route policy"
                );
                Err(ApiError::forbidden("Insufficient permissions").into())
            }
        })
    }
}

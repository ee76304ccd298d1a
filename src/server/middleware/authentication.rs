//! Authentication middleware
//!
//! Rejects requests whose Authorization header is missing or does not carry
//! a valid, unexpired, unrevoked token. Claims are not attached to the
//! request; later stages re-decode the header themselves.

use crate::server::middleware::helpers::authorization_header;
use crate::server::AppState;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::web;
use futures::future::{ready, Ready};
use std::future::Future;
use std::pin::Pin;
use tracing::debug;

use crate::utils::error::ApiError;

/// Authentication gate for Actix-web
pub struct RequireAuth;

impl<S, B> Transform<S, ServiceRequest> for RequireAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = actix_web::Error;
    type InitError = ();
    type Transform = RequireAuthService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireAuthService { service }))
    }
}

/// Service implementation for the authentication gate
pub struct RequireAuthService<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for RequireAuthService<S>
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
        let fut = self.service.call(req);

        Box::pin(async move {
            let state = state
                .ok_or_else(|| ApiError::internal("Application state is not configured"))?;

            let token = match header {
                Some(token) => token,
                None => return Err(ApiError::unauthenticated("No Token Provided").into()),
            };

            match state.auth.tokens().validate(&token).await {
                Ok(true) => {
                    debug!("Token validated");
                    fut.await
                }
                Ok(false) => Err(ApiError::unauthenticated("Invalid Token").into()),
                Err(e) => Err(e.into()),
            }
        })
    }
}

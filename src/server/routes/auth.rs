//! Authentication endpoints
//!
//! Login exchanges credentials for a bearer token; logout revokes the
//! presented token. Both endpoints are public: logout authenticates the
//! caller through the token it revokes.

use crate::domain::LoginRequest;
use crate::server::middleware::helpers::authorization_header;
use crate::server::AppState;
use crate::utils::error::{ApiError, Result};
use actix_web::{web, HttpRequest, HttpResponse};
use serde::Serialize;

/// Configure authentication routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/auth")
            .route("/login", web::post().to(login))
            .route("/logout", web::delete().to(logout)),
    );
}

/// Login response
#[derive(Debug, Serialize)]
struct TokenResponse {
    token: String,
}

/// User login endpoint
async fn login(
    state: web::Data<AppState>,
    request: web::Json<LoginRequest>,
) -> Result<HttpResponse> {
    request.validate()?;

    let token = state.auth.login(&request).await?;

    Ok(HttpResponse::Ok().json(TokenResponse { token }))
}

/// User logout endpoint
async fn logout(state: web::Data<AppState>, request: HttpRequest) -> Result<HttpResponse> {
    let token = authorization_header(request.headers())
        .ok_or_else(|| ApiError::unauthenticated("No Token Provided"))?;

    state.auth.logout(&token).await?;

    Ok(HttpResponse::NoContent().finish())
}

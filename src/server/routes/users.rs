//! User management endpoints

use crate::auth::password::hash_password;
use crate::domain::{CreateUserRequest, User};
use crate::server::AppState;
use crate::storage::UserStore;
use crate::utils::error::Result;
use actix_web::{web, HttpResponse};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

/// Configure user routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/users").route("", web::post().to(create_user)));
}

/// User creation response
#[derive(Debug, Serialize)]
struct UserResponse {
    user: User,
}

/// User registration endpoint
async fn create_user(
    state: web::Data<AppState>,
    request: web::Json<CreateUserRequest>,
) -> Result<HttpResponse> {
    let request = request.into_inner();
    request.validate()?;

    info!("User creation attempt: {}", request.username);

    let password_hash = hash_password(&request.password)?;
    let user = User {
        id: Uuid::new_v4(),
        username: request.username,
        password_hash,
        roles: request.roles,
        department: request.department,
    };

    let created = state.storage.users.insert(user).await?;
    info!("User created: {}", created.username);

    Ok(HttpResponse::Created().json(UserResponse { user: created }))
}

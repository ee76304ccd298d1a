//! HTTP server core implementation
//!
//! This module provides the HttpServer struct and its core methods.

use crate::auth::{AuthService, RevocationSet, TokenService};
use crate::config::{AppConfig, ServerConfig};
use crate::server::routes;
use crate::server::state::AppState;
use crate::storage::{StorageLayer, UserStore};
use crate::utils::error::{ApiError, Result};
use actix_cors::Cors;
use actix_web::{web, App, HttpRequest, HttpServer as ActixHttpServer};
use std::sync::Arc;
use tracing::info;
use tracing_actix_web::TracingLogger;

/// HTTP server
pub struct HttpServer {
    /// Server configuration
    config: ServerConfig,
    /// Application state
    state: AppState,
}

impl HttpServer {
    /// Create a new HTTP server
    ///
    /// Builds the storage layer, the revocation set, and the auth services,
    /// then bundles them into the shared application state.
    pub async fn new(config: &AppConfig) -> Result<Self> {
        info!("Creating HTTP server");

        let storage = StorageLayer::new(&config.storage).await;

        let users: Arc<dyn UserStore> = storage.users.clone();
        let revoked = Arc::new(RevocationSet::new());
        let tokens = Arc::new(TokenService::new(&config.auth, users.clone(), revoked));
        let auth = AuthService::new(users, tokens);

        let state = AppState::new(config.clone(), auth, storage);

        Ok(Self {
            config: config.server.clone(),
            state,
        })
    }

    /// Create the Actix-web application
    pub fn create_app(
        state: web::Data<AppState>,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse<
                impl actix_web::body::MessageBody<Error = impl Into<actix_web::Error>>,
            >,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(state)
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .wrap(Cors::permissive())
            .wrap(TracingLogger::default())
            .configure(routes::health::configure_routes)
            .configure(routes::auth::configure_routes)
            .configure(routes::users::configure_routes)
            .configure(routes::courses::configure_routes)
            .default_service(web::route().to(routes::route_not_found))
    }

    /// Start the HTTP server
    pub async fn start(self) -> Result<()> {
        let bind_addr = self.config.address();

        info!("Starting HTTP server on {}", bind_addr);

        let state = web::Data::new(self.state);

        let server = ActixHttpServer::new(move || Self::create_app(state.clone()))
            .bind(&bind_addr)
            .map_err(|e| {
                ApiError::internal(format!("Failed to bind server to {}: {}", bind_addr, e))
            })?
            .run();

        info!("HTTP server listening on {}", bind_addr);

        server
            .await
            .map_err(|e| ApiError::internal(format!("Server error: {}", e)))?;

        info!("HTTP server stopped");
        Ok(())
    }

    /// Get server configuration
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Get application state
    pub fn state(&self) -> &AppState {
        &self.state
    }
}

/// Run the server with the provided configuration
pub async fn run(config: AppConfig) -> Result<()> {
    let server = HttpServer::new(&config).await?;
    server.start().await
}

/// Map body deserialization failures into the shared error envelope
fn json_error_handler(
    err: actix_web::error::JsonPayloadError,
    _req: &HttpRequest,
) -> actix_web::Error {
    ApiError::validation(err.to_string()).into()
}

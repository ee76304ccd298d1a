//! HTTP server implementation
//!
//! This module provides the HTTP server, its middleware gates, and the
//! route handlers.

// Submodules
pub mod middleware;
pub mod routes;

pub mod server;
pub mod state;


pub use server::{run, HttpServer};
pub use state::AppState;

//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /health`       - Health check: version, platform count (public)
//! - `/api/validate`      - Ad copy character limit validation (public)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Panic recovery** - Panics surface as `500` JSON errors
//! - **CORS** - Permissive headers on every response, preflight handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{catch_panic, cors, tracing};
use axum::Router;
use axum::routing::get;

/// Constructs the application router with all routes and middleware.
///
/// The CORS layer is outermost so even panic responses carry the headers.
pub fn app_router() -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api::routes::routes())
        .layer(tracing::layer())
        .layer(catch_panic::layer())
        .layer(cors::layer())
}

//! Handler for health check endpoint.

use axum::Json;

use crate::api::dto::health::HealthResponse;
use crate::domain::limits;

/// Returns service health status.
///
/// # Endpoint
///
/// `GET /health`
///
/// The service is stateless with a compiled-in limit table, so there are
/// no components to probe; the check reports the crate version and the
/// number of configured platforms.
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "platforms": 3
/// }
/// ```
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        platforms: limits::supported_platforms().len(),
    })
}

//! CORS middleware for browser clients.

use axum::http::{Method, header};
use tower_http::cors::{Any, CorsLayer};

/// Creates the permissive CORS layer applied to every route.
///
/// # Headers
///
/// - `Access-Control-Allow-Origin: *`
/// - Allowed methods: `GET`, `POST`, `OPTIONS`
/// - Allowed headers: `Content-Type`
///
/// The layer answers `OPTIONS` preflight requests directly with `200` and
/// an empty body before any handler runs. It must be the outermost layer
/// so error responses carry the headers too and browser clients can read
/// their bodies.
pub fn layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}

//! API route configuration.

use crate::api::handlers::{
    method_not_allowed_handler, validate_get_handler, validate_post_handler,
};
use axum::{Router, routing::get};

/// API routes for ad copy validation.
///
/// # Endpoints
///
/// - `GET  /validate` - usage document, single-item query form, or
///   `data` JSON form
/// - `POST /validate` - batch validation of `{platform, items}`
///
/// Any other method on `/validate` answers `405`; `OPTIONS` is handled by
/// the CORS layer before routing.
pub fn routes() -> Router {
    Router::new().route(
        "/validate",
        get(validate_get_handler)
            .post(validate_post_handler)
            .fallback(method_not_allowed_handler),
    )
}

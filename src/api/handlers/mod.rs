//! HTTP request handlers for API endpoints.

pub mod health;
pub mod validate;

pub use health::health_handler;
pub use validate::{method_not_allowed_handler, validate_get_handler, validate_post_handler};

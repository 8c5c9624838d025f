//! Top-level panic recovery middleware.

use std::any::Any;

use axum::response::{IntoResponse, Response};
use serde_json::json;
use tower_http::catch_panic::CatchPanicLayer;

use crate::error::AppError;

type PanicHandler = fn(Box<dyn Any + Send + 'static>) -> Response;

/// Creates a layer that converts panics anywhere in the pipeline into a
/// `500` JSON error carrying the panic message.
pub fn layer() -> CatchPanicLayer<PanicHandler> {
    CatchPanicLayer::custom(handle_panic as PanicHandler)
}

fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "unexpected internal error".to_string()
    };

    tracing::error!("request handler panicked: {message}");

    AppError::internal(message, json!({})).into_response()
}

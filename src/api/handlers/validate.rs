//! Handlers for the ad copy validation endpoint.

use axum::Json;
use axum::extract::Query;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::api::dto::validate::{
    GET_DATA_USAGE, POST_USAGE, UsageResponse, ValidateRequest, ValidateResponse, timestamp_now,
};
use crate::domain::{limits, validation};
use crate::error::AppError;

/// Validates a batch of ad copy items against platform character limits.
///
/// # Endpoint
///
/// `POST /api/validate`
///
/// # Batch Processing
///
/// Items are processed independently. A malformed item or an unsupported
/// type produces an inline `error` entry in the results; only a bad
/// request shape or an unknown platform fails the whole call.
///
/// # Request Body
///
/// ```json
/// {
///   "platform": "google_ads",
///   "items": [
///     { "text": "Spring sale on hiking gear", "type": "headline" }
///   ]
/// }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "platform": "google_ads",
///   "method": "POST",
///   "timestamp": "2026-01-01T00:00:00.000Z",
///   "summary": {
///     "total_items": 1,
///     "valid_items": 1,
///     "invalid_items": 0,
///     "error_items": 0,
///     "all_valid": true
///   },
///   "results": [
///     {
///       "index": 0,
///       "text": "Spring sale on hiking gear",
///       "type": "headline",
///       "character_count": 26,
///       "character_limit": 30,
///       "is_valid": true,
///       "overage": 0
///     }
///   ]
/// }
/// ```
///
/// A `violations` array is present only when at least one item exceeded
/// its limit.
///
/// # Errors
///
/// Returns 400 Bad Request for malformed JSON, a payload missing
/// `platform`/`items`, or an unknown platform.
pub async fn validate_post_handler(body: String) -> Result<Json<ValidateResponse>, AppError> {
    let payload: Value = serde_json::from_str(&body).map_err(|e| {
        AppError::bad_request(
            format!("Invalid JSON body: {e}"),
            json!({ "usage": POST_USAGE }),
        )
    })?;

    let request = ValidateRequest::from_value(&payload)?;
    run_validation(request, "POST")
}

/// Query parameters accepted by the GET form of the endpoint.
#[derive(Debug, Deserialize)]
pub struct ValidateParams {
    pub text: Option<String>,
    #[serde(rename = "type")]
    pub field_type: Option<String>,
    pub platform: Option<String>,
    pub data: Option<String>,
}

/// GET form of the validation endpoint.
///
/// # Endpoint
///
/// `GET /api/validate`
///
/// Three forms are accepted:
///
/// - `?text=...&type=...` (+ optional `platform`, default `google_ads`) -
///   validates a single item
/// - `?data=<url-encoded JSON>` - full `{platform, items}` payload
/// - no recognized parameters - returns the usage document
///
/// # Errors
///
/// Returns 400 Bad Request for malformed JSON in `data` or an unknown
/// platform.
pub async fn validate_get_handler(
    Query(params): Query<ValidateParams>,
) -> Result<Response, AppError> {
    if let (Some(text), Some(field_type)) =
        (non_empty(&params.text), non_empty(&params.field_type))
    {
        let platform = params
            .platform
            .as_deref()
            .unwrap_or(limits::DEFAULT_PLATFORM)
            .to_string();
        let request = ValidateRequest {
            platform,
            items: vec![json!({ "text": text, "type": field_type })],
        };
        return Ok(run_validation(request, "GET")?.into_response());
    }

    if let Some(data) = params.data.as_deref() {
        let payload: Value = serde_json::from_str(data).map_err(|e| {
            AppError::bad_request(
                format!("Invalid JSON in 'data' parameter: {e}"),
                json!({ "usage": GET_DATA_USAGE }),
            )
        })?;
        let request = ValidateRequest::from_value(&payload)?;
        return Ok(run_validation(request, "GET")?.into_response());
    }

    Ok(Json(UsageResponse::new()).into_response())
}

/// Fallback for unsupported HTTP methods on the validation route.
///
/// `OPTIONS` never reaches this handler; the CORS layer answers preflights
/// directly.
pub async fn method_not_allowed_handler() -> AppError {
    AppError::method_not_allowed()
}

/// Shared pipeline: platform precondition, per-item checks, aggregation.
///
/// The platform is checked before any item is touched; an unknown platform
/// short-circuits the whole batch.
fn run_validation(
    request: ValidateRequest,
    method: &'static str,
) -> Result<Json<ValidateResponse>, AppError> {
    if !limits::is_supported_platform(&request.platform) {
        return Err(AppError::bad_request(
            format!("Unsupported platform '{}'", request.platform),
            json!({ "supported_platforms": limits::supported_platforms() }),
        ));
    }

    let results = validation::check_items(&request.platform, &request.items);
    let summary = validation::summarize(&results);
    let violations = validation::collect_violations(&results);

    Ok(Json(ValidateResponse {
        platform: request.platform,
        method,
        timestamp: timestamp_now(),
        summary,
        results,
        violations,
    }))
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

//! DTOs for the validation endpoint.

use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use serde_json::{Value, json};

use crate::domain::limits;
use crate::domain::validation::{ItemCheck, ValidationSummary, Violation};
use crate::error::AppError;

/// Usage hint for the POST form, shown alongside malformed-request errors.
pub const POST_USAGE: &str =
    r#"POST {"platform": "google_ads", "items": [{"text": "...", "type": "headline"}]}"#;

/// Usage hint for the single-item GET form.
pub const GET_USAGE: &str = "GET ?text=...&type=headline&platform=google_ads";

/// Usage hint for the GET form carrying a full payload.
pub const GET_DATA_USAGE: &str = r#"GET ?data=<url-encoded {"platform": ..., "items": [...]}>"#;

/// A parsed validation request: the target platform plus the raw items.
///
/// Items stay as raw JSON values; per-item structure problems are reported
/// inline in the results rather than failing the whole request.
#[derive(Debug)]
pub struct ValidateRequest {
    pub platform: String,
    pub items: Vec<Value>,
}

impl ValidateRequest {
    /// Extracts `platform` and `items` from a decoded JSON payload.
    ///
    /// # Errors
    ///
    /// Returns a 400 [`AppError`] echoing what was received when either
    /// field is missing or has the wrong shape.
    pub fn from_value(payload: &Value) -> Result<Self, AppError> {
        let platform = payload.get("platform").and_then(Value::as_str);
        let items = payload.get("items").and_then(Value::as_array);

        let (Some(platform), Some(items)) = (platform, items) else {
            return Err(AppError::bad_request(
                "Missing required fields: 'platform' and 'items'",
                json!({
                    "received": {
                        "platform": payload.get("platform"),
                        "items": payload.get("items"),
                    },
                    "usage": POST_USAGE,
                }),
            ));
        };

        Ok(Self {
            platform: platform.to_string(),
            items: items.clone(),
        })
    }
}

/// Success envelope for a processed validation batch.
#[derive(Debug, Serialize)]
pub struct ValidateResponse {
    pub platform: String,
    pub method: &'static str,
    pub timestamp: String,
    pub summary: ValidationSummary,
    pub results: Vec<ItemCheck>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub violations: Option<Vec<Violation>>,
}

/// Response timestamp in RFC 3339 with millisecond precision.
pub fn timestamp_now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Usage/help document returned for a GET without recognized parameters.
#[derive(Debug, Serialize)]
pub struct UsageResponse {
    pub message: &'static str,
    pub version: &'static str,
    pub usage: UsageExamples,
    pub platforms: Vec<&'static str>,
    pub limits: Value,
}

/// Request examples for each accepted form.
#[derive(Debug, Serialize)]
pub struct UsageExamples {
    pub get: &'static str,
    pub get_json: &'static str,
    pub post: &'static str,
}

impl UsageResponse {
    /// Builds the usage document from the limit table.
    pub fn new() -> Self {
        Self {
            message: "Ad copy character limit checker",
            version: env!("CARGO_PKG_VERSION"),
            usage: UsageExamples {
                get: GET_USAGE,
                get_json: GET_DATA_USAGE,
                post: POST_USAGE,
            },
            platforms: limits::supported_platforms(),
            limits: limits_json(),
        }
    }
}

impl Default for UsageResponse {
    fn default() -> Self {
        Self::new()
    }
}

/// The full limit table as a JSON object, for the usage document.
fn limits_json() -> Value {
    let mut table = serde_json::Map::new();
    for platform in limits::supported_platforms() {
        let mut fields = serde_json::Map::new();
        for (field_type, limit) in limits::platform_types(platform).unwrap_or(&[]) {
            fields.insert((*field_type).to_string(), json!(limit));
        }
        table.insert(platform.to_string(), Value::Object(fields));
    }
    Value::Object(table)
}

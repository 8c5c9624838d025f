mod common;

use axum::http::{HeaderValue, Method, header};
use serde_json::json;

#[tokio::test]
async fn test_options_preflight_short_circuits() {
    let server = common::test_server();

    let response = server
        .method(Method::OPTIONS, "/api/validate")
        .add_header(header::ORIGIN, HeaderValue::from_static("https://example.com"))
        .add_header(
            header::ACCESS_CONTROL_REQUEST_METHOD,
            HeaderValue::from_static("POST"),
        )
        .await;

    response.assert_status_ok();
    assert_eq!(response.text(), "");
    assert_eq!(
        response.headers().get("access-control-allow-origin"),
        Some(&HeaderValue::from_static("*"))
    );
}

#[tokio::test]
async fn test_cors_headers_on_success() {
    let server = common::test_server();

    let response = server
        .get("/api/validate")
        .add_header(header::ORIGIN, HeaderValue::from_static("https://example.com"))
        .await;

    response.assert_status_ok();
    assert_eq!(
        response.headers().get("access-control-allow-origin"),
        Some(&HeaderValue::from_static("*"))
    );
}

#[tokio::test]
async fn test_cors_headers_on_error_response() {
    let server = common::test_server();

    let response = server
        .post("/api/validate")
        .add_header(header::ORIGIN, HeaderValue::from_static("https://example.com"))
        .json(&json!({ "platform": "tiktok_ads", "items": [] }))
        .await;

    response.assert_status_bad_request();
    assert_eq!(
        response.headers().get("access-control-allow-origin"),
        Some(&HeaderValue::from_static("*"))
    );
}

#[tokio::test]
async fn test_unsupported_method_answers_405() {
    let server = common::test_server();

    let response = server.delete("/api/validate").await;

    response.assert_status(axum::http::StatusCode::METHOD_NOT_ALLOWED);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "method_not_allowed");
}

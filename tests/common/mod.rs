#![allow(dead_code)]

use ad_limit_checker::routes::app_router;
use axum_test::TestServer;
use serde_json::{Value, json};

/// Builds a test server running the full application router.
pub fn test_server() -> TestServer {
    TestServer::new(app_router()).expect("failed to start test server")
}

/// Builds a `{platform, items}` request payload.
pub fn batch(platform: &str, items: Value) -> Value {
    json!({ "platform": platform, "items": items })
}

mod common;

#[tokio::test]
async fn test_health_endpoint_success() {
    let server = common::test_server();

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(json["platforms"], 3);
}

#[tokio::test]
async fn test_health_endpoint_structure() {
    let server = common::test_server();

    let response = server.get("/health").await;

    let json = response.json::<serde_json::Value>();
    assert!(json.get("status").is_some());
    assert!(json.get("version").is_some());
    assert!(json.get("platforms").is_some());
}

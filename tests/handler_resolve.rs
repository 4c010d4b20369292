mod common;

use common::T;
use expiring_shortener::domain::repositories::MappingStore;
use serde_json::json;

#[tokio::test]
async fn test_resolve_redirects() {
    let app = common::spawn_app();
    common::insert_mapping(&app.store, "abc12", "https://example.com/page", T + 600).await;

    let response = app.server.get("/abc12").await;

    assert_eq!(response.status_code(), 301);
    assert_eq!(response.header("location"), "https://example.com/page");
    assert_eq!(response.header("cache-control"), "no-cache");
    assert_eq!(response.header("access-control-allow-origin"), "*");
}

#[tokio::test]
async fn test_resolve_refreshes_expiry() {
    let app = common::spawn_app();
    common::insert_mapping(&app.store, "abc12", "https://example.com/page", T + 600).await;

    app.clock.advance(100);
    let response = app.server.get("/abc12").await;
    assert_eq!(response.status_code(), 301);

    let stored = app.store.get("abc12").await.unwrap().unwrap();
    assert_eq!(stored.expiry, T + 700);
    assert_eq!(stored.long_url, "https://example.com/page");
}

#[tokio::test]
async fn test_resolve_at_exact_expiry_still_redirects() {
    let app = common::spawn_app();
    common::insert_mapping(&app.store, "edge1", "https://example.com", T).await;

    let response = app.server.get("/edge1").await;

    assert_eq!(response.status_code(), 301);
    assert_eq!(
        app.store.get("edge1").await.unwrap().unwrap().expiry,
        T + 600
    );
}

#[tokio::test]
async fn test_resolve_not_found() {
    let app = common::spawn_app();

    let response = app.server.get("/nope1").await;

    response.assert_status_not_found();
    assert_eq!(
        response.json::<serde_json::Value>(),
        json!({ "error": "URL not found" })
    );
}

#[tokio::test]
async fn test_resolve_expired() {
    let app = common::spawn_app();
    common::insert_mapping(&app.store, "old01", "https://example.com", T - 1).await;

    let response = app.server.get("/old01").await;

    response.assert_status_not_found();
    assert_eq!(
        response.json::<serde_json::Value>(),
        json!({ "error": "URL has expired" })
    );

    // Expired records are not refreshed.
    let stored = app.store.get("old01").await.unwrap().unwrap();
    assert_eq!(stored.expiry, T - 1);
}

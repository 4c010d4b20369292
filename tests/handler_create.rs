mod common;

use axum::http::Method;
use common::{HOST, T};
use expiring_shortener::domain::repositories::MappingStore;
use expiring_shortener::utils::request_context::ContextSettings;
use serde_json::json;

#[tokio::test]
async fn test_create_with_custom_suffix() {
    let app = common::spawn_app();

    let response = app
        .server
        .post("/")
        .add_header("Host", HOST)
        .json(&json!({ "url": "https://example.com/page", "suffix": "abc12" }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(
        json,
        json!({ "short_url": "https://links.example.com/abc12", "expiry": T + 600 })
    );

    let stored = app.store.get("abc12").await.unwrap().unwrap();
    assert_eq!(stored.long_url, "https://example.com/page");
    assert_eq!(stored.expiry, T + 600);
}

#[tokio::test]
async fn test_create_generates_suffix() {
    let app = common::spawn_app();

    let response = app
        .server
        .post("/")
        .add_header("Host", HOST)
        .json(&json!({ "url": "https://example.com" }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let short_url = json["short_url"].as_str().unwrap();
    let suffix = short_url
        .strip_prefix("https://links.example.com/")
        .unwrap();

    assert_eq!(suffix.len(), 5);
    assert!(suffix.chars().all(|c| c.is_ascii_alphanumeric()));

    let stored = app.store.get(suffix).await.unwrap();
    assert!(stored.is_some());
}

#[tokio::test]
async fn test_create_response_headers() {
    let app = common::spawn_app();

    let response = app
        .server
        .post("/")
        .add_header("Host", HOST)
        .json(&json!({ "url": "https://example.com" }))
        .await;

    response.assert_status_ok();
    assert_eq!(response.header("content-type"), "application/json");
    assert_eq!(response.header("access-control-allow-origin"), "*");
    assert_eq!(response.header("access-control-allow-methods"), "POST");
    assert_eq!(response.header("access-control-allow-headers"), "Content-Type");
}

#[tokio::test]
async fn test_create_overwrites_existing_suffix() {
    let app = common::spawn_app();

    for url in ["https://first.com", "https://second.com"] {
        app.server
            .post("/")
            .add_header("Host", HOST)
            .json(&json!({ "url": url, "suffix": "same1" }))
            .await
            .assert_status_ok();
    }

    let stored = app.store.get("same1").await.unwrap().unwrap();
    assert_eq!(stored.long_url, "https://second.com");
    assert_eq!(app.store.len(), 1);
}

#[tokio::test]
async fn test_create_invalid_url() {
    let app = common::spawn_app();

    let response = app
        .server
        .post("/")
        .add_header("Host", HOST)
        .json(&json!({ "url": "not-a-url", "suffix": "bad01" }))
        .await;

    response.assert_status_bad_request();
    assert_eq!(
        response.json::<serde_json::Value>(),
        json!({ "error": "Invalid URL" })
    );
    assert!(app.store.is_empty());
}

#[tokio::test]
async fn test_create_missing_url_field() {
    let app = common::spawn_app();

    let response = app
        .server
        .post("/")
        .add_header("Host", HOST)
        .json(&json!({ "suffix": "abc12" }))
        .await;

    assert_eq!(response.status_code(), 500);

    let json = response.json::<serde_json::Value>();
    assert!(json["error"].as_str().unwrap().contains("url"));
    assert!(app.store.is_empty());
}

#[tokio::test]
async fn test_create_malformed_body() {
    let app = common::spawn_app();

    let response = app
        .server
        .post("/")
        .add_header("Host", HOST)
        .text("{not json")
        .await;

    assert_eq!(response.status_code(), 500);

    let json = response.json::<serde_json::Value>();
    assert!(
        json["error"]
            .as_str()
            .unwrap()
            .starts_with("Invalid request body")
    );
    assert!(app.store.is_empty());
}

#[tokio::test]
async fn test_create_rejects_url_with_newline() {
    let app = common::spawn_app();

    let response = app
        .server
        .post("/")
        .add_header("Host", HOST)
        .json(&json!({ "url": "https://example.com/a\nb", "suffix": "tab01" }))
        .await;

    response.assert_status_bad_request();
    assert_eq!(
        response.json::<serde_json::Value>(),
        json!({ "error": "Invalid URL" })
    );
    assert!(app.store.is_empty());

    app.server.get("/tab01").await.assert_status_not_found();
}

#[tokio::test]
async fn test_create_uses_deployment_stage() {
    let app = common::spawn_app_with(ContextSettings {
        default_stage: Some("prod".to_string()),
        ..ContextSettings::default()
    });

    let response = app
        .server
        .post("/")
        .add_header("Host", "api.example.com")
        .json(&json!({ "url": "https://example.com", "suffix": "abc12" }))
        .await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<serde_json::Value>()["short_url"],
        "https://api.example.com/prod/abc12"
    );
}

#[tokio::test]
async fn test_create_behind_proxy_uses_forwarded_headers() {
    let app = common::spawn_app_with(ContextSettings {
        behind_proxy: true,
        ..ContextSettings::default()
    });

    let response = app
        .server
        .post("/")
        .add_header("Host", "10.0.0.7:3000")
        .add_header("X-Forwarded-Host", "sho.rt")
        .add_header("X-Forwarded-Proto", "https")
        .add_header("X-Forwarded-Prefix", "/staging")
        .json(&json!({ "url": "https://example.com", "suffix": "abc12" }))
        .await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<serde_json::Value>()["short_url"],
        "https://sho.rt/staging/abc12"
    );
}

#[tokio::test]
async fn test_preflight() {
    let app = common::spawn_app();

    let response = app.server.method(Method::OPTIONS, "/").await;

    assert_eq!(response.status_code(), 204);
    assert_eq!(response.header("access-control-allow-origin"), "*");
    assert_eq!(response.header("access-control-allow-methods"), "POST");
}

mod common;

use common::{HOST, T};
use serde_json::json;

#[tokio::test]
async fn test_link_lives_while_used() {
    let app = common::spawn_app();

    let created = app
        .server
        .post("/")
        .add_header("Host", HOST)
        .json(&json!({ "url": "https://example.com/docs", "suffix": "docs1" }))
        .await;
    created.assert_status_ok();
    assert_eq!(created.json::<serde_json::Value>()["expiry"], T + 600);

    // Each visit inside the window pushes expiry another 600s out.
    for _ in 0..3 {
        app.clock.advance(500);
        let response = app.server.get("/docs1").await;
        assert_eq!(response.status_code(), 301);
        assert_eq!(response.header("location"), "https://example.com/docs");
    }

    app.clock.advance(601);
    let response = app.server.get("/docs1").await;
    response.assert_status_not_found();
    assert_eq!(
        response.json::<serde_json::Value>(),
        json!({ "error": "URL has expired" })
    );
}

#[tokio::test]
async fn test_recreate_revives_expired_suffix() {
    let app = common::spawn_app();
    common::insert_mapping(&app.store, "gone1", "https://old.example.com", T - 10).await;

    app.server.get("/gone1").await.assert_status_not_found();

    app.server
        .post("/")
        .add_header("Host", HOST)
        .json(&json!({ "url": "https://new.example.com", "suffix": "gone1" }))
        .await
        .assert_status_ok();

    let response = app.server.get("/gone1").await;
    assert_eq!(response.status_code(), 301);
    assert_eq!(response.header("location"), "https://new.example.com");
}

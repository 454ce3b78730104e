mod common;

use axum::http::StatusCode;
use serde_json::json;
use short_redirect::domain::repositories::ExpiringStore;
use std::time::Duration;

#[tokio::test]
async fn test_redirect_success() {
    let (state, store) = common::create_test_state();
    common::store_mapping(&store, "redir01", "https://example.com/target", false).await;
    let server = common::test_server(state);

    let response = server.get("/redir01").await;

    assert_eq!(response.status_code(), StatusCode::TEMPORARY_REDIRECT);
    let location = response.header("location");
    assert_eq!(location, "https://example.com/target");
}

#[tokio::test]
async fn test_redirect_is_repeatable() {
    let (state, store) = common::create_test_state();
    common::store_mapping(&store, "repeat1", "https://example.com", false).await;
    let server = common::test_server(state);

    for _ in 0..3 {
        let response = server.get("/repeat1").await;
        assert_eq!(response.status_code(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(response.header("location"), "https://example.com");
    }

    assert!(store.get("repeat1").await.unwrap().is_some());
}

#[tokio::test]
async fn test_redirect_single_use_consumed() {
    let (state, store) = common::create_test_state();
    common::store_mapping(&store, "once001", "https://example.com/secret", true).await;
    let server = common::test_server(state);

    let first = server.get("/once001").await;
    assert_eq!(first.status_code(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(first.header("location"), "https://example.com/secret");

    assert!(store.get("once001").await.unwrap().is_none());

    let second = server.get("/once001").await;
    second.assert_status_not_found();
}

#[tokio::test]
async fn test_redirect_not_found() {
    let (state, _store) = common::create_test_state();
    let server = common::test_server(state);

    let response = server.get("/nothere").await;

    response.assert_status_not_found();
}

#[tokio::test]
async fn test_redirect_root_is_not_found() {
    let (state, _store) = common::create_test_state();
    let server = common::test_server(state);

    let response = server.get("/").await;

    response.assert_status_not_found();
}

#[tokio::test]
async fn test_redirect_nested_path_is_not_found() {
    let (state, store) = common::create_test_state();
    common::store_mapping(&store, "redir01", "https://example.com", false).await;
    let server = common::test_server(state);

    let response = server.get("/redir01/extra").await;

    response.assert_status_not_found();
}

#[tokio::test]
async fn test_redirect_corrupt_entry_is_not_found() {
    let (state, store) = common::create_test_state();
    store
        .set("corrupt", "this is not json", None)
        .await
        .unwrap();
    let server = common::test_server(state);

    let response = server.get("/corrupt").await;

    response.assert_status_not_found();
    // Corrupt entries are left for inspection
    assert!(store.get("corrupt").await.unwrap().is_some());
}

#[tokio::test(start_paused = true)]
async fn test_redirect_after_expiry_is_not_found() {
    let (state, store) = common::create_test_state();
    common::store_expiring_mapping(
        &store,
        "hourly1",
        "https://example.com",
        Duration::from_secs(3600),
    )
    .await;
    let server = common::test_server(state);

    let response = server.get("/hourly1").await;
    assert_eq!(response.status_code(), StatusCode::TEMPORARY_REDIRECT);

    tokio::time::advance(Duration::from_secs(3601)).await;

    let response = server.get("/hourly1").await;
    response.assert_status_not_found();
}

#[tokio::test]
async fn test_create_then_redirect_round_trip() {
    let (state, _store) = common::create_test_state();
    let server = common::test_server(state);

    let created = server
        .post("/api")
        .add_header("Host", "s.example.com")
        .json(&json!({ "url": "https://example.com", "duration": "hour" }))
        .await;
    created.assert_status(StatusCode::CREATED);

    let json = created.json::<serde_json::Value>();
    let id = common::id_of(json["short_url"].as_str().unwrap()).to_string();

    let response = server.get(&format!("/{}", id)).await;
    assert_eq!(response.status_code(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.header("location"), "https://example.com");
}

#[tokio::test]
async fn test_create_single_then_redirect_twice() {
    let (state, _store) = common::create_test_state();
    let server = common::test_server(state);

    let created = server
        .post("/api")
        .add_header("Host", "s.example.com")
        .json(&json!({ "url": "https://example.com/once", "duration": "single" }))
        .await;
    created.assert_status(StatusCode::CREATED);

    let json = created.json::<serde_json::Value>();
    let path = format!("/{}", common::id_of(json["short_url"].as_str().unwrap()));

    let first = server.get(&path).await;
    assert_eq!(first.status_code(), StatusCode::TEMPORARY_REDIRECT);

    let second = server.get(&path).await;
    second.assert_status_not_found();
}

#[tokio::test]
async fn test_create_with_control_characters_still_redirects() {
    let (state, _store) = common::create_test_state();
    let server = common::test_server(state);

    let created = server
        .post("/api")
        .add_header("Host", "s.example.com")
        .json(&json!({ "url": "https://example.com/a\nb", "duration": "hour" }))
        .await;
    created.assert_status(StatusCode::CREATED);

    let json = created.json::<serde_json::Value>();
    let id = common::id_of(json["short_url"].as_str().unwrap()).to_string();

    let response = server.get(&format!("/{}", id)).await;
    assert_eq!(response.status_code(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.header("location"), "https://example.com/a%0Ab");
}

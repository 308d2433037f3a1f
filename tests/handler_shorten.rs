mod common;

use axum::{Router, routing::post};
use axum_test::TestServer;
use encurtador::api::handlers::shorten_handler;
use encurtador::utils::token_generator::is_valid_token;
use serde_json::json;

fn server() -> TestServer {
    let (state, _rx) = common::create_test_state();
    let app = Router::new()
        .route("/api/shorten", post(shorten_handler))
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_shorten_success() {
    let server = server();

    let response = server
        .post("/api/shorten")
        .json(&json!({ "url": "https://example.com/some/long/path" }))
        .await;

    assert_eq!(response.status_code(), 201);

    let json = response.json::<serde_json::Value>();
    let short_id = json["shortId"].as_str().unwrap();
    assert_eq!(short_id.len(), 6);
    assert!(is_valid_token(short_id));
    assert_eq!(json["shortUrl"], format!("short.url/{short_id}"));
}

#[tokio::test]
async fn test_shorten_trims_input() {
    let server = server();

    let response = server
        .post("/api/shorten")
        .json(&json!({ "url": "  http://example.com  " }))
        .await;

    assert_eq!(response.status_code(), 201);
}

#[tokio::test]
async fn test_shorten_empty_url() {
    let server = server();

    let response = server
        .post("/api/shorten")
        .json(&json!({ "url": "" }))
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
    assert_eq!(json["error"]["message"], "Por favor, insira uma URL");
}

#[tokio::test]
async fn test_shorten_missing_url_field() {
    let server = server();

    let response = server.post("/api/shorten").json(&json!({})).await;

    response.assert_status_bad_request();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["message"], "Por favor, insira uma URL");
}

#[tokio::test]
async fn test_shorten_rejects_other_schemes() {
    let server = server();

    for url in ["ftp://example.com", "example.com", "javascript:alert(1)"] {
        let response = server
            .post("/api/shorten")
            .json(&json!({ "url": url }))
            .await;

        response.assert_status_bad_request();
        let json = response.json::<serde_json::Value>();
        assert_eq!(
            json["error"]["message"],
            "URL deve começar com http:// ou https://"
        );
    }
}

#[tokio::test]
async fn test_shorten_url_too_long() {
    let server = server();
    let url = format!("https://example.com/{}", "a".repeat(2100));

    let response = server
        .post("/api/shorten")
        .json(&json!({ "url": url }))
        .await;

    response.assert_status_bad_request();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
}

#[tokio::test]
async fn test_shorten_generates_distinct_tokens() {
    let (state, _rx, repository) = common::create_memory_state();
    let app = Router::new()
        .route("/api/shorten", post(shorten_handler))
        .with_state(state);
    let server = TestServer::new(app).unwrap();

    let mut tokens = Vec::new();
    for _ in 0..5 {
        let response = server
            .post("/api/shorten")
            .json(&json!({ "url": "https://example.com" }))
            .await;
        assert_eq!(response.status_code(), 201);
        tokens.push(response.json::<serde_json::Value>()["shortId"].clone());
    }

    tokens.sort_by_key(|t| t.to_string());
    tokens.dedup();
    assert_eq!(tokens.len(), 5);
    assert_eq!(repository.len().await, 5);
}

mod common;

use axum::Router;
use axum_test::TestServer;
use encurtador::utils::token_generator::is_valid_token;
use encurtador::web::routes::{page_routes, submit_routes};

fn server() -> TestServer {
    let (state, _rx) = common::create_test_state();
    let app = Router::new()
        .merge(page_routes())
        .merge(submit_routes())
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_index_renders_form() {
    let server = server();

    let response = server.get("/").await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("Encurtador de URL"));
    assert!(html.contains("URL Original"));
    assert!(html.contains("Encurtar"));
    assert!(!html.contains("error-message"));
}

#[tokio::test]
async fn test_submit_valid_url_redirects_to_result() {
    let server = server();

    let response = server
        .post("/")
        .form(&[("url", "https://example.com/a/very/long/path")])
        .await;

    assert_eq!(response.status_code(), 303);

    let location = response.header("location");
    let location = location.to_str().unwrap();
    let token = location.strip_prefix("/result/").unwrap();
    assert_eq!(token.len(), 6);
    assert!(is_valid_token(token));
}

#[tokio::test]
async fn test_submit_empty_url_shows_message() {
    let server = server();

    let response = server.post("/").form(&[("url", "")]).await;

    assert_eq!(response.status_code(), 422);
    let html = response.text();
    assert!(html.contains("Por favor, insira uma URL"));
    assert!(html.contains("error-message"));
}

#[tokio::test]
async fn test_submit_whitespace_only_counts_as_empty() {
    let server = server();

    let response = server.post("/").form(&[("url", "   ")]).await;

    assert_eq!(response.status_code(), 422);
    assert!(response.text().contains("Por favor, insira uma URL"));
}

#[tokio::test]
async fn test_submit_without_scheme_shows_message() {
    let server = server();

    let response = server.post("/").form(&[("url", "exemplo.com")]).await;

    assert_eq!(response.status_code(), 422);
    let html = response.text();
    assert!(html.contains("URL deve começar com http:// ou https://"));
    assert!(html.contains(r#"value="exemplo.com""#));
}

#[tokio::test]
async fn test_submit_missing_field_counts_as_empty() {
    let server = server();

    let response = server.post("/").form(&[("other", "x")]).await;

    assert_eq!(response.status_code(), 422);
    assert!(response.text().contains("Por favor, insira uma URL"));
}

#[tokio::test]
async fn test_submit_overlong_url_rejected_like_api() {
    let server = server();
    let url = format!("https://example.com/{}", "a".repeat(2100));

    let response = server.post("/").form(&[("url", url.as_str())]).await;

    assert_eq!(response.status_code(), 422);
    let html = response.text();
    assert!(html.contains("URL muito longa"));
    assert!(html.contains("error-message"));
}

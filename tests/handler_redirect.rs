mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use chrono::{Duration, Utc};
use common::MockConnectInfoLayer;
use encurtador::api::handlers::redirect_handler;
use encurtador::domain::entities::ShortLink;
use encurtador::domain::repositories::LinkRepository;
use encurtador::infrastructure::backends::DEMO_ORIGINAL_URL;

fn app(state: encurtador::state::AppState) -> Router {
    Router::new()
        .route("/{token}", get(redirect_handler))
        .layer(MockConnectInfoLayer)
        .with_state(state)
}

fn stored_link(token: &str, expires_in: Duration) -> ShortLink {
    let now = Utc::now();
    ShortLink::new(
        "https://example.com/target".to_string(),
        token.to_string(),
        format!("short.url/{token}"),
        now - Duration::days(1),
        now + expires_in,
    )
}

#[tokio::test]
async fn test_redirect_demo_token() {
    let (state, _rx) = common::create_test_state();
    let server = TestServer::new(app(state)).unwrap();

    let response = server.get("/x7k2pq").await;

    assert_eq!(response.status_code(), 307);
    assert_eq!(response.header("location"), DEMO_ORIGINAL_URL);
}

#[tokio::test]
async fn test_redirect_memory_link() {
    let (state, _rx, repository) = common::create_memory_state();
    repository
        .insert(stored_link("abc123", Duration::days(30)))
        .await
        .unwrap();
    let server = TestServer::new(app(state)).unwrap();

    let response = server.get("/abc123").await;

    assert_eq!(response.status_code(), 307);
    assert_eq!(response.header("location"), "https://example.com/target");
}

#[tokio::test]
async fn test_redirect_not_found() {
    let (state, _rx, _repository) = common::create_memory_state();
    let server = TestServer::new(app(state)).unwrap();

    let response = server.get("/unknown").await;

    response.assert_status_not_found();
}

#[tokio::test]
async fn test_redirect_rejects_non_token_paths() {
    let (state, mut rx) = common::create_test_state();
    let server = TestServer::new(app(state)).unwrap();

    let response = server.get("/favicon.ico").await;

    response.assert_status_not_found();
    assert!(rx.try_recv().is_err());
}

#[tokio::test]
async fn test_redirect_expired_link() {
    let (state, mut rx, repository) = common::create_memory_state();
    repository
        .insert(stored_link("old123", Duration::days(-1)))
        .await
        .unwrap();
    let server = TestServer::new(app(state)).unwrap();

    let response = server.get("/old123").await;

    assert_eq!(response.status_code(), 410);
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "gone");
    assert!(rx.try_recv().is_err());
}

#[tokio::test]
async fn test_redirect_records_click() {
    let (state, mut rx) = common::create_test_state();
    let server = TestServer::new(app(state)).unwrap();

    let response = server
        .get("/clickme")
        .add_header("User-Agent", "Mozilla/5.0 (Linux; Android 14; Pixel 8) Mobile")
        .add_header("X-Forwarded-For", "203.0.113.7")
        .add_header("CF-IPCountry", "br")
        .await;

    assert_eq!(response.status_code(), 307);

    // Without a proxy in front, forwarding headers are not trusted.
    let event = rx.try_recv().unwrap();
    assert_eq!(event.token, "clickme");
    assert_eq!(event.ip.as_deref(), Some("127.0.0.1"));
    assert_eq!(event.country, None);
    assert!(event.user_agent.unwrap().contains("Android"));
}

#[tokio::test]
async fn test_redirect_behind_proxy_uses_forwarded_headers() {
    let (state, mut rx) = common::create_test_state();
    let server = TestServer::new(app(state.with_behind_proxy(true))).unwrap();

    let response = server
        .get("/clickme")
        .add_header("X-Forwarded-For", "203.0.113.7, 10.0.0.2")
        .add_header("CF-IPCountry", "br")
        .await;

    assert_eq!(response.status_code(), 307);

    let event = rx.try_recv().unwrap();
    assert_eq!(event.ip.as_deref(), Some("203.0.113.7"));
    assert_eq!(event.country.as_deref(), Some("BR"));
}

#[tokio::test]
async fn test_redirect_succeeds_when_click_queue_full() {
    let (state, _rx) = common::create_test_state();
    let server = TestServer::new(app(state)).unwrap();

    // Channel capacity is 100 and nothing drains it.
    for _ in 0..105 {
        let response = server.get("/busy01").await;
        assert_eq!(response.status_code(), 307);
    }
}

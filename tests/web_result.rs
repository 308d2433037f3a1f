mod common;

use axum::{
    Router,
    routing::{get, post},
};
use axum_test::TestServer;
use common::MockConnectInfoLayer;
use chrono::TimeDelta;
use encurtador::api::handlers::redirect_handler;
use encurtador::application::services::LinkSettings;
use encurtador::domain::click_worker::run_click_worker;
use encurtador::web::handlers::{result_handler, submit_handler};
use std::time::Duration;

fn demo_server() -> TestServer {
    let (state, _rx) = common::create_test_state();
    let app = Router::new()
        .route("/result/{token}", get(result_handler))
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_result_page_shows_demo_record() {
    let server = demo_server();

    let response = server.get("/result/x7k2pq").await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("URL Encurtada com Sucesso"));
    assert!(html.contains("x7k2pq"));
    assert!(html.contains("Criada em 27 de Abril, 2025"));
    assert!(html.contains("Expira em: 27 de Abril, 2026"));
    assert!(html.contains("142 visualizações"));
    assert!(html.contains("87"));
    assert!(html.contains("61%"));
    assert!(html.contains("São Paulo, BR"));
    assert!(html.contains("Todas as URLs encurtadas são válidas por 1 ano"));
}

#[tokio::test]
async fn test_result_page_defaults_to_stats_tab() {
    let server = demo_server();

    let html = server.get("/result/x7k2pq").await.text();

    assert!(html.contains(r#"data-tab="stats""#));
    assert!(html.contains("Cliques Recentes"));
    assert!(!html.contains("Escaneie este QR code"));
}

#[tokio::test]
async fn test_result_page_qrcode_tab() {
    let server = demo_server();

    let html = server
        .get("/result/x7k2pq")
        .add_query_param("tab", "qrcode")
        .await
        .text();

    assert!(html.contains(r#"data-tab="qrcode""#));
    assert!(html.contains("Escaneie este QR code"));
    assert!(!html.contains("Cliques Recentes"));
}

#[tokio::test]
async fn test_result_page_settings_tab() {
    let server = demo_server();

    let html = server
        .get("/result/x7k2pq")
        .add_query_param("tab", "settings")
        .await
        .text();

    assert!(html.contains(r#"data-tab="settings""#));
    assert!(html.contains("Título personalizado"));
    assert!(html.contains("Nunca expirar"));
}

#[tokio::test]
async fn test_result_page_unknown_tab_falls_back_to_stats() {
    let server = demo_server();

    let html = server
        .get("/result/x7k2pq")
        .add_query_param("tab", "billing")
        .await
        .text();

    assert!(html.contains(r#"data-tab="stats""#));
}

#[tokio::test]
async fn test_result_page_not_found() {
    let (state, _rx, _repository) = common::create_memory_state();
    let app = Router::new()
        .route("/result/{token}", get(result_handler))
        .with_state(state);
    let server = TestServer::new(app).unwrap();

    let response = server.get("/result/nothere").await;

    response.assert_status_not_found();
    let html = response.text();
    assert!(html.contains("URL não encontrada"));
    assert!(html.contains("Voltar para o início"));
}

#[tokio::test]
async fn test_submit_follow_and_view_stats() {
    let (state, rx, repository) = common::create_memory_state();
    tokio::spawn(run_click_worker(rx, repository));

    let app = Router::new()
        .route("/", post(submit_handler))
        .route("/result/{token}", get(result_handler))
        .route("/{token}", get(redirect_handler))
        .layer(MockConnectInfoLayer)
        .with_state(state.with_behind_proxy(true));
    let server = TestServer::new(app).unwrap();

    let response = server
        .post("/")
        .form(&[("url", "https://example.com/article")])
        .await;
    assert_eq!(response.status_code(), 303);
    let location = response.header("location").to_str().unwrap().to_string();
    let token = location.trim_start_matches("/result/").to_string();

    let html = server.get(&location).await.text();
    assert!(html.contains("<span>0 visualizações</span>"));
    assert!(html.contains("Nenhum clique registrado"));

    let response = server
        .get(&format!("/{token}"))
        .add_header("User-Agent", "Mozilla/5.0 (iPhone; CPU iPhone OS 17_4 like Mac OS X) Mobile")
        .add_header("CF-IPCountry", "PT")
        .await;
    assert_eq!(response.status_code(), 307);

    let mut html = String::new();
    for _ in 0..50 {
        html = server.get(&location).await.text();
        if html.contains("1 visualização<") {
            break;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }

    assert!(html.contains("<span>1 visualização</span>"));
    assert!(html.contains("Portugal"));
    assert!(html.contains("iPhone"));
    assert!(html.contains("Hoje, "));
}

#[tokio::test]
async fn test_result_page_states_configured_lifetime() {
    let settings = LinkSettings {
        link_ttl: TimeDelta::days(30),
        ..LinkSettings::default()
    };
    let (state, _rx, _repository) = common::create_memory_state_with(settings);

    let app = Router::new()
        .route("/", post(submit_handler))
        .route("/result/{token}", get(result_handler))
        .with_state(state);
    let server = TestServer::new(app).unwrap();

    let response = server
        .post("/")
        .form(&[("url", "https://example.com/short-lived")])
        .await;
    assert_eq!(response.status_code(), 303);
    let location = response.header("location").to_str().unwrap().to_string();

    let html = server.get(&location).await.text();
    assert!(html.contains("Todas as URLs encurtadas são válidas por 30 dias"));
    assert!(!html.contains("válidas por 1 ano"));
}

//! HTTP server initialization and runtime setup.
//!
//! Selects the link backend, spawns the click worker and expiry sweeper,
//! and runs the Axum server until Ctrl-C.

use crate::application::services::LinkService;
use crate::config::{Config, LinkBackend};
use crate::domain::click_worker::run_click_worker;
use crate::domain::expiry_sweeper::run_expiry_sweeper;
use crate::domain::repositories::LinkRepository;
use crate::infrastructure::backends::{DemoLinkRepository, InMemoryLinkRepository};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Link backend (demo or in-memory)
/// - Background click worker
/// - Periodic expiry sweeper
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - The listen address is invalid
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let repository = build_repository(&config);
    tracing::info!(backend = repository.backend_name(), "Link backend ready");

    let (click_tx, click_rx) = mpsc::channel(config.click_queue_capacity);
    tokio::spawn(run_click_worker(click_rx, repository.clone()));
    tracing::info!("Click worker started");

    tokio::spawn(run_expiry_sweeper(
        repository.clone(),
        config.expiry_sweep_interval(),
    ));

    let link_service = Arc::new(LinkService::new(repository, config.link_settings()));
    let state = AppState::new(link_service, click_tx);

    let app = app_router(state, config.behind_proxy);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address: {}", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}

fn build_repository(config: &Config) -> Arc<dyn LinkRepository> {
    match config.link_backend {
        LinkBackend::Demo => Arc::new(DemoLinkRepository::new(
            config.short_domain.clone(),
            config.demo_latency(),
        )),
        LinkBackend::Memory => Arc::new(InMemoryLinkRepository::new()),
    }
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Shutdown signal received"),
        Err(e) => tracing::error!("Failed to listen for shutdown signal: {}", e),
    }
}

#![allow(dead_code)]

use axum::extract::ConnectInfo;
use encurtador::application::services::{LinkService, LinkSettings};
use encurtador::domain::click_event::ClickEvent;
use encurtador::infrastructure::backends::{DemoLatency, DemoLinkRepository, InMemoryLinkRepository};
use encurtador::state::AppState;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::mpsc;
use tower::Layer;

pub const SHORT_DOMAIN: &str = "short.url";

/// State backed by the demo repository without artificial latency.
pub fn create_test_state() -> (AppState, mpsc::Receiver<ClickEvent>) {
    let repository = Arc::new(DemoLinkRepository::new(SHORT_DOMAIN, DemoLatency::none()));
    let (tx, rx) = mpsc::channel(100);
    let service = LinkService::new(repository, LinkSettings::default());

    (AppState::new(Arc::new(service), tx), rx)
}

/// State backed by a fresh in-memory repository, returned alongside it.
pub fn create_memory_state() -> (
    AppState,
    mpsc::Receiver<ClickEvent>,
    Arc<InMemoryLinkRepository>,
) {
    create_memory_state_with(LinkSettings::default())
}

/// In-memory state with custom link settings.
pub fn create_memory_state_with(
    settings: LinkSettings,
) -> (
    AppState,
    mpsc::Receiver<ClickEvent>,
    Arc<InMemoryLinkRepository>,
) {
    let repository = Arc::new(InMemoryLinkRepository::new());
    let (tx, rx) = mpsc::channel(100);
    let service = LinkService::new(repository.clone(), settings);

    (AppState::new(Arc::new(service), tx), rx, repository)
}

/// Inserts `ConnectInfo` so handlers extracting the peer address work under `TestServer`.
#[derive(Clone)]
pub struct MockConnectInfoLayer;

impl<S> Layer<S> for MockConnectInfoLayer {
    type Service = MockConnectInfoService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        MockConnectInfoService { inner }
    }
}

#[derive(Clone)]
pub struct MockConnectInfoService<S> {
    inner: S,
}

impl<S, B> tower::Service<axum::http::Request<B>> for MockConnectInfoService<S>
where
    S: tower::Service<axum::http::Request<B>> + Clone + Send + 'static,
    S::Future: Send + 'static,
    B: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(
        &mut self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: axum::http::Request<B>) -> Self::Future {
        let addr: SocketAddr = "127.0.0.1:12345".parse().unwrap();
        req.extensions_mut().insert(ConnectInfo(addr));
        self.inner.call(req)
    }
}

//! Shared application state injected into every handler.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::application::services::LinkService;
use crate::domain::click_event::ClickEvent;

#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService>,
    /// Producer side of the click queue drained by the click worker.
    pub click_sender: mpsc::Sender<ClickEvent>,
    /// Trust `X-Forwarded-For`, `X-Real-IP` and `CF-IPCountry` from a reverse proxy.
    pub behind_proxy: bool,
}

impl AppState {
    pub fn new(link_service: Arc<LinkService>, click_sender: mpsc::Sender<ClickEvent>) -> Self {
        Self {
            link_service,
            click_sender,
            behind_proxy: false,
        }
    }

    pub fn with_behind_proxy(mut self, behind_proxy: bool) -> Self {
        self.behind_proxy = behind_proxy;
        self
    }
}

//! Background worker draining the click queue.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::domain::click_event::ClickEvent;
use crate::domain::repositories::LinkRepository;

/// Records queued click events until every sender is dropped.
///
/// A failed recording is logged and skipped; the queue keeps draining.
pub async fn run_click_worker(
    mut rx: mpsc::Receiver<ClickEvent>,
    repository: Arc<dyn LinkRepository>,
) {
    while let Some(event) = rx.recv().await {
        let token = event.token.clone();

        match repository.record_click(event).await {
            Ok(()) => debug!(token = %token, "Click recorded"),
            Err(e) => debug!(token = %token, error = %e, "Click not recorded"),
        }
    }

    info!("Click worker stopped");
}

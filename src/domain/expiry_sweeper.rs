//! Periodic removal of expired links.

use std::sync::Arc;
use std::time::Duration;

use tokio::time::{MissedTickBehavior, interval};
use tracing::{debug, info, warn};

use crate::domain::repositories::LinkRepository;

/// Purges expired links every `period`, starting immediately. Never returns.
pub async fn run_expiry_sweeper(repository: Arc<dyn LinkRepository>, period: Duration) {
    let mut ticker = interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        ticker.tick().await;

        match repository.purge_expired().await {
            Ok(0) => debug!("No expired links"),
            Ok(removed) => info!(removed, "Expired links purged"),
            Err(e) => warn!(error = %e, "Expiry sweep failed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockLinkRepository;
    use crate::error::AppError;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};

    const PERIOD: Duration = Duration::from_secs(60);

    #[tokio::test(start_paused = true)]
    async fn test_sweeps_once_per_period() {
        let sweeps = Arc::new(AtomicUsize::new(0));
        let counter = sweeps.clone();

        let mut repo = MockLinkRepository::new();
        repo.expect_purge_expired().returning(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(0)
        });

        let handle = tokio::spawn(run_expiry_sweeper(Arc::new(repo), PERIOD));
        tokio::time::sleep(PERIOD * 2 + PERIOD / 2).await;
        handle.abort();

        assert_eq!(sweeps.load(Ordering::SeqCst), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_keeps_sweeping_after_failure() {
        let sweeps = Arc::new(AtomicUsize::new(0));
        let counter = sweeps.clone();

        let mut repo = MockLinkRepository::new();
        repo.expect_purge_expired().returning(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            Err(AppError::operation_failed("store unavailable", json!({})))
        });

        let handle = tokio::spawn(run_expiry_sweeper(Arc::new(repo), PERIOD));
        tokio::time::sleep(PERIOD + PERIOD / 2).await;
        handle.abort();

        assert_eq!(sweeps.load(Ordering::SeqCst), 2);
    }
}

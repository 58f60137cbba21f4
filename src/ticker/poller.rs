//! Ingestion trigger
//!
//! Fires one fetch-and-store cycle per fixed interval for the lifetime of
//! the process. No backoff and no jitter: a failed tick is logged and the
//! next tick proceeds on schedule.

use super::TickerService;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;

/// Spawn the ingestion trigger for one market
///
/// The first cycle runs immediately; the task runs until aborted.
pub fn spawn_poller(service: Arc<TickerService>, market: String, period: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(period);
        loop {
            interval.tick().await;
            if let Err(e) = service.ingest(&market).await {
                tracing::warn!(market = %market, error = %e, "Ingest tick failed");
            }
        }
    })
}

//! Serve command implementation

use crate::config::Config;
use crate::quote::{BuenbitClient, BuenbitConfig};
use crate::server::{self, AppState};
use crate::store::MemoryStore;
use crate::telemetry;
use crate::ticker::{spawn_poller, TickerService};
use clap::Args;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Override the configured API port
    #[arg(short, long)]
    pub port: Option<u16>,
}

impl ServeArgs {
    pub async fn execute(&self, config: Config) -> anyhow::Result<()> {
        telemetry::init_metrics(config.telemetry.metrics_port)?;

        let store = Arc::new(MemoryStore::new());
        let quotes = Arc::new(BuenbitClient::with_config(BuenbitConfig {
            base_url: config.upstream.base_url.clone(),
            timeout: Duration::from_secs(config.upstream.timeout_secs),
        }));
        let service = Arc::new(TickerService::new(store, quotes));

        let poller = spawn_poller(
            Arc::clone(&service),
            config.upstream.market.clone(),
            Duration::from_secs(config.ingest.poll_interval_secs),
        );

        let state = AppState::new(service, &config.server);
        let app = server::router(state);

        let port = self.port.unwrap_or(config.server.port);
        let addr: SocketAddr = format!("{}:{}", config.server.bind, port).parse()?;
        tracing::info!(%addr, market = %config.upstream.market, "Ticker API listening");

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        poller.abort();
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to install shutdown handler");
        return;
    }
    tracing::info!("Shutdown signal received, stopping");
}

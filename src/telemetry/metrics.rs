//! Prometheus metrics

use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;
use std::time::Duration;

/// Latency metric types
#[derive(Debug, Clone, Copy)]
pub enum LatencyMetric {
    /// Outbound quote fetch latency
    QuoteFetch,
    /// Sample store range scan latency
    RangeQuery,
}

/// Counter metric types
#[derive(Debug, Clone, Copy)]
pub enum CounterMetric {
    /// Completed ingest cycles
    IngestOk,
    /// Ingest cycles that failed and were skipped
    IngestFailed,
}

/// Gauge metric types
#[derive(Debug, Clone, Copy)]
pub enum GaugeMetric {
    /// Samples held by the store
    StoredSamples,
}

/// Start the Prometheus exporter on the given port
pub fn init_metrics(port: u16) -> anyhow::Result<()> {
    let addr: SocketAddr = ([0, 0, 0, 0], port).into();

    PrometheusBuilder::new()
        .with_http_listener(addr)
        .install()
        .map_err(|e| anyhow::anyhow!("Failed to start metrics exporter: {}", e))?;

    tracing::info!(%addr, "Metrics exporter listening");
    Ok(())
}

/// Record a latency measurement
pub fn record_latency(metric: LatencyMetric, duration: Duration) {
    let name = match metric {
        LatencyMetric::QuoteFetch => "ticker_quote_fetch_latency_ms",
        LatencyMetric::RangeQuery => "ticker_range_query_latency_ms",
    };

    metrics::histogram!(name).record(duration.as_millis() as f64);
}

/// Increment a counter
pub fn increment(metric: CounterMetric) {
    let name = match metric {
        CounterMetric::IngestOk => "ticker_ingest_success_total",
        CounterMetric::IngestFailed => "ticker_ingest_failure_total",
    };

    metrics::counter!(name).increment(1);
}

/// Add to a gauge value
pub fn increment_gauge(metric: GaugeMetric, value: f64) {
    let name = match metric {
        GaugeMetric::StoredSamples => "ticker_stored_samples",
    };

    metrics::gauge!(name).increment(value);
}

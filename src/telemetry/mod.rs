//! Telemetry module
//!
//! Structured logging and Prometheus metrics

mod logging;
mod metrics;

pub use logging::init_logging;
pub use metrics::{
    increment, increment_gauge, init_metrics, record_latency, CounterMetric, GaugeMetric,
    LatencyMetric,
};

use crate::config::TelemetryConfig;

/// Guard that cleans up telemetry on drop
pub struct TelemetryGuard {
    _priv: (),
}

/// Initialize logging
///
/// The metrics exporter binds a port, so it is started separately by the
/// serve path rather than here.
pub fn init_telemetry(config: &TelemetryConfig) -> anyhow::Result<TelemetryGuard> {
    init_logging(&config.log_level)?;

    Ok(TelemetryGuard { _priv: () })
}

//! Ticker service implementation

use crate::error::TickerError;
use crate::quote::QuoteProvider;
use crate::store::{Sample, SampleStore};
use crate::telemetry::{self, CounterMetric, GaugeMetric, LatencyMetric};
use std::sync::Arc;
use std::time::Instant;

/// Convert a caller-supplied score string to a float
///
/// Rejects non-numeric strings and NaN with
/// [`TickerError::InvalidNumericInput`], which the query surface maps to a
/// client error rather than a server fault.
pub fn parse_score(raw: &str) -> Result<f64, TickerError> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| TickerError::InvalidNumericInput(raw.to_string()))?;

    if value.is_nan() {
        return Err(TickerError::InvalidNumericInput(raw.to_string()));
    }

    Ok(value)
}

/// Orchestrates the ingestion and read paths over an injected store and
/// quote provider
pub struct TickerService {
    store: Arc<dyn SampleStore>,
    quotes: Arc<dyn QuoteProvider>,
}

impl TickerService {
    /// Create a service over the given store and quote provider
    pub fn new(store: Arc<dyn SampleStore>, quotes: Arc<dyn QuoteProvider>) -> Self {
        Self { store, quotes }
    }

    /// Fetch one quote for `market` and append it to the store
    ///
    /// Fetch and store failures propagate unchanged so the trigger can
    /// report them; a failed fetch leaves the store untouched.
    pub async fn ingest(&self, market: &str) -> Result<(), TickerError> {
        let started = Instant::now();

        let quote = match self.quotes.fetch(market).await {
            Ok(quote) => quote,
            Err(e) => {
                telemetry::increment(CounterMetric::IngestFailed);
                return Err(e);
            }
        };
        telemetry::record_latency(LatencyMetric::QuoteFetch, started.elapsed());

        if let Err(e) = self.store.insert(quote.timestamp, quote.price).await {
            telemetry::increment(CounterMetric::IngestFailed);
            return Err(e);
        }

        telemetry::increment(CounterMetric::IngestOk);
        telemetry::increment_gauge(GaugeMetric::StoredSamples, 1.0);
        tracing::debug!(
            market,
            price = quote.price,
            timestamp = quote.timestamp,
            "Stored quote sample"
        );

        Ok(())
    }

    /// The sample observed at exactly `timestamp`, if any
    ///
    /// When several samples share the timestamp the store returns them in
    /// insertion order, so the last entry is the most recent write.
    pub async fn get_price(&self, timestamp: f64) -> Result<Option<Sample>, TickerError> {
        let mut matches = self.store.range_query(timestamp, timestamp).await?;
        Ok(matches.pop())
    }

    /// Arithmetic mean of the prices in `[since, until]`, rounded to two
    /// decimals; exactly `0.0` for an empty range
    pub async fn get_average(&self, since: f64, until: f64) -> Result<f64, TickerError> {
        let samples = self.store.range_query(since, until).await?;
        if samples.is_empty() {
            return Ok(0.0);
        }

        let sum: f64 = samples.iter().map(|s| s.price).sum();
        let average = sum / samples.len() as f64;
        Ok((average * 100.0).round() / 100.0)
    }

    /// All samples in `[since, until]`, ascending; absent bounds are
    /// unbounded
    pub async fn get_list(
        &self,
        since: Option<f64>,
        until: Option<f64>,
    ) -> Result<Vec<Sample>, TickerError> {
        let since = since.unwrap_or(f64::NEG_INFINITY);
        let until = until.unwrap_or(f64::INFINITY);
        self.store.range_query(since, until).await
    }
}

//! Quote fetcher module
//!
//! Pulls one normalized (price, timestamp) observation per call from the
//! upstream ticker endpoint.

mod buenbit;

pub use buenbit::{BuenbitClient, BuenbitConfig, BUENBIT_API_URL};

use crate::error::TickerError;
use async_trait::async_trait;

/// A normalized quote observation
///
/// The timestamp is the fetch-time wall clock, not a time reported by the
/// upstream provider: the store's time axis is ingestion time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quote {
    /// Observed selling price
    pub price: f64,
    /// Seconds since epoch at fetch time
    pub timestamp: i64,
}

/// Trait for quote provider implementations
#[async_trait]
pub trait QuoteProvider: Send + Sync {
    /// Fetch the current quote for one market. Never retries internally.
    async fn fetch(&self, market: &str) -> Result<Quote, TickerError>;
}

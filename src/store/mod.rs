//! Sample store module
//!
//! Time-ordered storage for observed market quotes with score-range
//! retrieval. Timestamps are the ordering key; duplicate timestamps are
//! kept as separate entries in insertion order.

mod memory;

pub use memory::MemoryStore;

use crate::error::TickerError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// A single observed market quote
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// Seconds since epoch at ingestion time
    pub timestamp: i64,
    /// Observed selling price
    pub price: f64,
}

/// Trait for sample store backends
///
/// Scores are `f64` so that `f64::NEG_INFINITY` / `f64::INFINITY` serve as
/// the unbounded-below/above sentinels.
#[async_trait]
pub trait SampleStore: Send + Sync {
    /// Append one sample. An equal-timestamp entry is never overwritten.
    async fn insert(&self, timestamp: i64, price: f64) -> Result<(), TickerError>;

    /// All samples with `start <= timestamp <= end`, ascending by timestamp.
    ///
    /// An empty or inverted range yields an empty Vec, never an error.
    async fn range_query(&self, start: f64, end: f64) -> Result<Vec<Sample>, TickerError>;
}

//! In-memory sample store
//!
//! Sorted multiset keyed by timestamp: a `BTreeMap` from timestamp to the
//! prices observed at that second, in arrival order. Range scans seek the
//! lower bound in logarithmic time and walk forward from there.

use super::{Sample, SampleStore};
use crate::error::TickerError;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::ops::Bound;
use tokio::sync::RwLock;

/// In-memory production implementation of [`SampleStore`]
///
/// Safe for concurrent readers and a single writer without external
/// locking; a query never observes a partially-inserted sample.
#[derive(Debug, Default)]
pub struct MemoryStore {
    samples: RwLock<BTreeMap<i64, Vec<f64>>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            samples: RwLock::new(BTreeMap::new()),
        }
    }
}

/// Map a float score to the smallest integer timestamp it admits
fn lower_bound(start: f64) -> Bound<i64> {
    if start == f64::NEG_INFINITY {
        Bound::Unbounded
    } else {
        Bound::Included(start.ceil() as i64)
    }
}

/// Map a float score to the largest integer timestamp it admits
fn upper_bound(end: f64) -> Bound<i64> {
    if end == f64::INFINITY {
        Bound::Unbounded
    } else {
        Bound::Included(end.floor() as i64)
    }
}

#[async_trait]
impl SampleStore for MemoryStore {
    async fn insert(&self, timestamp: i64, price: f64) -> Result<(), TickerError> {
        let mut samples = self.samples.write().await;
        samples.entry(timestamp).or_default().push(price);
        Ok(())
    }

    async fn range_query(&self, start: f64, end: f64) -> Result<Vec<Sample>, TickerError> {
        if start.is_nan() || end.is_nan() || start > end {
            return Ok(Vec::new());
        }

        let lower = lower_bound(start);
        let upper = upper_bound(end);

        // A fractional range like [5.4, 5.6] can invert after snapping to
        // integer keys; BTreeMap::range panics on inverted bounds.
        if let (Bound::Included(lo), Bound::Included(hi)) = (lower, upper) {
            if lo > hi {
                return Ok(Vec::new());
            }
        }

        let samples = self.samples.read().await;
        let mut out = Vec::new();
        for (&timestamp, prices) in samples.range((lower, upper)) {
            out.extend(prices.iter().map(|&price| Sample { timestamp, price }));
        }
        Ok(out)
    }
}

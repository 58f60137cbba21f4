//! Error taxonomy shared across components

use thiserror::Error;

/// Errors crossing component boundaries.
///
/// Every internal failure is translated into exactly one of these kinds
/// before it reaches the query surface or the ingestion trigger; raw
/// transport or backend error types never leak past a component.
#[derive(Debug, Error)]
pub enum TickerError {
    /// Upstream unreachable or returned a non-success status
    #[error("quote fetch failed: {0}")]
    Fetch(#[source] reqwest::Error),
    /// Upstream body did not match the documented contract
    #[error("malformed upstream response: {0}")]
    MalformedResponse(String),
    /// Caller-supplied value is not a valid number
    #[error("invalid numeric input: {0:?}")]
    InvalidNumericInput(String),
    /// Storage backend fault
    #[error("sample store unavailable: {0}")]
    StoreUnavailable(String),
}

//! buenbit-ticker: polling price ticker service for the Buenbit BTC/ARS market
//!
//! This library provides the core components for:
//! - Periodic quote ingestion from the Buenbit ticker API
//! - A time-ordered sample store with score-range queries
//! - Point price, range list, and range average read operations
//! - An HTTP query surface for the read path
//! - Structured logging and Prometheus metrics

pub mod cli;
pub mod config;
pub mod error;
pub mod quote;
pub mod server;
pub mod store;
pub mod telemetry;
pub mod ticker;

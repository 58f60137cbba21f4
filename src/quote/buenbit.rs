//! Buenbit ticker API client
//!
//! Fetches the market ticker book from Buenbit's public endpoint and
//! extracts the selling price for one market. The price arrives as a
//! numeric string nested under `object.<market>`.

use super::{Quote, QuoteProvider};
use crate::error::TickerError;
use async_trait::async_trait;
use chrono::Utc;
use reqwest::Client;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;

/// Buenbit ticker endpoint
pub const BUENBIT_API_URL: &str = "https://be.buenbit.com/api/market/tickers";

/// Configuration for the Buenbit client
#[derive(Debug, Clone)]
pub struct BuenbitConfig {
    /// Ticker endpoint URL
    pub base_url: String,
    /// Request timeout
    pub timeout: Duration,
}

impl Default for BuenbitConfig {
    fn default() -> Self {
        Self {
            base_url: BUENBIT_API_URL.to_string(),
            timeout: Duration::from_secs(5),
        }
    }
}

/// Client for Buenbit's ticker API
pub struct BuenbitClient {
    config: BuenbitConfig,
    client: Client,
}

impl BuenbitClient {
    /// Create a new client with default configuration
    pub fn new() -> Self {
        Self::with_config(BuenbitConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: BuenbitConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    /// Extract the selling price for `market` from a ticker body
    fn extract_price(body: &str, market: &str) -> Result<f64, TickerError> {
        let book: TickerBook = serde_json::from_str(body)
            .map_err(|e| TickerError::MalformedResponse(format!("undecodable ticker body: {e}")))?;

        let entry = book.object.get(market).ok_or_else(|| {
            TickerError::MalformedResponse(format!("market {market} absent from ticker body"))
        })?;

        entry.selling_price.trim().parse::<f64>().map_err(|_| {
            TickerError::MalformedResponse(format!(
                "selling_price is not numeric: {}",
                entry.selling_price
            ))
        })
    }
}

impl Default for BuenbitClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl QuoteProvider for BuenbitClient {
    async fn fetch(&self, market: &str) -> Result<Quote, TickerError> {
        tracing::debug!(url = %self.config.base_url, market, "Fetching quote");

        let response = self
            .client
            .get(&self.config.base_url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .send()
            .await
            .map_err(TickerError::Fetch)?
            .error_for_status()
            .map_err(TickerError::Fetch)?;

        let body = response.text().await.map_err(TickerError::Fetch)?;
        let price = Self::extract_price(&body, market)?;

        Ok(Quote {
            price,
            timestamp: Utc::now().timestamp(),
        })
    }
}

/// Ticker book response from the Buenbit API
#[derive(Debug, Deserialize)]
struct TickerBook {
    /// Market tickers keyed by market identifier (e.g. "btcars")
    object: HashMap<String, MarketTicker>,
}

/// One market's ticker entry
#[derive(Debug, Deserialize)]
struct MarketTicker {
    /// Selling price as a numeric string
    selling_price: String,
    /// Purchase price as a numeric string
    #[serde(default)]
    #[allow(dead_code)]
    purchase_price: Option<String>,
    /// Opening price as a numeric string
    #[serde(default)]
    #[allow(dead_code)]
    open_price: Option<String>,
    /// Quote currency
    #[serde(default)]
    #[allow(dead_code)]
    currency: Option<String>,
    /// Bid-side currency
    #[serde(default)]
    #[allow(dead_code)]
    bid_currency: Option<String>,
    /// Ask-side currency
    #[serde(default)]
    #[allow(dead_code)]
    ask_currency: Option<String>,
    /// Market identifier echoed by the API
    #[serde(default)]
    #[allow(dead_code)]
    market_identifier: Option<String>,
}

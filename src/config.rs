//! Configuration types for buenbit-ticker

use serde::Deserialize;

/// Root configuration structure
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub upstream: UpstreamConfig,
    #[serde(default)]
    pub ingest: IngestConfig,
    #[serde(default)]
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
}

/// Upstream quote endpoint configuration
#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamConfig {
    /// Ticker endpoint URL
    pub base_url: String,

    /// Market identifier to ingest
    #[serde(default = "default_market")]
    pub market: String,

    /// Outbound request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

/// Ingestion trigger configuration
#[derive(Debug, Clone, Deserialize)]
pub struct IngestConfig {
    /// Seconds between ingestion cycles
    #[serde(default = "default_poll_interval_secs")]
    pub poll_interval_secs: u64,
}

/// Query surface configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Bind address for the API listener
    #[serde(default = "default_bind")]
    pub bind: String,

    /// Port for the API listener
    #[serde(default = "default_port")]
    pub port: u16,

    /// Page size when the client does not request one
    #[serde(default = "default_page_size")]
    pub default_page_size: usize,

    /// Largest page size a client may request
    #[serde(default = "default_max_page_size")]
    pub max_page_size: usize,
}

/// Telemetry configuration
#[derive(Debug, Clone, Deserialize)]
pub struct TelemetryConfig {
    pub metrics_port: u16,
    pub log_level: String,
}

fn default_market() -> String {
    "btcars".to_string()
}
fn default_timeout_secs() -> u64 {
    5
}
fn default_poll_interval_secs() -> u64 {
    10
}
fn default_bind() -> String {
    "127.0.0.1".to_string()
}
fn default_port() -> u16 {
    8000
}
fn default_page_size() -> usize {
    10
}
fn default_max_page_size() -> usize {
    1000
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            poll_interval_secs: 10,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            port: default_port(),
            default_page_size: default_page_size(),
            max_page_size: default_max_page_size(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

//! CLI interface for buenbit-ticker
//!
//! Provides subcommands for:
//! - `serve`: run the ingestion cycle and the query API
//! - `config`: show the resolved configuration

mod serve;

pub use serve::ServeArgs;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "buenbit-ticker")]
#[command(about = "Polling price ticker service for the Buenbit BTC/ARS market")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the ticker service
    Serve(ServeArgs),
    /// Show the resolved configuration
    Config,
}

use buenbit_ticker::cli::{Cli, Commands};
use buenbit_ticker::config::Config;
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(&cli.config).unwrap_or_else(|e| {
        eprintln!("Warning: Could not load config from {}: {}", cli.config, e);
        eprintln!("Using default configuration");
        toml::from_str(include_str!("../config.toml.example")).expect("Invalid default config")
    });

    // Initialize telemetry
    buenbit_ticker::telemetry::init_telemetry(&config.telemetry)?;

    match cli.command {
        Commands::Serve(args) => {
            tracing::info!("Starting ticker service");
            args.execute(config).await?;
        }
        Commands::Config => {
            println!("Current configuration:");
            println!(
                "  Upstream: {} ({})",
                config.upstream.base_url, config.upstream.market
            );
            println!("  Poll interval: {}s", config.ingest.poll_interval_secs);
            println!("  API: {}:{}", config.server.bind, config.server.port);
            println!(
                "  Pagination: {} per page (max {})",
                config.server.default_page_size, config.server.max_page_size
            );
            println!("  Metrics port: {}", config.telemetry.metrics_port);
        }
    }

    Ok(())
}

//! amz-scrape - CLI client for a self-hosted Amazon product scraping API.

use amz_scrape::commands::{CountriesCommand, HealthCommand, ScrapeCommand};
use amz_scrape::config::{Config, OutputFormat};
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "amz-scrape",
    version,
    about = "CLI client for a self-hosted Amazon product scraping API",
    long_about = "Submits Amazon product URLs to a self-hosted scraping API server and prints the scraped data as JSON."
)]
struct Cli {
    /// Base URL of the scraping API server
    #[arg(long, global = true, env = "SCRAPE_API_URL")]
    api_url: Option<String>,

    /// API key for the X-API-Key header
    #[arg(long, global = true, env = "SCRAPE_API_KEY")]
    api_key: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true, env = "SCRAPE_TIMEOUT")]
    timeout: Option<u64>,

    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, default_value = "pretty", global = true)]
    format: OutputFormat,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scrape a product page through the API server
    #[command(alias = "s")]
    Scrape {
        /// Product page URL
        url: String,
    },

    /// List countries the server can scrape
    Countries,

    /// Check that the API server is up
    Health,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new(Level::DEBUG.to_string())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };

    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();

    // Load config with layered overrides
    let mut config = Config::load(cli.config.as_deref())?.with_env();

    // Apply CLI overrides
    config.format = cli.format;

    if let Some(api_url) = cli.api_url {
        config.api_url = api_url;
    }
    if let Some(api_key) = cli.api_key {
        config.api_key = api_key;
    }
    if let Some(timeout) = cli.timeout {
        config.timeout_secs = timeout;
    }

    match cli.command {
        Commands::Scrape { url } => {
            let cmd = ScrapeCommand::new(config);
            let output = cmd.execute(&url).await?;
            println!("{}", output);
        }

        Commands::Countries => {
            let cmd = CountriesCommand::new(config);
            let output = cmd.execute().await?;
            println!("{}", output);
        }

        Commands::Health => {
            let cmd = HealthCommand::new(config);
            let output = cmd.execute().await?;
            println!("{}", output);
        }
    }

    Ok(())
}

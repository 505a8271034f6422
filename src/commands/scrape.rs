//! Scrape command implementation.

use crate::api::{ApiClient, ScrapeApi};
use crate::config::Config;
use crate::format::Formatter;
use anyhow::{Context, Result};
use tracing::info;

/// Submits a product URL to the scraping server and renders the response.
pub struct ScrapeCommand {
    config: Config,
}

impl ScrapeCommand {
    /// Creates a new scrape command.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Scrapes a product URL and returns formatted output.
    pub async fn execute(&self, url: &str) -> Result<String> {
        let client = ApiClient::new(&self.config).context("Failed to create HTTP client")?;

        self.execute_with_client(&client, url).await
    }

    /// Scrapes with a provided client (for testing).
    pub async fn execute_with_client(&self, client: &impl ScrapeApi, url: &str) -> Result<String> {
        // The server rejects non-Amazon URLs itself; only the scheme is
        // checked here so typos fail before a request goes out.
        let url = url.trim();
        if !url.starts_with("http://") && !url.starts_with("https://") {
            anyhow::bail!(
                "Invalid product URL: '{}'. URL must start with http:// or https://.",
                url
            );
        }

        info!("Requesting scrape for: {}", url);

        let payload = client.scrape(url).await?;

        let formatter = Formatter::new(self.config.format);
        Ok(formatter.format_payload(&payload))
    }
}

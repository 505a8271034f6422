//! Countries listing command implementation.

use crate::api::{ApiClient, ScrapeApi};
use crate::config::Config;
use crate::format::Formatter;
use anyhow::{Context, Result};
use tracing::info;

/// Lists the marketplace countries the scraping server supports.
pub struct CountriesCommand {
    config: Config,
}

impl CountriesCommand {
    /// Creates a new countries command.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Fetches the country list and returns formatted output.
    pub async fn execute(&self) -> Result<String> {
        let client = ApiClient::new(&self.config).context("Failed to create HTTP client")?;

        self.execute_with_client(&client).await
    }

    /// Fetches with a provided client (for testing).
    pub async fn execute_with_client(&self, client: &impl ScrapeApi) -> Result<String> {
        info!("Listing supported countries");

        let list = client.countries().await?;

        let formatter = Formatter::new(self.config.format);
        Ok(formatter.format_countries(&list))
    }
}

//! Health check command implementation.

use crate::api::{ApiClient, ScrapeApi};
use crate::config::Config;
use crate::format::Formatter;
use anyhow::{Context, Result};
use tracing::info;

/// Queries the scraping server's health endpoint.
pub struct HealthCommand {
    config: Config,
}

impl HealthCommand {
    /// Creates a new health command.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Checks server health and returns formatted output.
    pub async fn execute(&self) -> Result<String> {
        let client = ApiClient::new(&self.config).context("Failed to create HTTP client")?;

        self.execute_with_client(&client).await
    }

    /// Checks with a provided client (for testing).
    pub async fn execute_with_client(&self, client: &impl ScrapeApi) -> Result<String> {
        info!("Checking server health");

        let health = client.health().await?;

        let formatter = Formatter::new(self.config.format);
        Ok(formatter.format_health(&health))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::{CountryList, Health};
    use crate::api::ApiError;
    use crate::config::OutputFormat;
    use async_trait::async_trait;
    use serde_json::Value;

    struct MockApiClient {
        healthy: bool,
    }

    #[async_trait]
    impl ScrapeApi for MockApiClient {
        async fn scrape(&self, _url: &str) -> Result<Value, ApiError> {
            Ok(Value::Null)
        }

        async fn countries(&self) -> Result<CountryList, ApiError> {
            Ok(CountryList { success: true, count: 0, countries: Vec::new() })
        }

        async fn health(&self) -> Result<Health, ApiError> {
            if self.healthy {
                Ok(Health {
                    status: "healthy".to_string(),
                    service: "AmazonScraper API".to_string(),
                    timestamp: Some("2025-01-01T00:00:00".to_string()),
                })
            } else {
                Err(ApiError::RequestFailed { status: 503 })
            }
        }
    }

    fn make_test_config(format: OutputFormat) -> Config {
        Config {
            api_url: "http://127.0.0.1:5000".to_string(),
            api_key: "test-key".to_string(),
            timeout_secs: 5,
            format,
        }
    }

    #[tokio::test]
    async fn test_health_command_healthy() {
        let client = MockApiClient { healthy: true };
        let cmd = HealthCommand::new(make_test_config(OutputFormat::Pretty));

        let output = cmd.execute_with_client(&client).await.unwrap();
        assert!(output.contains("healthy"));
        assert!(output.contains("AmazonScraper API"));
    }

    #[tokio::test]
    async fn test_health_command_server_down() {
        let client = MockApiClient { healthy: false };
        let cmd = HealthCommand::new(make_test_config(OutputFormat::Pretty));

        let result = cmd.execute_with_client(&client).await;
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("503"));
    }
}

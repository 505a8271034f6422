//! HTTP client for the scraping API server.

use crate::api::error::ApiError;
use crate::api::models::{CountryList, Health};
use crate::config::Config;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};
use std::time::Duration;
use tracing::{debug, info};

/// Trait for scraping API operations - enables mocking for tests.
#[async_trait]
pub trait ScrapeApi: Send + Sync {
    /// Submits a product URL for scraping and returns the server's JSON payload.
    async fn scrape(&self, url: &str) -> Result<Value, ApiError>;

    /// Lists the marketplace countries the server supports.
    async fn countries(&self) -> Result<CountryList, ApiError>;

    /// Queries the server's health endpoint.
    async fn health(&self) -> Result<Health, ApiError>;
}

/// HTTP client for a self-hosted scraping API server.
///
/// Each operation issues exactly one request. Failures are never retried;
/// they surface to the caller as [`ApiError`].
pub struct ApiClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl ApiClient {
    /// Creates a new API client from the given configuration.
    pub fn new(config: &Config) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            client,
            base_url: config.api_url.clone(),
            api_key: config.api_key.clone(),
        })
    }

    /// Joins an endpoint path onto the base URL.
    ///
    /// Strips at most one trailing `/` from the base; `http://host//` keeps
    /// its second slash.
    fn endpoint(&self, path: &str) -> String {
        let base = self.base_url.strip_suffix('/').unwrap_or(&self.base_url);
        format!("{}{}", base, path)
    }

    /// Checks the response status and decodes the body as JSON.
    async fn decode(response: reqwest::Response) -> Result<Value, ApiError> {
        let status = response.status();
        debug!("Response status: {}", status);

        if !status.is_success() {
            return Err(ApiError::RequestFailed { status: status.as_u16() });
        }

        // Body is read whole, then parsed separately: a read failure is a
        // transport error, a parse failure is a decode error.
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn get_json(&self, path: &str, with_key: bool) -> Result<Value, ApiError> {
        let endpoint = self.endpoint(path);
        debug!("GET {}", endpoint);

        let mut request = self.client.get(&endpoint);
        if with_key {
            request = request.header("X-API-Key", &self.api_key);
        }

        let response = request.send().await?;
        Self::decode(response).await
    }
}

#[async_trait]
impl ScrapeApi for ApiClient {
    async fn scrape(&self, url: &str) -> Result<Value, ApiError> {
        let endpoint = self.endpoint("/api/scrape");

        info!("Scraping: {}", url);
        debug!("POST {}", endpoint);

        let response = self
            .client
            .post(&endpoint)
            .header("Content-Type", "application/json")
            .header("X-API-Key", &self.api_key)
            .json(&json!({ "url": url }))
            .send()
            .await?;

        Self::decode(response).await
    }

    async fn countries(&self) -> Result<CountryList, ApiError> {
        info!("Fetching supported countries");
        let value = self.get_json("/api/countries", true).await?;
        Ok(serde_json::from_value(value)?)
    }

    async fn health(&self) -> Result<Health, ApiError> {
        // The health endpoint is unauthenticated on the server side.
        let value = self.get_json("/api/health", false).await?;
        Ok(serde_json::from_value(value)?)
    }
}

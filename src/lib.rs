//! amz-scrape - CLI client for a self-hosted Amazon product scraping API.
//!
//! Talks to the AmazonScraper HTTP API: submits product URLs for scraping
//! and passes the server's JSON payload through to the caller.

pub mod api;
pub mod commands;
pub mod config;
pub mod format;

pub use api::{ApiClient, ApiError, Country, CountryList, Health, ScrapeApi};
pub use config::Config;

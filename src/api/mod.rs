//! Scraping API modules for the HTTP client, errors, and response models.

pub mod client;
pub mod error;
pub mod models;

pub use client::{ApiClient, ScrapeApi};
pub use error::ApiError;
pub use models::{Country, CountryList, Health};

//! Data models for scraping API responses.
//!
//! Only the countries and health endpoints have a stable documented shape.
//! The scrape payload itself is service-defined and passed through as raw
//! `serde_json::Value`.

use serde::{Deserialize, Serialize};

/// A marketplace country supported by the scraping server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Country {
    /// Two-letter country code (e.g. "US", "IN")
    pub code: String,

    /// Human-readable country name
    pub name: String,

    /// Amazon domain for this country (e.g. "amazon.co.uk")
    pub domain: String,

    /// Currency symbol
    pub currency: String,

    /// ISO currency code
    pub currency_code: String,
}

/// Response of the countries listing endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryList {
    pub success: bool,
    pub count: usize,
    pub countries: Vec<Country>,
}

/// Response of the health endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Health {
    /// "healthy" when the server is up
    pub status: String,

    pub service: String,

    #[serde(default)]
    pub timestamp: Option<String>,
}

impl Health {
    /// Returns whether the server reported itself healthy.
    pub fn is_healthy(&self) -> bool {
        self.status.eq_ignore_ascii_case("healthy")
    }
}

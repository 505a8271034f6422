//! Output formatting for API responses (pretty or compact JSON, tables).

use crate::api::models::{CountryList, Health};
use crate::config::OutputFormat;
use serde_json::Value;

/// Formats API responses for output.
pub struct Formatter {
    format: OutputFormat,
}

impl Formatter {
    /// Creates a new formatter.
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Formats a scrape payload. The payload is service-defined JSON and is
    /// rendered without reinterpretation.
    pub fn format_payload(&self, value: &Value) -> String {
        match self.format {
            OutputFormat::Pretty => {
                serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
            }
            OutputFormat::Json => value.to_string(),
        }
    }

    /// Formats the countries listing.
    pub fn format_countries(&self, list: &CountryList) -> String {
        match self.format {
            OutputFormat::Json => {
                serde_json::to_string(list).unwrap_or_else(|_| "{}".to_string())
            }
            OutputFormat::Pretty => self.countries_table(list),
        }
    }

    /// Formats a health check result.
    pub fn format_health(&self, health: &Health) -> String {
        match self.format {
            OutputFormat::Json => {
                serde_json::to_string(health).unwrap_or_else(|_| "{}".to_string())
            }
            OutputFormat::Pretty => {
                let mut line = format!("{}: {}", health.service, health.status);
                if let Some(ts) = &health.timestamp {
                    line.push_str(&format!(" (as of {})", ts));
                }
                line
            }
        }
    }

    fn countries_table(&self, list: &CountryList) -> String {
        if list.countries.is_empty() {
            return "No countries supported.".to_string();
        }

        let mut lines = Vec::new();
        lines.push(format!(
            "{:<6} {:<20} {:<20} {:<10}",
            "Code", "Name", "Domain", "Currency"
        ));
        lines.push(format!("{:-<6} {:-<20} {:-<20} {:-<10}", "", "", "", ""));

        for country in &list.countries {
            lines.push(format!(
                "{:<6} {:<20} {:<20} {:<10}",
                country.code, country.name, country.domain, country.currency_code
            ));
        }

        lines.push(String::new());
        lines.push(format!("{} countries supported", list.countries.len()));

        lines.join("\n")
    }
}

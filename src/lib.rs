//! carwale-scrape: a used-car listing scraper
//!
//! This crate fetches paginated CarWale listing pages, extracts one record per
//! listing card, and persists the collected records as CSV and JSON.

pub mod config;
pub mod crawler;
pub mod output;
pub mod record;

use thiserror::Error;

/// Main error type for scraping operations
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP error for {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("HTTP {status} for {url}: {}", body_preview(.body))]
    Status {
        url: String,
        status: u16,
        body: Option<String>,
    },

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] ::url::ParseError),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Longest response excerpt shown in a status error
pub const BODY_PREVIEW_CHARS: usize = 200;

/// Collapses whitespace in a response body and cuts it to
/// `BODY_PREVIEW_CHARS` characters
fn body_preview(body: &Option<String>) -> String {
    let Some(body) = body else {
        return "<no response content>".to_string();
    };

    let collapsed = body.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.is_empty() {
        return "<empty response>".to_string();
    }

    match collapsed.char_indices().nth(BODY_PREVIEW_CHARS) {
        Some((cut, _)) => format!("{}...", &collapsed[..cut]),
        None => collapsed,
    }
}

/// Result type alias for scraping operations
pub type Result<T> = std::result::Result<T, ScrapeError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::{run_scrape, Paginator, RunSummary};
pub use output::{persist, PersistOutcome};
pub use record::{Accumulator, ListingRecord, PLACEHOLDER};

//! Crawler module for listing page fetching and extraction
//!
//! This module contains the core scraping logic, including:
//! - HTTP fetching with the static browser header set
//! - Listing card location with prioritized matcher strategies
//! - Per-field record extraction
//! - Page-by-page orchestration

mod debug_sink;
mod extractor;
mod fetcher;
mod locator;
mod matcher;
mod paginator;

pub use debug_sink::{debug_file_name, DebugSink, FileDebugSink, NoopDebugSink};
pub use extractor::{extract_record, field_matcher, find_field, parse_listings};
pub use fetcher::{build_http_client, Fetcher};
pub use locator::{
    locate_listings, locate_with, select_matching, FALLBACK_STRATEGY, LISTING_STRATEGIES,
    PRIMARY_STRATEGY,
};
pub use matcher::{ClassMatch, ElementMatcher};
pub use paginator::Paginator;

pub use crate::output::RunSummary;

use crate::config::Config;
use crate::output::{log_summary, persist, PersistOutcome};
use crate::ScrapeError;

/// Runs a complete scrape
///
/// This is the main entry point. It will:
/// 1. Build the HTTP client and debug sink from `config`
/// 2. Scrape `config.scraper.pages` pages in order
/// 3. Log the run summary
/// 4. Persist the collected records as CSV and JSON
///
/// Page failures never fail the run; only setup and persistence errors are
/// returned.
pub async fn run_scrape(config: &Config) -> Result<(RunSummary, PersistOutcome), ScrapeError> {
    let mut paginator = Paginator::from_config(config)?;
    let summary = paginator.run(config.scraper.pages).await;
    log_summary(&summary);

    let accumulator = paginator.into_accumulator();
    let outcome = persist(accumulator.records(), &config.output)?;

    Ok((summary, outcome))
}

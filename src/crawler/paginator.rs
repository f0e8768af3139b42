//! Paginator - main scrape orchestration logic
//!
//! Pages are processed strictly one after another:
//! fetch → debug dump → parse → locate → extract → accumulate → pause.
//! A failed page is logged and contributes nothing; the run always moves on
//! to the next page and never retries.

use crate::config::Config;
use crate::crawler::debug_sink::{DebugSink, FileDebugSink, NoopDebugSink};
use crate::crawler::extractor::parse_listings;
use crate::crawler::fetcher::Fetcher;
use crate::output::RunSummary;
use crate::record::{Accumulator, ListingRecord};
use crate::ScrapeError;
use std::time::Duration;

/// Drives the fetch/extract pipeline across a range of pages
pub struct Paginator {
    fetcher: Fetcher,
    sink: Box<dyn DebugSink>,
    delay: Duration,
    accumulator: Accumulator,
}

impl Paginator {
    /// Creates a paginator with an empty accumulator
    ///
    /// # Arguments
    ///
    /// * `fetcher` - Page fetcher
    /// * `sink` - Receives the decoded HTML of every 2xx page before parsing
    /// * `delay` - Pause after each page
    pub fn new(fetcher: Fetcher, sink: Box<dyn DebugSink>, delay: Duration) -> Self {
        Self {
            fetcher,
            sink,
            delay,
            accumulator: Accumulator::new(),
        }
    }

    /// Creates a paginator from the full configuration
    pub fn from_config(config: &Config) -> Result<Self, ScrapeError> {
        let fetcher = Fetcher::new(&config.scraper, &config.http)?;

        let sink: Box<dyn DebugSink> = if config.output.dump_debug_html {
            Box::new(FileDebugSink::new(config.output.debug_dir.clone()))
        } else {
            Box::new(NoopDebugSink)
        };

        Ok(Self::new(fetcher, sink, config.scraper.delay()))
    }

    /// Scrapes pages `1..=total_pages`
    ///
    /// Records are appended to the accumulator in page order. The configured
    /// delay follows every page, including failed ones and the last one.
    pub async fn run(&mut self, total_pages: u32) -> RunSummary {
        tracing::info!("Starting scrape of {} pages", total_pages);
        let mut summary = RunSummary::new();

        for page in 1..=total_pages {
            tracing::info!("Scraping page {}...", page);

            match self.scrape_page(page).await {
                Ok(records) => {
                    tracing::info!("Page {} yielded {} records", page, records.len());
                    summary.record_success(page, records.len());
                    self.accumulator.extend(records);
                }
                Err(e) => {
                    tracing::error!("Error fetching page {}: {}", page, e);
                    summary.record_failure(page, &e);
                }
            }

            if !self.delay.is_zero() {
                tokio::time::sleep(self.delay).await;
            }
        }

        summary
    }

    /// Fetches and parses a single page
    ///
    /// Does not touch the accumulator.
    pub async fn scrape_page(&self, page: u32) -> Result<Vec<ListingRecord>, ScrapeError> {
        let body = self.fetcher.fetch(page).await?;

        if let Err(e) = self.sink.record_page(page, &body) {
            tracing::warn!("Failed to save debug HTML for page {}: {}", page, e);
        }

        Ok(parse_listings(&body))
    }

    pub fn accumulator(&self) -> &Accumulator {
        &self.accumulator
    }

    pub fn into_accumulator(self) -> Accumulator {
        self.accumulator
    }
}

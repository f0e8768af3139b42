//! Run statistics
//!
//! The paginator fills a [`RunSummary`] as it goes; the summary is logged once
//! the run is over.

/// A page that contributed no records because it failed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageFailure {
    pub page: u32,
    pub error: String,
}

/// Outcome of one pagination run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Number of pages requested
    pub pages_attempted: u32,

    /// Records extracted from each page that succeeded, in page order
    pub page_records: Vec<(u32, usize)>,

    /// Pages that failed, in page order
    pub failed_pages: Vec<PageFailure>,
}

impl RunSummary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_success(&mut self, page: u32, records: usize) {
        self.pages_attempted += 1;
        self.page_records.push((page, records));
    }

    pub fn record_failure(&mut self, page: u32, error: impl ToString) {
        self.pages_attempted += 1;
        self.failed_pages.push(PageFailure {
            page,
            error: error.to_string(),
        });
    }

    /// Total number of records extracted during the run
    pub fn total_records(&self) -> usize {
        self.page_records.iter().map(|(_, count)| count).sum()
    }

    /// Page numbers that were fetched and parsed
    pub fn succeeded_pages(&self) -> Vec<u32> {
        self.page_records.iter().map(|(page, _)| *page).collect()
    }

    /// Page numbers that failed
    pub fn failed_page_numbers(&self) -> Vec<u32> {
        self.failed_pages.iter().map(|failure| failure.page).collect()
    }
}

/// Logs a run summary
pub fn log_summary(summary: &RunSummary) {
    tracing::info!(
        "Run finished: {} pages attempted, {} failed, {} records collected",
        summary.pages_attempted,
        summary.failed_pages.len(),
        summary.total_records()
    );

    for failure in &summary.failed_pages {
        tracing::warn!("Page {} contributed no records: {}", failure.page, failure.error);
    }
}

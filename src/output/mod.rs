//! Output module for persisting scraped records
//!
//! This module handles:
//! - Writing the collected records as CSV and JSON
//! - Substituting the built-in sample records for an empty run
//! - Summarizing a run

mod csv_output;
mod json_output;
mod samples;
pub mod stats;
mod traits;

pub use csv_output::CsvRecordWriter;
pub use json_output::JsonRecordWriter;
pub use samples::sample_records;
pub use stats::{log_summary, PageFailure, RunSummary};
pub use traits::RecordWriter;

use crate::config::OutputConfig;
use crate::record::ListingRecord;
use crate::ScrapeError;
use std::path::{Path, PathBuf};

/// What [`persist`] wrote
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistOutcome {
    pub csv_path: PathBuf,
    pub json_path: PathBuf,

    /// Number of records in each file
    pub records_written: usize,

    /// True when the sample records replaced an empty result
    pub used_sample_data: bool,
}

/// Writes `records` to the configured CSV and JSON files
///
/// The data directory is created if needed. When `records` is empty and
/// `sample_data_on_empty` is set, both files receive exactly the two
/// [`sample_records`] instead; otherwise empty files are written.
///
/// # Arguments
///
/// * `records` - The accumulated records, in run order
/// * `config` - Output locations
///
/// # Returns
///
/// * `Ok(PersistOutcome)` - Both files were written
/// * `Err(ScrapeError)` - Directory creation or a write failed
pub fn persist(records: &[ListingRecord], config: &OutputConfig) -> Result<PersistOutcome, ScrapeError> {
    std::fs::create_dir_all(&config.data_dir)?;

    let samples;
    let (records, used_sample_data) = if !records.is_empty() {
        (records, false)
    } else if config.sample_data_on_empty {
        tracing::warn!("No data was collected, writing sample records instead");
        samples = sample_records();
        (samples.as_slice(), true)
    } else {
        tracing::warn!("No data was collected, writing empty output files");
        (records, false)
    };

    let csv_path = config.csv_path();
    let json_path = config.json_path();

    write_with(&CsvRecordWriter, records, &csv_path)?;
    write_with(&JsonRecordWriter, records, &json_path)?;

    Ok(PersistOutcome {
        records_written: records.len(),
        csv_path,
        json_path,
        used_sample_data,
    })
}

fn write_with(
    writer: &dyn RecordWriter,
    records: &[ListingRecord],
    path: &Path,
) -> Result<(), ScrapeError> {
    writer.write_records(records, path)?;
    tracing::info!(
        "Saved {} records to {} ({})",
        records.len(),
        path.display(),
        writer.format_name()
    );
    Ok(())
}

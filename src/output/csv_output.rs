//! CSV export
//!
//! Header row is [`FIELD_NAMES`], one row per record, no index column, `\n`
//! line endings. Values are quoted only when they need to be, so prices such
//! as `₹5,00,000` come out quoted.

use crate::output::traits::RecordWriter;
use crate::record::{ListingRecord, FIELD_NAMES};
use crate::ScrapeError;
use std::io::Write;
use std::path::Path;

/// Writes records as comma-separated values
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvRecordWriter;

impl CsvRecordWriter {
    /// Writes the header and every record to `out`
    pub fn write_to<W: Write>(&self, records: &[ListingRecord], out: W) -> Result<(), ScrapeError> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(out);

        writer.write_record(FIELD_NAMES)?;
        for record in records {
            writer.write_record(record.values())?;
        }
        writer.flush()?;

        Ok(())
    }
}

impl RecordWriter for CsvRecordWriter {
    fn format_name(&self) -> &'static str {
        "CSV"
    }

    fn write_records(&self, records: &[ListingRecord], path: &Path) -> Result<(), ScrapeError> {
        let file = std::fs::File::create(path)?;
        self.write_to(records, file)
    }
}

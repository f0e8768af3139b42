//! JSON export
//!
//! An array of objects keyed by field name, pretty-printed with four-space
//! indentation.

use crate::output::traits::RecordWriter;
use crate::record::ListingRecord;
use crate::ScrapeError;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::io::{BufWriter, Write};
use std::path::Path;

const INDENT: &[u8] = b"    ";

/// Writes records as a pretty-printed JSON array
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRecordWriter;

impl JsonRecordWriter {
    /// Serializes `records` into `out`
    pub fn write_to<W: Write>(&self, records: &[ListingRecord], out: W) -> Result<(), ScrapeError> {
        let mut out = BufWriter::new(out);
        let mut serializer = Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(INDENT));
        records.serialize(&mut serializer)?;
        out.flush()?;
        Ok(())
    }
}

impl RecordWriter for JsonRecordWriter {
    fn format_name(&self) -> &'static str {
        "JSON"
    }

    fn write_records(&self, records: &[ListingRecord], path: &Path) -> Result<(), ScrapeError> {
        let file = std::fs::File::create(path)?;
        self.write_to(records, file)
    }
}

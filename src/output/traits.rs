//! Record writer trait
//!
//! Each export format implements [`RecordWriter`]. Writers always replace the
//! target file; nothing is appended or merged.

use crate::record::ListingRecord;
use crate::ScrapeError;
use std::path::Path;

/// Trait for export formats
pub trait RecordWriter {
    /// Short format name used in log messages
    fn format_name(&self) -> &'static str;

    /// Writes `records`, in order, to `path`
    ///
    /// # Arguments
    ///
    /// * `records` - The records to export
    /// * `path` - Destination file; overwritten if it exists
    fn write_records(&self, records: &[ListingRecord], path: &Path) -> Result<(), ScrapeError>;
}

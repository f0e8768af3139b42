//! Raw page dumps
//!
//! Every successfully fetched page is handed to a [`DebugSink`] before it is
//! parsed. The file sink reproduces the `debug_page_{n}.html` dumps; the
//! no-op sink turns dumping off.

use std::fs;
use std::io;
use std::path::PathBuf;

/// Receives the raw HTML of each fetched page
pub trait DebugSink {
    /// Stores the body of `page`
    fn record_page(&self, page: u32, html: &str) -> io::Result<()>;
}

/// File name used for the dump of one page
pub fn debug_file_name(page: u32) -> String {
    format!("debug_page_{}.html", page)
}

/// Writes `debug_page_{n}.html` files into a directory
#[derive(Debug, Clone)]
pub struct FileDebugSink {
    dir: PathBuf,
}

impl FileDebugSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path the dump of `page` is written to
    pub fn page_path(&self, page: u32) -> PathBuf {
        self.dir.join(debug_file_name(page))
    }
}

impl DebugSink for FileDebugSink {
    fn record_page(&self, page: u32, html: &str) -> io::Result<()> {
        fs::create_dir_all(&self.dir)?;
        let path = self.page_path(page);
        fs::write(&path, html)?;
        tracing::debug!("Saved page {} HTML to {}", page, path.display());
        Ok(())
    }
}

/// Discards every page
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopDebugSink;

impl DebugSink for NoopDebugSink {
    fn record_page(&self, _page: u32, _html: &str) -> io::Result<()> {
        Ok(())
    }
}

//! Default configuration values
//!
//! Every value here is what a run uses when no config file is given.

/// Listing index that page numbers are appended to
pub const BASE_URL: &str = "https://www.carwale.com/used/cars-for-sale/";

/// Query parameter carrying the page number
pub const PAGE_PARAM: &str = "page";

/// Number of pages scraped by a default run
pub const PAGES: u32 = 10;

/// Pause after each page, in milliseconds
pub const DELAY_MS: u64 = 5_000;

pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";
pub const ACCEPT: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8";
pub const ACCEPT_LANGUAGE: &str = "en-US,en;q=0.5";
pub const CONNECTION: &str = "keep-alive";
pub const UPGRADE_INSECURE_REQUESTS: &str = "1";
pub const CACHE_CONTROL: &str = "max-age=0";

/// Directory receiving the CSV and JSON exports
pub const DATA_DIR: &str = "data";
pub const CSV_FILE: &str = "car_data.csv";
pub const JSON_FILE: &str = "car_data.json";

/// Directory receiving `debug_page_{n}.html` dumps
pub const DEBUG_DIR: &str = ".";

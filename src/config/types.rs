use crate::config::defaults;
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

/// Main configuration structure
///
/// Every section and key is optional; an empty TOML document yields
/// [`Config::default`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Config {
    pub scraper: ScraperConfig,
    pub http: HttpConfig,
    pub output: OutputConfig,
}

/// Pagination behavior
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ScraperConfig {
    /// Listing index URL; the page parameter is appended to it
    pub base_url: String,

    /// Name of the page-number query parameter
    pub page_param: String,

    /// Number of pages to scrape, starting at 1
    pub pages: u32,

    /// Pause after each page (milliseconds)
    pub delay_ms: u64,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::BASE_URL.to_string(),
            page_param: defaults::PAGE_PARAM.to_string(),
            pages: defaults::PAGES,
            delay_ms: defaults::DELAY_MS,
        }
    }
}

impl ScraperConfig {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

/// Static request headers sent with every page fetch
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct HttpConfig {
    pub user_agent: String,
    pub accept: String,
    pub accept_language: String,
    pub connection: String,
    pub upgrade_insecure_requests: String,
    pub cache_control: String,

    /// Whole-request timeout; `None` keeps the client default
    pub timeout_secs: Option<u64>,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: defaults::USER_AGENT.to_string(),
            accept: defaults::ACCEPT.to_string(),
            accept_language: defaults::ACCEPT_LANGUAGE.to_string(),
            connection: defaults::CONNECTION.to_string(),
            upgrade_insecure_requests: defaults::UPGRADE_INSECURE_REQUESTS.to_string(),
            cache_control: defaults::CACHE_CONTROL.to_string(),
            timeout_secs: None,
        }
    }
}

impl HttpConfig {
    /// Header name/value pairs in the order they are installed on the client
    pub fn header_pairs(&self) -> [(&'static str, &str); 6] {
        [
            ("user-agent", self.user_agent.as_str()),
            ("accept", self.accept.as_str()),
            ("accept-language", self.accept_language.as_str()),
            ("connection", self.connection.as_str()),
            ("upgrade-insecure-requests", self.upgrade_insecure_requests.as_str()),
            ("cache-control", self.cache_control.as_str()),
        ]
    }
}

/// Output locations
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct OutputConfig {
    /// Directory holding the CSV and JSON exports
    pub data_dir: PathBuf,

    pub csv_file: String,

    pub json_file: String,

    /// Directory receiving raw page dumps
    pub debug_dir: PathBuf,

    /// Write `debug_page_{n}.html` for every fetched page
    pub dump_debug_html: bool,

    /// Write the built-in sample records when a run collects nothing
    pub sample_data_on_empty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(defaults::DATA_DIR),
            csv_file: defaults::CSV_FILE.to_string(),
            json_file: defaults::JSON_FILE.to_string(),
            debug_dir: PathBuf::from(defaults::DEBUG_DIR),
            dump_debug_html: true,
            sample_data_on_empty: true,
        }
    }
}

impl OutputConfig {
    pub fn csv_path(&self) -> PathBuf {
        self.data_dir.join(&self.csv_file)
    }

    pub fn json_path(&self) -> PathBuf {
        self.data_dir.join(&self.json_file)
    }
}

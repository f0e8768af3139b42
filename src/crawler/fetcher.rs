//! HTTP fetcher implementation
//!
//! One GET per page number with a fixed header set. There is no retry: a
//! transport error or a non-2xx status is returned to the caller, which
//! skips the page.

use crate::config::{HttpConfig, ScraperConfig};
use crate::{ConfigError, ScrapeError};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Builds an HTTP client that sends the configured headers on every request
///
/// # Arguments
///
/// * `config` - Header values and optional timeout
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(ScrapeError)` - A header value was rejected or the client failed to build
///
/// # Example
///
/// ```no_run
/// use carwale_scrape::config::HttpConfig;
/// use carwale_scrape::crawler::build_http_client;
///
/// let client = build_http_client(&HttpConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &HttpConfig) -> Result<Client, ScrapeError> {
    let mut headers = HeaderMap::new();
    for (name, value) in config.header_pairs() {
        let value = HeaderValue::from_str(value).map_err(|e| {
            ConfigError::Validation(format!("Invalid value for header '{}': {}", name, e))
        })?;
        headers.insert(HeaderName::from_static(name), value);
    }

    let mut builder = Client::builder()
        .default_headers(headers)
        .gzip(true)
        .brotli(true);

    if let Some(secs) = config.timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }

    Ok(builder.build()?)
}

/// Fetches listing pages by number
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
    base_url: Url,
    page_param: String,
}

impl Fetcher {
    /// Creates a fetcher from the scraper and HTTP sections of the config
    pub fn new(scraper: &ScraperConfig, http: &HttpConfig) -> Result<Self, ScrapeError> {
        let base_url = Url::parse(&scraper.base_url)?;
        let client = build_http_client(http)?;

        Ok(Self {
            client,
            base_url,
            page_param: scraper.page_param.clone(),
        })
    }

    /// Returns the URL of one listing page
    pub fn page_url(&self, page: u32) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut()
            .append_pair(&self.page_param, &page.to_string());
        url
    }

    /// Fetches one page and returns its body
    ///
    /// The body is decoded with the charset declared in `Content-Type`
    /// (UTF-8 when none is given). Invalid byte sequences become U+FFFD, so
    /// any readable 2xx body is returned.
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The HTML of a 2xx response
    /// * `Err(ScrapeError::Http)` - The request could not be completed or the
    ///   body could not be read
    /// * `Err(ScrapeError::Status)` - The server answered outside 2xx; the
    ///   body is attached when it could be read
    pub async fn fetch(&self, page: u32) -> Result<String, ScrapeError> {
        let url = self.page_url(page);
        tracing::info!("Fetching URL: {}", url);

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|source| ScrapeError::Http {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.ok();
            match &body {
                Some(text) => tracing::debug!("Response content for page {}: {}", page, text),
                None => tracing::debug!("No response content for page {}", page),
            }

            return Err(ScrapeError::Status {
                url: url.to_string(),
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await.map_err(|source| ScrapeError::Http {
            url: url.to_string(),
            source,
        })?;

        tracing::info!(
            "Page {} returned {} with {} bytes",
            page,
            status.as_u16(),
            body.len()
        );

        Ok(body)
    }
}

use crate::config::types::{Config, HttpConfig, OutputConfig, ScraperConfig};
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_scraper_config(&config.scraper)?;
    validate_http_config(&config.http)?;
    validate_output_config(&config.output)?;
    Ok(())
}

fn validate_scraper_config(config: &ScraperConfig) -> Result<(), ConfigError> {
    let url = Url::parse(&config.base_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid base_url: {}", e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::InvalidUrl(format!(
            "base_url must use http or https, got '{}'",
            config.base_url
        )));
    }

    if config.page_param.is_empty() {
        return Err(ConfigError::Validation(
            "page_param cannot be empty".to_string(),
        ));
    }

    if config.pages < 1 {
        return Err(ConfigError::Validation(format!(
            "pages must be >= 1, got {}",
            config.pages
        )));
    }

    Ok(())
}

fn validate_http_config(config: &HttpConfig) -> Result<(), ConfigError> {
    for (name, value) in config.header_pairs() {
        if value.is_empty() {
            return Err(ConfigError::Validation(format!(
                "header '{}' cannot be empty",
                name
            )));
        }

        // Header values must be visible ASCII or tab
        if !value.chars().all(|c| c == '\t' || (' '..='~').contains(&c)) {
            return Err(ConfigError::Validation(format!(
                "header '{}' contains invalid characters",
                name
            )));
        }
    }

    if config.timeout_secs == Some(0) {
        return Err(ConfigError::Validation(
            "timeout_secs must be >= 1 when set".to_string(),
        ));
    }

    Ok(())
}

fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    if config.data_dir.as_os_str().is_empty() {
        return Err(ConfigError::Validation("data_dir cannot be empty".to_string()));
    }

    if config.csv_file.is_empty() {
        return Err(ConfigError::Validation("csv_file cannot be empty".to_string()));
    }

    if config.json_file.is_empty() {
        return Err(ConfigError::Validation(
            "json_file cannot be empty".to_string(),
        ));
    }

    if config.csv_file == config.json_file {
        return Err(ConfigError::Validation(format!(
            "csv_file and json_file must differ, both are '{}'",
            config.csv_file
        )));
    }

    Ok(())
}

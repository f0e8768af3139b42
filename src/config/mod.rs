//! Configuration module
//!
//! A run needs no configuration at all: [`Config::default`] reproduces the
//! stock scrape of ten CarWale pages. A TOML file may override any value.
//!
//! # Example
//!
//! ```no_run
//! use carwale_scrape::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("scrape.toml")).unwrap();
//! println!("Scraping {} pages", config.scraper.pages);
//! ```

pub mod defaults;
mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, HttpConfig, OutputConfig, ScraperConfig};

// Re-export parser functions
pub use parser::{load_config, parse_config};
pub use validation::validate;

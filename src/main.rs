//! carwale-scrape main entry point
//!
//! Running with no arguments scrapes the first ten CarWale used-car pages and
//! writes `data/car_data.csv` and `data/car_data.json`.

use anyhow::Context;
use carwale_scrape::config::{load_config, validate, Config};
use carwale_scrape::run_scrape;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// carwale-scrape: a used-car listing scraper
///
/// Fetches CarWale listing pages one at a time, extracts one record per
/// listing card, and saves the results as CSV and JSON.
#[derive(Parser, Debug)]
#[command(name = "carwale-scrape")]
#[command(version)]
#[command(about = "Scrapes used-car listings from CarWale", long_about = None)]
struct Cli {
    /// Optional TOML configuration file; defaults apply to missing keys
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Number of pages to scrape (overrides the config file)
    #[arg(short, long, value_name = "N")]
    pages: Option<u32>,

    /// Do not write debug_page_{n}.html dumps
    #[arg(long)]
    no_debug_html: bool,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    match run(cli).await {
        Ok(()) => {
            tracing::info!("Scraping completed successfully!");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("An error occurred: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("carwale_scrape=info,warn"),
            1 => EnvFilter::new("carwale_scrape=debug,info"),
            2 => EnvFilter::new("carwale_scrape=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Resolves the configuration and performs the scrape
async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            load_config(path)
                .with_context(|| format!("failed to load config {}", path.display()))?
        }
        None => Config::default(),
    };

    if let Some(pages) = cli.pages {
        config.scraper.pages = pages;
    }
    if cli.no_debug_html {
        config.output.dump_debug_html = false;
    }
    validate(&config).context("invalid command-line overrides")?;

    let (summary, outcome) = run_scrape(&config).await?;

    tracing::info!(
        "Wrote {} records from {} of {} pages to {} and {}",
        outcome.records_written,
        summary.page_records.len(),
        summary.pages_attempted,
        outcome.csv_path.display(),
        outcome.json_path.display()
    );
    if outcome.used_sample_data {
        tracing::warn!("Output contains sample records only; no listings were scraped");
    }

    Ok(())
}

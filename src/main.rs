//! # masjid-times CLI
//!
//! Fetches the mosque display page, extracts the prayer schedule, and
//! writes it to a JSON file. The pipeline is strictly sequential: fetch,
//! extract, write, with a progress line before each step. Extraction
//! problems degrade to the built-in defaults and are logged as warnings;
//! only fetch and write failures abort the run with a non-zero exit.

use std::path::PathBuf;

use clap::Parser;
use tracing::{instrument, warn};
use tracing_subscriber::EnvFilter;

use masjid_times::extract::{SelectorConfig, extract};
use masjid_times::fetch::PageFetcher;
use masjid_times::output::write_schedule;

/// Display page this scraper was built for
const DEFAULT_URL: &str = "https://moonode.tv/glassy/DINSCREEN-496636-MONTREAL-CANADA-H7X2B6";

#[derive(Parser, Debug)]
#[command(author, version, about = "Scrape a mosque display page into a prayer-times JSON file", long_about = None)]
struct Cli {
    /// Page to scrape
    #[arg(short, long, default_value = DEFAULT_URL)]
    url: String,

    /// Output file path
    #[arg(short, long, default_value = "prayer-times.json")]
    output: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    run(cli).await
}

#[instrument]
async fn run(cli: Cli) -> anyhow::Result<()> {
    println!("Fetching {}...", cli.url);
    let html = PageFetcher::new().fetch(&cli.url).await?;

    println!("Extracting prayer times...");
    let (schedule, warnings) = extract(&html, &SelectorConfig::default());
    for warning in &warnings {
        warn!("extraction: {}", warning);
    }

    println!("Writing prayer times to {}...", cli.output.display());
    write_schedule(&cli.output, &schedule).await?;

    println!("Done!");
    Ok(())
}

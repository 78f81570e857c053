//! newsprep-dates - Date randomizer for the news dataset
//!
//! Assigns a uniformly random date between 2020-01-01 and 2024-11-01 to
//! each article's `date` field. By default the dataset is refreshed in
//! place, matching how the tool is used to reshuffle sample data.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

use newsprep_common::{config, dataset};
use newsprep_dates::{randomize_dates, DateRange};

/// Command-line arguments for newsprep-dates
#[derive(Parser, Debug)]
#[command(name = "newsprep-dates")]
#[command(about = "Assign random publication dates to a news article dataset")]
#[command(version)]
struct Args {
    /// Input dataset (JSON array of articles)
    #[arg(short, long)]
    input: Option<String>,

    /// Output path (default: rewrite the input file)
    #[arg(short, long)]
    output: Option<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let input = config::resolve_dataset_path(args.input.as_deref(), "NEWSPREP_DATA_FILE");
    let output = args.output.map(PathBuf::from).unwrap_or_else(|| input.clone());

    info!("Reading dataset from {}", input.display());
    let mut articles = dataset::load_articles(&input)?;

    let range = DateRange::standard();
    let touched = randomize_dates(&mut articles, range, &mut rand::thread_rng());

    dataset::save_articles(&output, &articles)?;

    info!(
        "Randomized dates for {} articles ({} to {})",
        touched, range.start, range.end
    );
    info!("Saved dataset to {}", output.display());

    Ok(())
}

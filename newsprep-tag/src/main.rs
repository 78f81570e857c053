//! newsprep-tag - Auto-tagger for the news dataset
//!
//! Applies keyword-based tag inference to every article in a JSON dataset,
//! merges the inferred tags into each article's existing tag list, and
//! pads under-tagged articles with generic fallback tags. Output goes to a
//! separate file so the input dataset is never destroyed.

use anyhow::{bail, Result};
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing::info;

use newsprep_common::{config, dataset};
use newsprep_tag::{tag_articles, TagInferenceEngine, TagRuleTable};

/// Command-line arguments for newsprep-tag
#[derive(Parser, Debug)]
#[command(name = "newsprep-tag")]
#[command(about = "Infer and merge tags for a news article dataset")]
#[command(version)]
struct Args {
    /// Input dataset (JSON array of articles)
    #[arg(short, long)]
    input: Option<String>,

    /// Output path (default: input with a .tagged.json suffix)
    #[arg(short, long)]
    output: Option<String>,
}

/// Derive `news.sample.tagged.json` from `news.sample.json`
fn default_output_path(input: &Path) -> PathBuf {
    match input.file_stem().and_then(|s| s.to_str()) {
        Some(stem) => input.with_file_name(format!("{stem}.tagged.json")),
        None => input.with_extension("tagged.json"),
    }
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
    let output = args
        .output
        .map(PathBuf::from)
        .unwrap_or_else(|| default_output_path(&input));

    if output == input {
        bail!(
            "Output path {} would overwrite the input dataset",
            output.display()
        );
    }

    info!("Reading dataset from {}", input.display());
    let mut articles = dataset::load_articles(&input)?;

    let engine = TagInferenceEngine::new(TagRuleTable::standard());
    let summary = tag_articles(&engine, &mut articles);

    dataset::save_articles(&output, &articles)?;

    info!("Processed {} articles", summary.processed);
    info!("Updated tags for {} articles", summary.updated);
    info!("Saved updated dataset to {}", output.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_output_path() {
        assert_eq!(
            default_output_path(Path::new("data/news.sample.json")),
            PathBuf::from("data/news.sample.tagged.json")
        );
        assert_eq!(
            default_output_path(Path::new("articles.json")),
            PathBuf::from("articles.tagged.json")
        );
    }
}

//! newsprep-expand - Abstract expansion for the news dataset
//!
//! Calls a chat-completion API once per article to expand the abstract
//! into a short `full_text` paragraph. Requests are paced for the
//! provider's rate limits; an article whose attempts all fail gets a
//! sentinel string so the batch still completes.

use anyhow::{bail, Result};
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use newsprep_common::{config, dataset};
use newsprep_expand::client::build_prompt;
use newsprep_expand::{ExpansionClient, EXPANSION_FAILED};

/// Command-line arguments for newsprep-expand
#[derive(Parser, Debug)]
#[command(name = "newsprep-expand")]
#[command(about = "Expand article abstracts into full text via a chat-completion API")]
#[command(version)]
struct Args {
    /// Input dataset (JSON array of articles)
    #[arg(short, long)]
    input: Option<String>,

    /// Output path (default: input with a .expanded.json suffix)
    #[arg(short, long)]
    output: Option<String>,

    /// API key (overrides environment and config file)
    #[arg(long)]
    api_key: Option<String>,

    /// Model name (default: gpt-4o-mini)
    #[arg(long)]
    model: Option<String>,
}

/// Derive `news.sample.expanded.json` from `news.sample.json`
fn default_output_path(input: &Path) -> PathBuf {
    match input.file_stem().and_then(|s| s.to_str()) {
        Some(stem) => input.with_file_name(format!("{stem}.expanded.json")),
        None => input.with_extension("expanded.json"),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let toml_config = config::load_toml_config();

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

    let api_key = newsprep_expand::config::resolve_api_key(args.api_key.as_deref(), &toml_config)?;
    let model = newsprep_expand::config::resolve_model(args.model.as_deref(), &toml_config);

    info!("Loading dataset from {}", input.display());
    let mut articles = dataset::load_articles(&input)?;

    let total = articles.len();
    info!("Found {} articles", total);

    let client = ExpansionClient::new(api_key, model)?;
    let mut failed = 0;

    for (index, article) in articles.iter_mut().enumerate() {
        let id = article
            .extra
            .get("id")
            .map(|v| v.to_string())
            .unwrap_or_else(|| "-".to_string());
        info!("[{}/{}] Expanding article {}", index + 1, total, id);

        let prompt = build_prompt(article);
        match client.expand_with_retry(&prompt).await {
            Some(text) => article.full_text = Some(text),
            None => {
                warn!("All attempts failed for article {}", id);
                article.full_text = Some(EXPANSION_FAILED.to_string());
                failed += 1;
            }
        }
    }

    dataset::save_articles(&output, &articles)?;

    info!("Expanded {} of {} articles", total - failed, total);
    if failed > 0 {
        warn!("{} articles received the failure sentinel", failed);
    }
    info!("Saved expanded dataset to {}", output.display());

    Ok(())
}

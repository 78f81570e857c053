//! Configuration loading and dataset path resolution

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::warn;

/// Compiled default dataset path, relative to the working directory
pub const DEFAULT_DATASET: &str = "data/news.sample.json";

/// Optional TOML configuration (`~/.config/newsprep/config.toml`)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    /// Dataset path override
    pub data_file: Option<String>,
    /// API key for the expansion service
    pub openai_api_key: Option<String>,
    /// Model name for the expansion service
    pub openai_model: Option<String>,
}

/// Dataset path resolution priority order:
/// 1. Command-line argument (highest priority)
/// 2. Environment variable
/// 3. TOML config file (`data_file` key)
/// 4. Compiled default (fallback)
pub fn resolve_dataset_path(cli_arg: Option<&str>, env_var_name: &str) -> PathBuf {
    // Priority 1: Command-line argument
    if let Some(path) = cli_arg {
        return PathBuf::from(path);
    }

    // Priority 2: Environment variable
    if let Ok(path) = std::env::var(env_var_name) {
        if !path.trim().is_empty() {
            return PathBuf::from(path);
        }
    }

    // Priority 3: TOML config file
    if let Some(path) = load_toml_config().data_file {
        return PathBuf::from(path);
    }

    // Priority 4: Compiled default
    PathBuf::from(DEFAULT_DATASET)
}

/// Load the user TOML config, falling back to defaults on any failure.
///
/// A malformed config file is reported once via `warn!` rather than
/// aborting; path and key resolution then continue down the tiers.
pub fn load_toml_config() -> TomlConfig {
    let Some(path) = config_file_path() else {
        return TomlConfig::default();
    };
    if !path.exists() {
        return TomlConfig::default();
    }

    match std::fs::read_to_string(&path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(config) => config,
            Err(e) => {
                warn!("Ignoring malformed config {}: {}", path.display(), e);
                TomlConfig::default()
            }
        },
        Err(e) => {
            warn!("Could not read config {}: {}", path.display(), e);
            TomlConfig::default()
        }
    }
}

/// Platform config file location (`<config dir>/newsprep/config.toml`)
fn config_file_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("newsprep").join("config.toml"))
}

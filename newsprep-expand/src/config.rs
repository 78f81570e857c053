//! API key and model resolution for the expansion service
//!
//! Multi-tier resolution with CLI → ENV → TOML priority.

use newsprep_common::config::TomlConfig;
use newsprep_common::{Error, Result};
use tracing::{info, warn};

/// Default chat-completion model
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Environment variable holding the API key
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Resolve the expansion API key.
///
/// **Priority:** CLI → ENV → TOML. A missing key is a startup error with
/// configuration guidance, never a per-article error.
pub fn resolve_api_key(cli_key: Option<&str>, toml_config: &TomlConfig) -> Result<String> {
    let mut sources = Vec::new();

    let cli_key = cli_key.filter(|k| is_valid_key(k));
    if cli_key.is_some() {
        sources.push("command line");
    }

    let env_key = std::env::var(API_KEY_ENV).ok().filter(|k| is_valid_key(k));
    if env_key.is_some() {
        sources.push("environment");
    }

    let toml_key = toml_config
        .openai_api_key
        .as_deref()
        .filter(|k| is_valid_key(k));
    if toml_key.is_some() {
        sources.push("TOML");
    }

    // Warn if multiple sources (potential misconfiguration)
    if sources.len() > 1 {
        warn!(
            "API key found in multiple sources: {}. Using {} (highest priority).",
            sources.join(", "),
            sources[0]
        );
    }

    if let Some(key) = cli_key {
        info!("API key loaded from command line");
        return Ok(key.to_string());
    }

    if let Some(key) = env_key {
        info!("API key loaded from environment variable");
        return Ok(key);
    }

    if let Some(key) = toml_key {
        info!("API key loaded from TOML config");
        return Ok(key.to_string());
    }

    Err(Error::Config(format!(
        "Expansion API key not configured. Please configure using one of:\n\
         1. Command line: newsprep-expand --api-key your-key-here\n\
         2. Environment: {API_KEY_ENV}=your-key-here\n\
         3. TOML config: ~/.config/newsprep/config.toml (openai_api_key = \"your-key\")"
    )))
}

/// Resolve the model name: CLI → TOML → compiled default
pub fn resolve_model(cli_model: Option<&str>, toml_config: &TomlConfig) -> String {
    cli_model
        .map(str::to_string)
        .or_else(|| toml_config.openai_model.clone())
        .unwrap_or_else(|| DEFAULT_MODEL.to_string())
}

/// Validate API key (non-empty, non-whitespace)
pub fn is_valid_key(key: &str) -> bool {
    !key.trim().is_empty()
}

//! Runtime configuration resolution.

use crate::ledger::lunch_money::DEFAULT_API_BASE;
use std::path::PathBuf;

/// Environment variable holding the Lunch Money access token.
pub const API_KEY_VAR: &str = "LUNCH_MONEY_API_KEY";

/// Optional override of the Lunch Money API host.
pub const API_BASE_VAR: &str = "LUNCH_MONEY_API_BASE";

/// Asset config used when `--config` is not given.
pub const DEFAULT_CONFIG_PATH: &str = "assets.json";

/// The ledger token, or a message explaining what to set.
pub fn resolve_api_key() -> Result<String, String> {
    api_key_from(std::env::var(API_KEY_VAR).ok())
}

fn api_key_from(value: Option<String>) -> Result<String, String> {
    match value {
        Some(key) if !key.trim().is_empty() => Ok(key.trim().to_string()),
        _ => Err("Lunch Money API key not set".to_string()),
    }
}

/// CLI flag > env var > production host.
pub fn resolve_api_base(explicit: Option<&str>) -> String {
    if let Some(base) = explicit {
        return base.to_string();
    }

    if let Ok(base) = std::env::var(API_BASE_VAR) {
        if !base.trim().is_empty() {
            return base;
        }
    }

    DEFAULT_API_BASE.to_string()
}

/// Explicit path or `./assets.json`.
pub fn resolve_config_path(explicit: Option<&str>) -> PathBuf {
    PathBuf::from(explicit.unwrap_or(DEFAULT_CONFIG_PATH))
}

/// Explicit directory or the OS temp dir.
pub fn resolve_screenshot_dir(explicit: Option<&str>) -> PathBuf {
    explicit.map_or_else(std::env::temp_dir, PathBuf::from)
}

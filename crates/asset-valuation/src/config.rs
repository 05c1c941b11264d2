//! Asset config file loading.
//!
//! The file is a JSON object keyed by ledger asset id:
//!
//! ```json
//! { "1": { "url": "https://www.kbb.com/..." },
//!   "2": { "url": "https://www.zillow.com/...", "redfin": "https://www.redfin.com/..." } }
//! ```
//!
//! A bad key or a bad entry never fails the load; it is kept as a rejected
//! entry so the run can log it and move on.

use crate::error::ConfigError;
use crate::types::{AssetEntry, AssetId, AssetSource};
use serde_json::Value;
use std::path::Path;

/// One entry of the config file, in file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigEntry {
    Asset(AssetEntry),
    Rejected { key: String, reason: String },
}

/// Read and parse the config file at `path`.
pub fn load_config(path: &Path) -> Result<Vec<ConfigEntry>, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&text)
}

/// Parse config JSON text.
///
/// Integer keys come first in ascending order, then the remaining keys in
/// lexical order.
pub fn parse_config(text: &str) -> Result<Vec<ConfigEntry>, ConfigError> {
    let root: Value = serde_json::from_str(text)?;
    let Value::Object(map) = root else {
        return Err(ConfigError::NotAnObject);
    };

    let mut keyed: Vec<(Option<AssetId>, ConfigEntry)> = map
        .into_iter()
        .map(|(key, value)| {
            let id = key.trim().parse::<AssetId>().ok();
            (id, parse_entry(key, id, value))
        })
        .collect();

    keyed.sort_by(|(a, ea), (b, eb)| match (a, b) {
        (Some(a), Some(b)) => a.cmp(b),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => entry_key(ea).cmp(&entry_key(eb)),
    });

    Ok(keyed.into_iter().map(|(_, entry)| entry).collect())
}

fn parse_entry(key: String, id: Option<AssetId>, value: Value) -> ConfigEntry {
    let Some(id) = id else {
        return ConfigEntry::Rejected {
            key,
            reason: "asset id is not an integer".to_string(),
        };
    };
    match serde_json::from_value::<AssetSource>(value) {
        Ok(source) => ConfigEntry::Asset(AssetEntry { id, source }),
        Err(e) => ConfigEntry::Rejected {
            key,
            reason: format!("malformed source: {e}"),
        },
    }
}

fn entry_key(entry: &ConfigEntry) -> String {
    match entry {
        ConfigEntry::Asset(a) => a.id.to_string(),
        ConfigEntry::Rejected { key, .. } => key.clone(),
    }
}

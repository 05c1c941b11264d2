//! Error types for config loading and page extraction.

use std::path::PathBuf;

/// Why a single structural extraction produced no text.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractError {
    #[error("could not open a page: {0}")]
    Context(String),

    #[error("navigation to {url} failed: {reason}")]
    Navigation { url: String, reason: String },

    #[error("evaluating {xpath} on {url} failed: {reason}")]
    Evaluation {
        url: String,
        xpath: String,
        reason: String,
    },

    #[error("no node matches {xpath} on {url}")]
    NotFound { url: String, xpath: String },

    #[error("node {xpath} on {url} has no text")]
    Empty { url: String, xpath: String },
}

impl ExtractError {
    /// Short machine-friendly label, used in log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            ExtractError::Context(_) => "context",
            ExtractError::Navigation { .. } => "navigation",
            ExtractError::Evaluation { .. } => "evaluation",
            ExtractError::NotFound { .. } => "not_found",
            ExtractError::Empty { .. } => "empty",
        }
    }
}

/// Failure to load the asset config file as a whole.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("config is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config must be a JSON object mapping asset ids to sources")]
    NotAnObject,
}

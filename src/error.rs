// ABOUTME: Application-wide error types for xrruntime.
// ABOUTME: Uses thiserror for ergonomic error handling.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("no config path available (the user config directory could not be determined)")]
    NoConfigPath,

    #[error("failed to write config template to {path}: {source}")]
    Template {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

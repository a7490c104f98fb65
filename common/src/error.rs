//! Error types.

use thiserror::Error;

/// Shared error type.
#[derive(Error, Debug)]
pub enum Error {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Parse error: {0}")]
    Parse(String),
}

/// Result alias.
pub type Result<T> = std::result::Result<T, Error>;

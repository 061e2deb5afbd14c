//! Error types for Shelfmark
//!
//! Library errors use `thiserror`; the binary wraps them in `anyhow`.
//! Only upstream data-source failures and configuration problems surface
//! here. Malformed names and rule misconfiguration degrade silently.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::CatalogError;

/// Result type alias for Shelfmark operations
pub type ShelfmarkResult<T> = Result<T, ShelfmarkError>;

/// Main error type for Shelfmark operations
#[derive(Error, Debug)]
pub enum ShelfmarkError {
    /// The catalog source could not deliver a complete name→count mapping
    #[error("catalog source failed: {0}")]
    DataSource(#[from] CatalogError),

    /// A collection name did not resolve to a node in the current forest
    #[error("unknown collection '{name}'")]
    UnknownCollection { name: String },

    /// Invalid configuration file
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

//! CatalogSource port - supplies the raw name→count mapping
//!
//! Typically backed by a search index. The source either returns the full
//! mapping or fails; partial data is never handed to the tree builder.

use std::collections::BTreeMap;

use thiserror::Error;

/// Raw catalog snapshot: collection name → items tagged with exactly it
pub type CatalogCounts = BTreeMap<String, u64>;

/// Catalog source errors
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The backing index could not be reached
    #[error("index '{source_name}' unreachable: {message}")]
    Unreachable {
        source_name: String,
        message: String,
    },

    /// The index answered with data that is not a name→count mapping
    #[error("index '{source_name}' returned invalid data: {message}")]
    InvalidData {
        source_name: String,
        message: String,
    },
}

/// Inbound contract for raw catalog data
pub trait CatalogSource {
    /// Human-readable name of the source, used in errors and logs
    fn name(&self) -> &str;

    /// Fetch the complete name→count mapping
    fn fetch_counts(&self) -> Result<CatalogCounts, CatalogError>;
}

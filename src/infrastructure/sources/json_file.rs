//! JSON file catalog source
//!
//! Reads a catalog snapshot exported from the index as a JSON object of
//! collection name → item count:
//!
//! ```json
//! { "history": 7, "history.europe": 5, "maps": 9 }
//! ```

use std::path::{Path, PathBuf};

use crate::domain::ports::{CatalogCounts, CatalogError, CatalogSource};

/// Catalog source backed by a JSON snapshot on disk
#[derive(Debug, Clone)]
pub struct JsonFileCatalogSource {
    path: PathBuf,
    name: String,
}

impl JsonFileCatalogSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path.display().to_string();
        Self { path, name }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogSource for JsonFileCatalogSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn fetch_counts(&self) -> Result<CatalogCounts, CatalogError> {
        let content =
            std::fs::read_to_string(&self.path).map_err(|e| CatalogError::Unreachable {
                source_name: self.name.clone(),
                message: e.to_string(),
            })?;

        serde_json::from_str(&content).map_err(|e| CatalogError::InvalidData {
            source_name: self.name.clone(),
            message: e.to_string(),
        })
    }
}

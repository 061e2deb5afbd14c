//! In-memory catalog source, for embedding and tests.

use crate::domain::ports::{CatalogCounts, CatalogError, CatalogSource};

/// Catalog source serving a fixed snapshot
#[derive(Debug, Clone, Default)]
pub struct StaticCatalogSource {
    counts: CatalogCounts,
}

impl StaticCatalogSource {
    pub fn new(counts: CatalogCounts) -> Self {
        Self { counts }
    }
}

impl<S: Into<String>> FromIterator<(S, u64)> for StaticCatalogSource {
    fn from_iter<T: IntoIterator<Item = (S, u64)>>(iter: T) -> Self {
        Self {
            counts: iter.into_iter().map(|(n, c)| (n.into(), c)).collect(),
        }
    }
}

impl CatalogSource for StaticCatalogSource {
    fn name(&self) -> &str {
        "static"
    }

    fn fetch_counts(&self) -> Result<CatalogCounts, CatalogError> {
        Ok(self.counts.clone())
    }
}

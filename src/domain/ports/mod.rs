//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod catalog_source;
pub mod descriptive_info_lookup;

pub use catalog_source::{CatalogCounts, CatalogError, CatalogSource};
pub use descriptive_info_lookup::DescriptiveInfoLookup;

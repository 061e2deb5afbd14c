//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `sources/` - Catalog sources (JSON snapshot, static)
//! - `repositories/` - Descriptive info lookups (config-backed)

pub mod repositories;
pub mod sources;

// Re-export for convenience
pub use repositories::ConfigDescriptiveInfoRepository;
pub use sources::{JsonFileCatalogSource, StaticCatalogSource};

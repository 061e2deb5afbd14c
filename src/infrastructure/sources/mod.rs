//! Catalog source implementations

mod in_memory;
mod json_file;

pub use in_memory::StaticCatalogSource;
pub use json_file::JsonFileCatalogSource;

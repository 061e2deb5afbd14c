//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating views with infrastructure dependencies
//!
//! ## Structure
//!
//! - `cli` - Command line definition
//! - `factory` - Creates views with proper dependencies (dependency injection)

pub mod cli;
pub mod factory;

pub use factory::{create_catalog_source, create_collection_view, load_config};

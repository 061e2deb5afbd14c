//! Configuration module for Shelfmark
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (SHELFMARK_*)
//! 3. Project config (./shelfmark.toml)
//! 4. User config (<config_dir>/shelfmark/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{user_config_path, ConfigWarning, PROJECT_CONFIG_FILE};
pub use types::{CatalogConfig, Config, OutputConfig, Verbosity, ViewConfig};

//! Configuration type definitions

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::application::ViewSettings;
use crate::domain::value_objects::{DescriptiveInfo, OrderingRule, DEFAULT_DELIMITER};
use crate::error::ShelfmarkResult;

use super::loader::{self, ConfigWarning};

/// Catalog configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Separator between the segments of a collection name
    #[serde(default = "default_delimiter")]
    pub delimiter: char,

    /// JSON snapshot of collection name → item count
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<PathBuf>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
            source: None,
        }
    }
}

fn default_delimiter() -> char {
    DEFAULT_DELIMITER
}

/// View configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ViewConfig {
    /// Collection to focus on
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top: Option<String>,

    /// Highest ancestor shown above the focused collection
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base: Option<String>,

    #[serde(default)]
    pub display_parent_collections: bool,

    /// Order siblings by their sort key before applying ordering rules
    #[serde(default)]
    pub sort_by_key: bool,
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub verbosity: Verbosity,

    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            verbosity: Verbosity::default(),
            unicode: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
    Debug,
}

impl Verbosity {
    /// Parse a verbosity name, falling back to `Normal`
    pub fn parse_lossy(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "quiet" => Self::Quiet,
            "verbose" => Self::Verbose,
            "debug" => Self::Debug,
            _ => Self::Normal,
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,

    #[serde(default)]
    pub view: ViewConfig,

    /// Ordering rules, applied in file order
    #[serde(default)]
    pub ordering: Vec<OrderingRule>,

    /// Descriptive overrides keyed by exact collection name
    #[serde(default)]
    pub collections: BTreeMap<String, DescriptiveInfo>,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> ShelfmarkResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> ShelfmarkResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from project config, user config, or defaults
    pub fn load_or_default(project_root: Option<&Path>) -> Self {
        loader::load_or_default(project_root)
    }

    /// Apply environment variable overrides (SHELFMARK_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    /// Settings for a [`crate::application::CollectionView`]
    pub fn view_settings(&self) -> ViewSettings {
        ViewSettings {
            delimiter: self.catalog.delimiter,
            display_parent_collections: self.view.display_parent_collections,
            sort_by_key: self.view.sort_by_key,
            rules: self.ordering.iter().cloned().collect(),
        }
    }
}

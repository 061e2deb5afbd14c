//! View Factory
//!
//! Creates collection views with infrastructure dependencies wired up.
//! This is the dependency injection point for the CLI.

use std::path::{Path, PathBuf};

use crate::application::CollectionView;
use crate::config::{Config, ConfigWarning, PROJECT_CONFIG_FILE};
use crate::error::ShelfmarkResult;
use crate::infrastructure::{ConfigDescriptiveInfoRepository, JsonFileCatalogSource};

/// Default snapshot file when neither the CLI nor the config names one
pub const DEFAULT_COUNTS_FILE: &str = "collections.json";

/// Load configuration for a CLI invocation.
///
/// An explicit path or an existing project file must parse; without
/// either, the user config or defaults apply.
pub fn load_config(
    explicit: Option<&Path>,
    project_root: &Path,
) -> ShelfmarkResult<(Config, Vec<ConfigWarning>)> {
    let project = project_root.join(PROJECT_CONFIG_FILE);
    let path = match explicit {
        Some(path) => path,
        None if project.exists() => project.as_path(),
        None => return Ok((Config::load_or_default(None), Vec::new())),
    };
    let (config, warnings) = Config::load_with_warnings(path)?;
    Ok((config.with_env_overrides(), warnings))
}

/// Create a view configured from `config`, with its descriptive info lookup
pub fn create_collection_view(config: &Config) -> CollectionView {
    CollectionView::new(config.view_settings())
        .with_lookup(ConfigDescriptiveInfoRepository::from_config(config))
}

/// Catalog source: CLI override, then `[catalog] source`, then the default
/// file in `project_root`
pub fn create_catalog_source(
    config: &Config,
    override_path: Option<&Path>,
    project_root: &Path,
) -> JsonFileCatalogSource {
    let path: PathBuf = override_path
        .map(Path::to_path_buf)
        .or_else(|| config.catalog.source.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_COUNTS_FILE));
    JsonFileCatalogSource::new(project_root.join(path))
}

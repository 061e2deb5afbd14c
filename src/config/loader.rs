//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{ShelfmarkError, ShelfmarkResult};

use super::types::{Config, Verbosity};

/// Project config file, looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = "shelfmark.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> ShelfmarkResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| ShelfmarkError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
                file: path.to_path_buf(),
                key,
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load from project config, user config, or defaults.
///
/// A file that fails to parse is skipped in favour of the next layer.
pub fn load_or_default(project_root: Option<&Path>) -> Config {
    let candidates = project_root
        .map(|root| root.join(PROJECT_CONFIG_FILE))
        .into_iter()
        .chain(user_config_path());

    for path in candidates {
        if !path.exists() {
            continue;
        }
        match Config::load(&path) {
            Ok(config) => return with_env_overrides(config),
            Err(e) => debug!(path = %path.display(), error = %e, "skipping config"),
        }
    }

    with_env_overrides(Config::default())
}

/// `<config_dir>/shelfmark/config.toml`
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("shelfmark").join("config.toml"))
}

/// Apply environment variable overrides (SHELFMARK_* prefix)
pub fn with_env_overrides(mut config: Config) -> Config {
    // SHELFMARK_DELIMITER (single character)
    if let Ok(delimiter) = std::env::var("SHELFMARK_DELIMITER") {
        let mut chars = delimiter.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => config.catalog.delimiter = c,
            _ => debug!(value = %delimiter, "ignoring SHELFMARK_DELIMITER"),
        }
    }

    // SHELFMARK_DISPLAY_PARENTS
    if let Ok(val) = std::env::var("SHELFMARK_DISPLAY_PARENTS") {
        config.view.display_parent_collections = parse_flag(&val);
    }

    // SHELFMARK_VERBOSITY
    if let Ok(verbosity) = std::env::var("SHELFMARK_VERBOSITY") {
        config.output.verbosity = Verbosity::parse_lossy(&verbosity);
    }

    config
}

fn parse_flag(value: &str) -> bool {
    !matches!(value.trim().to_lowercase().as_str(), "" | "0" | "false" | "no" | "off")
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "catalog",
        "delimiter",
        "source",
        "view",
        "top",
        "base",
        "display_parent_collections",
        "sort_by_key",
        "ordering",
        "anchor",
        "names",
        "collections",
        "title",
        "icon",
        "link",
        "sort_key",
        "opens_externally",
        "output",
        "verbosity",
        "unicode",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}

use std::path::PathBuf;

use shelfmark::config::{Config, ConfigWarning};

pub mod check;
pub mod tree;

/// Everything a command needs besides its own arguments
pub struct CommandContext {
    pub json: bool,
    pub unicode: bool,
    pub project_root: PathBuf,
    pub config: Config,
    pub warnings: Vec<ConfigWarning>,
}

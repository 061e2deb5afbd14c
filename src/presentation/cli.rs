//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--json, --verbose, --config, --ascii) are inherited by all subcommands
//! - Flags override `SHELFMARK_*` environment variables and config files

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::application::ExpandDepth;

/// Shelfmark - hierarchical collection catalog viewer
#[derive(Parser, Debug)]
#[command(name = "shelfmark")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Emit NDJSON events instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file (default: ./shelfmark.toml, then the user config)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// ASCII icons only
    #[arg(long, global = true)]
    pub ascii: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the visible collection tree
    Tree(TreeArgs),

    /// Report unknown config keys and ordering rules that do not apply
    Check {
        /// Catalog snapshot (JSON object of name → count)
        #[arg(long, value_name = "PATH")]
        counts: Option<PathBuf>,

        /// Exit with an error when anything is reported
        #[arg(long)]
        strict: bool,
    },
}

#[derive(Args, Debug, Default)]
pub struct TreeArgs {
    /// Catalog snapshot (JSON object of name → count)
    #[arg(long, value_name = "PATH")]
    pub counts: Option<PathBuf>,

    /// Focus on this collection's subtree
    #[arg(long, value_name = "NAME")]
    pub top: Option<String>,

    /// Highest ancestor shown above the focused collection
    #[arg(long, value_name = "NAME", requires = "top")]
    pub base: Option<String>,

    /// Show the focused collection and its ancestors
    #[arg(long)]
    pub parents: bool,

    /// Order siblings by sort key before applying ordering rules
    #[arg(long)]
    pub sort_by_key: bool,

    /// Show the children of a collection (repeatable)
    #[arg(long = "expand", value_name = "NAME")]
    pub expand: Vec<String>,

    /// Expand a collection recursively, optionally limited in depth (repeatable)
    #[arg(long = "expand-all", value_name = "NAME[:DEPTH]", value_parser = parse_expand_spec)]
    pub expand_all: Vec<ExpandSpec>,
}

/// Argument of `--expand-all`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpandSpec {
    pub name: String,
    pub depth: ExpandDepth,
}

/// Parse `NAME[:DEPTH]`. A suffix that is not an integer is part of the
/// name; a negative depth means unlimited.
pub fn parse_expand_spec(value: &str) -> Result<ExpandSpec, String> {
    if value.is_empty() {
        return Err("collection name must not be empty".to_string());
    }
    if let Some((name, depth)) = value.rsplit_once(':') {
        if let Ok(depth) = depth.parse::<i32>() {
            if name.is_empty() {
                return Err("collection name must not be empty".to_string());
            }
            return Ok(ExpandSpec {
                name: name.to_string(),
                depth: ExpandDepth::from(depth),
            });
        }
    }
    Ok(ExpandSpec {
        name: value.to_string(),
        depth: ExpandDepth::Unlimited,
    })
}

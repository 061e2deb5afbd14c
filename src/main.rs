//! Shelfmark CLI - hierarchical collection catalog viewer
//!
//! Usage: shelfmark <COMMAND>
//!
//! Commands:
//!   tree   Print the visible collection tree
//!   check  Report unknown config keys and ordering rules that do not apply

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use shelfmark::config::Verbosity;
use shelfmark::presentation::cli::{Cli, Commands};
use shelfmark::presentation::load_config;

mod commands;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let project_root = std::env::current_dir()?;
    let (config, warnings) = load_config(cli.config.as_deref(), &project_root)
        .context("failed to load configuration")?;
    init_tracing(cli.verbose, config.output.verbosity);

    let ctx = commands::CommandContext {
        json: cli.json,
        unicode: config.output.unicode && !cli.ascii,
        project_root,
        config,
        warnings,
    };

    match cli.command {
        Commands::Tree(args) => commands::tree::cmd_tree(&ctx, &args),
        Commands::Check { counts, strict } => {
            commands::check::cmd_check(&ctx, counts.as_deref(), strict)
        }
    }
}

/// Log to stderr. `RUST_LOG` wins over `-v`, which wins over the
/// configured verbosity.
fn init_tracing(verbose: u8, configured: Verbosity) {
    let level = match (verbose, configured) {
        (0, Verbosity::Quiet) => "error",
        (0, Verbosity::Normal) => "warn",
        (0, Verbosity::Verbose) | (1, _) => "info",
        (0, Verbosity::Debug) | (2, _) => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("shelfmark={level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

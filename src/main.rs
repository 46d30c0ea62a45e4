//! Treesift CLI
//!
//! Command-line interface for the Treesift scope-aware ignore filter.

use anyhow::Result;
use clap::Parser;
use treesift::cli::{commands, Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging; --verbose and --quiet set the default filter,
    // RUST_LOG still wins when present
    let default_filter = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    // Execute the command
    match cli.command {
        Commands::Scan {
            path,
            follow_links,
            max_depth,
            nearest_scope,
            show_excluded,
        } => commands::scan::execute(path, follow_links, max_depth, nearest_scope, show_excluded),
        Commands::Check {
            paths,
            nearest_scope,
        } => commands::check::execute(paths, nearest_scope),
        Commands::Completion { shell } => commands::completion::execute(shell),
    }
}

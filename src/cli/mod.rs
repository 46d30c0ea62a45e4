//! Command-line interface for Treesift

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod commands;

/// Treesift - scope-aware ignore filtering for directory walks
#[derive(Parser)]
#[command(
    name = "treesift",
    version,
    about = "Filter directory-tree walks with stacked .siftignore rules",
    long_about = "Treesift walks a directory tree and decides per path whether stacked \
                  .siftignore rules exclude it, combining a user-global rule file with \
                  per-directory rule files discovered during the walk."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Walk a directory tree and list the files that survive filtering
    Scan {
        /// Root directory to scan (default: current directory)
        path: Option<PathBuf>,

        /// Follow symbolic links
        #[arg(long)]
        follow_links: bool,

        /// Maximum traversal depth
        #[arg(long)]
        max_depth: Option<usize>,

        /// Let the most specific scope decide instead of any-scope exclusion
        #[arg(long)]
        nearest_scope: bool,

        /// Also list excluded paths with the rule that excluded them
        #[arg(long)]
        show_excluded: bool,
    },

    /// Explain whether paths are excluded and which rule decides
    Check {
        /// Paths to check
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// Let the most specific scope decide instead of any-scope exclusion
        #[arg(long)]
        nearest_scope: bool,
    },

    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completion for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

//! Scan command implementation

use crate::ignore::scanner::FilteredScanner;
use crate::ignore::stack::ScopePolicy;
use anyhow::Result;
use colored::Colorize;
use std::path::PathBuf;

/// Execute the scan command
pub fn execute(
    path: Option<PathBuf>,
    follow_links: bool,
    max_depth: Option<usize>,
    nearest_scope: bool,
    show_excluded: bool,
) -> Result<()> {
    let root = match path {
        Some(path) => path,
        None => std::env::current_dir()?,
    };

    let mut scanner = FilteredScanner::new().follow_links(follow_links);
    if let Some(depth) = max_depth {
        scanner = scanner.max_depth(depth);
    }
    if nearest_scope {
        scanner = scanner.policy(ScopePolicy::NearestScope);
    }

    let result = scanner.scan(&root)?;

    for file in &result.included {
        println!("{}", file.display());
    }

    if show_excluded && !result.excluded.is_empty() {
        println!("\n{}", "Excluded:".bold());
        for (path, rule) in &result.excluded {
            println!(
                "  {} {}",
                path.display().to_string().red(),
                format!("({})", rule).dimmed()
            );
        }
    }

    println!(
        "\n{}",
        format!(
            "✓ {} files included, {} excluded, {} directories pruned",
            result.included.len(),
            result.stats.files_excluded,
            result.stats.directories_pruned
        )
        .green()
    );

    Ok(())
}

//! Check command implementation
//!
//! Explains per path whether the stacked rules exclude it and which rule
//! decided, simulating the walk from the current directory down to the
//! path's parent so local rule files along the way are in effect.

use crate::ignore::stack::{ScopePolicy, ScopeStack};
use anyhow::Result;
use colored::Colorize;
use std::path::{Path, PathBuf};

/// Execute the check command
pub fn execute(paths: Vec<PathBuf>, nearest_scope: bool) -> Result<()> {
    let cwd = std::env::current_dir()?;

    for path in &paths {
        let absolute = if path.is_absolute() {
            path.clone()
        } else {
            cwd.join(path)
        };

        let mut stack = ScopeStack::for_walk(&cwd)?;
        if nearest_scope {
            stack = stack.policy(ScopePolicy::NearestScope);
        }
        for dir in walk_chain(&cwd, &absolute) {
            stack.enter_directory(&dir)?;
        }

        let is_dir = absolute.is_dir();
        if stack.is_excluded(&absolute, is_dir) {
            println!("{} {}", "✗".red(), path.display());
        } else {
            println!("{} {}", "✓".green(), path.display());
        }

        match stack.explain(&absolute, is_dir) {
            Some(explanation) => {
                let scope = if explanation.scope_root.as_os_str().is_empty() {
                    "global scope".to_string()
                } else {
                    format!("scope {}", explanation.scope_root.display())
                };
                println!(
                    "    rule {} {}",
                    explanation.pattern.cyan(),
                    format!("({})", scope).dimmed()
                );
            },
            None => println!("    {}", "no rule matched".dimmed()),
        }
    }

    Ok(())
}

/// Directories to enter, in order, from the walk root down to the target's
/// parent
fn walk_chain(root: &Path, target: &Path) -> Vec<PathBuf> {
    let mut chain = vec![root.to_path_buf()];
    if let Some(parent) = target.parent() {
        if let Ok(relative) = parent.strip_prefix(root) {
            let mut current = root.to_path_buf();
            for component in relative.components() {
                current.push(component);
                chain.push(current.clone());
            }
        }
    }
    chain
}

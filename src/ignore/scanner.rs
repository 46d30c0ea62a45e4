//! Directory walker that drives a scope stack and filters entries
//!
//! This is the walk driver the core serves: it enters directories in
//! depth-first order, lets the stack load and discard rule files, prunes
//! excluded directories without descending into them, and collects the
//! surviving files.

use crate::core::error::Result;
use crate::ignore::stack::{ScopePolicy, ScopeStack};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Result of a filtered scan
#[derive(Debug)]
pub struct ScanResult {
    /// Files that passed filtering
    pub included: Vec<PathBuf>,
    /// Excluded paths and the rule line responsible
    pub excluded: Vec<(PathBuf, String)>,
    /// Final statistics
    pub stats: ScanStats,
}

/// Statistics from a filtered scan
#[derive(Debug, Clone, Default)]
pub struct ScanStats {
    /// Directories the walk descended into
    pub directories_entered: usize,
    /// Directories pruned by ignore rules (contents never visited)
    pub directories_pruned: usize,
    /// Files considered
    pub files_seen: usize,
    /// Files excluded by ignore rules
    pub files_excluded: usize,
    /// Total scanning time
    pub elapsed: Duration,
}

impl ScanStats {
    /// Percentage of seen files that were excluded
    pub fn exclusion_ratio(&self) -> f64 {
        if self.files_seen > 0 {
            (self.files_excluded as f64 / self.files_seen as f64) * 100.0
        } else {
            0.0
        }
    }
}

/// Directory walker with `.siftignore` filtering
pub struct FilteredScanner {
    /// Whether to follow symbolic links
    follow_links: bool,
    /// Maximum depth for directory traversal (None = unlimited)
    max_depth: Option<usize>,
    /// Cross-scope resolution policy
    policy: ScopePolicy,
}

impl Default for FilteredScanner {
    fn default() -> Self {
        Self::new()
    }
}

impl FilteredScanner {
    /// Create a new filtered scanner with default options
    pub fn new() -> Self {
        Self {
            follow_links: false,
            max_depth: None,
            policy: ScopePolicy::default(),
        }
    }

    /// Set whether to follow symbolic links
    pub fn follow_links(mut self, follow: bool) -> Self {
        self.follow_links = follow;
        self
    }

    /// Set maximum depth for directory traversal
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// Set the cross-scope resolution policy
    pub fn policy(mut self, policy: ScopePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Scan a directory tree, loading global and ancestor rules for `root`
    pub fn scan(&self, root: &Path) -> Result<ScanResult> {
        let stack = ScopeStack::for_walk(root)?.policy(self.policy);
        self.scan_with(root, stack)
    }

    /// Scan a directory tree with a caller-supplied scope stack
    ///
    /// The stack is driven in traversal order: every directory the walk
    /// descends into is entered before any path inside it is tested.
    pub fn scan_with(&self, root: &Path, mut stack: ScopeStack) -> Result<ScanResult> {
        let start_time = Instant::now();
        let mut included = Vec::new();
        let mut excluded = Vec::new();
        let mut stats = ScanStats::default();

        let mut walker = WalkDir::new(root).follow_links(self.follow_links);
        if let Some(depth) = self.max_depth {
            walker = walker.max_depth(depth);
        }

        let mut entries = walker.into_iter();
        while let Some(entry) = entries.next() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("skipping unreadable entry: {}", e);
                    continue;
                },
            };
            let path = entry.path();
            let is_dir = entry.file_type().is_dir();

            // The walk root itself is not a candidate; entering it loads
            // its local rule file
            if entry.depth() == 0 {
                if is_dir {
                    stack.enter_directory(path)?;
                    stats.directories_entered += 1;
                } else {
                    included.push(path.to_path_buf());
                }
                continue;
            }

            if is_dir {
                if stack.is_excluded(path, true) {
                    let rule = deciding_rule(&stack, path, true);
                    debug!(path = %path.display(), rule = %rule, "pruned directory");
                    excluded.push((path.to_path_buf(), rule));
                    stats.directories_pruned += 1;
                    entries.skip_current_dir();
                    continue;
                }
                stack.enter_directory(path)?;
                stats.directories_entered += 1;
            } else {
                stats.files_seen += 1;
                if stack.is_excluded(path, false) {
                    let rule = deciding_rule(&stack, path, false);
                    debug!(path = %path.display(), rule = %rule, "excluded file");
                    excluded.push((path.to_path_buf(), rule));
                    stats.files_excluded += 1;
                } else {
                    included.push(path.to_path_buf());
                }
            }
        }

        stats.elapsed = start_time.elapsed();
        Ok(ScanResult {
            included,
            excluded,
            stats,
        })
    }
}

fn deciding_rule(stack: &ScopeStack, path: &Path, is_dir: bool) -> String {
    stack
        .explain(path, is_dir)
        .map(|explanation| explanation.pattern)
        .unwrap_or_default()
}

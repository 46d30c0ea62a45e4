//! Ordered rule sets parsed from `.siftignore` sources

use crate::core::error::{Result, TreesiftError};
use crate::ignore::pattern::{parse_line, CompiledPattern, Polarity};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// The ordered, compiled form of one rule file's contents
///
/// Insertion order is semantically significant: later patterns override
/// earlier ones for the same path.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    patterns: Vec<CompiledPattern>,
}

impl RuleSet {
    /// A rule set with no patterns; excludes nothing
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse rule lines from in-memory text
    ///
    /// One malformed line aborts the whole set; no partial rule set is
    /// returned.
    pub fn parse(content: &str) -> Result<Self> {
        let mut patterns = Vec::new();
        for (index, raw_line) in content.lines().enumerate() {
            if let Some(pattern) = parse_line(index + 1, raw_line)? {
                patterns.push(pattern);
            }
        }
        Ok(Self { patterns })
    }

    /// Load a rule file from disk
    ///
    /// A missing file yields an empty rule set. Any other read failure is
    /// propagated as `RuleFileUnreadable`, since silently dropping it could
    /// hide rules the user expects to apply.
    pub fn load(path: &Path) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(content) => Self::parse(&content),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Self::empty()),
            Err(source) => Err(TreesiftError::rule_file_unreadable(
                path.to_path_buf(),
                source,
            )),
        }
    }

    /// Verdict for a path under this rule set alone
    ///
    /// Pure last-match-wins fold: every matching pattern overwrites the
    /// verdict, non-matching patterns leave it unchanged, `None` when no
    /// pattern matched. Intentionally not a first-match short-circuit, since
    /// a later broad exclusion can re-exclude something an earlier
    /// re-inclusion exempted.
    pub fn verdict(&self, path: &Path, is_dir: bool) -> Option<bool> {
        let mut verdict = None;
        for pattern in &self.patterns {
            if pattern.matches(path, is_dir) {
                verdict = Some(pattern.polarity == Polarity::Exclude);
            }
        }
        verdict
    }

    /// Check if a path is excluded under this rule set alone
    pub fn is_excluded(&self, path: &Path, is_dir: bool) -> bool {
        self.verdict(path, is_dir).unwrap_or(false)
    }

    /// The last pattern matching a path, for diagnostics
    pub fn last_match(&self, path: &Path, is_dir: bool) -> Option<&CompiledPattern> {
        self.patterns
            .iter()
            .rev()
            .find(|pattern| pattern.matches(path, is_dir))
    }

    /// Get all compiled patterns
    pub fn patterns(&self) -> &[CompiledPattern] {
        &self.patterns
    }

    /// Number of compiled patterns
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Whether the rule set holds no patterns
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

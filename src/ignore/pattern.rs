//! Single-rule compilation for `.siftignore` lines
//!
//! Translates one textual rule into a tagged glob predicate. The tags
//! (polarity, anchoring, directory-only) keep the matching semantics
//! auditable instead of funnelling everything through a regex engine.

use crate::core::error::{Result, TreesiftError};
use glob::{MatchOptions, Pattern};
use std::path::Path;

/// Glob options for rule matching: `*` and `?` never cross a `/`, only
/// `**` spans path segments; leading dots are matchable like any other
/// character.
const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// Polarity of a compiled rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    /// Matching paths are excluded from the walk
    Exclude,
    /// Matching paths are re-included, overriding earlier exclusions (leading `!`)
    Reinclude,
}

/// A compiled rule from a `.siftignore` file
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    /// The rule line as written
    pub original: String,
    /// The compiled glob predicate
    glob: Pattern,
    /// Exclusion or re-inclusion
    pub polarity: Polarity,
    /// Whether the pattern is matched against the whole scope-relative path
    anchored: bool,
    /// Whether this pattern only matches directories (trailing `/`)
    directory_only: bool,
}

impl CompiledPattern {
    /// Check if this pattern matches a path relative to its scope root
    pub fn matches(&self, path: &Path, is_dir: bool) -> bool {
        // Directory-only patterns only match directories
        if self.directory_only && !is_dir {
            return false;
        }

        let path_str = path.to_string_lossy();
        if self.glob.matches_with(&path_str, MATCH_OPTIONS) {
            return true;
        }
        if self.anchored {
            return false;
        }

        // Non-anchored patterns can also match any single path segment
        path.components().any(|component| {
            self.glob
                .matches_with(&component.as_os_str().to_string_lossy(), MATCH_OPTIONS)
        })
    }
}

/// Parse a single line from a `.siftignore` file
///
/// Returns `Ok(None)` for blank lines and comments. A line that cannot be
/// compiled into a glob aborts with a pattern syntax error carrying the
/// 1-based line number.
pub fn parse_line(line_no: usize, line: &str) -> Result<Option<CompiledPattern>> {
    let line = line.trim();

    // Skip empty lines and comments
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let (polarity, pattern_str) = match line.strip_prefix('!') {
        Some(rest) => (Polarity::Reinclude, rest.trim()),
        None => (Polarity::Exclude, line),
    };
    if pattern_str.is_empty() {
        return Ok(None);
    }

    // A trailing slash restricts the pattern to directories
    let (directory_only, pattern_str) = match pattern_str.strip_suffix('/') {
        Some(rest) => (true, rest),
        None => (false, pattern_str),
    };

    // A leading slash anchors the pattern to the scope root; any other
    // slash anchors it as well (gitignore-style)
    let (root_anchored, pattern_str) = match pattern_str.strip_prefix('/') {
        Some(rest) => (true, rest),
        None => (false, pattern_str),
    };
    let anchored = root_anchored || pattern_str.contains('/');

    let glob_pattern = normalize_pattern(pattern_str, anchored);
    let glob = Pattern::new(&glob_pattern)
        .map_err(|source| TreesiftError::pattern_syntax(line_no, line, source))?;

    Ok(Some(CompiledPattern {
        original: line.to_string(),
        glob,
        polarity,
        anchored,
        directory_only,
    }))
}

/// Normalize a pattern for glob matching
fn normalize_pattern(pattern: &str, anchored: bool) -> String {
    // Non-anchored patterns without a leading wildcard should match at any depth
    if !anchored && !pattern.starts_with('*') {
        format!("**/{}", pattern)
    } else {
        pattern.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compile(line: &str) -> CompiledPattern {
        parse_line(1, line).unwrap().unwrap()
    }

    #[test]
    fn test_blank_and_comment_lines() {
        assert!(parse_line(1, "").unwrap().is_none());
        assert!(parse_line(2, "   ").unwrap().is_none());
        assert!(parse_line(3, "# a comment").unwrap().is_none());
        assert!(parse_line(4, "   # indented comment").unwrap().is_none());
        assert!(parse_line(5, "!").unwrap().is_none());
    }

    #[test]
    fn test_polarity_detection() {
        assert_eq!(compile("*.tmp").polarity, Polarity::Exclude);
        assert_eq!(compile("!important.tmp").polarity, Polarity::Reinclude);
        assert_eq!(compile("!important.tmp").original, "!important.tmp");
    }

    #[test]
    fn test_basename_matching_at_any_depth() {
        let pattern = compile("*.log");
        assert!(pattern.matches(Path::new("app.log"), false));
        assert!(pattern.matches(Path::new("logs/app.log"), false));
        assert!(pattern.matches(Path::new("deep/nested/app.log"), false));
        assert!(!pattern.matches(Path::new("app.txt"), false));

        let named = compile("node_modules");
        assert!(named.matches(Path::new("node_modules"), true));
        assert!(named.matches(Path::new("pkg/node_modules"), true));
        assert!(named.matches(Path::new("pkg/node_modules/index.js"), false));
    }

    #[test]
    fn test_anchored_matching() {
        let pattern = compile("src/*.log");
        assert!(pattern.matches(Path::new("src/app.log"), false));
        assert!(!pattern.matches(Path::new("other/src.log"), false));
        // Only direct children of src/ match
        assert!(!pattern.matches(Path::new("src/deep/app.log"), false));

        let rooted = compile("/build");
        assert!(rooted.matches(Path::new("build"), true));
        assert!(!rooted.matches(Path::new("nested/build"), true));
    }

    #[test]
    fn test_directory_only_patterns() {
        let pattern = compile("build/");
        assert!(pattern.matches(Path::new("build"), true));
        assert!(!pattern.matches(Path::new("build"), false));
        assert!(pattern.matches(Path::new("nested/build"), true));
    }

    #[test]
    fn test_recursive_wildcard() {
        let pattern = compile("**/cache/");
        assert!(pattern.matches(Path::new("cache"), true));
        assert!(pattern.matches(Path::new("a/b/cache"), true));
        assert!(!pattern.matches(Path::new("a/b/cache"), false));
    }

    #[test]
    fn test_malformed_pattern_reports_line() {
        let err = parse_line(7, "src/[unterminated").unwrap_err();
        match err {
            TreesiftError::PatternSyntax { line, pattern, .. } => {
                assert_eq!(line, 7);
                assert_eq!(pattern, "src/[unterminated");
            },
            other => panic!("expected PatternSyntax, got {:?}", other),
        }
    }
}

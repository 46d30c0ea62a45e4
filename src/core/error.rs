//! Error types for Treesift

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for Treesift operations
#[derive(Error, Debug)]
pub enum TreesiftError {
    /// A rule line could not be compiled into a pattern
    #[error("invalid pattern on line {line}: {pattern}")]
    PatternSyntax {
        line: usize,
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    /// A rule file exists but could not be read
    #[error("rule file unreadable: {path}")]
    RuleFileUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl TreesiftError {
    /// Create a new pattern syntax error
    pub fn pattern_syntax(
        line: usize,
        pattern: impl Into<String>,
        source: glob::PatternError,
    ) -> Self {
        Self::PatternSyntax {
            line,
            pattern: pattern.into(),
            source,
        }
    }

    /// Create a new rule file unreadable error
    pub fn rule_file_unreadable(path: PathBuf, source: std::io::Error) -> Self {
        Self::RuleFileUnreadable { path, source }
    }
}

/// Result type alias for Treesift operations
pub type Result<T> = std::result::Result<T, TreesiftError>;

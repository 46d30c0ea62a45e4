//! Treesift - scope-aware ignore filtering for directory walks
//!
//! Treesift decides, for every path met during a directory-tree walk,
//! whether `.siftignore` rules exclude it. Rule sets stack across scopes: a
//! user-global file in the home directory, the nearest ancestor of the walk
//! root carrying a rule file, and every rule file discovered while
//! descending.
//!
//! # Core Pieces
//!
//! - **Pattern compiler**: one rule line becomes a tagged glob predicate
//!   with a polarity flag (exclusion vs. `!` re-inclusion)
//! - **Rule set**: the ordered, compiled form of one rule file; later rules
//!   override earlier ones for the same path
//! - **Scope stack**: the rule sets currently in effect during a walk,
//!   popped and pushed as traversal leaves and enters directories
//!
//! # Example Usage
//!
//! ```rust,no_run
//! use treesift::{FilteredScanner, ScopePolicy};
//! use std::path::Path;
//!
//! let scanner = FilteredScanner::new().policy(ScopePolicy::AnyScope);
//! let result = scanner.scan(Path::new("./my-project"))?;
//!
//! for file in &result.included {
//!     println!("{}", file.display());
//! }
//! # Ok::<(), treesift::TreesiftError>(())
//! ```

pub mod cli;
pub mod core;
pub mod ignore;

// Re-export commonly used types
pub use crate::core::error::{Result, TreesiftError};
pub use crate::ignore::{
    pattern::{CompiledPattern, Polarity},
    ruleset::RuleSet,
    scanner::{FilteredScanner, ScanResult, ScanStats},
    stack::{MatchExplanation, ScopeEntry, ScopePolicy, ScopeStack, RULE_FILE_NAME},
};

/// Current version of Treesift
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

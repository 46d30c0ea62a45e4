//! End-to-end walks across stacked scopes

use std::fs;
use tempfile::TempDir;
use treesift::{FilteredScanner, RuleSet, ScopePolicy, ScopeStack, RULE_FILE_NAME};

/// Global `*.log`, no rules in /proj, `!important.log` in /proj/build.
/// Under the default any-scope policy the global exclusion wins; under
/// the strict nearest-scope policy the local re-inclusion does.
#[test]
fn test_cross_scope_reinclusion_under_both_policies() {
    let temp_dir = TempDir::new().unwrap();
    let proj = temp_dir.path().join("proj");
    let build = proj.join("build");
    fs::create_dir_all(&build).unwrap();
    fs::write(build.join(RULE_FILE_NAME), "!important.log\n").unwrap();
    fs::write(build.join("important.log"), "keep me").unwrap();
    fs::write(build.join("debug.log"), "drop me").unwrap();
    fs::write(proj.join("notes.txt"), "keep me").unwrap();

    let global = RuleSet::parse("*.log\n").unwrap();

    let scanner = FilteredScanner::new();
    let result = scanner
        .scan_with(&proj, ScopeStack::with_global(global.clone()))
        .unwrap();
    assert!(result
        .excluded
        .iter()
        .any(|(p, _)| p.ends_with("important.log")));
    assert!(result.excluded.iter().any(|(p, _)| p.ends_with("debug.log")));
    assert!(result.included.iter().any(|p| p.ends_with("notes.txt")));

    let strict = FilteredScanner::new().policy(ScopePolicy::NearestScope);
    let result = strict
        .scan_with(
            &proj,
            ScopeStack::with_global(global).policy(ScopePolicy::NearestScope),
        )
        .unwrap();
    assert!(result
        .included
        .iter()
        .any(|p| p.ends_with("important.log")));
    assert!(result.excluded.iter().any(|(p, _)| p.ends_with("debug.log")));
}

/// An ancestor rule file above the walk root stays in effect for the whole
/// walk.
#[test]
fn test_ancestor_scope_applies_below_walk_root() {
    let temp_dir = TempDir::new().unwrap();
    let repo = temp_dir.path().join("repo");
    let sub = repo.join("sub");
    fs::create_dir_all(sub.join("deeper")).unwrap();
    fs::write(repo.join(RULE_FILE_NAME), "*.tmp\n").unwrap();
    fs::write(sub.join("scratch.tmp"), "drop").unwrap();
    fs::write(sub.join("deeper/nested.tmp"), "drop").unwrap();
    fs::write(sub.join("keep.txt"), "keep").unwrap();

    let stack = ScopeStack::for_walk_with_global(&sub, RuleSet::empty()).unwrap();
    assert_eq!(stack.depth(), 2);
    assert_eq!(stack.entries()[1].root(), repo.as_path());

    let result = FilteredScanner::new().scan_with(&sub, stack).unwrap();
    assert!(result.included.iter().any(|p| p.ends_with("keep.txt")));
    assert!(result
        .excluded
        .iter()
        .any(|(p, _)| p.ends_with("scratch.tmp")));
    assert!(result
        .excluded
        .iter()
        .any(|(p, _)| p.ends_with("nested.tmp")));
}

/// Sibling subtrees each see only their own local rules plus the shared
/// outer scopes.
#[test]
fn test_sibling_scopes_do_not_leak() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    fs::create_dir(root.join("one")).unwrap();
    fs::create_dir(root.join("two")).unwrap();
    fs::write(root.join("one").join(RULE_FILE_NAME), "*.log\n").unwrap();
    fs::write(root.join("one/app.log"), "drop").unwrap();
    fs::write(root.join("two/app.log"), "keep").unwrap();

    let result = FilteredScanner::new()
        .scan_with(root, ScopeStack::with_global(RuleSet::empty()))
        .unwrap();

    assert!(result
        .excluded
        .iter()
        .any(|(p, _)| p.ends_with("one/app.log")));
    assert!(result.included.iter().any(|p| p.ends_with("two/app.log")));
}

/// A malformed rule file aborts the walk with a pattern syntax error.
#[test]
fn test_malformed_rule_file_fails_the_walk() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    fs::write(root.join(RULE_FILE_NAME), "*.tmp\nsrc/[oops\n").unwrap();
    fs::write(root.join("file.txt"), "content").unwrap();

    let err = FilteredScanner::new()
        .scan_with(root, ScopeStack::with_global(RuleSet::empty()))
        .unwrap_err();
    assert!(matches!(
        err,
        treesift::TreesiftError::PatternSyntax { line: 2, .. }
    ));
}

/// Directory-only rules prune whole subtrees without visiting their
/// contents.
#[test]
fn test_directory_rules_prune_subtrees() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    fs::write(root.join(RULE_FILE_NAME), "target/\n").unwrap();
    fs::create_dir_all(root.join("target/debug")).unwrap();
    fs::write(root.join("target/debug/binary"), "big").unwrap();
    fs::write(root.join("target.txt"), "not a directory match").unwrap();

    let result = FilteredScanner::new()
        .scan_with(root, ScopeStack::with_global(RuleSet::empty()))
        .unwrap();

    assert_eq!(result.stats.directories_pruned, 1);
    assert!(result.included.iter().any(|p| p.ends_with("target.txt")));
    assert!(!result
        .excluded
        .iter()
        .any(|(p, _)| p.ends_with("binary")));
}

//! Output-root traversal
//!
//! Collects removal candidates for one sweep pass. A directory that matches
//! the pattern set is collected whole and not descended into; its removal is
//! recursive. A root that does not exist yet scans to an empty candidate
//! list.

use std::path::{Path, PathBuf};

use anyhow::Context;
use walkdir::WalkDir;

use crate::config::PatternSet;
use crate::error::Result;

/// A removal candidate matched during traversal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchedEntry {
    /// Path relative to the sweep root, forward-slash separated
    pub rel: String,
    /// Absolute path on disk
    pub path: PathBuf,
    /// Whether the entry is a directory
    pub is_dir: bool,
}

/// Normalize a relative path string to forward-slash separators
#[must_use]
pub fn normalize_separators(name: &str) -> String {
    name.replace('\\', "/")
}

/// Walk the sweep root and collect entries marked for removal
///
/// Matches are returned in ascending lexicographic order of their relative
/// paths.
///
/// # Errors
///
/// Returns an error if directory traversal fails due to permission issues
/// or I/O errors.
pub fn scan(root: &Path, patterns: &PatternSet) -> Result<Vec<MatchedEntry>> {
    if !root.exists() {
        return Ok(Vec::new());
    }

    let mut matched = Vec::new();
    let mut walker = WalkDir::new(root).follow_links(false).into_iter();

    while let Some(entry) = walker.next() {
        let entry = entry?; // Propagate errors instead of silently ignoring
        if entry.path() == root {
            continue;
        }

        let rel = relative_to(entry.path(), root)?;
        let is_dir = entry.file_type().is_dir();

        if patterns.marks_for_removal(Path::new(&rel), is_dir) {
            if is_dir {
                // Subtree is removed whole; skip its children
                walker.skip_current_dir();
            }
            matched.push(MatchedEntry {
                rel,
                path: entry.into_path(),
                is_dir,
            });
        }
    }

    matched.sort_by(|a, b| a.rel.cmp(&b.rel));

    Ok(matched)
}

fn relative_to(path: &Path, root: &Path) -> Result<String> {
    let rel = path
        .strip_prefix(root)
        .with_context(|| format!("Failed to strip prefix from {}", path.display()))?;

    Ok(normalize_separators(&rel.to_string_lossy()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn create_file(root: &Path, rel_path: &str) {
        let path = root.join(rel_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, "content").unwrap();
    }

    #[test]
    fn test_missing_root_scans_empty() {
        let tmp = TempDir::new().unwrap();
        let patterns = PatternSet::compile(&["**/*"]).unwrap();

        let matched = scan(&tmp.path().join("absent"), &patterns).unwrap();
        assert!(matched.is_empty());
    }

    #[test]
    fn test_matches_are_sorted() {
        let tmp = TempDir::new().unwrap();
        create_file(tmp.path(), "c.js");
        create_file(tmp.path(), "a.js");
        create_file(tmp.path(), "b.js");

        let patterns = PatternSet::compile(&["*.js"]).unwrap();
        let matched = scan(tmp.path(), &patterns).unwrap();

        let rels: Vec<&str> = matched.iter().map(|m| m.rel.as_str()).collect();
        assert_eq!(rels, vec!["a.js", "b.js", "c.js"]);
    }

    #[test]
    fn test_unmatched_files_excluded() {
        let tmp = TempDir::new().unwrap();
        create_file(tmp.path(), "bundle.js");
        create_file(tmp.path(), "bundle.js.map");

        let patterns = PatternSet::compile(&["*.map"]).unwrap();
        let matched = scan(tmp.path(), &patterns).unwrap();

        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].rel, "bundle.js.map");
        assert!(!matched[0].is_dir);
    }

    #[test]
    fn test_nested_relative_paths() {
        let tmp = TempDir::new().unwrap();
        create_file(tmp.path(), "js/app.js");

        let patterns = PatternSet::compile(&["/js/app.js"]).unwrap();
        let matched = scan(tmp.path(), &patterns).unwrap();

        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].rel, "js/app.js");
    }

    #[test]
    fn test_matched_directory_not_descended() {
        let tmp = TempDir::new().unwrap();
        create_file(tmp.path(), "coverage/lcov.info");
        create_file(tmp.path(), "coverage/html/index.html");
        create_file(tmp.path(), "bundle.js");

        let patterns = PatternSet::compile(&["coverage/"]).unwrap();
        let matched = scan(tmp.path(), &patterns).unwrap();

        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].rel, "coverage");
        assert!(matched[0].is_dir);
    }

    #[test]
    fn test_normalize_separators() {
        assert_eq!(normalize_separators("js\\app.js"), "js/app.js");
        assert_eq!(normalize_separators("js/app.js"), "js/app.js");
    }
}

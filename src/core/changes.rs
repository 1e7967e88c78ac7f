//! Changeset construction and path filtering.
//!
//! A [`ChangeSet`] is the sorted union of modified and added paths staged for
//! the pending commit. It is built fresh for every hook invocation and never
//! outlives it; nothing here touches the filesystem.

use crate::core::error::{Error, Result};
use glob::Pattern;
use std::path::{Path, PathBuf};

/// The ordered set of repository-relative paths staged for commit.
///
/// Invariants: lexically sorted, deduplicated, only paths the status query
/// classified as modified or added.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeSet {
    paths: Vec<PathBuf>,
}

impl ChangeSet {
    /// Builds a changeset from status-query output, regardless of the order
    /// the underlying buckets were reported in.
    #[must_use]
    pub fn from_paths(paths: impl IntoIterator<Item = PathBuf>) -> Self {
        let mut paths: Vec<PathBuf> = paths.into_iter().collect();
        paths.sort();
        paths.dedup();
        Self { paths }
    }

    /// Returns the subset of paths with the given extension, preserving order.
    ///
    /// Pure function: no I/O, no failure modes. Matching follows
    /// [`Path::extension`], so a dotfile with no stem (a file literally named
    /// `.go`) has no extension and is never selected.
    #[must_use]
    pub fn with_extension(&self, ext: &str) -> Vec<PathBuf> {
        self.paths
            .iter()
            .filter(|p| p.extension().is_some_and(|e| e == ext))
            .cloned()
            .collect()
    }

    /// Returns true if no staged paths matched.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Number of staged paths.
    #[must_use]
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Iterates over the staged paths in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.paths.iter().map(PathBuf::as_path)
    }
}

/// Glob-based path filter applied during change enumeration.
///
/// An empty filter matches every path.
#[derive(Debug, Clone, Default)]
pub struct PathFilter {
    patterns: Vec<Pattern>,
}

impl PathFilter {
    /// Creates a filter that matches every path.
    #[must_use]
    pub fn match_all() -> Self {
        Self::default()
    }

    /// Compiles a filter from glob pattern strings.
    pub fn new(patterns: &[String]) -> Result<Self> {
        let patterns = patterns
            .iter()
            .map(|p| {
                Pattern::new(p).map_err(|e| {
                    Error::config_invalid("files.patterns", format!("invalid glob '{p}': {e}"))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { patterns })
    }

    /// Returns true if the path passes the filter.
    #[must_use]
    pub fn matches(&self, path: &Path) -> bool {
        if self.patterns.is_empty() {
            return true;
        }
        self.patterns.iter().any(|p| p.matches_path(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn changeset(paths: &[&str]) -> ChangeSet {
        ChangeSet::from_paths(paths.iter().map(PathBuf::from))
    }

    // =========================================================================
    // ChangeSet ordering tests
    // =========================================================================

    #[test]
    fn test_sorted_regardless_of_bucket_order() {
        // modified=["b.go"], added=["a.go"] must come out sorted
        let cs = changeset(&["b.go", "a.go"]);
        let paths: Vec<_> = cs.iter().collect();
        assert_eq!(paths, vec![Path::new("a.go"), Path::new("b.go")]);
    }

    #[test]
    fn test_deduplicates() {
        let cs = changeset(&["a.go", "a.go", "b.py"]);
        assert_eq!(cs.len(), 2);
    }

    #[test]
    fn test_empty_is_normal() {
        let cs = ChangeSet::default();
        assert!(cs.is_empty());
        assert_eq!(cs.len(), 0);
        assert!(cs.with_extension("go").is_empty());
    }

    #[test]
    fn test_nested_paths_sorted() {
        let cs = changeset(&["src/z.go", "src/a/b.go", "a.go"]);
        let paths: Vec<_> = cs.iter().collect();
        assert_eq!(
            paths,
            vec![
                Path::new("a.go"),
                Path::new("src/a/b.go"),
                Path::new("src/z.go"),
            ]
        );
    }

    // =========================================================================
    // Suffix filter tests
    // =========================================================================

    #[rstest]
    #[case("go", &["cmd/main.go", "pkg/util.go"])]
    #[case("py", &["scripts/gen.py"])]
    #[case("rs", &[])]
    fn test_with_extension(#[case] ext: &str, #[case] expected: &[&str]) {
        let cs = changeset(&["cmd/main.go", "pkg/util.go", "scripts/gen.py", "Readme.md"]);
        let got = cs.with_extension(ext);
        let expected: Vec<PathBuf> = expected.iter().map(PathBuf::from).collect();
        assert_eq!(got, expected);
    }

    #[test]
    fn test_with_extension_preserves_order() {
        let cs = changeset(&["z.py", "a.py", "m.py"]);
        let got = cs.with_extension("py");
        assert_eq!(
            got,
            vec![PathBuf::from("a.py"), PathBuf::from("m.py"), PathBuf::from("z.py")]
        );
    }

    #[test]
    fn test_with_extension_ignores_similar_names() {
        // "gofile" is not ".go"; dotfiles without an extension don't match
        let cs = changeset(&["gofile", ".go", "a.go.bak", "real.go"]);
        assert_eq!(cs.with_extension("go"), vec![PathBuf::from("real.go")]);
    }

    // =========================================================================
    // PathFilter tests
    // =========================================================================

    #[test]
    fn test_filter_match_all() {
        let filter = PathFilter::match_all();
        assert!(filter.matches(Path::new("anything/at/all.go")));
    }

    #[test]
    fn test_filter_single_pattern() {
        let filter = PathFilter::new(&["src/**/*.go".to_string()]).expect("valid glob");
        assert!(filter.matches(Path::new("src/a/b.go")));
        assert!(!filter.matches(Path::new("vendor/a.go")));
    }

    #[test]
    fn test_filter_multiple_patterns_any_match() {
        let filter =
            PathFilter::new(&["*.go".to_string(), "*.py".to_string()]).expect("valid globs");
        assert!(filter.matches(Path::new("main.go")));
        assert!(filter.matches(Path::new("setup.py")));
        assert!(!filter.matches(Path::new("notes.txt")));
    }

    #[test]
    fn test_filter_invalid_pattern() {
        let result = PathFilter::new(&["[".to_string()]);
        assert!(matches!(
            result,
            Err(Error::ConfigInvalid { field, .. }) if field == "files.patterns"
        ));
    }
}

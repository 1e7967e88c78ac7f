//! Git repository operations.
//!
//! This module provides utilities for interacting with Git repositories:
//! finding the repository root, the hooks directory, and enumerating the
//! staged changes a pre-commit hook must inspect.

use crate::core::changes::{ChangeSet, PathFilter};
use crate::core::error::{Error, Result};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Represents a Git repository.
#[derive(Debug, Clone)]
pub struct GitRepo {
    /// Root directory of the repository (where .git is).
    root: PathBuf,
    /// Path to the .git directory (or file for worktrees).
    git_dir: PathBuf,
}

impl GitRepo {
    /// Discovers the Git repository from the current directory.
    pub fn discover() -> Result<Self> {
        Self::discover_from(&std::env::current_dir().map_err(|e| Error::io("get current dir", e))?)
    }

    /// Discovers the Git repository from a specific path.
    pub fn discover_from(path: &Path) -> Result<Self> {
        let output = Command::new("git")
            .args(["rev-parse", "--show-toplevel", "--git-dir"])
            .current_dir(path)
            .output()
            .map_err(|e| Error::io("run git rev-parse", e))?;

        if !output.status.success() {
            return Err(Error::NotGitRepo);
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let mut lines = stdout.lines();

        let root = lines.next().map(PathBuf::from).ok_or(Error::NotGitRepo)?;

        let git_dir = lines
            .next()
            .map(|s| {
                let p = PathBuf::from(s);
                if p.is_absolute() {
                    p
                } else {
                    root.join(p)
                }
            })
            .ok_or(Error::NotGitRepo)?;

        Ok(Self { root, git_dir })
    }

    /// Returns the root directory of the repository.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the .git directory path.
    #[must_use]
    pub fn git_dir(&self) -> &Path {
        &self.git_dir
    }

    /// Returns the hooks directory path.
    #[must_use]
    pub fn hooks_dir(&self) -> PathBuf {
        // Check for custom hooks path first
        if let Ok(output) = Command::new("git")
            .args(["config", "--get", "core.hooksPath"])
            .current_dir(&self.root)
            .output()
        {
            if output.status.success() {
                let path = String::from_utf8_lossy(&output.stdout).trim().to_string();
                if !path.is_empty() {
                    let hooks_path = PathBuf::from(&path);
                    if hooks_path.is_absolute() {
                        return hooks_path;
                    }
                    return self.root.join(hooks_path);
                }
            }
        }

        // Default to .git/hooks
        self.git_dir.join("hooks")
    }

    /// Returns the path to a specific hook.
    #[must_use]
    pub fn hook_path(&self, hook_name: &str) -> PathBuf {
        self.hooks_dir().join(hook_name)
    }

    /// Returns the staged changeset: the sorted union of modified and added
    /// paths, relative to the repository root, narrowed by `filter`.
    ///
    /// Deleted, renamed-away and untracked paths are excluded; a formatter
    /// can only be asked about files that will exist in the commit. A status
    /// query failure propagates unchanged and aborts the hook invocation.
    pub fn changed_files(&self, filter: &PathFilter) -> Result<ChangeSet> {
        let output = Command::new("git")
            .args(["diff", "--cached", "--name-only", "--diff-filter=AM"])
            .current_dir(&self.root)
            .output()
            .map_err(|e| Error::io("get staged files", e))?;

        if !output.status.success() {
            return Err(Error::git("diff --cached", "Failed to get staged files"));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let paths = stdout
            .lines()
            .filter(|s| !s.is_empty())
            .map(PathBuf::from)
            .filter(|p| filter.matches(p));

        Ok(ChangeSet::from_paths(paths))
    }

    /// Checks if a file exists in the repository.
    #[must_use]
    pub fn file_exists(&self, relative_path: &str) -> bool {
        self.root.join(relative_path).exists()
    }
}

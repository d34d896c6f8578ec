//! Test fixtures and builders

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use super::git::{create_test_commit, setup_git_repo_on_branch};

/// A scratch directory tree with automatic cleanup
pub struct TestWorkspace {
    pub temp_dir: TempDir,
}

impl TestWorkspace {
    pub fn new() -> Result<Self> {
        Ok(Self {
            temp_dir: TempDir::new()?,
        })
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Creates a plain directory (no repository marker)
    pub fn dir(&self, relative: &str) -> Result<PathBuf> {
        let path = self.path().join(relative);
        fs::create_dir_all(&path)?;
        Ok(path)
    }

    /// Creates a directory holding an empty `.git` directory
    ///
    /// Enough for discovery; git itself will not accept it.
    pub fn fake_repo(&self, relative: &str) -> Result<PathBuf> {
        let path = self.dir(relative)?;
        fs::create_dir_all(path.join(".git"))?;
        Ok(path)
    }

    /// Creates a directory whose `.git` is a gitdir file, like a worktree
    pub fn fake_worktree(&self, relative: &str) -> Result<PathBuf> {
        let path = self.dir(relative)?;
        fs::write(path.join(".git"), "gitdir: /nowhere/.git/worktrees/wt\n")?;
        Ok(path)
    }

    /// Creates a real repository with one commit on `branch`
    pub fn git_repo(&self, relative: &str, branch: &str) -> Result<PathBuf> {
        let path = self.dir(relative)?;
        setup_git_repo_on_branch(&path, branch)?;
        create_test_commit(&path, "README.md", &format!("# {relative}"), "Initial commit")?;
        Ok(path)
    }
}

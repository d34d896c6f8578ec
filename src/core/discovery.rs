//! Repository discovery

use dashmap::DashSet;
use ignore::{WalkBuilder, WalkState};
use rayon::prelude::*;
use std::fs;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info};

use super::config::{ESTIMATED_REPO_COUNT, MAX_WALK_THREADS};
use super::context::ManagerContext;
use super::error::{ManagerError, ManagerResult};
use super::fanout::fan_out;
use super::registry::RepositoryEntry;
use crate::git::{current_branch, UNKNOWN_BRANCH};

const GIT_MARKER: &str = ".git";

/// Check if a .git file (for submodules/worktrees) contains gitdir reference
/// Only reads the first 5 lines for efficiency
fn is_git_file(path: &Path) -> bool {
    match fs::File::open(path) {
        Ok(file) => {
            let reader = BufReader::new(file);
            // Only read first few lines - gitdir is typically in the first line
            reader
                .lines()
                .take(5)
                .map_while(Result::ok)
                .any(|line| line.trim_start().starts_with("gitdir:"))
        }
        Err(_) => false,
    }
}

/// True when `dir` holds a `.git` directory or a `.git` gitdir file
pub fn is_repo_root(dir: &Path) -> bool {
    let marker = dir.join(GIT_MARKER);
    marker.is_dir() || (marker.is_file() && is_git_file(&marker))
}

/// Walks `root` and returns every repository root below it, sorted
///
/// The walk is exhaustive (hidden directories and ignore files are not
/// filtered) but never descends into a directory once it is classified as a
/// repository root, so nested working copies are never reported. Symlinks
/// are not followed.
pub fn find_repo_roots(root: &Path) -> Vec<PathBuf> {
    if is_repo_root(root) {
        return vec![root.to_path_buf()];
    }

    let found: Arc<DashSet<PathBuf>> = Arc::new(DashSet::with_capacity(ESTIMATED_REPO_COUNT));
    let found_clone = Arc::clone(&found);

    let walker = WalkBuilder::new(root)
        .standard_filters(false)
        .follow_links(false)
        .threads(num_cpus::get().min(MAX_WALK_THREADS))
        .filter_entry(move |entry| {
            if !entry.file_type().is_some_and(|ft| ft.is_dir()) {
                return true;
            }
            if entry.file_name() == GIT_MARKER {
                return false;
            }
            if is_repo_root(entry.path()) {
                found_clone.insert(entry.path().to_path_buf());
                // Don't walk into subdirectories of a repository
                return false;
            }
            true
        })
        .build_parallel();

    walker.run(|| {
        Box::new(|result| {
            if let Err(err) = result {
                debug!("skipping unreadable entry: {err}");
            }
            WalkState::Continue
        })
    });

    let mut roots: Vec<PathBuf> = Arc::try_unwrap(found)
        .map(|set| set.into_iter().collect())
        .unwrap_or_else(|set| set.iter().map(|path| path.key().clone()).collect());

    roots.par_sort();
    roots
}

/// Scans `root`, resolves each repository's branch and replaces the registry
///
/// Fails with [`ManagerError::DirectoryNotFound`] when `root` is not a
/// directory; the registry is only touched once the scan has completed.
pub async fn scan(context: &mut ManagerContext, root: &Path) -> ManagerResult<usize> {
    if !root.is_dir() {
        return Err(ManagerError::DirectoryNotFound(root.to_path_buf()));
    }
    let root = std::path::absolute(root)
        .map_err(|_| ManagerError::DirectoryNotFound(root.to_path_buf()))?;

    let walk_root = root.clone();
    let roots = tokio::task::spawn_blocking(move || find_repo_roots(&walk_root))
        .await
        .map_err(|e| ManagerError::Discovery(e.to_string()))?;

    let runner = context.runner();
    let entries = fan_out(
        roots,
        context.config.concurrency,
        |location| {
            let runner = Arc::clone(&runner);
            async move {
                let branch = current_branch(runner.as_ref(), &location).await;
                RepositoryEntry::new(location, branch)
            }
        },
        |failure| RepositoryEntry::new(failure.target, UNKNOWN_BRANCH),
    )
    .await;

    let count = entries.len();
    context.registry.replace_all(entries);
    info!(root = %root.display(), count, "scan complete");
    Ok(count)
}

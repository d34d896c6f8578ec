//! Branch resolution helpers
//!
//! Both queries degrade to [`UNKNOWN_BRANCH`] instead of failing.

use std::path::Path;

use super::runner::{to_args, CommandRunner};

pub const UNKNOWN_BRANCH: &str = "unknown";

// Git command arguments
const GIT_REV_PARSE_HEAD_ARGS: &[&str] = &["rev-parse", "--abbrev-ref", "HEAD"];
const GIT_REMOTE_SHOW_ORIGIN_ARGS: &[&str] = &["remote", "show", "origin"];
const GIT_BRANCH_ALL_ARGS: &[&str] = &["branch", "-a"];

const REMOTE_HEAD_MARKER: &str = "HEAD branch";
const REMOTE_HEAD_UNKNOWN: &str = "(unknown)";

/// Fallback names tried in order against the raw branch listing
const CONVENTIONAL_DEFAULT_BRANCHES: &[&str] = &["main", "master"];

/// Current branch of the repository, or `"unknown"`
pub async fn current_branch(runner: &dyn CommandRunner, location: &Path) -> String {
    match runner.run(location, &to_args(GIT_REV_PARSE_HEAD_ARGS)).await {
        Ok(output) if output.success && !output.stdout.trim().is_empty() => {
            output.stdout.trim().to_string()
        }
        _ => UNKNOWN_BRANCH.to_string(),
    }
}

/// Default branch of the repository
///
/// Tries the remote's advertised HEAD first, then looks for a conventional
/// name in the local branch listing, else `"unknown"`.
pub async fn default_branch(runner: &dyn CommandRunner, location: &Path) -> String {
    if let Ok(output) = runner.run(location, &to_args(GIT_REMOTE_SHOW_ORIGIN_ARGS)).await {
        if output.success {
            if let Some(branch) = parse_remote_head(&output.stdout) {
                return branch;
            }
        }
    }

    match runner.run(location, &to_args(GIT_BRANCH_ALL_ARGS)).await {
        Ok(output) if output.success => pick_conventional_branch(&output.stdout)
            .unwrap_or(UNKNOWN_BRANCH)
            .to_string(),
        _ => UNKNOWN_BRANCH.to_string(),
    }
}

/// Extracts the branch from a `HEAD branch: <name>` line
pub fn parse_remote_head(remote_show: &str) -> Option<String> {
    remote_show
        .lines()
        .find(|line| line.contains(REMOTE_HEAD_MARKER))
        .and_then(|line| line.rsplit(':').next())
        .map(str::trim)
        .filter(|branch| !branch.is_empty() && *branch != REMOTE_HEAD_UNKNOWN)
        .map(str::to_string)
}

/// Picks the first conventional default name that occurs in the listing
///
/// Matching is plain substring search over the whole listing, so a branch
/// such as `mainline-fix` also counts as `main`.
pub fn pick_conventional_branch(listing: &str) -> Option<&'static str> {
    CONVENTIONAL_DEFAULT_BRANCHES
        .iter()
        .copied()
        .find(|name| listing.contains(name))
}

//! Git testing utilities

use anyhow::Result;
use std::path::Path;
use std::process::Command;

fn git(path: &Path, args: &[&str]) -> Result<std::process::Output> {
    Ok(Command::new("git").args(args).current_dir(path).output()?)
}

/// Sets up a git repository with user config
/// Returns Ok(()) on success, or skips test if git is not available
pub fn setup_git_repo(path: &Path) -> Result<()> {
    let init_result = git(path, &["init"])?;
    if !init_result.status.success() {
        anyhow::bail!("Git not available - skipping test");
    }

    git(path, &["config", "user.name", "Test User"])?;
    git(path, &["config", "user.email", "test@example.com"])?;
    // Disable commit signing for tests
    git(path, &["config", "commit.gpgsign", "false"])?;

    Ok(())
}

/// Initializes a repository whose first branch is `branch`
///
/// Uses `symbolic-ref` rather than `init -b` so older git versions work too.
pub fn setup_git_repo_on_branch(path: &Path, branch: &str) -> Result<()> {
    setup_git_repo(path)?;
    let result = git(path, &["symbolic-ref", "HEAD", &format!("refs/heads/{branch}")])?;
    if !result.status.success() {
        anyhow::bail!(
            "Failed to set initial branch: {}",
            String::from_utf8_lossy(&result.stderr)
        );
    }
    Ok(())
}

/// Creates a test commit in the repository
pub fn create_test_commit(
    path: &Path,
    file_name: &str,
    content: &str,
    message: &str,
) -> Result<()> {
    std::fs::write(path.join(file_name), content)?;
    git(path, &["add", file_name])?;

    let commit_result = git(path, &["commit", "-m", message])?;
    if !commit_result.status.success() {
        anyhow::bail!(
            "Failed to create commit: {}",
            String::from_utf8_lossy(&commit_result.stderr)
        );
    }

    Ok(())
}

/// Creates and checks out a new branch
pub fn checkout_new_branch(path: &Path, branch: &str) -> Result<()> {
    let result = git(path, &["checkout", "-b", branch])?;
    if !result.status.success() {
        anyhow::bail!(
            "Failed to create branch: {}",
            String::from_utf8_lossy(&result.stderr)
        );
    }
    Ok(())
}

/// Adds a git remote to a repository
pub fn add_git_remote(path: &Path, remote_name: &str, url: &str) -> Result<()> {
    let result = git(path, &["remote", "add", remote_name, url])?;
    if !result.status.success() {
        anyhow::bail!(
            "Failed to add remote: {}",
            String::from_utf8_lossy(&result.stderr)
        );
    }
    Ok(())
}

/// Reads the checked out branch straight from git
pub fn head_branch(path: &Path) -> Result<String> {
    let output = git(path, &["rev-parse", "--abbrev-ref", "HEAD"])?;
    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

/// Checks if git is available in the system
pub fn is_git_available() -> bool {
    Command::new("git")
        .arg("--version")
        .output()
        .map(|output| output.status.success())
        .unwrap_or(false)
}

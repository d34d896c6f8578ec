//! End-to-end runs of the `git-mgr` binary

mod common;

use anyhow::Result;
use common::TestWorkspace;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

fn git_mgr(settings: &Path, args: &[&str]) -> Result<Output> {
    Ok(Command::new(env!("CARGO_BIN_EXE_git-mgr"))
        .arg("--config")
        .arg(settings)
        .args(args)
        .env_remove("GIT_MGR_CONCURRENCY")
        .output()?)
}

fn write_settings(workspace: &TestWorkspace, content: &str) -> Result<PathBuf> {
    let path = workspace.path().join("settings.toml");
    std::fs::write(&path, content)?;
    Ok(path)
}

#[test]
fn test_missing_startup_directory_still_runs_command_lines() -> Result<()> {
    let workspace = TestWorkspace::new()?;
    let settings = write_settings(&workspace, "")?;
    let missing = workspace.path().join("not-here");

    let output = git_mgr(
        &settings,
        &["-d", missing.to_str().unwrap(), "-c", "threads 2"],
    )?;

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Directory not found"), "stderr: {stderr}");
    assert!(
        stdout.contains("Using 2 threads for parallel execution"),
        "stdout: {stdout}"
    );
    assert_eq!(output.status.code(), Some(1));
    Ok(())
}

#[test]
fn test_bad_scan_directory_setting_is_not_fatal() -> Result<()> {
    let workspace = TestWorkspace::new()?;
    let settings = write_settings(
        &workspace,
        "scan_directory = \"/git-mgr/definitely/missing\"\n",
    )?;

    let output = git_mgr(&settings, &["-c", "verbose on"])?;

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Directory not found"), "stderr: {stderr}");
    assert!(stdout.contains("Verbose output is ON"), "stdout: {stdout}");
    assert_eq!(output.status.code(), Some(1));
    Ok(())
}

#[test]
fn test_clean_run_exits_zero() -> Result<()> {
    let workspace = TestWorkspace::new()?;
    let settings = write_settings(&workspace, "")?;

    let output = git_mgr(&settings, &["-c", "threads 3", "-c", "verbose off"])?;

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Using 3 threads for parallel execution"));
    assert!(stdout.contains("Verbose output is OFF"));
    Ok(())
}

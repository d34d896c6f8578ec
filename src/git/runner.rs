//! Process boundary to the external version-control binary

use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::Path;
use tokio::process::Command;
use tracing::debug;

use crate::core::config::DEFAULT_GIT_BINARY;

/// Captured result of one finished process
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProcessOutput {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

impl ProcessOutput {
    pub fn ok(stdout: impl Into<String>) -> Self {
        Self {
            success: true,
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }

    pub fn failed(stderr: impl Into<String>) -> Self {
        Self {
            success: false,
            stdout: String::new(),
            stderr: stderr.into(),
        }
    }
}

/// Runs the version-control binary with `args` inside `location`
///
/// `Err` means the process could not be launched at all; a process that ran
/// and exited non-zero is `Ok` with `success == false`.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    async fn run(&self, location: &Path, args: &[String]) -> Result<ProcessOutput>;
}

/// [`CommandRunner`] backed by a real `git` (or compatible) executable
#[derive(Clone, Debug)]
pub struct GitRunner {
    binary: String,
}

impl Default for GitRunner {
    fn default() -> Self {
        Self::new(DEFAULT_GIT_BINARY)
    }
}

impl GitRunner {
    pub fn new(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
        }
    }
}

#[async_trait]
impl CommandRunner for GitRunner {
    async fn run(&self, location: &Path, args: &[String]) -> Result<ProcessOutput> {
        debug!(binary = %self.binary, ?args, location = %location.display(), "spawning");

        let output = Command::new(&self.binary)
            .args(args)
            .current_dir(location)
            .kill_on_drop(true)
            .output()
            .await
            .with_context(|| format!("failed to launch '{}'", self.binary))?;

        Ok(ProcessOutput {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).trim().to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        })
    }
}

/// Converts a constant argument list into the owned form runners take
pub(crate) fn to_args(args: &[&str]) -> Vec<String> {
    args.iter().map(|arg| (*arg).to_string()).collect()
}

//! Explicit state passed to every command
//!
//! Groups the registry, the execution settings and the process runner so
//! that no component reaches for globals, and tests can swap the runner.

use std::sync::Arc;

use super::config::ExecutionConfig;
use super::fanout::fan_out;
use super::registry::Registry;
use crate::git::{current_branch, CommandRunner, GitRunner, UNKNOWN_BRANCH};

pub struct ManagerContext {
    /// Repositories found by the last successful scan
    pub registry: Registry,
    /// Settings read at the start of every fan-out call
    pub config: ExecutionConfig,
    runner: Arc<dyn CommandRunner>,
}

impl ManagerContext {
    pub fn new(config: ExecutionConfig, runner: Arc<dyn CommandRunner>) -> Self {
        Self {
            registry: Registry::new(),
            config,
            runner,
        }
    }

    /// Context driving the given git executable
    pub fn with_git(config: ExecutionConfig, binary: impl Into<String>) -> Self {
        Self::new(config, Arc::new(GitRunner::new(binary)))
    }

    pub fn runner(&self) -> Arc<dyn CommandRunner> {
        Arc::clone(&self.runner)
    }

    /// Re-reads the current branch of every registered repository
    ///
    /// Branch queries run concurrently; the registry is written only after
    /// all of them have finished.
    pub async fn refresh_branches(&mut self) {
        let runner = self.runner();
        let refreshed = fan_out(
            self.registry.locations(),
            self.config.concurrency,
            |location| {
                let runner = Arc::clone(&runner);
                async move {
                    let branch = current_branch(runner.as_ref(), &location).await;
                    (location, branch)
                }
            },
            |failure| (failure.target, UNKNOWN_BRANCH.to_string()),
        )
        .await;

        for (location, branch) in refreshed {
            self.registry.update_branch(&location, branch);
        }
    }
}

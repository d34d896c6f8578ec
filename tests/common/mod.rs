//! Common test utilities and helpers
#![allow(dead_code, unused_imports)]

pub mod fixtures;
pub mod git;
pub mod runner;

pub use self::fixtures::TestWorkspace;
pub use self::git::{is_git_available, setup_git_repo};
pub use self::runner::{Reply, ScriptedRunner};

use git_repo_manager::core::{ExecutionConfig, ManagerContext};
use std::sync::Arc;

/// Context over a scripted runner; the runner is returned for inspection
pub fn scripted_context(concurrency: usize) -> (ManagerContext, Arc<ScriptedRunner>) {
    let runner = Arc::new(ScriptedRunner::new());
    let config = ExecutionConfig {
        concurrency,
        verbose: false,
    };
    let context = ManagerContext::new(config, runner.clone());
    (context, runner)
}

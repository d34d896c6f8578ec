//! # git-repo-manager
//!
//! `git-repo-manager` finds every Git repository under a directory and runs
//! the same git command in all of them at once. It powers the `git-mgr`
//! interactive shell.
//!
//! ## Core Features
//!
//! - **Discovery**: Parallel directory walk using `ignore`; nested repositories are not registered.
//! - **Bounded Fan-out**: One git process per repository, at most N in flight.
//! - **Deterministic Reports**: Results are shown sorted by repository name, whatever order they finished in.
//! - **Default Branches**: `branch_switch_default` checks out `main` or `master` everywhere.
//!
//! ## Example
//!
//! ```rust,no_run
//! use git_repo_manager::core::{ExecutionConfig, ManagerContext};
//! use git_repo_manager::commands::{dispatch, ShellResponse};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let mut context = ManagerContext::with_git(ExecutionConfig::default(), "git");
//!     dispatch(&mut context, "scan .").await?;
//!     if let ShellResponse::Report(lines) = dispatch(&mut context, "status -s").await? {
//!         for line in lines {
//!             println!("{line}");
//!         }
//!     }
//!     Ok(())
//! }
//! ```

pub mod commands;
pub mod core;
pub mod git;
pub mod utils;

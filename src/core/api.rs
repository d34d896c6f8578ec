//! Public API for the core module.
//!
//! This module provides the stable public API for core functionality including:
//! - Repository registry and discovery
//! - The bounded fan-out scheduler
//! - Outcome presentation and run statistics
//! - Execution settings and the context object tying them together
//!
//! Internal implementation details are not exposed through this API.

// Context and state
pub use super::context::ManagerContext;
pub use super::registry::{Registry, RepositoryEntry};

// Discovery
pub use super::discovery::{find_repo_roots, is_repo_root, scan};

// Scheduling
pub use super::fanout::{fan_out, fan_out_observed, UnitFailure};

// Presentation
pub use super::presenter::{block_header, present};
pub use super::stats::RunStatistics;

// Configuration
pub use super::config::{
    load_settings, resolve_execution_config, ExecutionConfig, FileSettings, CONCURRENCY_ENV_VAR,
    DEFAULT_CONCURRENCY,
};

// Errors
pub use super::error::{ManagerError, ManagerResult};

// Internal helpers for command modules
pub(crate) use super::progress::create_progress_bar;

//! Error types for operations that can be refused as a whole
//!
//! Per-repository command failures are never errors: they travel as
//! [`CommandOutcome`](crate::git::CommandOutcome) values. Everything here
//! aborts only the single requested operation and leaves state untouched.

use std::path::PathBuf;
use thiserror::Error;

/// Errors reported synchronously to the caller of a command
#[derive(Debug, Error)]
pub enum ManagerError {
    #[error("Directory not found: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    #[error("Number of threads must be at least 1 (got {0})")]
    InvalidConcurrency(i64),

    #[error("No repositories found. Use 'scan' to discover repositories.")]
    NoRepositories,

    #[error("Repository discovery failed: {0}")]
    Discovery(String),

    #[error("Failed to read settings from {}: {source}", path.display())]
    SettingsRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid settings in {}: {source}", path.display())]
    SettingsParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to parse command line: {0}")]
    CommandParse(#[from] shell_words::ParseError),

    #[error("{0}")]
    Usage(String),
}

pub type ManagerResult<T> = Result<T, ManagerError>;

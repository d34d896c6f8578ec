//! Configuration constants and settings
//!
//! [`ExecutionConfig`] is the process-wide knob set read by every fan-out
//! call. It starts from defaults, is layered with an optional TOML settings
//! file, the `GIT_MGR_CONCURRENCY` environment variable and CLI flags, and is
//! afterwards only changed by the explicit `threads`/`verbose` commands.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use super::error::{ManagerError, ManagerResult};

// Concurrency Configuration
pub const DEFAULT_CONCURRENCY: usize = 4;
pub const CONCURRENCY_ENV_VAR: &str = "GIT_MGR_CONCURRENCY";

// External binary
pub const DEFAULT_GIT_BINARY: &str = "git";

// Settings file location, relative to the platform config directory
pub const SETTINGS_DIR_NAME: &str = "git-mgr";
pub const SETTINGS_FILE_NAME: &str = "config.toml";

// Progress bar configuration
pub const PROGRESS_CHARS: &str = "##-";
pub const PROGRESS_TEMPLATE: &str = "{prefix:.bold} [{bar:30}] {pos}/{len} {wide_msg}";

// Display formatting constants
pub const PATH_DISPLAY_WIDTH: usize = 40;
pub const UNKNOWN_REPO_NAME: &str = "unknown";

// Repository discovery configuration
pub const ESTIMATED_REPO_COUNT: usize = 50; // Pre-allocation hint for collections
pub const MAX_WALK_THREADS: usize = 8;

/// Execution settings shared by every fan-out call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionConfig {
    /// Maximum number of in-flight commands, always >= 1
    pub concurrency: usize,
    /// Show successful outcomes too, not only failures
    pub verbose: bool,
}

impl Default for ExecutionConfig {
    fn default() -> Self {
        Self {
            concurrency: DEFAULT_CONCURRENCY,
            verbose: false,
        }
    }
}

impl ExecutionConfig {
    /// Sets the concurrency limit, rejecting values below 1
    ///
    /// On error the previous value stays in effect.
    pub fn set_concurrency(&mut self, value: i64) -> ManagerResult<()> {
        self.concurrency = validate_concurrency(value)?;
        Ok(())
    }

    /// Sets verbose mode explicitly, or toggles it when `state` is `None`
    pub fn set_verbose(&mut self, state: Option<bool>) -> bool {
        self.verbose = state.unwrap_or(!self.verbose);
        self.verbose
    }
}

fn validate_concurrency(value: i64) -> ManagerResult<usize> {
    if value < 1 {
        return Err(ManagerError::InvalidConcurrency(value));
    }
    usize::try_from(value).map_err(|_| ManagerError::InvalidConcurrency(value))
}

/// Contents of the optional settings file
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct FileSettings {
    pub concurrency: Option<i64>,
    pub verbose: Option<bool>,
    pub git_binary: Option<String>,
    pub scan_directory: Option<PathBuf>,
}

impl FileSettings {
    /// The external binary to invoke for every command
    pub fn git_binary(&self) -> &str {
        self.git_binary.as_deref().unwrap_or(DEFAULT_GIT_BINARY)
    }
}

/// Default settings file path, if the platform has a config directory
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(SETTINGS_DIR_NAME).join(SETTINGS_FILE_NAME))
}

/// Loads settings from an explicit path, or from the default location
///
/// An explicit path must exist. A missing default file yields empty settings.
pub fn load_settings(explicit: Option<&Path>) -> ManagerResult<FileSettings> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => match default_settings_path() {
            Some(path) if path.is_file() => path,
            _ => return Ok(FileSettings::default()),
        },
    };

    debug!(path = %path.display(), "loading settings");
    let content = std::fs::read_to_string(&path).map_err(|source| ManagerError::SettingsRead {
        path: path.clone(),
        source,
    })?;
    parse_settings(&path, &content)
}

/// Parses settings file content, attributing errors to `path`
pub fn parse_settings(path: &Path, content: &str) -> ManagerResult<FileSettings> {
    toml::from_str(content).map_err(|source| ManagerError::SettingsParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Builds the startup [`ExecutionConfig`]
///
/// Priority order:
/// 1. CLI `--jobs N` / `--verbose`
/// 2. `GIT_MGR_CONCURRENCY` env var (ignored with a warning when invalid)
/// 3. settings file
/// 4. defaults
pub fn resolve_execution_config(
    settings: &FileSettings,
    cli_jobs: Option<i64>,
    cli_verbose: bool,
    env_concurrency: Option<&str>,
) -> ManagerResult<ExecutionConfig> {
    let mut config = ExecutionConfig::default();

    if let Some(n) = settings.concurrency {
        config.concurrency = validate_concurrency(n)?;
    }
    if let Some(verbose) = settings.verbose {
        config.verbose = verbose;
    }

    if let Some(raw) = env_concurrency {
        match raw.trim().parse::<i64>().ok().filter(|n| *n > 0) {
            Some(n) => config.concurrency = validate_concurrency(n)?,
            None => warn!(value = raw, "ignoring invalid {CONCURRENCY_ENV_VAR}"),
        }
    }

    if let Some(n) = cli_jobs {
        config.concurrency = validate_concurrency(n)?;
    }
    if cli_verbose {
        config.verbose = true;
    }

    Ok(config)
}

//! Command outcome and status enumeration

use std::path::{Path, PathBuf};

use crate::utils::display_name;

/// Status of one command against one repository
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Status {
    /// The external command exited with status zero
    Succeeded,
    /// Non-zero exit, launch failure, or an unparsable command line
    Failed,
}

impl Status {
    /// Returns the emoji symbol for this status
    pub fn symbol(&self) -> &str {
        match self {
            Status::Succeeded => "🟢",
            Status::Failed => "🔴",
        }
    }
}

/// Normalized result of one command execution against one repository
///
/// Created exactly once per (target, command) invocation and never mutated.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CommandOutcome {
    pub location: PathBuf,
    pub output: String,
    pub status: Status,
}

impl CommandOutcome {
    /// Outcome for a zero exit status; `output` is the trimmed stdout
    pub fn success(location: &Path, output: impl Into<String>) -> Self {
        Self {
            location: location.to_path_buf(),
            output: output.into(),
            status: Status::Succeeded,
        }
    }

    /// Outcome for any failure; `output` is the diagnostic message
    pub fn failure(location: &Path, output: impl Into<String>) -> Self {
        Self {
            location: location.to_path_buf(),
            output: output.into(),
            status: Status::Failed,
        }
    }

    pub fn succeeded(&self) -> bool {
        self.status == Status::Succeeded
    }

    /// Display label used for headers and sorting
    pub fn label(&self) -> String {
        display_name(&self.location)
    }
}

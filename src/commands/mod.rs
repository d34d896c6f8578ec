//! Operator commands
//!
//! Every handler returns the lines it wants shown; printing is left to the
//! caller so the same handlers serve the interactive loop and `-c` mode.

pub mod run;
pub mod scan;
pub mod settings;
pub mod shell;
pub mod switch_default;

pub use run::{handle_run_command, run_across_registry};
pub use scan::{handle_list_command, handle_scan_command};
pub use settings::{handle_threads_command, handle_verbose_command};
pub use shell::{dispatch, parse_line, ShellCommand, ShellResponse, Toggle};
pub use switch_default::{
    checkout_branches, handle_switch_default_command, resolve_default_branches,
};

//! Operator command surface
//!
//! Each input line is split with shell-word rules and parsed by a multicall
//! `clap` parser. Lines whose first word is not a known command are run as a
//! git argument list across every registered repository.

use clap::error::ErrorKind;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing::debug;

use super::run::handle_run_command;
use super::scan::{handle_list_command, handle_scan_command};
use super::settings::{handle_threads_command, handle_verbose_command};
use super::switch_default::handle_switch_default_command;
use crate::core::{ManagerContext, ManagerError, ManagerResult};

#[derive(Debug, Parser)]
#[command(name = "git-mgr", multicall = true)]
pub struct ShellLine {
    #[command(subcommand)]
    pub command: ShellCommand,
}

#[derive(Debug, PartialEq, Eq, Subcommand)]
pub enum ShellCommand {
    /// Scan for Git repositories (default: current directory)
    Scan {
        /// Directory to scan
        #[arg(short, long, value_name = "DIR")]
        directory: Option<PathBuf>,
        #[arg(value_name = "DIR", conflicts_with = "directory")]
        path: Option<PathBuf>,
    },
    /// List all discovered repositories and their current branches
    List,
    /// Execute a Git command in all repositories
    #[command(disable_help_flag = true)]
    Git {
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
    /// Switch all repositories to their default branch (main/master)
    #[command(name = "branch_switch_default")]
    BranchSwitchDefault,
    /// Set the number of repositories processed in parallel
    Threads {
        #[arg(allow_negative_numbers = true)]
        num: i64,
    },
    /// Turn verbose output on or off; toggles without an argument
    Verbose { state: Option<Toggle> },
    /// Exit this application
    #[command(alias = "quit")]
    Exit,
    #[command(external_subcommand)]
    External(Vec<String>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Toggle {
    On,
    Off,
}

/// What the caller should do after a line has been handled
#[derive(Debug, PartialEq, Eq)]
pub enum ShellResponse {
    Report(Vec<String>),
    Exit,
}

/// Parses one operator line without executing it
///
/// `Ok(None)` for a blank line. Help requests and parse failures both come
/// back as [`ManagerError::Usage`] carrying clap's rendered text.
pub fn parse_line(line: &str) -> ManagerResult<Option<ShellCommand>> {
    let tokens = shell_words::split(line)?;
    if tokens.is_empty() {
        return Ok(None);
    }

    ShellLine::try_parse_from(&tokens)
        .map(|parsed| Some(parsed.command))
        .map_err(|e| usage_error(&e))
}

/// Parses and executes one operator line
pub async fn dispatch(context: &mut ManagerContext, line: &str) -> ManagerResult<ShellResponse> {
    let tokens = shell_words::split(line)?;
    if tokens.is_empty() {
        return Ok(ShellResponse::Report(Vec::new()));
    }

    let command = match ShellLine::try_parse_from(&tokens) {
        Ok(parsed) => parsed.command,
        Err(e) if is_help(&e) => {
            return Ok(ShellResponse::Report(
                e.to_string().lines().map(str::to_string).collect(),
            ));
        }
        Err(e) => return Err(usage_error(&e)),
    };

    debug!(?command, "dispatching");
    let report = match command {
        ShellCommand::Scan { directory, path } => {
            let directory = directory
                .or(path)
                .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));
            handle_scan_command(context, &directory).await?
        }
        ShellCommand::List => handle_list_command(context),
        ShellCommand::Git { args } | ShellCommand::External(args) => {
            handle_run_command(context, &args).await?
        }
        ShellCommand::BranchSwitchDefault => handle_switch_default_command(context).await?,
        ShellCommand::Threads { num } => handle_threads_command(context, num)?,
        ShellCommand::Verbose { state } => {
            handle_verbose_command(context, state.map(|toggle| toggle == Toggle::On))
        }
        ShellCommand::Exit => return Ok(ShellResponse::Exit),
    };
    Ok(ShellResponse::Report(report))
}

fn is_help(e: &clap::Error) -> bool {
    matches!(
        e.kind(),
        ErrorKind::DisplayHelp
            | ErrorKind::DisplayVersion
            | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
    )
}

fn usage_error(e: &clap::Error) -> ManagerError {
    ManagerError::Usage(e.to_string().trim_end().to_string())
}

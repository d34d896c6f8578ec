//! git-mgr: run one git command across every repository under a directory
//! Discovers repositories, then reads operator lines from stdin (or `-c`)
//! and fans each one out with a bounded number of concurrent git processes.

use anyhow::{Context, Result};
use clap::{value_parser, Arg, ArgAction, Command as ClapCommand};
use std::io::Write;
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, BufReader};

use git_repo_manager::commands::{dispatch, handle_scan_command, ShellResponse};
use git_repo_manager::core::{
    load_settings, resolve_execution_config, ManagerContext, CONCURRENCY_ENV_VAR,
};
use git_repo_manager::utils::{init_logger, set_terminal_title_and_flush};

const PROMPT: &str = "git-mgr> ";
const WELCOME_MESSAGE: &str =
    "Git Repository Manager. Type 'help' for commands, 'exit' to quit.";
const RUNNING_TITLE: &str = "🚀 git-mgr";
const DONE_TITLE: &str = "✅ git-mgr";

fn build_cli() -> ClapCommand {
    ClapCommand::new("git-mgr")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Run git commands across many repositories at once")
        .arg(
            Arg::new("directory")
                .short('d')
                .long("directory")
                .value_name("DIR")
                .value_parser(value_parser!(PathBuf))
                .help("Scan this directory before the first command"),
        )
        .arg(
            Arg::new("jobs")
                .short('j')
                .long("jobs")
                .value_name("N")
                .allow_negative_numbers(true)
                .value_parser(value_parser!(i64))
                .help("Number of repositories processed in parallel"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::SetTrue)
                .help("Show output from successful repositories too"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .value_parser(value_parser!(PathBuf))
                .help("Settings file (default: <config dir>/git-mgr/config.toml)"),
        )
        .arg(
            Arg::new("debug")
                .long("debug")
                .action(ArgAction::SetTrue)
                .help("Enable debug logging on stderr"),
        )
        .arg(
            Arg::new("command")
                .short('c')
                .long("command")
                .value_name("LINE")
                .action(ArgAction::Append)
                .help("Run LINE and exit instead of starting the shell (repeatable)"),
        )
}

fn print_report(lines: &[String]) {
    for line in lines {
        println!("{line}");
    }
}

#[derive(Debug, PartialEq, Eq)]
enum LineOutcome {
    Done,
    Failed,
    Exit,
}

/// Runs one line, printing its report on stdout or its error on stderr
async fn handle_line(context: &mut ManagerContext, line: &str) -> LineOutcome {
    match dispatch(context, line).await {
        Ok(ShellResponse::Report(lines)) => {
            print_report(&lines);
            LineOutcome::Done
        }
        Ok(ShellResponse::Exit) => LineOutcome::Exit,
        Err(e) => {
            eprintln!("{e}");
            LineOutcome::Failed
        }
    }
}

async fn run_shell(context: &mut ManagerContext) -> Result<()> {
    set_terminal_title_and_flush(RUNNING_TITLE);
    println!("{WELCOME_MESSAGE}");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("{PROMPT}");
        std::io::stdout().flush().context("failed to flush prompt")?;

        let Some(line) = lines.next_line().await.context("failed to read input")? else {
            println!();
            break;
        };

        if handle_line(context, &line).await == LineOutcome::Exit {
            break;
        }
    }

    set_terminal_title_and_flush(DONE_TITLE);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let matches = build_cli().get_matches();

    init_logger(matches.get_flag("debug"));

    let settings = load_settings(matches.get_one::<PathBuf>("config").map(PathBuf::as_path))?;
    let env_concurrency = std::env::var(CONCURRENCY_ENV_VAR).ok();
    let config = resolve_execution_config(
        &settings,
        matches.get_one::<i64>("jobs").copied(),
        matches.get_flag("verbose"),
        env_concurrency.as_deref(),
    )?;

    let mut context = ManagerContext::with_git(config, settings.git_binary());

    let startup_directory = matches
        .get_one::<PathBuf>("directory")
        .cloned()
        .or_else(|| settings.scan_directory.clone());
    // A failed startup scan is reported like any other line and the session
    // continues with an empty registry
    let mut failed = false;
    if let Some(directory) = startup_directory {
        match handle_scan_command(&mut context, &directory).await {
            Ok(report) => print_report(&report),
            Err(e) => {
                eprintln!("{e}");
                failed = true;
            }
        }
    }

    let commands: Vec<String> = matches
        .get_many::<String>("command")
        .map(|lines| lines.cloned().collect())
        .unwrap_or_default();

    if commands.is_empty() {
        return run_shell(&mut context).await;
    }

    // Every line runs even after a failure; the exit status reports it
    for line in &commands {
        match handle_line(&mut context, line).await {
            LineOutcome::Done => {}
            LineOutcome::Failed => failed = true,
            LineOutcome::Exit => break,
        }
    }

    if failed {
        std::process::exit(1);
    }
    Ok(())
}

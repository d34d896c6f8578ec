//! Runs one command in one repository and folds every result into a
//! [`CommandOutcome`]
//!
//! Nothing here returns `Err`: unparsable command lines, launch failures and
//! non-zero exits all become failure outcomes, so fan-out aggregation never
//! needs an error path.

use std::path::Path;
use tracing::warn;

use super::runner::CommandRunner;
use super::status::CommandOutcome;

/// Splits `command_line` with shell-word rules and executes it in `location`
///
/// Quoted arguments keep embedded spaces: `commit -m "two words"` yields three
/// arguments.
pub async fn execute(
    runner: &dyn CommandRunner,
    location: &Path,
    command_line: &str,
) -> CommandOutcome {
    match shell_words::split(command_line) {
        Ok(args) => execute_args(runner, location, &args).await,
        Err(e) => CommandOutcome::failure(location, failure_message(location, &e.to_string())),
    }
}

/// Executes an already split argument list in `location`
pub async fn execute_args(
    runner: &dyn CommandRunner,
    location: &Path,
    args: &[String],
) -> CommandOutcome {
    match runner.run(location, args).await {
        Ok(output) if output.success => CommandOutcome::success(location, output.stdout.trim()),
        Ok(output) => CommandOutcome::failure(location, failure_message(location, &output.stderr)),
        Err(e) => {
            warn!(location = %location.display(), "{e:#}");
            CommandOutcome::failure(location, failure_message(location, &format!("{e:#}")))
        }
    }
}

fn failure_message(location: &Path, detail: &str) -> String {
    format!("Error in {}:\n{}", location.display(), detail.trim())
}

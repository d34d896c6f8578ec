//! Run one git argument list across every registered repository

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use crate::core::{
    create_progress_bar, fan_out_observed, present, ManagerContext, ManagerError, ManagerResult,
    RunStatistics, UnitFailure,
};
use crate::git::{execute_args, CommandOutcome};

/// Subcommands after which the registry branch labels are re-read
const BRANCH_CHANGING_SUBCOMMANDS: &[&str] = &["checkout", "switch"];

const RUNNING_PREFIX: &str = "git";

/// Handles `git ARGS...` and passthrough lines
///
/// Returns the report: a heading, the presented outcomes and a summary line.
pub async fn handle_run_command(
    context: &mut ManagerContext,
    args: &[String],
) -> ManagerResult<Vec<String>> {
    if context.registry.is_empty() {
        return Err(ManagerError::NoRepositories);
    }

    let mut report = vec![format!(
        "Executing 'git {}' in {} repositories...",
        shell_words::join(args),
        context.registry.len()
    )];

    let start_time = Instant::now();
    let outcomes = run_across_registry(context, args).await;

    if changes_branch(args) {
        context.refresh_branches().await;
    }

    report.extend(present(&outcomes, context.config.verbose));
    report.push(RunStatistics::from_outcomes(&outcomes).generate_summary(start_time.elapsed()));
    Ok(report)
}

/// Executes `args` in every registered repository, one outcome each
pub async fn run_across_registry(context: &ManagerContext, args: &[String]) -> Vec<CommandOutcome> {
    let locations = context.registry.locations();
    let progress = create_progress_bar(locations.len(), RUNNING_PREFIX);
    let mut stats = RunStatistics::new();

    let runner = context.runner();
    let args: Arc<[String]> = Arc::from(args);
    let outcomes = fan_out_observed(
        locations,
        context.config.concurrency,
        |location| {
            let runner = Arc::clone(&runner);
            let args = Arc::clone(&args);
            async move { execute_args(runner.as_ref(), &location, &args).await }
        },
        unit_failure_outcome,
        |outcome| {
            stats.update(outcome);
            progress.set_message(stats.progress_message());
            progress.inc(1);
        },
    )
    .await;

    progress.finish_and_clear();
    outcomes
}

/// Failure outcome for a repository whose unit of work never returned
pub(crate) fn unit_failure_outcome(failure: UnitFailure<PathBuf>) -> CommandOutcome {
    CommandOutcome::failure(
        &failure.target,
        format!("Error in {}:\n{}", failure.target.display(), failure.reason),
    )
}

fn changes_branch(args: &[String]) -> bool {
    args.first()
        .is_some_and(|sub| BRANCH_CHANGING_SUBCOMMANDS.contains(&sub.as_str()))
}

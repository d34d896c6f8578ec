//! Switch every repository to its default branch
//!
//! Three passes over the registry, each one fan-out call:
//! resolve the default branch, check it out, refresh the branch labels.
//! A repository whose default cannot be resolved still gets
//! `checkout unknown`, which fails and is reported like any other failure.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use super::run::unit_failure_outcome;
use crate::core::{
    create_progress_bar, fan_out, fan_out_observed, present, ManagerContext, ManagerError,
    ManagerResult, RunStatistics, UnitFailure,
};
use crate::git::{default_branch, execute_args, CommandOutcome, UNKNOWN_BRANCH};

const CHECKOUT_SUBCOMMAND: &str = "checkout";
const SWITCHING_PREFIX: &str = "checkout";

/// Handles `branch_switch_default`
pub async fn handle_switch_default_command(
    context: &mut ManagerContext,
) -> ManagerResult<Vec<String>> {
    if context.registry.is_empty() {
        return Err(ManagerError::NoRepositories);
    }

    let mut report = vec![format!(
        "Switching to default branches in {} repositories...",
        context.registry.len()
    )];

    let start_time = Instant::now();
    let targets = resolve_default_branches(context).await;
    let outcomes = checkout_branches(context, targets).await;
    context.refresh_branches().await;

    report.extend(present(&outcomes, context.config.verbose));
    report.push(RunStatistics::from_outcomes(&outcomes).generate_summary(start_time.elapsed()));
    Ok(report)
}

/// Phase 1: the default branch of every registered repository
pub async fn resolve_default_branches(context: &ManagerContext) -> Vec<(PathBuf, String)> {
    let runner = context.runner();
    fan_out(
        context.registry.locations(),
        context.config.concurrency,
        |location| {
            let runner = Arc::clone(&runner);
            async move {
                let branch = default_branch(runner.as_ref(), &location).await;
                (location, branch)
            }
        },
        |failure| (failure.target, UNKNOWN_BRANCH.to_string()),
    )
    .await
}

/// Phase 2: `checkout <branch>` in each repository
pub async fn checkout_branches(
    context: &ManagerContext,
    targets: Vec<(PathBuf, String)>,
) -> Vec<CommandOutcome> {
    let progress = create_progress_bar(targets.len(), SWITCHING_PREFIX);
    let mut stats = RunStatistics::new();

    let runner = context.runner();
    let outcomes = fan_out_observed(
        targets,
        context.config.concurrency,
        |(location, branch)| {
            let runner = Arc::clone(&runner);
            async move {
                let args = vec![CHECKOUT_SUBCOMMAND.to_string(), branch];
                execute_args(runner.as_ref(), &location, &args).await
            }
        },
        |failure| unit_failure_outcome(UnitFailure {
            target: failure.target.0,
            reason: failure.reason,
        }),
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

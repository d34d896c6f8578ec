//! Commands that change the execution settings

use crate::core::{ManagerContext, ManagerResult};

/// Handles `threads N`; values below 1 are rejected and change nothing
pub fn handle_threads_command(context: &mut ManagerContext, num: i64) -> ManagerResult<Vec<String>> {
    context.config.set_concurrency(num)?;
    Ok(vec![format!(
        "Using {} threads for parallel execution",
        context.config.concurrency
    )])
}

/// Handles `verbose [on|off]`; no argument toggles
pub fn handle_verbose_command(context: &mut ManagerContext, state: Option<bool>) -> Vec<String> {
    let verbose = context.config.set_verbose(state);
    vec![format!(
        "Verbose output is {}",
        if verbose { "ON" } else { "OFF" }
    )]
}

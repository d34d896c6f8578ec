//! Deterministic rendering of command outcomes

use std::cmp::Ordering;

use crate::git::CommandOutcome;

fn compare_outcomes(a: &CommandOutcome, b: &CommandOutcome) -> Ordering {
    a.label()
        .cmp(&b.label())
        .then_with(|| a.location.cmp(&b.location))
}

/// Header line that opens one outcome block
pub fn block_header(outcome: &CommandOutcome) -> String {
    format!("=== {} ===", outcome.label())
}

/// Renders outcomes as display lines, sorted by label
///
/// Terse mode keeps only failures. Each block is a blank separator, a
/// header naming the repository, then the output text split on `\n`
/// exactly, so carriage returns and blank lines survive.
pub fn present(outcomes: &[CommandOutcome], verbose: bool) -> Vec<String> {
    let mut shown: Vec<&CommandOutcome> = outcomes
        .iter()
        .filter(|outcome| verbose || !outcome.succeeded())
        .collect();
    shown.sort_by(|a, b| compare_outcomes(a, b));

    let mut lines = Vec::new();
    for outcome in shown {
        lines.push(String::new());
        lines.push(block_header(outcome));
        if !outcome.output.is_empty() {
            lines.extend(outcome.output.split('\n').map(str::to_string));
        }
    }
    lines
}

//! Repository discovery and listing commands

use std::path::Path;

use crate::core::config::PATH_DISPLAY_WIDTH;
use crate::core::{scan, ManagerContext, ManagerResult};
use crate::utils::shorten_path;

const NO_REPOS_HINT: &str = "No repositories found. Use 'scan' to discover repositories.";
const NAME_HEADER: &str = "Repository";
const BRANCH_HEADER: &str = "Branch";

/// Handles `scan [DIR]`
///
/// On error the registry keeps its previous contents.
pub async fn handle_scan_command(
    context: &mut ManagerContext,
    directory: &Path,
) -> ManagerResult<Vec<String>> {
    let mut report = vec![format!(
        "Scanning for Git repositories in {}...",
        directory.display()
    )];

    let found = scan(context, directory).await?;
    report.push(format!("Found {found} Git repositories."));

    if found > 0 {
        report.extend(handle_list_command(context));
    }
    Ok(report)
}

/// Handles `list`: one row per repository, ordered by location
pub fn handle_list_command(context: &ManagerContext) -> Vec<String> {
    let entries = context.registry.get_all();
    if entries.is_empty() {
        return vec![NO_REPOS_HINT.to_string()];
    }

    let names: Vec<String> = entries.iter().map(|entry| entry.name()).collect();
    let name_width = names
        .iter()
        .map(|name| name.chars().count())
        .chain(std::iter::once(NAME_HEADER.len()))
        .max()
        .unwrap_or(0);
    let branch_width = entries
        .iter()
        .map(|entry| entry.branch.chars().count())
        .chain(std::iter::once(BRANCH_HEADER.len()))
        .max()
        .unwrap_or(0);

    let mut lines = vec![
        String::new(),
        "Discovered Git repositories:".to_string(),
        format!("{NAME_HEADER:<name_width$}  {BRANCH_HEADER:<branch_width$}  Path"),
        "-".repeat(name_width + branch_width + PATH_DISPLAY_WIDTH + 4),
    ];

    for (entry, name) in entries.iter().zip(names) {
        let path = shorten_path(&entry.location.to_string_lossy(), PATH_DISPLAY_WIDTH);
        lines.push(
            format!("{name:<name_width$}  {:<branch_width$}  {path}", entry.branch)
                .trim_end()
                .to_string(),
        );
    }
    lines
}

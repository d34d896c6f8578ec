//! Progress bar shown while a fan-out call runs

use indicatif::{ProgressBar, ProgressStyle};

use super::config::{PROGRESS_CHARS, PROGRESS_TEMPLATE};

/// Creates a progress bar counting `total` targets
///
/// Draws to stderr and stays invisible when stderr is not a terminal, so
/// piped report output is never mixed with bar frames.
pub(crate) fn create_progress_bar(total: usize, prefix: &str) -> ProgressBar {
    let pb = ProgressBar::new(total as u64);
    pb.set_style(create_progress_style());
    pb.set_prefix(prefix.to_string());
    pb
}

/// Creates a progress bar style configuration
/// Falls back to the default bar if the template is rejected
pub(crate) fn create_progress_style() -> ProgressStyle {
    ProgressStyle::default_bar()
        .template(PROGRESS_TEMPLATE)
        .map(|style| style.progress_chars(PROGRESS_CHARS))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
}

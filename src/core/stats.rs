//! Statistics tracking for fan-out runs

use std::time::Duration;

use crate::git::{CommandOutcome, Status};

/// Succeeded/failed counters for one fan-out run
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunStatistics {
    pub succeeded: usize,
    pub failed: usize,
}

impl RunStatistics {
    /// Creates a new statistics tracker with all counters initialized to zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts a whole batch of outcomes
    pub fn from_outcomes(outcomes: &[CommandOutcome]) -> Self {
        let mut stats = Self::new();
        for outcome in outcomes {
            stats.update(outcome);
        }
        stats
    }

    /// Updates statistics with one outcome
    pub fn update(&mut self, outcome: &CommandOutcome) {
        match outcome.status {
            Status::Succeeded => self.succeeded += 1,
            Status::Failed => self.failed += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.succeeded + self.failed
    }

    /// Live counter text shown next to the progress bar
    pub fn progress_message(&self) -> String {
        format!(
            "{} {}  {} {}",
            Status::Succeeded.symbol(),
            self.succeeded,
            Status::Failed.symbol(),
            self.failed
        )
    }

    /// One-line summary of the finished run
    pub fn generate_summary(&self, duration: Duration) -> String {
        let duration_secs = duration.as_secs_f64();
        if self.failed > 0 {
            format!(
                "✅ Completed in {:.1}s • {} succeeded • {} failed",
                duration_secs, self.succeeded, self.failed
            )
        } else {
            format!(
                "✅ Completed in {:.1}s • {} succeeded",
                duration_secs, self.succeeded
            )
        }
    }
}

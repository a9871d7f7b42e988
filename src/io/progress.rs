//! Spinner progress tracking for a running search

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;
use std::time::Duration;

use crate::algorithm::executor::{Discovery, SearchSummary, StopReason};
use crate::io::configuration::PROGRESS_TICK_MS;

/// Terminal spinner counting discoveries while a search runs
pub struct SearchProgress {
    bar: ProgressBar,
    discoveries: usize,
    kept: usize,
}

impl Default for SearchProgress {
    fn default() -> Self {
        Self::new()
    }
}

static SPINNER_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_spinner()
        .template("{spinner:.cyan} [{elapsed_precise}] {prefix} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
});

impl SearchProgress {
    /// Create a visible spinner
    pub fn new() -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(SPINNER_STYLE.clone());
        bar.enable_steady_tick(Duration::from_millis(PROGRESS_TICK_MS));
        bar.set_prefix("searching");
        Self {
            bar,
            discoveries: 0,
            kept: 0,
        }
    }

    /// Create a spinner that draws nothing
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
            discoveries: 0,
            kept: 0,
        }
    }

    /// Count a discovery and refresh the message
    pub fn record(&mut self, discovery: &Discovery) {
        self.discoveries += 1;
        if discovery.kept {
            self.kept += 1;
        }
        self.bar.set_message(format!(
            "{} discoveries, {} kept, last complexity {:.3}",
            self.discoveries, self.kept, discovery.complexity
        ));
    }

    /// Number of discoveries counted so far
    pub const fn discoveries(&self) -> usize {
        self.discoveries
    }

    /// Number of kept discoveries counted so far
    pub const fn kept(&self) -> usize {
        self.kept
    }

    /// Stop the spinner with a closing message
    pub fn finish(&self, summary: &SearchSummary) {
        let reason = match summary.stop {
            Some(StopReason::SampleExhausted) => "sample exhausted",
            Some(StopReason::ThoroughnessExhausted) => "thoroughness exhausted",
            Some(StopReason::Interrupted) => "interrupted",
            None => "stopped",
        };
        self.bar.finish_with_message(format!(
            "{} discoveries, {} kept ({reason})",
            summary.discoveries, summary.kept
        ));
    }
}

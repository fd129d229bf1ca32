//! Progress bar for multi-input sweeps.

use indicatif::{ProgressBar, ProgressStyle};

/// Progress display for a sweep over several inputs.
///
/// Hidden in quiet mode so that only results reach stdout.
pub struct SweepProgress {
    bar: ProgressBar,
}

impl SweepProgress {
    /// Create a progress bar for `total` steps.
    #[must_use]
    pub fn new(total: u64, quiet: bool) -> Self {
        let bar = if quiet {
            ProgressBar::hidden()
        } else {
            ProgressBar::new(total)
        };
        let style = ProgressStyle::with_template("{spinner} [{bar:30}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=> ");
        bar.set_style(style);
        Self { bar }
    }

    /// Announce the input about to be measured.
    pub fn start_step(&self, label: &str) {
        self.bar.set_message(label.to_string());
    }

    /// Mark one input as done.
    pub fn finish_step(&self) {
        self.bar.inc(1);
    }

    /// Remove the bar from the terminal.
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }

    /// Steps completed so far.
    #[must_use]
    pub fn position(&self) -> u64 {
        self.bar.position()
    }
}

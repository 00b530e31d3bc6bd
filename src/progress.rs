//! Progress display for feed queries and deletion runs
//!
//! Drawn on stderr with indicatif; disabled when stdout is not a terminal so
//! piped or scripted runs see only the console text.

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Progress reporter for one long-running step
pub struct Progress {
    bar: Option<ProgressBar>,
}

impl Progress {
    /// A reporter that draws nothing
    pub fn disabled() -> Self {
        Self { bar: None }
    }

    /// Show a spinner for an operation of unknown length
    pub fn spinner(enabled: bool, message: &str) -> Self {
        if !enabled {
            return Self::disabled();
        }

        let spinner = ProgressBar::new_spinner();
        let style = ProgressStyle::with_template("{spinner:.cyan} {msg} ({elapsed})")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏");
        spinner.set_style(style);
        spinner.set_message(message.to_string());
        spinner.enable_steady_tick(Duration::from_millis(80));
        Self { bar: Some(spinner) }
    }

    /// Show a bar over a known number of items
    pub fn bar(enabled: bool, total: u64, message: &str) -> Self {
        if !enabled {
            return Self::disabled();
        }

        let bar = ProgressBar::new(total);
        let style = ProgressStyle::with_template("{msg} [{bar:30.cyan/blue}] {pos}/{len}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓░");
        bar.set_style(style);
        bar.set_message(message.to_string());
        Self { bar: Some(bar) }
    }

    /// Returns true if anything is being drawn
    pub fn is_enabled(&self) -> bool {
        self.bar.is_some()
    }

    /// Advance by one item
    pub fn inc(&self) {
        if let Some(bar) = &self.bar {
            bar.inc(1);
        }
    }

    /// Replace the message
    pub fn set_message(&self, message: &str) {
        if let Some(bar) = &self.bar {
            bar.set_message(message.to_string());
        }
    }

    /// Stop drawing and erase the progress line
    pub fn finish_and_clear(&mut self) {
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }
    }
}

impl Drop for Progress {
    fn drop(&mut self) {
        self.finish_and_clear();
    }
}

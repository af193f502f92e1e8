//! "Thinking..." spinner shown while a seat's reply is generated

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Spinner standing in for the pending turn.
///
/// Hidden entirely when quiet.
pub struct ThinkingSpinner {
    bar: Option<ProgressBar>,
    quiet: bool,
}

impl ThinkingSpinner {
    pub fn new(quiet: bool) -> Self {
        Self { bar: None, quiet }
    }

    fn style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    /// Show the placeholder for `speaker`, replacing any previous one
    pub fn show(&mut self, speaker: &str) {
        self.clear();
        if self.quiet {
            return;
        }
        let bar = ProgressBar::new_spinner();
        bar.set_style(Self::style());
        bar.set_prefix(speaker.to_string());
        bar.set_message("Thinking...");
        bar.enable_steady_tick(Duration::from_millis(100));
        self.bar = Some(bar);
    }

    /// Remove the placeholder, if shown
    pub fn clear(&mut self) {
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }
    }

    pub fn is_active(&self) -> bool {
        self.bar.is_some()
    }

    /// Print a line above the spinner without tearing it
    pub fn println(&self, line: &str) {
        match &self.bar {
            Some(bar) => bar.println(line),
            None => println!("{}", line),
        }
    }
}

impl Drop for ThinkingSpinner {
    fn drop(&mut self) {
        self.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiet_never_shows() {
        let mut spinner = ThinkingSpinner::new(true);
        spinner.show("Optimist");
        assert!(!spinner.is_active());
    }

    #[test]
    fn test_show_and_clear() {
        let mut spinner = ThinkingSpinner::new(false);
        spinner.show("Optimist");
        assert!(spinner.is_active());
        spinner.show("Skeptic");
        assert!(spinner.is_active());
        spinner.clear();
        assert!(!spinner.is_active());
    }
}

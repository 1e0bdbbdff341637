//! Progress reporting for generation and test calls

use crate::output::console::ConsoleFormatter;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use refiner_application::ProgressNotifier;
use refiner_domain::{Keywords, Model, Phase, Prompt};
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

/// Reports progress with an indicatif spinner while a call is in flight
pub struct ProgressReporter {
    spinner: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold.cyan} {msg} {elapsed:.dim}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn start(&self, prefix: &str, message: String) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_prefix(prefix.to_string());
        pb.set_message(message);
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Some(previous) = self.slot().replace(pb) {
            previous.finish_and_clear();
        }
    }

    fn finish(&self, message: String) {
        if let Some(pb) = self.slot().take() {
            pb.finish_with_message(message);
        }
    }

    fn slot(&self) -> MutexGuard<'_, Option<ProgressBar>> {
        self.spinner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Spinner message for a generation call
    fn submit_message(keywords: &Keywords, fresh: bool) -> String {
        if fresh {
            format!("Generating prompts for '{}'...", keywords)
        } else {
            format!("Regenerating '{}' with your answers...", keywords)
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressNotifier for ProgressReporter {
    fn on_submit_start(&self, keywords: &Keywords, fresh: bool) {
        self.start("Generate", Self::submit_message(keywords, fresh));
    }

    fn on_submit_complete(&self, phase: &Phase) {
        self.finish(ConsoleFormatter::format_phase(phase));
    }

    fn on_test_start(&self, _prompt: &Prompt, model: &Model) {
        self.start("Test", format!("Running prompt on {}...", model));
    }

    fn on_test_complete(&self, success: bool) {
        let status = if success {
            format!("{} Test complete", "v".green())
        } else {
            format!("{} Test failed", "x".red())
        };
        self.finish(status);
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl ProgressNotifier for SimpleProgress {
    fn on_submit_start(&self, keywords: &Keywords, fresh: bool) {
        println!(
            "{} {}",
            "->".cyan(),
            ProgressReporter::submit_message(keywords, fresh).bold()
        );
    }

    fn on_submit_complete(&self, phase: &Phase) {
        println!("  {}", ConsoleFormatter::format_phase(phase));
    }

    fn on_test_start(&self, _prompt: &Prompt, model: &Model) {
        println!("{} Testing on {}", "->".cyan(), model);
    }

    fn on_test_complete(&self, success: bool) {
        if success {
            println!("  {} done", "v".green());
        } else {
            println!("  {} failed", "x".red());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use refiner_domain::FailureKind;

    #[test]
    fn test_submit_message() {
        let keywords = Keywords::parse("디지털 마케팅").unwrap();
        assert!(ProgressReporter::submit_message(&keywords, true).starts_with("Generating"));
        assert!(ProgressReporter::submit_message(&keywords, false).starts_with("Regenerating"));
    }

    #[test]
    fn test_spinner_lifecycle() {
        let reporter = ProgressReporter::new();
        let keywords = Keywords::parse("x").unwrap();

        reporter.on_submit_start(&keywords, true);
        assert!(reporter.slot().is_some());
        reporter.on_submit_complete(&Phase::Failed(FailureKind::DegenerateResponse));
        assert!(reporter.slot().is_none());

        // Completing without a running spinner is a no-op
        reporter.on_test_complete(true);
        assert!(reporter.slot().is_none());
    }
}

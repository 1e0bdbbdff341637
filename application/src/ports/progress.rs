//! Progress notification port
//!
//! Defines the interface for reporting orchestrator activity.

use refiner_domain::{Keywords, Model, Phase, Prompt};

/// Callback for progress updates during generation and testing
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (spinner, plain text, etc.)
pub trait ProgressNotifier: Send + Sync {
    /// Called when a generation cycle starts (`fresh` for an initial submit)
    fn on_submit_start(&self, keywords: &Keywords, fresh: bool);

    /// Called when a generation cycle has settled in `phase`
    fn on_submit_complete(&self, phase: &Phase);

    /// Called when a prompt test starts
    fn on_test_start(&self, _prompt: &Prompt, _model: &Model) {}

    /// Called when a prompt test finishes
    fn on_test_complete(&self, _success: bool) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_submit_start(&self, _keywords: &Keywords, _fresh: bool) {}
    fn on_submit_complete(&self, _phase: &Phase) {}
}

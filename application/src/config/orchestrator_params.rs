//! Orchestrator parameters: timing and model defaults.
//!
//! [`OrchestratorParams`] groups the static parameters that control the
//! [`PromptOrchestrator`](crate::use_cases::orchestrator::PromptOrchestrator).
//! They are built by the binary from the loaded configuration.

use refiner_domain::Model;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Orchestrator control parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrchestratorParams {
    /// Lower bound between issuing a generation request and honoring its response.
    pub min_visible: Duration,
    /// Delay after a submission is released before a new one is accepted.
    pub cooldown: Duration,
    /// Model sent with generation requests.
    pub generation_model: Model,
    /// Model used by "test selected prompt".
    pub test_model: Model,
    /// Maximum "apply & regenerate" rounds in one refinement dialog.
    pub max_rounds: usize,
}

impl Default for OrchestratorParams {
    fn default() -> Self {
        Self {
            min_visible: Duration::from_millis(1000),
            cooldown: Duration::from_millis(300),
            generation_model: Model::default(),
            test_model: Model::default_test_model(),
            max_rounds: 5,
        }
    }
}

impl OrchestratorParams {
    // ==================== Builder Methods ====================

    pub fn with_min_visible(mut self, duration: Duration) -> Self {
        self.min_visible = duration;
        self
    }

    pub fn with_cooldown(mut self, duration: Duration) -> Self {
        self.cooldown = duration;
        self
    }

    pub fn with_generation_model(mut self, model: Model) -> Self {
        self.generation_model = model;
        self
    }

    pub fn with_test_model(mut self, model: Model) -> Self {
        self.test_model = model;
        self
    }

    pub fn with_max_rounds(mut self, max: usize) -> Self {
        self.max_rounds = max;
        self
    }
}

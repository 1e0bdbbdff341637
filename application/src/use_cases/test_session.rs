//! Prompt test session
//!
//! Runs a single prompt against a model through the gateway. Independent of
//! the submission guard: a test may run while the user keeps browsing, but
//! two tests may not run at the same time.

use super::error::OrchestratorError;
use crate::ports::progress::ProgressNotifier;
use crate::ports::prompt_gateway::PromptGateway;
use refiner_domain::{Model, Prompt};
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{info, warn};

/// In-flight tracking for prompt tests
#[derive(Debug, Default)]
pub struct TestSession {
    in_flight: AtomicBool,
}

/// Resets the in-flight flag when the test call ends, whichever way
struct InFlight<'a>(&'a AtomicBool);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl TestSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Run `prompt` against `model` and return the model's answer
    pub async fn run<G: PromptGateway + ?Sized>(
        &self,
        gateway: &G,
        prompt: &Prompt,
        model: &Model,
        progress: &dyn ProgressNotifier,
    ) -> Result<String, OrchestratorError> {
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(OrchestratorError::TestAlreadyInFlight);
        }
        let _in_flight = InFlight(&self.in_flight);

        info!("Testing prompt against {}", model);
        progress.on_test_start(prompt, model);

        match gateway.test_prompt(&prompt.text, model).await {
            Ok(result) => {
                progress.on_test_complete(true);
                Ok(result)
            }
            Err(e) => {
                warn!("Prompt test failed: {}", e);
                progress.on_test_complete(false);
                Err(OrchestratorError::ServiceUnavailable(e))
            }
        }
    }
}

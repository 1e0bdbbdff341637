//! Prompt orchestrator use case
//!
//! Drives the refinement dialog: an initial submit, zero or more
//! clarification rounds ("apply & regenerate"), then prompt selection and
//! testing. Each user action is processed to completion against a single
//! [`OrchestratorState`]; the state lock is never held across an await, so
//! selection and other reads stay available while a call is in flight.

use super::error::OrchestratorError;
use super::submission_guard::SubmissionGuard;
use super::test_session::TestSession;
use crate::config::OrchestratorParams;
use crate::ports::clarification_responder::ClarificationResponder;
use crate::ports::progress::{NoProgress, ProgressNotifier};
use crate::ports::prompt_gateway::PromptGateway;
use refiner_domain::{
    FailureKind, GenerationRequest, Model, OrchestratorState, Phase, Prompt,
};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::time::{Instant, sleep_until};
use tracing::{debug, error, info, warn};

/// Use case orchestrating prompt generation, clarification and testing
pub struct PromptOrchestrator<G: PromptGateway + 'static> {
    gateway: Arc<G>,
    params: OrchestratorParams,
    state: Mutex<OrchestratorState>,
    guard: SubmissionGuard,
    tests: TestSession,
    progress: Arc<dyn ProgressNotifier>,
}

impl<G: PromptGateway + 'static> PromptOrchestrator<G> {
    pub fn new(gateway: Arc<G>, params: OrchestratorParams) -> Self {
        Self {
            gateway,
            state: Mutex::new(OrchestratorState::new(params.generation_model.clone())),
            guard: SubmissionGuard::new(params.cooldown),
            tests: TestSession::new(),
            progress: Arc::new(NoProgress),
            params,
        }
    }

    /// Set the progress notifier
    pub fn with_progress(mut self, progress: Arc<dyn ProgressNotifier>) -> Self {
        self.progress = progress;
        self
    }

    // ==================== Accessors ====================

    /// Snapshot of the current state
    pub fn state(&self) -> OrchestratorState {
        self.lock_state().clone()
    }

    pub fn phase(&self) -> Phase {
        self.lock_state().phase()
    }

    pub fn params(&self) -> &OrchestratorParams {
        &self.params
    }

    pub fn submission_guard(&self) -> &SubmissionGuard {
        &self.guard
    }

    pub fn is_test_in_flight(&self) -> bool {
        self.tests.is_in_flight()
    }

    // ==================== User actions ====================

    /// Initial submit: start a new generation for `keywords`.
    ///
    /// Fails with `InvalidInput` for blank keywords (no request is sent) and
    /// with `SubmissionRejected` while another submission holds the guard.
    /// Service failures are not errors: they settle in `Phase::Failed`.
    pub async fn submit(&self, keywords: &str) -> Result<Phase, OrchestratorError> {
        let request = self.lock_state().initial_request(keywords)?;
        self.run_cycle(request, true).await
    }

    /// Re-submit the stored keywords together with the current answers.
    ///
    /// Completeness of the answers is not required here; front-ends decide
    /// whether to offer this action for a partially answered session.
    pub async fn apply_and_regenerate(&self) -> Result<Phase, OrchestratorError> {
        let request = self.lock_state().regenerate_request()?;
        self.run_cycle(request, false).await
    }

    /// Answer one clarification question
    pub fn set_answer(&self, id: &str, value: impl Into<String>) -> Result<(), OrchestratorError> {
        self.lock_state().set_answer(id, value)?;
        debug!("Answer recorded for question '{}'", id);
        Ok(())
    }

    /// Select a prompt of the current result set
    pub fn select_prompt(&self, prompt: &Prompt) -> Result<(), OrchestratorError> {
        self.lock_state().select_prompt(prompt)?;
        Ok(())
    }

    /// Change the model sent with generation requests
    pub fn select_model(&self, model: Model) {
        info!("Generation model set to {}", model);
        self.lock_state().select_model(model);
    }

    /// Test an arbitrary prompt against `model`
    pub async fn test_prompt(
        &self,
        prompt: &Prompt,
        model: &Model,
    ) -> Result<String, OrchestratorError> {
        let result = self
            .tests
            .run(self.gateway.as_ref(), prompt, model, self.progress.as_ref())
            .await?;
        self.lock_state().record_test_result(result.clone());
        Ok(result)
    }

    /// Test the selected prompt against the configured test model
    pub async fn test_selected(&self) -> Result<String, OrchestratorError> {
        let prompt = self
            .lock_state()
            .selected_prompt()
            .cloned()
            .ok_or(OrchestratorError::NoPromptSelected)?;
        let model = self.params.test_model.clone();
        self.test_prompt(&prompt, &model).await
    }

    /// Run the whole dialog for `keywords`, answering questions through
    /// `responder` until prompts arrive, the cycle fails, the responder
    /// leaves a question unanswered, or `max_rounds` regenerations are spent.
    pub async fn refine(
        &self,
        keywords: &str,
        responder: &dyn ClarificationResponder,
    ) -> Result<Phase, OrchestratorError> {
        let mut phase = self.submit(keywords).await?;
        let mut rounds = 0;

        while phase == Phase::ClarifyingAwaitingAnswers && rounds < self.params.max_rounds {
            let (feedback, pending) = {
                let state = self.lock_state();
                let pending: Vec<_> = state
                    .clarification()
                    .map(|s| s.unanswered().cloned().collect())
                    .unwrap_or_default();
                (state.feedback_message().map(str::to_string), pending)
            };

            responder.begin_round(feedback.as_deref(), &pending).await?;
            for question in &pending {
                match responder.answer(question).await? {
                    Some(answer) => self.set_answer(&question.id, answer)?,
                    None => {
                        info!("Question '{}' left unanswered, stopping", question.id);
                        return Ok(phase);
                    }
                }
            }

            if let Some(ready_at) = self.guard.ready_at() {
                sleep_until(ready_at).await;
            }
            phase = self.apply_and_regenerate().await?;
            rounds += 1;
        }

        Ok(phase)
    }

    // ==================== Cycle ====================

    async fn run_cycle(
        &self,
        request: GenerationRequest,
        fresh: bool,
    ) -> Result<Phase, OrchestratorError> {
        let permit = self.guard.try_acquire().ok_or_else(|| {
            debug!("Submission rejected: guard busy");
            OrchestratorError::SubmissionRejected
        })?;

        self.lock_state()
            .begin_submission(request.keywords.clone(), fresh);
        info!(
            "Submitting '{}' ({} answers, model {:?})",
            request.keywords,
            request.answers.len(),
            request.model.as_ref().map(Model::as_str)
        );
        self.progress.on_submit_start(&request.keywords, fresh);

        let started = Instant::now();
        let result = self.gateway.generate(&request).await;
        sleep_until(started + self.params.min_visible).await;

        let phase = {
            let mut state = self.lock_state();
            match result {
                Ok(response) => {
                    debug!("Generation response: {:?}", response);
                    match state.apply_outcome(response.classify()) {
                        Ok(phase) => phase,
                        Err(e) => {
                            error!("Service returned an unusable question set: {}", e);
                            state.fail(FailureKind::DegenerateResponse);
                            state.phase()
                        }
                    }
                }
                Err(e) => {
                    warn!("Generation failed: {}", e);
                    state.fail(FailureKind::ServiceUnavailable);
                    state.phase()
                }
            }
        };

        permit.release();
        info!("Submission settled in phase {}", phase);
        self.progress.on_submit_complete(&phase);
        Ok(phase)
    }

    fn lock_state(&self) -> MutexGuard<'_, OrchestratorState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

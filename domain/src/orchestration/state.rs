//! Orchestrator state value object
//!
//! All observable orchestrator state lives in one [`OrchestratorState`]
//! value, changed only through the transition methods below. Keeping the
//! transitions here lets the invariants be checked in one place:
//!
//! - a clarification round clears `prompts`, and a prompt result discards the
//!   clarification session, so the two are never freshly populated together
//! - `selected_prompt`, when set, is always an element of `prompts`
//! - `submission_in_flight` is true exactly while the phase is `Submitting`

use super::phase::{FailureKind, Phase};
use crate::clarification::defaults::{DEFAULT_FEEDBACK, default_questions};
use crate::clarification::session::ClarificationSession;
use crate::core::error::DomainError;
use crate::core::keywords::Keywords;
use crate::core::model::Model;
use crate::generation::request::GenerationRequest;
use crate::generation::response::ResponseOutcome;
use crate::prompt::entities::Prompt;
use serde::Serialize;

/// Externally observable orchestrator state
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrchestratorState {
    phase: Phase,
    keywords: Option<Keywords>,
    selected_model: Model,
    prompts: Vec<Prompt>,
    selected_prompt: Option<Prompt>,
    clarification: Option<ClarificationSession>,
    clarification_visible: bool,
    feedback_message: Option<String>,
    submission_in_flight: bool,
    test_result: Option<String>,
}

impl OrchestratorState {
    pub fn new(selected_model: Model) -> Self {
        Self {
            phase: Phase::Idle,
            keywords: None,
            selected_model,
            prompts: Vec::new(),
            selected_prompt: None,
            clarification: None,
            clarification_visible: false,
            feedback_message: None,
            submission_in_flight: false,
            test_result: None,
        }
    }

    // ==================== Accessors ====================

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn keywords(&self) -> Option<&Keywords> {
        self.keywords.as_ref()
    }

    pub fn selected_model(&self) -> &Model {
        &self.selected_model
    }

    pub fn prompts(&self) -> &[Prompt] {
        &self.prompts
    }

    pub fn selected_prompt(&self) -> Option<&Prompt> {
        self.selected_prompt.as_ref()
    }

    pub fn clarification(&self) -> Option<&ClarificationSession> {
        self.clarification.as_ref()
    }

    pub fn clarification_visible(&self) -> bool {
        self.clarification_visible
    }

    pub fn feedback_message(&self) -> Option<&str> {
        self.feedback_message.as_deref()
    }

    pub fn submission_in_flight(&self) -> bool {
        self.submission_in_flight
    }

    pub fn test_result(&self) -> Option<&str> {
        self.test_result.as_deref()
    }

    // ==================== Request building ====================

    /// Build the request for an initial submit of `raw_keywords`.
    ///
    /// An initial submit starts a new topic, so answers given for the
    /// previous keywords are not sent.
    pub fn initial_request(&self, raw_keywords: &str) -> Result<GenerationRequest, DomainError> {
        GenerationRequest::build(raw_keywords, Some(&self.selected_model), None)
    }

    /// Build the request for "apply & regenerate" from the stored keywords
    pub fn regenerate_request(&self) -> Result<GenerationRequest, DomainError> {
        let keywords = self.keywords.as_ref().map(Keywords::as_str).unwrap_or("");
        GenerationRequest::build(
            keywords,
            Some(&self.selected_model),
            self.clarification.as_ref(),
        )
    }

    // ==================== Transitions ====================

    /// Enter `Submitting`.
    ///
    /// A fresh (initial) submit drops the previous result set, selection,
    /// test result and clarification session before the cycle begins. The
    /// next clarification reply then starts a new session.
    pub fn begin_submission(&mut self, keywords: Keywords, fresh: bool) {
        if fresh {
            self.prompts.clear();
            self.selected_prompt = None;
            self.test_result = None;
            self.clarification = None;
            self.clarification_visible = false;
        }
        self.keywords = Some(keywords);
        self.feedback_message = None;
        self.phase = Phase::Submitting;
        self.submission_in_flight = true;
    }

    /// Apply a classified service response.
    ///
    /// On error (the service sent a question set with duplicate ids) the
    /// state is left untouched; the caller decides how to fail the cycle.
    pub fn apply_outcome(&mut self, outcome: ResponseOutcome) -> Result<Phase, DomainError> {
        match outcome {
            ResponseOutcome::NeedsClarification {
                feedback,
                questions,
            } => {
                match self.clarification.as_mut() {
                    Some(session) => session.merge(questions)?,
                    None => {
                        let questions = if questions.is_empty() {
                            default_questions()
                        } else {
                            questions
                        };
                        self.clarification = Some(ClarificationSession::start(questions)?);
                    }
                }
                self.feedback_message =
                    Some(feedback.unwrap_or_else(|| DEFAULT_FEEDBACK.to_string()));
                self.clarification_visible = true;
                self.prompts.clear();
                self.selected_prompt = None;
                self.finish(Phase::ClarifyingAwaitingAnswers);
            }
            ResponseOutcome::PromptsReady(prompts) => {
                self.prompts = prompts;
                self.selected_prompt = None;
                self.clarification = None;
                self.clarification_visible = false;
                self.feedback_message = None;
                self.finish(Phase::PromptsShown);
            }
            ResponseOutcome::Empty => self.fail(FailureKind::DegenerateResponse),
        }
        Ok(self.phase)
    }

    /// End the current cycle in a soft failure
    pub fn fail(&mut self, kind: FailureKind) {
        self.feedback_message = Some(kind.user_message().to_string());
        self.clarification_visible = false;
        self.finish(Phase::Failed(kind));
    }

    fn finish(&mut self, phase: Phase) {
        self.phase = phase;
        self.submission_in_flight = false;
    }

    /// Record a user answer; keeps the current phase
    pub fn set_answer(&mut self, id: &str, value: impl Into<String>) -> Result<(), DomainError> {
        match self.clarification.as_mut() {
            Some(session) => session.set_answer(id, value),
            None => Err(DomainError::UnknownQuestionId(id.to_string())),
        }
    }

    /// Select one prompt of the current result set; keeps the current phase
    pub fn select_prompt(&mut self, prompt: &Prompt) -> Result<(), DomainError> {
        let found = self
            .prompts
            .iter()
            .find(|p| p.same_entry(prompt))
            .ok_or_else(|| DomainError::UnknownPrompt(prompt.text.clone()))?;
        self.selected_prompt = Some(found.clone());
        Ok(())
    }

    pub fn select_model(&mut self, model: Model) {
        self.selected_model = model;
    }

    pub fn record_test_result(&mut self, result: String) {
        self.test_result = Some(result);
    }
}

impl Default for OrchestratorState {
    fn default() -> Self {
        Self::new(Model::default())
    }
}

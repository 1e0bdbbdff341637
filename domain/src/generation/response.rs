//! Generation response and its classification (Response Classifier)

use crate::clarification::question::ClarificationQuestion;
use crate::prompt::entities::Prompt;
use serde::{Deserialize, Serialize};

/// Raw response from the generation service
///
/// Every field is optional on the wire; [`classify`](Self::classify) turns the
/// combination into exactly one [`ResponseOutcome`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationResponse {
    #[serde(default)]
    pub need_more_info: Option<bool>,
    #[serde(default)]
    pub feedback: Option<String>,
    #[serde(default)]
    pub questions: Option<Vec<ClarificationQuestion>>,
    #[serde(default)]
    pub prompts: Option<Vec<Prompt>>,
}

/// The three mutually exclusive interpretations of a [`GenerationResponse`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseOutcome {
    /// The service wants more input before producing prompts
    NeedsClarification {
        feedback: Option<String>,
        /// Empty means "no revision of the current questions"
        questions: Vec<ClarificationQuestion>,
    },
    /// At least one prompt was produced
    PromptsReady(Vec<Prompt>),
    /// Neither clarification nor prompts: a degenerate reply
    Empty,
}

impl GenerationResponse {
    /// A response asking for clarification
    pub fn clarification(questions: Vec<ClarificationQuestion>) -> Self {
        Self {
            need_more_info: Some(true),
            questions: Some(questions),
            ..Default::default()
        }
    }

    /// A response carrying prompts
    pub fn with_prompts(prompts: Vec<Prompt>) -> Self {
        Self {
            prompts: Some(prompts),
            ..Default::default()
        }
    }

    pub fn with_feedback(mut self, feedback: impl Into<String>) -> Self {
        self.feedback = Some(feedback.into());
        self
    }

    /// Classify the response.
    ///
    /// `needMoreInfo: true` wins even when prompts are present as well, so a
    /// reply can never both show results and ask for more input.
    pub fn classify(self) -> ResponseOutcome {
        if self.need_more_info.unwrap_or(false) {
            return ResponseOutcome::NeedsClarification {
                feedback: self.feedback,
                questions: self.questions.unwrap_or_default(),
            };
        }
        match self.prompts {
            Some(prompts) if !prompts.is_empty() => ResponseOutcome::PromptsReady(prompts),
            _ => ResponseOutcome::Empty,
        }
    }
}

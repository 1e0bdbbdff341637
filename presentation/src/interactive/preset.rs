//! Clarification responder fed from `--answer ID=VALUE` flags

use async_trait::async_trait;
use refiner_application::{ClarificationResponder, ResponderError};
use refiner_domain::ClarificationQuestion;
use std::collections::HashMap;

/// Answers questions from a fixed id → answer map
///
/// Questions without a preset answer are left unanswered, which ends the
/// refinement dialog with the questions pending.
#[derive(Debug, Clone, Default)]
pub struct PresetResponder {
    answers: HashMap<String, String>,
}

impl PresetResponder {
    pub fn new(answers: impl IntoIterator<Item = (String, String)>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    /// Preset ids that match none of `questions`
    pub fn unused_ids<'a>(&'a self, questions: &[ClarificationQuestion]) -> Vec<&'a str> {
        let mut unused: Vec<&str> = self
            .answers
            .keys()
            .filter(|id| !questions.iter().any(|q| &q.id == *id))
            .map(String::as_str)
            .collect();
        unused.sort_unstable();
        unused
    }
}

#[async_trait]
impl ClarificationResponder for PresetResponder {
    async fn answer(
        &self,
        question: &ClarificationQuestion,
    ) -> Result<Option<String>, ResponderError> {
        Ok(self.answers.get(&question.id).cloned())
    }
}

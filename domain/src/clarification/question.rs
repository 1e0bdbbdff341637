//! Clarification question value object

use serde::{Deserialize, Serialize};

/// A follow-up question the generation service needs answered
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClarificationQuestion {
    /// Unique within a session; the merge key for revised question sets
    pub id: String,
    /// Question text shown to the user
    pub question: String,
    /// Current answer, empty until the user answers
    #[serde(default)]
    pub answer: String,
    /// Fixed choices, if the question is multiple-choice
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
}

impl ClarificationQuestion {
    /// Create a free-text question
    pub fn new(id: impl Into<String>, question: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            question: question.into(),
            answer: String::new(),
            options: None,
        }
    }

    /// Restrict answers to the given choices
    pub fn with_options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = Some(options.into_iter().map(Into::into).collect());
        self
    }

    pub fn is_answered(&self) -> bool {
        !self.answer.is_empty()
    }

    /// Whether `value` is acceptable for this question's options
    pub fn accepts(&self, value: &str) -> bool {
        match &self.options {
            Some(options) => options.iter().any(|o| o == value),
            None => true,
        }
    }
}

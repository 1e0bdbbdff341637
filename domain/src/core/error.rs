//! Domain error types

use thiserror::Error;

/// Domain-level errors
///
/// Every variant is a contract violation by the caller (or by the generation
/// service): the orchestrator is expected never to trigger them in normal
/// operation, so they are not shown to the end user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Duplicate clarification question id: {0}")]
    DuplicateQuestionId(String),

    #[error("Unknown clarification question id: {0}")]
    UnknownQuestionId(String),

    #[error("Prompt is not part of the current result set: {0}")]
    UnknownPrompt(String),
}

impl DomainError {
    /// Check if this error was raised by clarification session bookkeeping
    pub fn is_clarification_error(&self) -> bool {
        matches!(
            self,
            DomainError::DuplicateQuestionId(_) | DomainError::UnknownQuestionId(_)
        )
    }
}

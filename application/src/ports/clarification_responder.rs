//! Clarification responder port
//!
//! Defines how the refinement loop obtains answers to clarification
//! questions (from a terminal, from command-line flags, ...).

use async_trait::async_trait;
use refiner_domain::ClarificationQuestion;
use thiserror::Error;

/// Errors that can occur while collecting answers
#[derive(Error, Debug)]
pub enum ResponderError {
    #[error("Clarification aborted by user")]
    Aborted,

    #[error("I/O error: {0}")]
    IoError(String),
}

/// Source of answers for clarification questions
#[async_trait]
pub trait ClarificationResponder: Send + Sync {
    /// Called once per clarification round before any question is asked
    async fn begin_round(
        &self,
        _feedback: Option<&str>,
        _questions: &[ClarificationQuestion],
    ) -> Result<(), ResponderError> {
        Ok(())
    }

    /// Answer one question; `None` leaves it unanswered and ends the dialog
    async fn answer(
        &self,
        question: &ClarificationQuestion,
    ) -> Result<Option<String>, ResponderError>;
}

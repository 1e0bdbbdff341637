//! Orchestrator error type

use crate::ports::clarification_responder::ResponderError;
use crate::ports::prompt_gateway::GatewayError;
use refiner_domain::{DomainError, SERVICE_UNAVAILABLE_MESSAGE};
use thiserror::Error;

/// Errors returned by orchestrator operations
///
/// A failed *generation* cycle is not an error: it settles in
/// `Phase::Failed` and the user-facing message is kept in the state.
#[derive(Error, Debug)]
pub enum OrchestratorError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("A submission is already in progress")]
    SubmissionRejected,

    #[error("No prompt selected")]
    NoPromptSelected,

    #[error("A prompt test is already running")]
    TestAlreadyInFlight,

    #[error("Service unavailable: {0}")]
    ServiceUnavailable(#[from] GatewayError),

    #[error(transparent)]
    Responder(#[from] ResponderError),
}

impl OrchestratorError {
    /// Contract violations are defects, not states a user can recover from
    pub fn is_contract_violation(&self) -> bool {
        matches!(self, OrchestratorError::Domain(_))
    }

    /// Fixed message for errors that are surfaced to the end user
    pub fn user_message(&self) -> Option<&'static str> {
        match self {
            OrchestratorError::ServiceUnavailable(_) => Some(SERVICE_UNAVAILABLE_MESSAGE),
            _ => None,
        }
    }
}

//! Application layer for prompt-refiner
//!
//! This crate contains the orchestrator use case, the submission guard, the
//! prompt test session and the port definitions. It depends only on the
//! domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::OrchestratorParams;
pub use ports::{
    clarification_responder::{ClarificationResponder, ResponderError},
    progress::{NoProgress, ProgressNotifier},
    prompt_gateway::{GatewayError, PromptGateway},
};
pub use use_cases::{
    error::OrchestratorError,
    orchestrator::PromptOrchestrator,
    submission_guard::{SubmissionGuard, SubmissionPermit},
    test_session::TestSession,
};

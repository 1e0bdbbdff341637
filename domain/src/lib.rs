//! Domain layer for prompt-refiner
//!
//! This crate contains the data model and the pure logic of the prompt
//! refinement dialog. It has no dependencies on infrastructure or
//! presentation concerns and performs no I/O.
//!
//! # Core Concepts
//!
//! - **Request Builder**: [`GenerationRequest::build`] turns keywords, model
//!   and clarification answers into a service request
//! - **Response Classifier**: [`GenerationResponse::classify`] maps a reply to
//!   exactly one [`ResponseOutcome`]; clarification wins over prompts
//! - **Clarification Session**: [`ClarificationSession`] holds the ordered,
//!   id-keyed questions and their answers
//! - **Orchestrator State**: [`OrchestratorState`] is the single observable
//!   state value with explicit transitions between [`Phase`]s

pub mod clarification;
pub mod config;
pub mod core;
pub mod generation;
pub mod orchestration;
pub mod prompt;

// Re-export commonly used types
pub use clarification::{
    defaults::{DEFAULT_FEEDBACK, default_questions},
    question::ClarificationQuestion,
    session::ClarificationSession,
};
pub use config::{ConfigIssue, ConfigIssueCode, OutputFormat, Severity};
pub use core::{error::DomainError, keywords::Keywords, model::Model};
pub use generation::{
    request::GenerationRequest,
    response::{GenerationResponse, ResponseOutcome},
};
pub use orchestration::{
    phase::{DEGENERATE_RESPONSE_MESSAGE, FailureKind, Phase, SERVICE_UNAVAILABLE_MESSAGE},
    state::OrchestratorState,
};
pub use prompt::entities::Prompt;

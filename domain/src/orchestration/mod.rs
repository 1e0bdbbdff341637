//! Orchestrator state machine model
//!
//! - [`phase::Phase`]: the state machine's phases
//! - [`phase::FailureKind`]: soft failure reasons with fixed user messages
//! - [`state::OrchestratorState`]: the complete observable state and its transitions

pub mod phase;
pub mod state;

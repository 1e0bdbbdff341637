//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod error;
pub mod orchestrator;
pub mod submission_guard;
pub mod test_session;

//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure and presentation adapters
//! must implement.

pub mod clarification_responder;
pub mod progress;
pub mod prompt_gateway;

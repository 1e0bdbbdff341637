//! Application-level configuration.
//!
//! - [`OrchestratorParams`]: timing, model defaults and round limits

pub mod orchestrator_params;

pub use orchestrator_params::OrchestratorParams;

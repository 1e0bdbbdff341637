//! Prompt Gateway port
//!
//! Defines the interface for talking to the prompt generation service and
//! the prompt test endpoint.

use async_trait::async_trait;
use refiner_domain::{GenerationRequest, GenerationResponse, Model};
use thiserror::Error;

/// Errors that can occur during gateway operations
///
/// The orchestrator does not inspect these beyond presence: every variant
/// means the service is unavailable for this cycle.
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Timeout")]
    Timeout,

    #[error("Service returned status {code}: {message}")]
    Status { code: u16, message: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Gateway to the prompt generation service
///
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait PromptGateway: Send + Sync {
    /// Generate prompts (or clarification questions) for a request
    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationResponse, GatewayError>;

    /// Run a prompt against a model and return the model's answer
    async fn test_prompt(&self, prompt: &str, model: &Model) -> Result<String, GatewayError>;

    /// Check that the service is reachable
    async fn health_check(&self) -> Result<(), GatewayError> {
        Ok(())
    }
}

//! Wire types for the prompt test and health endpoints
//!
//! Generation requests and responses are domain types that already carry
//! their wire names.

use serde::{Deserialize, Serialize};

/// Body of `POST /prompt/test`
#[derive(Debug, Clone, Serialize)]
pub struct TestRequest<'a> {
    pub prompt: &'a str,
    pub model: &'a str,
}

/// Response of `POST /prompt/test`
#[derive(Debug, Clone, Deserialize)]
pub struct TestResponse {
    pub result: String,
}

/// Response of `GET /health`
#[derive(Debug, Clone, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

impl HealthResponse {
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}

/// Error body returned by the service on failures (`{"detail": "..."}`)
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    pub detail: serde_json::Value,
}

impl ErrorBody {
    /// Human-readable detail; non-string details are rendered as JSON
    pub fn message(&self) -> String {
        match &self.detail {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

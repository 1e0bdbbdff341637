//! Error types for the HTTP adapter

use refiner_application::GatewayError;
use thiserror::Error;

/// Result type alias for HTTP adapter operations
pub type Result<T> = std::result::Result<T, HttpError>;

/// Errors that can occur when talking to the generation service
#[derive(Error, Debug)]
pub enum HttpError {
    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),

    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(String),

    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("HTTP {code}: {message}")]
    Status { code: u16, message: String },

    #[error("Failed to parse response: {error}\nRaw response: {raw}")]
    ParseError { error: String, raw: String },

    #[error("Unexpected response: {0}")]
    UnexpectedResponse(String),
}

impl From<HttpError> for GatewayError {
    fn from(err: HttpError) -> Self {
        match err {
            HttpError::Request(e) if e.is_timeout() => GatewayError::Timeout,
            HttpError::Request(e) => GatewayError::Connection(e.to_string()),
            HttpError::Status { code, message } => GatewayError::Status { code, message },
            HttpError::ParseError { error, .. } => GatewayError::InvalidResponse(error),
            HttpError::UnexpectedResponse(msg) => GatewayError::InvalidResponse(msg),
            e @ (HttpError::InvalidBaseUrl(_) | HttpError::ClientBuild(_)) => {
                GatewayError::Connection(e.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_maps_to_gateway_status() {
        let err: GatewayError = HttpError::Status {
            code: 500,
            message: "boom".to_string(),
        }
        .into();
        assert!(matches!(err, GatewayError::Status { code: 500, .. }));
    }

    #[test]
    fn test_parse_error_maps_to_invalid_response() {
        let err: GatewayError = HttpError::ParseError {
            error: "expected value".to_string(),
            raw: "<html>".to_string(),
        }
        .into();
        assert!(matches!(err, GatewayError::InvalidResponse(msg) if msg == "expected value"));
    }
}

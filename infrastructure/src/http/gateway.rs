//! Prompt gateway backed by the generation service's HTTP API

use super::error::{HttpError, Result};
use super::parse_base_url;
use super::protocol::{ErrorBody, HealthResponse, TestRequest, TestResponse};
use async_trait::async_trait;
use refiner_application::{GatewayError, PromptGateway};
use refiner_domain::{GenerationRequest, GenerationResponse, Model};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, info, trace};

const USER_AGENT: &str = concat!("prompt-refiner/", env!("CARGO_PKG_VERSION"));

/// HTTP implementation of [`PromptGateway`]
#[derive(Debug, Clone)]
pub struct HttpPromptGateway {
    client: reqwest::Client,
    base_url: String,
}

impl HttpPromptGateway {
    /// Create a gateway for `base_url` with a per-request `timeout`
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let base_url = base_url.trim().trim_end_matches('/');
        if parse_base_url(base_url).is_none() {
            return Err(HttpError::InvalidBaseUrl(base_url.to_string()));
        }

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| HttpError::ClientBuild(e.to_string()))?;

        info!("Using generation service at {}", base_url);
        Ok(Self {
            client,
            base_url: base_url.to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn post_json<B, R>(&self, path: &str, body: &B) -> Result<R>
    where
        B: Serialize + ?Sized + Sync,
        R: DeserializeOwned,
    {
        let url = self.endpoint(path);
        debug!("POST {}", url);
        let response = self.client.post(&url).json(body).send().await?;
        Self::decode(response).await
    }

    async fn get_json<R: DeserializeOwned>(&self, path: &str) -> Result<R> {
        let url = self.endpoint(path);
        debug!("GET {}", url);
        let response = self.client.get(&url).send().await?;
        Self::decode(response).await
    }

    async fn decode<R: DeserializeOwned>(response: reqwest::Response) -> Result<R> {
        let status = response.status();
        let raw = response.text().await?;
        trace!("HTTP {} body: {}", status.as_u16(), raw);

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorBody>(&raw)
                .map(|body| body.message())
                .unwrap_or_else(|_| {
                    status
                        .canonical_reason()
                        .unwrap_or("Unknown")
                        .to_string()
                });
            return Err(HttpError::Status {
                code: status.as_u16(),
                message,
            });
        }

        serde_json::from_str(&raw).map_err(|e| HttpError::ParseError {
            error: e.to_string(),
            raw,
        })
    }
}

#[async_trait]
impl PromptGateway for HttpPromptGateway {
    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> std::result::Result<GenerationResponse, GatewayError> {
        Ok(self.post_json("/prompt/generate", request).await?)
    }

    async fn test_prompt(
        &self,
        prompt: &str,
        model: &Model,
    ) -> std::result::Result<String, GatewayError> {
        let body = TestRequest {
            prompt,
            model: model.as_str(),
        };
        let response: TestResponse = self.post_json("/prompt/test", &body).await?;
        Ok(response.result)
    }

    async fn health_check(&self) -> std::result::Result<(), GatewayError> {
        let health: HealthResponse = self.get_json("/health").await?;
        if health.is_healthy() {
            Ok(())
        } else {
            Err(HttpError::UnexpectedResponse(format!("service status '{}'", health.status)).into())
        }
    }
}

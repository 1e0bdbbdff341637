//! HTTP adapter for the prompt generation service
//!
//! Implements [`PromptGateway`](refiner_application::PromptGateway) over the
//! service's JSON API:
//!
//! | Method | Path | Body | Response |
//! |--------|------|------|----------|
//! | POST | `/prompt/generate` | `{keywords, model?, additionalInfo}` | `{needMoreInfo?, feedback?, questions?, prompts?}` |
//! | POST | `/prompt/test` | `{prompt, model}` | `{result}` |
//! | GET | `/health` | | `{status: "healthy"}` |

pub mod error;
pub mod gateway;
pub mod protocol;

pub use error::HttpError;
pub use gateway::HttpPromptGateway;

/// Parse a service base URL; only absolute http(s) URLs with a host qualify
pub fn parse_base_url(raw: &str) -> Option<reqwest::Url> {
    let url = reqwest::Url::parse(raw.trim()).ok()?;
    let has_host = url.host_str().is_some_and(|host| !host.is_empty());
    (matches!(url.scheme(), "http" | "https") && has_host).then_some(url)
}

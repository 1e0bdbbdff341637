//! Service endpoint configuration from TOML (`[service]` section)

use crate::http::parse_base_url;
use refiner_domain::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Raw service configuration from TOML
///
/// # Example
///
/// ```toml
/// [service]
/// base_url = "http://localhost:8000"
/// timeout_seconds = 60
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileServiceConfig {
    /// Base URL of the prompt generation service
    pub base_url: String,
    /// Per-request timeout in seconds
    pub timeout_seconds: u64,
}

impl Default for FileServiceConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            timeout_seconds: 60,
        }
    }
}

impl FileServiceConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    pub(super) fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if parse_base_url(&self.base_url).is_none() {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::InvalidBaseUrl {
                    value: self.base_url.clone(),
                },
                format!(
                    "service.base_url: '{}' is not an http(s) URL with a host",
                    self.base_url
                ),
            ));
        }

        if self.timeout_seconds == 0 {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::ZeroTimeout,
                "service.timeout_seconds: must be greater than zero",
            ));
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_https_url_is_valid() {
        let config = FileServiceConfig {
            base_url: "https://prompts.example.com".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_url_without_host_is_invalid() {
        let config = FileServiceConfig {
            base_url: "http://".to_string(),
            ..Default::default()
        };
        let issues = config.validate();
        assert_eq!(issues.len(), 1);
        assert!(matches!(
            issues[0].code,
            ConfigIssueCode::InvalidBaseUrl { .. }
        ));
    }

    #[test]
    fn test_timeout() {
        let config = FileServiceConfig::default();
        assert_eq!(config.timeout(), Duration::from_secs(60));
    }
}

//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod logging;
mod models;
mod output;
mod repl;
mod service;
mod timing;

pub use logging::FileLoggingConfig;
pub use models::FileModelsConfig;
pub use output::FileOutputConfig;
pub use repl::FileReplConfig;
pub use service::FileServiceConfig;
pub use timing::FileTimingConfig;

use refiner_application::OrchestratorParams;
use refiner_domain::ConfigIssue;
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Generation service endpoint
    pub service: FileServiceConfig,
    /// Generation and test model selection
    pub models: FileModelsConfig,
    /// Submission timing
    pub timing: FileTimingConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// REPL settings
    pub repl: FileReplConfig,
    /// Log file settings
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        issues.extend(self.service.validate());
        issues.extend(self.models.parse_generation().1);
        issues.extend(self.models.parse_test().1);
        issues.extend(self.timing.validate());

        issues
    }

    /// Build orchestrator parameters, falling back to defaults for unset
    /// or invalid model names.
    pub fn to_params(&self) -> OrchestratorParams {
        let mut params = OrchestratorParams::default()
            .with_min_visible(self.timing.min_visible())
            .with_cooldown(self.timing.cooldown())
            .with_max_rounds(self.repl.max_rounds);

        if let Some(model) = self.models.parse_generation().0 {
            params = params.with_generation_model(model);
        }
        if let Some(model) = self.models.parse_test().0 {
            params = params.with_test_model(model);
        }

        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use refiner_domain::{ConfigIssueCode, Model, OutputFormat};
    use std::time::Duration;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[service]
base_url = "http://prompts.internal:9000"
timeout_seconds = 30

[models]
generation = "o4-mini"
test = "gpt-4.1-nano"

[timing]
min_visible_ms = 500
cooldown_ms = 100

[output]
format = "prompts"
color = false

[repl]
show_progress = false
max_rounds = 3

[logging]
file = "/tmp/prompt-refiner.log"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.service.base_url, "http://prompts.internal:9000");
        assert_eq!(config.service.timeout_seconds, 30);
        assert_eq!(config.models.parse_generation().0, Some(Model::O4Mini));
        assert_eq!(config.models.parse_test().0, Some(Model::Gpt41Nano));
        assert_eq!(config.timing.min_visible_ms, 500);
        assert_eq!(config.output.format, Some(OutputFormat::Prompts));
        assert!(!config.output.color);
        assert!(!config.repl.show_progress);
        assert_eq!(config.repl.max_rounds, 3);
        assert_eq!(
            config.logging.file.as_deref(),
            Some("/tmp/prompt-refiner.log")
        );
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[models]
generation = "gemini-2.5-flash-preview-04-17"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(
            config.models.parse_generation().0,
            Some(Model::Gemini25FlashPreview)
        );
        // Defaults should apply
        assert!(config.models.test.is_none());
        assert_eq!(config.service.base_url, "http://localhost:8000");
        assert_eq!(config.timing.cooldown_ms, 300);
        assert!(config.output.color);
    }

    #[test]
    fn test_default_config() {
        let config = FileConfig::default();
        assert!(config.models.generation.is_none());
        assert!(config.output.format.is_none());
        assert!(config.repl.show_progress);
        assert!(config.logging.file.is_none());
    }

    #[test]
    fn test_validate_valid_config() {
        let config = FileConfig::default();
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_validate_collects_all_issues() {
        let toml_str = r#"
[service]
base_url = "localhost:8000"
timeout_seconds = 0

[models]
generation = "  "
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        let issues = config.validate();
        let codes: Vec<_> = issues.iter().map(|i| i.code.clone()).collect();

        assert!(codes.contains(&ConfigIssueCode::InvalidBaseUrl {
            value: "localhost:8000".to_string()
        }));
        assert!(codes.contains(&ConfigIssueCode::ZeroTimeout));
        assert!(codes.contains(&ConfigIssueCode::EmptyModelName {
            field: "generation".to_string()
        }));
        assert!(ConfigIssue::has_errors(&issues));
    }

    #[test]
    fn test_to_params() {
        let toml_str = r#"
[models]
test = "o4-mini"

[timing]
min_visible_ms = 0
cooldown_ms = 50

[repl]
max_rounds = 1
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        let params = config.to_params();

        assert_eq!(params.generation_model, Model::Gpt41);
        assert_eq!(params.test_model, Model::O4Mini);
        assert_eq!(params.min_visible, Duration::ZERO);
        assert_eq!(params.cooldown, Duration::from_millis(50));
        assert_eq!(params.max_rounds, 1);
    }

    #[test]
    fn test_to_params_ignores_empty_model_names() {
        let config: FileConfig = toml::from_str("[models]\ngeneration = \"\"").unwrap();
        assert_eq!(config.to_params().generation_model, Model::Gpt41);
    }
}

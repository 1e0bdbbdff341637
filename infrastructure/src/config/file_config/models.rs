//! Model configuration from TOML (`[models]` section)

use refiner_domain::{ConfigIssue, ConfigIssueCode, Model};
use serde::{Deserialize, Serialize};

/// Model selection from TOML
///
/// # Example
///
/// ```toml
/// [models]
/// generation = "gpt-4.1"        # Sent with generation requests
/// test = "gpt-3.5-turbo"        # Used by "test selected prompt"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileModelsConfig {
    /// Model sent with generation requests
    pub generation: Option<String>,
    /// Model used to test a selected prompt
    pub test: Option<String>,
}

impl FileModelsConfig {
    /// Parse a single model string, collecting issues for empty names.
    fn parse_single_model(
        field: &str,
        value: Option<&String>,
    ) -> (Option<Model>, Vec<ConfigIssue>) {
        match value {
            None => (None, Vec::new()),
            Some(s) if s.trim().is_empty() => (
                None,
                vec![ConfigIssue::error(
                    ConfigIssueCode::EmptyModelName {
                        field: field.to_string(),
                    },
                    format!("models.{}: model name cannot be empty", field),
                )],
            ),
            // Unknown names become Model::Custom
            Some(s) => (Some(Model::from(s.trim())), Vec::new()),
        }
    }

    /// Parse the generation model string into Model enum
    pub fn parse_generation(&self) -> (Option<Model>, Vec<ConfigIssue>) {
        Self::parse_single_model("generation", self.generation.as_ref())
    }

    /// Parse the test model string into Model enum
    pub fn parse_test(&self) -> (Option<Model>, Vec<ConfigIssue>) {
        Self::parse_single_model("test", self.test.as_ref())
    }
}

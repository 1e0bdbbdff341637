//! Output format value object

use serde::{Deserialize, Serialize};

/// How generation results are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Description and prompt text per entry (default)
    #[default]
    Full,
    /// Raw prompt text only, one per line
    Prompts,
    /// JSON snapshot of the orchestrator state
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_full() {
        assert_eq!(OutputFormat::default(), OutputFormat::Full);
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&OutputFormat::Prompts).unwrap();
        assert_eq!(json, "\"prompts\"");
        let format: OutputFormat = serde_json::from_str("\"json\"").unwrap();
        assert_eq!(format, OutputFormat::Json);
    }
}

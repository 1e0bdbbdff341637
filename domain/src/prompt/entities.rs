//! Prompt entity

use serde::{Deserialize, Serialize};

/// A finished, user-selectable prompt produced by the generation service
///
/// Prompts carry no persistent id; within a single result set they are
/// identified by their `text`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prompt {
    /// The prompt text itself (`prompt` on the wire)
    #[serde(rename = "prompt", alias = "text")]
    pub text: String,
    /// What the prompt is for
    #[serde(default)]
    pub description: String,
}

impl Prompt {
    pub fn new(text: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            description: description.into(),
        }
    }

    /// Whether this prompt is the same entry as `other` within one result set
    pub fn same_entry(&self, other: &Prompt) -> bool {
        self.text == other.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_wire_field_name() {
        let prompt: Prompt =
            serde_json::from_str(r#"{"prompt": "Explain Rust", "description": "basic"}"#).unwrap();
        assert_eq!(prompt.text, "Explain Rust");
        assert_eq!(prompt.description, "basic");
    }

    #[test]
    fn test_deserialize_text_alias_without_description() {
        let prompt: Prompt = serde_json::from_str(r#"{"text": "Explain Rust"}"#).unwrap();
        assert_eq!(prompt, Prompt::new("Explain Rust", ""));
    }

    #[test]
    fn test_same_entry_ignores_description() {
        let a = Prompt::new("same", "one");
        let b = Prompt::new("same", "two");
        assert!(a.same_entry(&b));
        assert!(!a.same_entry(&Prompt::new("other", "one")));
    }
}

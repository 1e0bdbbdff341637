//! Keywords value object

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Free-form user keywords describing the prompt to generate (Value Object)
///
/// Always trimmed and never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Keywords {
    content: String,
}

impl Keywords {
    /// Trim and validate raw user input
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidInput(
                "keywords must not be empty".to_string(),
            ));
        }
        Ok(Self {
            content: trimmed.to_string(),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.content
    }
}

impl std::fmt::Display for Keywords {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}

impl TryFrom<String> for Keywords {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Keywords::parse(&value)
    }
}

impl From<Keywords> for String {
    fn from(keywords: Keywords) -> Self {
        keywords.content
    }
}

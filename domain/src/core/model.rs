//! Model value object representing the target LLM

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Language models a prompt can be generated for or tested against (Value Object)
///
/// The generation service receives the model name as an opaque string, so any
/// unknown name is carried through as [`Model::Custom`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Model {
    // OpenAI models
    Gpt41,
    Gpt41Nano,
    O4Mini,
    Gpt35Turbo,
    // Gemini models
    Gemini25FlashPreview,
    // Custom
    Custom(String),
}

impl Model {
    /// Get the string identifier for this model
    pub fn as_str(&self) -> &str {
        match self {
            Model::Gpt41 => "gpt-4.1",
            Model::Gpt41Nano => "gpt-4.1-nano",
            Model::O4Mini => "o4-mini",
            Model::Gpt35Turbo => "gpt-3.5-turbo",
            Model::Gemini25FlashPreview => "gemini-2.5-flash-preview-04-17",
            Model::Custom(s) => s,
        }
    }

    /// Short human-readable description shown in model listings
    pub fn description(&self) -> &str {
        match self {
            Model::Gpt41 => "GPT-4.1 (Advanced Multimodal)",
            Model::Gpt41Nano => "GPT-4.1 Nano (Lightweight)",
            Model::O4Mini => "O4-Mini (Fast & Efficient)",
            Model::Gpt35Turbo => "GPT-3.5 Turbo",
            Model::Gemini25FlashPreview => "Gemini 2.5 Flash (Preview)",
            Model::Custom(_) => "Custom model",
        }
    }

    /// Models offered for prompt generation
    pub fn generation_models() -> Vec<Model> {
        vec![
            Model::Gpt41,
            Model::Gpt41Nano,
            Model::O4Mini,
            Model::Gemini25FlashPreview,
        ]
    }

    /// Default model used to test a generated prompt
    pub fn default_test_model() -> Model {
        Model::Gpt35Turbo
    }

    /// Check if this is a Gemini model
    pub fn is_gemini(&self) -> bool {
        matches!(self, Model::Gemini25FlashPreview)
    }
}

impl Default for Model {
    /// Returns the default generation model (GPT-4.1)
    fn default() -> Self {
        Model::Gpt41
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Model {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s {
            "gpt-4.1" => Model::Gpt41,
            "gpt-4.1-nano" => Model::Gpt41Nano,
            "o4-mini" => Model::O4Mini,
            "gpt-3.5-turbo" => Model::Gpt35Turbo,
            "gemini-2.5-flash-preview-04-17" => Model::Gemini25FlashPreview,
            other => Model::Custom(other.to_string()),
        })
    }
}

impl From<&str> for Model {
    fn from(s: &str) -> Self {
        match s.parse() {
            Ok(model) => model,
            Err(never) => match never {},
        }
    }
}

impl Serialize for Model {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Model {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Model::from(s.as_str()))
    }
}

//! Orchestrator phases and failure kinds

use serde::{Deserialize, Serialize};

/// Message shown when the service neither asks for clarification nor returns prompts
pub const DEGENERATE_RESPONSE_MESSAGE: &str =
    "프롬프트를 생성할 수 없습니다. 다른 키워드를 시도해보세요.";

/// Message shown when the service cannot be reached or fails
pub const SERVICE_UNAVAILABLE_MESSAGE: &str =
    "서버 오류가 발생했습니다. 잠시 후 다시 시도해주세요.";

/// Why a generation cycle ended in [`Phase::Failed`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// Transport or service failure
    ServiceUnavailable,
    /// The service returned neither questions nor prompts
    DegenerateResponse,
}

impl FailureKind {
    /// Fixed, human-readable message for the end user
    pub fn user_message(&self) -> &'static str {
        match self {
            FailureKind::ServiceUnavailable => SERVICE_UNAVAILABLE_MESSAGE,
            FailureKind::DegenerateResponse => DEGENERATE_RESPONSE_MESSAGE,
        }
    }
}

/// State machine phase of the orchestrator
///
/// ```text
/// Idle -> Submitting -> { ClarifyingAwaitingAnswers | PromptsShown | Failed } -> Submitting ...
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    #[default]
    Idle,
    Submitting,
    ClarifyingAwaitingAnswers,
    PromptsShown,
    Failed(FailureKind),
}

impl Phase {
    pub fn as_str(&self) -> &str {
        match self {
            Phase::Idle => "idle",
            Phase::Submitting => "submitting",
            Phase::ClarifyingAwaitingAnswers => "clarifying",
            Phase::PromptsShown => "prompts_shown",
            Phase::Failed(_) => "failed",
        }
    }

    /// Phases a submission cycle can end in
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            Phase::ClarifyingAwaitingAnswers | Phase::PromptsShown | Phase::Failed(_)
        )
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Phase::Failed(_))
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_messages_are_distinct() {
        assert_ne!(
            FailureKind::ServiceUnavailable.user_message(),
            FailureKind::DegenerateResponse.user_message()
        );
    }

    #[test]
    fn test_terminal_phases() {
        assert!(!Phase::Idle.is_terminal());
        assert!(!Phase::Submitting.is_terminal());
        assert!(Phase::PromptsShown.is_terminal());
        assert!(Phase::Failed(FailureKind::DegenerateResponse).is_terminal());
        assert!(Phase::Failed(FailureKind::ServiceUnavailable).is_failed());
    }

    #[test]
    fn test_serialize_snake_case() {
        let json = serde_json::to_string(&Phase::ClarifyingAwaitingAnswers).unwrap();
        assert_eq!(json, "\"clarifying_awaiting_answers\"");
        let json = serde_json::to_string(&Phase::Failed(FailureKind::ServiceUnavailable)).unwrap();
        assert_eq!(json, r#"{"failed":"service_unavailable"}"#);
    }
}

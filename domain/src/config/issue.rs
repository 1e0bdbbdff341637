//! Configuration issues reported by config validation.

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the configuration cannot work at all.
    Error,
    /// Non-fatal: the configuration works but may not behave as expected.
    Warning,
}

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigIssueCode {
    /// A model name field is set to an empty string.
    EmptyModelName { field: String },
    /// The service base URL is not an http(s) URL.
    InvalidBaseUrl { value: String },
    /// A zero request timeout would fail every call.
    ZeroTimeout,
    /// The post-release cooldown is longer than the minimum visible duration.
    CooldownExceedsMinVisible,
}

/// A detected issue in the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    pub message: String,
}

impl ConfigIssue {
    pub fn error(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            code,
            message: message.into(),
        }
    }

    pub fn warning(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            code,
            message: message.into(),
        }
    }

    /// Check whether any issue is fatal.
    pub fn has_errors(issues: &[ConfigIssue]) -> bool {
        issues.iter().any(|i| i.severity == Severity::Error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_errors() {
        let warning = ConfigIssue::warning(ConfigIssueCode::CooldownExceedsMinVisible, "w");
        let error = ConfigIssue::error(ConfigIssueCode::ZeroTimeout, "e");
        assert!(!ConfigIssue::has_errors(&[warning.clone()]));
        assert!(ConfigIssue::has_errors(&[warning, error]));
        assert!(!ConfigIssue::has_errors(&[]));
    }
}

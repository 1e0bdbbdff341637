//! Submission timing configuration from TOML (`[timing]` section)

use refiner_domain::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Raw timing configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileTimingConfig {
    /// Minimum time between issuing a generation request and showing its result
    pub min_visible_ms: u64,
    /// Delay after a submission completes before another is accepted
    pub cooldown_ms: u64,
}

impl Default for FileTimingConfig {
    fn default() -> Self {
        Self {
            min_visible_ms: 1000,
            cooldown_ms: 300,
        }
    }
}

impl FileTimingConfig {
    pub fn min_visible(&self) -> Duration {
        Duration::from_millis(self.min_visible_ms)
    }

    pub fn cooldown(&self) -> Duration {
        Duration::from_millis(self.cooldown_ms)
    }

    pub(super) fn validate(&self) -> Vec<ConfigIssue> {
        if self.cooldown_ms > self.min_visible_ms {
            vec![ConfigIssue::warning(
                ConfigIssueCode::CooldownExceedsMinVisible,
                format!(
                    "timing.cooldown_ms ({}) exceeds timing.min_visible_ms ({})",
                    self.cooldown_ms, self.min_visible_ms
                ),
            )]
        } else {
            Vec::new()
        }
    }
}

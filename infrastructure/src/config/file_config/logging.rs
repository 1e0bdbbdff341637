//! Log file configuration from TOML (`[logging]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw logging configuration from TOML
///
/// Console logging is controlled by `-v`/`RUST_LOG`; this section only adds
/// an optional file sink.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// Write logs to this file in addition to stderr
    pub file: Option<String>,
}

impl FileLoggingConfig {
    /// Log file path with a leading `~/` expanded to the home directory
    pub fn file_path(&self) -> Option<PathBuf> {
        let file = self.file.as_deref()?.trim();
        if file.is_empty() {
            return None;
        }
        match file.strip_prefix("~/") {
            Some(rest) => dirs::home_dir().map(|home| home.join(rest)),
            None => Some(PathBuf::from(file)),
        }
    }
}

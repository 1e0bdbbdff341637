//! Presentation-level configuration
//!
//! Resolved output settings, after CLI flags have been applied over the
//! configuration file.

use refiner_domain::OutputFormat;

/// Output configuration for the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputConfig {
    /// How results are rendered
    pub format: OutputFormat,
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Full,
            color: true,
        }
    }
}

impl OutputConfig {
    /// Resolve the output format: CLI flag, then config file, then default
    pub fn resolve(cli: Option<OutputFormat>, file: Option<OutputFormat>, color: bool) -> Self {
        Self {
            format: cli.or(file).unwrap_or_default(),
            color,
        }
    }

    /// Apply the color setting process-wide
    pub fn apply_color(&self) {
        if !self.color {
            colored::control::set_override(false);
        }
    }
}

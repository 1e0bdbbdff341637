//! Presentation layer for prompt-refiner
//!
//! This crate contains CLI definitions, output formatters,
//! progress reporters, and the interactive refinement loop.

pub mod cli;
pub mod config;
pub mod interactive;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::{Cli, OutputFormat};
pub use config::OutputConfig;
pub use interactive::{InteractiveResponder, PresetResponder, RefineRepl, ReplCommand};
pub use output::console::ConsoleFormatter;
pub use progress::reporter::{ProgressReporter, SimpleProgress};

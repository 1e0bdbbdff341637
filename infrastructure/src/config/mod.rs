//! Configuration file loading for prompt-refiner
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `--config <path>` specified file
//! 2. Environment: `PROMPT_REFINER_*` (`__` separates nested keys)
//! 3. Project root: `./prompt-refiner.toml` or `./.prompt-refiner.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/prompt-refiner/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    FileConfig, FileLoggingConfig, FileModelsConfig, FileOutputConfig, FileReplConfig,
    FileServiceConfig, FileTimingConfig,
};
pub use loader::ConfigLoader;

//! Infrastructure layer for prompt-refiner
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod http;

// Re-export commonly used types
pub use config::{
    ConfigLoader, FileConfig, FileLoggingConfig, FileModelsConfig, FileOutputConfig,
    FileReplConfig, FileServiceConfig, FileTimingConfig,
};
pub use http::{HttpError, HttpPromptGateway};

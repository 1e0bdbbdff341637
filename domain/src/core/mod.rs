//! Core domain concepts shared across all subdomains.
//!
//! - [`model::Model`]: target language models (GPT-4.1, Gemini, etc.)
//! - [`keywords::Keywords`]: validated user keywords
//! - [`error::DomainError`]: domain-level errors

pub mod error;
pub mod keywords;
pub mod model;

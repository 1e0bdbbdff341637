//! Generated prompts

pub mod entities;

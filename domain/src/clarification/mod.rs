//! Clarification dialog
//!
//! - [`question::ClarificationQuestion`]: one question with its current answer
//! - [`session::ClarificationSession`]: the ordered, id-keyed question set
//! - [`defaults`]: the built-in question set and feedback text

pub mod defaults;
pub mod question;
pub mod session;

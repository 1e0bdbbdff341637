//! Interactive refinement: terminal and preset clarification responders and
//! the refinement REPL.

pub mod preset;
pub mod repl;
pub mod responder;

pub use preset::PresetResponder;
pub use repl::{RefineRepl, ReplCommand};
pub use responder::InteractiveResponder;

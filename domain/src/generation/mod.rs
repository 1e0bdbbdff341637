//! Generation service request/response model
//!
//! - [`request::GenerationRequest`]: built from keywords, model and answers
//! - [`response::GenerationResponse`]: raw service reply
//! - [`response::ResponseOutcome`]: the classified reply

pub mod request;
pub mod response;

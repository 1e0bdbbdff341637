//! Generation request (Request Builder)

use crate::clarification::session::ClarificationSession;
use crate::core::error::DomainError;
use crate::core::keywords::Keywords;
use crate::core::model::Model;
use serde::Serialize;
use std::collections::BTreeMap;

/// Request sent to the generation service
///
/// Serializes to the service's wire shape:
/// `{"keywords": ..., "model"?: ..., "additionalInfo": {id: answer}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationRequest {
    pub keywords: Keywords,
    /// `None` lets the service pick its default model
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<Model>,
    /// Answered clarification questions; unanswered ids are absent
    #[serde(rename = "additionalInfo")]
    pub answers: BTreeMap<String, String>,
}

impl GenerationRequest {
    /// Assemble a request from the current keywords, model and clarification answers.
    ///
    /// Fails with [`DomainError::InvalidInput`] when the trimmed keywords are
    /// empty; the service must not be called in that case.
    pub fn build(
        keywords: &str,
        model: Option<&Model>,
        clarification: Option<&ClarificationSession>,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            keywords: Keywords::parse(keywords)?,
            model: model.cloned(),
            answers: clarification
                .map(ClarificationSession::to_answer_map)
                .unwrap_or_default(),
        })
    }
}

//! Clarification session: the ordered set of pending questions and answers

use super::question::ClarificationQuestion;
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// Ordered clarification questions, keyed by id
///
/// Invariant: no two questions share an id. Every mutation goes through
/// [`start`](Self::start), [`merge`](Self::merge) or
/// [`set_answer`](Self::set_answer), all of which preserve it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClarificationSession {
    questions: Vec<ClarificationQuestion>,
}

impl ClarificationSession {
    /// Start a new session from a question set
    pub fn start(questions: Vec<ClarificationQuestion>) -> Result<Self, DomainError> {
        ensure_unique_ids(&questions)?;
        Ok(Self { questions })
    }

    /// Adopt a revised question set from the service.
    ///
    /// The service is authoritative: a non-empty update replaces the session
    /// verbatim. An empty update means "no revision" and leaves the session
    /// untouched. On error the session is left untouched as well.
    pub fn merge(&mut self, updated: Vec<ClarificationQuestion>) -> Result<(), DomainError> {
        if updated.is_empty() {
            return Ok(());
        }
        ensure_unique_ids(&updated)?;
        self.questions = updated;
        Ok(())
    }

    /// Set the answer for one question, leaving ordering untouched
    pub fn set_answer(&mut self, id: &str, value: impl Into<String>) -> Result<(), DomainError> {
        let question = self
            .questions
            .iter_mut()
            .find(|q| q.id == id)
            .ok_or_else(|| DomainError::UnknownQuestionId(id.to_string()))?;
        question.answer = value.into();
        Ok(())
    }

    /// True iff every question has a non-empty answer
    pub fn is_complete(&self) -> bool {
        self.questions.iter().all(ClarificationQuestion::is_answered)
    }

    /// Project answered questions into the `id -> answer` map sent to the service
    pub fn to_answer_map(&self) -> BTreeMap<String, String> {
        self.questions
            .iter()
            .filter(|q| q.is_answered())
            .map(|q| (q.id.clone(), q.answer.clone()))
            .collect()
    }

    pub fn questions(&self) -> &[ClarificationQuestion] {
        &self.questions
    }

    pub fn get(&self, id: &str) -> Option<&ClarificationQuestion> {
        self.questions.iter().find(|q| q.id == id)
    }

    pub fn unanswered(&self) -> impl Iterator<Item = &ClarificationQuestion> {
        self.questions.iter().filter(|q| !q.is_answered())
    }

    /// Ids of answered multiple-choice questions whose answer is not one of the options
    pub fn invalid_answers(&self) -> Vec<&str> {
        self.questions
            .iter()
            .filter(|q| q.is_answered() && !q.accepts(&q.answer))
            .map(|q| q.id.as_str())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

fn ensure_unique_ids(questions: &[ClarificationQuestion]) -> Result<(), DomainError> {
    let mut seen = HashSet::new();
    for q in questions {
        if !seen.insert(q.id.as_str()) {
            return Err(DomainError::DuplicateQuestionId(q.id.clone()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(id: &str) -> ClarificationQuestion {
        ClarificationQuestion::new(id, format!("{id}?"))
    }

    fn session(ids: &[&str]) -> ClarificationSession {
        ClarificationSession::start(ids.iter().map(|id| question(id)).collect()).unwrap()
    }

    #[test]
    fn test_start_rejects_duplicate_ids() {
        let result = ClarificationSession::start(vec![question("a"), question("b"), question("a")]);
        assert_eq!(result, Err(DomainError::DuplicateQuestionId("a".to_string())));
    }

    #[test]
    fn test_merge_replaces_verbatim() {
        let mut s = session(&["target", "tone"]);
        s.set_answer("target", "학생").unwrap();

        s.merge(vec![question("tone"), question("length")]).unwrap();

        let ids: Vec<_> = s.questions().iter().map(|q| q.id.as_str()).collect();
        assert_eq!(ids, vec!["tone", "length"]);
        // The server's list is adopted as-is, prior answers are not carried over
        assert!(s.get("target").is_none());
        assert!(!s.get("tone").unwrap().is_answered());
    }

    #[test]
    fn test_merge_without_update_keeps_session() {
        let mut s = session(&["target"]);
        s.set_answer("target", "학생").unwrap();
        let before = s.clone();

        s.merge(Vec::new()).unwrap();

        assert_eq!(s, before);
    }

    #[test]
    fn test_merge_duplicate_ids_leaves_session_untouched() {
        let mut s = session(&["target"]);
        let before = s.clone();

        let result = s.merge(vec![question("x"), question("x")]);

        assert_eq!(result, Err(DomainError::DuplicateQuestionId("x".to_string())));
        assert_eq!(s, before);
    }

    #[test]
    fn test_set_answer_unknown_id() {
        let mut s = session(&["target"]);
        assert_eq!(
            s.set_answer("nope", "x"),
            Err(DomainError::UnknownQuestionId("nope".to_string()))
        );
    }

    #[test]
    fn test_set_answer_keeps_order_and_is_idempotent() {
        let mut once = session(&["a", "b", "c"]);
        once.set_answer("b", "value").unwrap();

        let mut twice = session(&["a", "b", "c"]);
        twice.set_answer("b", "value").unwrap();
        twice.set_answer("b", "value").unwrap();

        assert_eq!(once, twice);
        let ids: Vec<_> = once.questions().iter().map(|q| q.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_is_complete() {
        let mut s = session(&["a", "b"]);
        assert!(!s.is_complete());
        s.set_answer("a", "1").unwrap();
        assert!(!s.is_complete());
        s.set_answer("b", "2").unwrap();
        assert!(s.is_complete());

        // Adding an unanswered question always breaks completeness
        let mut questions = s.questions().to_vec();
        questions.push(question("c"));
        let extended = ClarificationSession::start(questions).unwrap();
        assert!(!extended.is_complete());

        // Clearing an answer does too
        s.set_answer("b", "").unwrap();
        assert!(!s.is_complete());
    }

    #[test]
    fn test_answer_map_skips_unanswered() {
        let mut s = session(&["target", "tone", "goal"]);
        s.set_answer("target", "학생").unwrap();
        s.set_answer("goal", "정보 제공").unwrap();

        let map = s.to_answer_map();

        assert_eq!(map.len(), 2);
        assert_eq!(map.get("target").map(String::as_str), Some("학생"));
        assert!(!map.contains_key("tone"));
    }

    #[test]
    fn test_invalid_answers() {
        let mut s = ClarificationSession::start(vec![
            question("free"),
            question("choice").with_options(["x", "y"]),
        ])
        .unwrap();
        s.set_answer("free", "whatever").unwrap();
        s.set_answer("choice", "z").unwrap();
        assert_eq!(s.invalid_answers(), vec!["choice"]);

        s.set_answer("choice", "y").unwrap();
        assert!(s.invalid_answers().is_empty());
        assert_eq!(s.unanswered().count(), 0);
    }
}

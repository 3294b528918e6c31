//! Static question bank keyed by `QuizId`.
//!
//! The bank ships embedded in the binary (`data/quiz_bank.json`) and can also be
//! read from an external JSON file with the same shape:
//! `{ "<quiz id>": { "title": .., "questions": [{ "question", "options", "correct", "explanation" }] } }`.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::Deserialize;
use thiserror::Error;

use crate::model::{IdError, QuestionDraft, QuestionError, QuestionSet, QuizId};

const EMBEDDED_QUIZ_BANK: &str = include_str!("../data/quiz_bank.json");

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizBankError {
    #[error("quiz bank is not valid JSON: {0}")]
    Parse(String),

    #[error("invalid quiz id {raw:?}: {source}")]
    InvalidId { raw: String, source: IdError },

    #[error("quiz {quiz}: {source}")]
    InvalidSet { quiz: QuizId, source: QuestionError },

    #[error("quiz {quiz}, question {index}: {source}")]
    InvalidQuestion {
        quiz: QuizId,
        index: usize,
        source: QuestionError,
    },
}

#[derive(Debug, Deserialize)]
struct QuestionSetDraft {
    title: String,
    #[serde(default)]
    questions: Vec<QuestionDraft>,
}

/// Immutable mapping from quiz id to question set. Lookups never fail hard:
/// unknown or malformed ids simply resolve to `None`.
#[derive(Debug, Clone, Default)]
pub struct QuizBank {
    sets: BTreeMap<QuizId, Arc<QuestionSet>>,
}

impl QuizBank {
    /// Load the bank compiled into the crate.
    ///
    /// # Errors
    ///
    /// Returns `QuizBankError` if the embedded content fails validation.
    pub fn embedded() -> Result<Self, QuizBankError> {
        Self::from_json(EMBEDDED_QUIZ_BANK)
    }

    /// Parse and validate a bank from JSON text.
    ///
    /// # Errors
    ///
    /// Returns `QuizBankError` for malformed JSON, invalid ids, or any question
    /// that fails validation.
    pub fn from_json(raw: &str) -> Result<Self, QuizBankError> {
        let drafts: BTreeMap<String, QuestionSetDraft> =
            serde_json::from_str(raw).map_err(|err| QuizBankError::Parse(err.to_string()))?;

        let mut sets = BTreeMap::new();
        for (raw_id, draft) in drafts {
            let quiz = QuizId::new(raw_id.as_str()).map_err(|source| QuizBankError::InvalidId {
                raw: raw_id.clone(),
                source,
            })?;
            let questions = draft
                .questions
                .into_iter()
                .enumerate()
                .map(|(index, question)| {
                    question
                        .validate()
                        .map_err(|source| QuizBankError::InvalidQuestion {
                            quiz: quiz.clone(),
                            index,
                            source,
                        })
                })
                .collect::<Result<Vec<_>, _>>()?;
            let set = QuestionSet::new(quiz.clone(), draft.title, questions).map_err(|source| {
                QuizBankError::InvalidSet {
                    quiz: quiz.clone(),
                    source,
                }
            })?;
            sets.insert(quiz, Arc::new(set));
        }

        Ok(Self { sets })
    }

    #[must_use]
    pub fn get(&self, id: &QuizId) -> Option<Arc<QuestionSet>> {
        self.sets.get(id).map(Arc::clone)
    }

    /// Look up a raw identifier as it arrives from the rendering surface.
    #[must_use]
    pub fn lookup(&self, raw: &str) -> Option<Arc<QuestionSet>> {
        let id = QuizId::new(raw).ok()?;
        self.get(&id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &QuizId> {
        self.sets.keys()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_bank_has_the_sparse_quiz_ids() {
        let bank = QuizBank::embedded().unwrap();
        let ids: Vec<&str> = bank.ids().map(QuizId::as_str).collect();
        assert_eq!(
            ids,
            ["1.1", "1.3", "3.1", "3.3", "4.1", "5.1", "5.3", "6.1", "6.2"]
        );
    }

    #[test]
    fn markovnikov_set_has_expected_answers() {
        let bank = QuizBank::embedded().unwrap();
        let set = bank.lookup("1.3").unwrap();
        assert_eq!(set.title(), "Test: Regla de Markovnikov");
        let corrects: Vec<usize> = set.questions().iter().map(|q| q.correct_option()).collect();
        assert_eq!(corrects, [2, 1]);
    }

    #[test]
    fn unknown_or_malformed_ids_resolve_to_none() {
        let bank = QuizBank::embedded().unwrap();
        assert!(bank.lookup("9.9").is_none());
        assert!(bank.lookup("2.1").is_none());
        assert!(bank.lookup("not-a-quiz").is_none());
        assert!(bank.lookup("").is_none());
    }

    #[test]
    fn from_json_reports_bad_questions_with_location() {
        let raw = r#"{
            "2.1": { "title": "T", "questions": [
                { "question": "ok", "options": ["a", "b"], "correct": 0 },
                { "question": "bad", "options": ["a", "b"], "correct": 5 }
            ] }
        }"#;
        let err = QuizBank::from_json(raw).unwrap_err();
        assert_eq!(
            err,
            QuizBankError::InvalidQuestion {
                quiz: QuizId::new("2.1").unwrap(),
                index: 1,
                source: QuestionError::CorrectOutOfBounds { correct: 5, len: 2 },
            }
        );
    }

    #[test]
    fn from_json_rejects_bad_ids_and_syntax() {
        let err = QuizBank::from_json(r#"{ "intro": { "title": "T" } }"#).unwrap_err();
        assert!(matches!(err, QuizBankError::InvalidId { .. }));

        let err = QuizBank::from_json("{ nope").unwrap_err();
        assert!(matches!(err, QuizBankError::Parse(_)));
    }

    #[test]
    fn set_without_questions_is_allowed() {
        let bank = QuizBank::from_json(r#"{ "2.2": { "title": "Vacío" } }"#).unwrap();
        let set = bank.lookup("2.2").unwrap();
        assert!(set.is_empty());
    }
}

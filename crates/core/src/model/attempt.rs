use std::collections::BTreeMap;
use std::sync::Arc;

use thiserror::Error;

use crate::model::{QuestionSet, percent};

/// Minimum share of correct answers (in percent) that counts as a pass.
pub const PASS_THRESHOLD_PERCENT: usize = 70;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AttemptError {
    #[error("question {index} is out of bounds ({len} questions)")]
    QuestionOutOfBounds { index: usize, len: usize },

    #[error("option {option} is out of bounds for question {question} ({len} options)")]
    OptionOutOfBounds {
        question: usize,
        option: usize,
        len: usize,
    },
}

/// One in-progress set of answers to a question set. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizAttempt {
    question_set: Arc<QuestionSet>,
    selections: BTreeMap<usize, usize>,
}

impl QuizAttempt {
    /// Begin an attempt with no answers recorded.
    #[must_use]
    pub fn begin(question_set: Arc<QuestionSet>) -> Self {
        Self {
            question_set,
            selections: BTreeMap::new(),
        }
    }

    /// Start over on the same question set, discarding every selection.
    #[must_use]
    pub fn restart(&self) -> Self {
        Self::begin(Arc::clone(&self.question_set))
    }

    #[must_use]
    pub fn question_set(&self) -> &QuestionSet {
        &self.question_set
    }

    #[must_use]
    pub fn selection(&self, question: usize) -> Option<usize> {
        self.selections.get(&question).copied()
    }

    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.selections.len()
    }

    /// Record the chosen option for a question, replacing any earlier choice.
    ///
    /// # Errors
    ///
    /// Returns `AttemptError` if either index is out of bounds; the attempt is
    /// left unchanged.
    pub fn record_selection(&mut self, question: usize, option: usize) -> Result<(), AttemptError> {
        let questions = self.question_set.questions();
        let Some(target) = questions.get(question) else {
            return Err(AttemptError::QuestionOutOfBounds {
                index: question,
                len: questions.len(),
            });
        };
        if option >= target.options().len() {
            return Err(AttemptError::OptionOutOfBounds {
                question,
                option,
                len: target.options().len(),
            });
        }
        self.selections.insert(question, option);
        Ok(())
    }

    /// Score the attempt. Unanswered questions count as incorrect.
    #[must_use]
    pub fn grade(&self) -> GradeResult {
        let per_question = self
            .question_set
            .questions()
            .iter()
            .enumerate()
            .map(|(index, question)| {
                let selected = self.selection(index);
                QuestionGrade {
                    selected,
                    answered: selected.is_some(),
                    correct: selected.is_some_and(|option| question.is_correct(option)),
                }
            })
            .collect::<Vec<_>>();
        let scored = per_question.iter().filter(|grade| grade.correct).count();

        GradeResult {
            scored,
            total: per_question.len(),
            per_question,
        }
    }
}

/// Outcome for a single question of a graded attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuestionGrade {
    pub selected: Option<usize>,
    pub answered: bool,
    pub correct: bool,
}

/// Message band shown above a graded quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradeVerdict {
    Perfect,
    WellDone,
    KeepPracticing,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradeResult {
    pub scored: usize,
    pub total: usize,
    pub per_question: Vec<QuestionGrade>,
}

impl GradeResult {
    /// Rounded percentage of correct answers; 0 for an empty set.
    #[must_use]
    pub fn percentage(&self) -> u8 {
        percent(self.scored, self.total)
    }

    /// `scored / total >= 0.70`, compared exactly rather than on the rounded
    /// percentage. An empty set never passes.
    #[must_use]
    pub fn is_pass(&self) -> bool {
        self.total > 0 && self.scored * 100 >= PASS_THRESHOLD_PERCENT * self.total
    }

    #[must_use]
    pub fn verdict(&self) -> GradeVerdict {
        if self.total > 0 && self.scored == self.total {
            GradeVerdict::Perfect
        } else if self.is_pass() {
            GradeVerdict::WellDone
        } else {
            GradeVerdict::KeepPracticing
        }
    }
}

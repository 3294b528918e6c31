use serde::Deserialize;
use thiserror::Error;

use crate::model::QuizId;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question prompt cannot be empty")]
    EmptyPrompt,

    #[error("question set title cannot be empty")]
    EmptyTitle,

    #[error("a question needs at least 2 options, got {len}")]
    TooFewOptions { len: usize },

    #[error("option {index} is empty")]
    EmptyOption { index: usize },

    #[error("correct option {correct} is out of bounds for {len} options")]
    CorrectOutOfBounds { correct: usize, len: usize },
}

/// Unvalidated question as it appears in content files.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuestionDraft {
    pub question: String,
    pub options: Vec<String>,
    pub correct: usize,
    #[serde(default)]
    pub explanation: String,
}

impl QuestionDraft {
    /// Validate the draft into a `Question`.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` for an empty prompt, fewer than two options, an
    /// empty option, or a correct index outside the options.
    pub fn validate(self) -> Result<Question, QuestionError> {
        let prompt = self.question.trim().to_string();
        if prompt.is_empty() {
            return Err(QuestionError::EmptyPrompt);
        }
        if self.options.len() < 2 {
            return Err(QuestionError::TooFewOptions {
                len: self.options.len(),
            });
        }
        if let Some(index) = self.options.iter().position(|opt| opt.trim().is_empty()) {
            return Err(QuestionError::EmptyOption { index });
        }
        if self.correct >= self.options.len() {
            return Err(QuestionError::CorrectOutOfBounds {
                correct: self.correct,
                len: self.options.len(),
            });
        }

        Ok(Question {
            prompt,
            options: self.options,
            correct_option: self.correct,
            explanation: self.explanation.trim().to_string(),
        })
    }
}

/// A single multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    prompt: String,
    options: Vec<String>,
    correct_option: usize,
    explanation: String,
}

impl Question {
    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn correct_option(&self) -> usize {
        self.correct_option
    }

    #[must_use]
    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    #[must_use]
    pub fn is_correct(&self, option: usize) -> bool {
        option == self.correct_option
    }
}

/// The static quiz attached to one subsection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionSet {
    id: QuizId,
    title: String,
    questions: Vec<Question>,
}

impl QuestionSet {
    /// Build a question set.
    ///
    /// An empty question list is accepted; grading such a set yields 0 %.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::EmptyTitle` if the title is blank.
    pub fn new(
        id: QuizId,
        title: impl Into<String>,
        questions: Vec<Question>,
    ) -> Result<Self, QuestionError> {
        let title = title.into().trim().to_string();
        if title.is_empty() {
            return Err(QuestionError::EmptyTitle);
        }
        Ok(Self {
            id,
            title,
            questions,
        })
    }

    #[must_use]
    pub fn id(&self) -> &QuizId {
        &self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

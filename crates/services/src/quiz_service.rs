use std::sync::Arc;

use mindmap_core::QuizBank;
use mindmap_core::model::{AppState, AttemptError, GradeResult, QuestionSet, QuizAttempt};

use crate::{PendingSave, ProgressService};

/// Outcome of opening a quiz by id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizLookup {
    Available(QuizAttempt),
    /// No question set exists for the id; the view shows a neutral message.
    Unavailable { requested: String },
}

/// A graded attempt. `save` is present when the grade passed.
#[must_use]
pub struct Verification {
    pub result: GradeResult,
    pub save: Option<PendingSave>,
}

/// Quiz engine: static lookup, attempts, grading and the review bonus.
#[derive(Clone)]
pub struct QuizService {
    bank: Arc<QuizBank>,
    progress: Arc<ProgressService>,
}

impl QuizService {
    #[must_use]
    pub fn new(bank: Arc<QuizBank>, progress: Arc<ProgressService>) -> Self {
        Self { bank, progress }
    }

    #[must_use]
    pub fn bank(&self) -> Arc<QuizBank> {
        Arc::clone(&self.bank)
    }

    #[must_use]
    pub fn load_question_set(&self, raw: &str) -> Option<Arc<QuestionSet>> {
        self.bank.lookup(raw)
    }

    /// Open a fresh attempt for `raw`.
    #[must_use]
    pub fn open(&self, raw: &str) -> QuizLookup {
        match self.load_question_set(raw) {
            Some(set) => QuizLookup::Available(QuizAttempt::begin(set)),
            None => {
                log::debug!("no quiz for {raw:?}");
                QuizLookup::Unavailable {
                    requested: raw.to_string(),
                }
            }
        }
    }

    /// Select `option` for `question`, replacing any earlier choice.
    ///
    /// # Errors
    ///
    /// Returns `AttemptError` when either index is out of range; the attempt is
    /// left unchanged.
    pub fn record(
        &self,
        attempt: &mut QuizAttempt,
        question: usize,
        option: usize,
    ) -> Result<(), AttemptError> {
        attempt.record_selection(question, option).inspect_err(|err| {
            log::warn!("selection rejected on quiz {}: {err}", attempt.question_set().id());
        })
    }

    /// Grade `attempt`; a pass adds one review to `state` and yields the save
    /// that records it.
    ///
    /// Every call on a passing attempt counts again, so verifying the same
    /// answers twice yields two reviews.
    pub fn verify(&self, state: &mut AppState, attempt: &QuizAttempt) -> Verification {
        let result = attempt.grade();
        log::debug!(
            "quiz {} graded {}/{} ({}%)",
            attempt.question_set().id(),
            result.scored,
            result.total,
            result.percentage()
        );
        let save = result.is_pass().then(|| {
            state.increment_reviewed();
            PendingSave::new(&self.progress, state)
        });
        Verification { result, save }
    }

    #[must_use]
    pub fn restart(&self, attempt: &QuizAttempt) -> QuizAttempt {
        attempt.restart()
    }
}

use thiserror::Error;

use crate::curriculum::CurriculumError;
use crate::model::{AttemptError, IdError, QuestionError};
use crate::quiz_bank::QuizBankError;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    Id(#[from] IdError),
    #[error(transparent)]
    Question(#[from] QuestionError),
    #[error(transparent)]
    Attempt(#[from] AttemptError),
    #[error(transparent)]
    QuizBank(#[from] QuizBankError),
    #[error(transparent)]
    Curriculum(#[from] CurriculumError),
}

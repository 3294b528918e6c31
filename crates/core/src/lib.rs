#![forbid(unsafe_code)]

pub mod curriculum;
pub mod error;
pub mod model;
pub mod quiz_bank;

pub use curriculum::{Curriculum, CurriculumError, StudyCard, StudySection};
pub use error::Error;
pub use quiz_bank::{QuizBank, QuizBankError};

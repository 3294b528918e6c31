mod attempt;
mod ids;
mod progress;
mod question;

pub use attempt::{
    AttemptError, GradeResult, GradeVerdict, PASS_THRESHOLD_PERCENT, QuestionGrade, QuizAttempt,
};
pub use ids::{CardId, IdError, QuizId, SectionId};
pub use progress::{AppState, DEFAULT_SECTION, ProgressTier, TOTAL_SECTIONS, percent};
pub use question::{Question, QuestionDraft, QuestionError, QuestionSet};

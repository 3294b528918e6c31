#![forbid(unsafe_code)]

pub mod app_services;
pub mod error;
pub mod progress_service;
pub mod quiz_service;
pub mod study_service;

pub use app_services::AppServices;
pub use error::{AppServicesError, ProgressServiceError};
pub use progress_service::{
    PROGRESS_KEY, PendingSave, ProgressService, ProgressSnapshot, SaveOutcome,
};
pub use quiz_service::{QuizLookup, QuizService, Verification};
pub use study_service::{BookmarkSummary, Navigation, StudyService};

//! Shared error types for the services crate.

use thiserror::Error;

use mindmap_core::{CurriculumError, QuizBankError};
use storage::repository::StorageError;
use storage::sqlite::SqliteInitError;

/// Errors emitted by `ProgressService`.
///
/// Only the fallible `try_*` entry points return these; `load`/`save` absorb
/// them.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ProgressServiceError {
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
    #[error(transparent)]
    QuizBank(#[from] QuizBankError),
    #[error(transparent)]
    Curriculum(#[from] CurriculumError),
}

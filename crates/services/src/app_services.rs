use std::sync::Arc;

use mindmap_core::model::AppState;
use mindmap_core::{Curriculum, QuizBank};
use storage::repository::Storage;

use crate::error::AppServicesError;
use crate::{ProgressService, QuizService, StudyService};

/// Assembles app-facing services and loads the starting progress.
#[derive(Clone)]
pub struct AppServices {
    progress: Arc<ProgressService>,
    study: Arc<StudyService>,
    quiz: Arc<QuizService>,
    initial_state: AppState,
}

impl AppServices {
    /// Build services backed by `SQLite` storage.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization fails or the
    /// embedded curriculum is invalid.
    pub async fn new_sqlite(db_url: &str, bank: QuizBank) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        Self::from_storage(&storage, bank).await
    }

    /// Build services over in-memory storage with the embedded content.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if the embedded content is invalid.
    pub async fn in_memory() -> Result<Self, AppServicesError> {
        Self::from_storage(&Storage::in_memory(), QuizBank::embedded()?).await
    }

    /// Build services over an existing storage.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if the embedded curriculum is invalid.
    pub async fn from_storage(storage: &Storage, bank: QuizBank) -> Result<Self, AppServicesError> {
        let curriculum = Arc::new(Curriculum::embedded()?);
        let progress = Arc::new(ProgressService::new(Arc::clone(&storage.kv)));
        let study = Arc::new(StudyService::new(curriculum, Arc::clone(&progress)));
        let quiz = Arc::new(QuizService::new(Arc::new(bank), Arc::clone(&progress)));
        let initial_state = progress.load().await;

        Ok(Self {
            progress,
            study,
            quiz,
            initial_state,
        })
    }

    #[must_use]
    pub fn progress(&self) -> Arc<ProgressService> {
        Arc::clone(&self.progress)
    }

    #[must_use]
    pub fn study(&self) -> Arc<StudyService> {
        Arc::clone(&self.study)
    }

    #[must_use]
    pub fn quiz(&self) -> Arc<QuizService> {
        Arc::clone(&self.quiz)
    }

    #[must_use]
    pub fn initial_state(&self) -> AppState {
        self.initial_state.clone()
    }
}

use std::sync::Arc;

use mindmap_core::Curriculum;
use mindmap_core::model::AppState;
use services::{QuizService, StudyService};

pub trait UiApp: Send + Sync {
    fn study(&self) -> Arc<StudyService>;
    fn quiz(&self) -> Arc<QuizService>;

    /// Progress loaded at startup; the page owns its copy from then on.
    fn initial_state(&self) -> AppState;
}

#[derive(Clone)]
pub struct AppContext {
    study: Arc<StudyService>,
    quiz: Arc<QuizService>,
    initial_state: AppState,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            study: app.study(),
            quiz: app.quiz(),
            initial_state: app.initial_state(),
        }
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
    pub fn curriculum(&self) -> Arc<Curriculum> {
        self.study.curriculum()
    }

    #[must_use]
    pub fn initial_state(&self) -> AppState {
        self.initial_state.clone()
    }
}

// Provided by the composition root in `crates/app`.

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}

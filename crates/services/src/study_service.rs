use std::sync::Arc;

use mindmap_core::Curriculum;
use mindmap_core::model::{AppState, CardId, SectionId};

use crate::{PendingSave, ProgressService};

/// Result of a navigation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    /// The section is now current. `counted_review` is set when the visit
    /// bumped the reviewed counter because the section was not completed yet.
    Moved {
        section: SectionId,
        counted_review: bool,
    },
    /// No section matches the requested id; nothing changed.
    Unknown,
}

/// Footer flash-card notice derived from the bookmarked set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookmarkSummary {
    Empty,
    Saved(usize),
}

impl BookmarkSummary {
    #[must_use]
    pub fn message(self) -> String {
        match self {
            Self::Empty => "Guarda algunas tarjetas primero usando el botón de marcador.".to_string(),
            Self::Saved(count) => format!("Tienes {count} tarjetas guardadas para estudio."),
        }
    }
}

/// Navigation and section/card toggles over an explicitly passed `AppState`.
///
/// Mutations run synchronously. Callers take a `pending_save` of the
/// resulting state right away and commit it whenever convenient.
#[derive(Clone)]
pub struct StudyService {
    curriculum: Arc<Curriculum>,
    progress: Arc<ProgressService>,
}

impl StudyService {
    #[must_use]
    pub fn new(curriculum: Arc<Curriculum>, progress: Arc<ProgressService>) -> Self {
        Self {
            curriculum,
            progress,
        }
    }

    #[must_use]
    pub fn curriculum(&self) -> Arc<Curriculum> {
        Arc::clone(&self.curriculum)
    }

    /// Make `raw` the current section.
    ///
    /// Visiting a section that is not completed counts as a review, even when
    /// it is already the current one.
    pub fn navigate_to(&self, state: &mut AppState, raw: &str) -> Navigation {
        let Some(section) = self.curriculum.find_section(raw) else {
            log::warn!("section not found: {raw:?}");
            return Navigation::Unknown;
        };
        let section = section.id.clone();
        state.set_current_section(section.clone());

        let counted_review = !state.is_completed(&section);
        if counted_review {
            state.increment_reviewed();
        }
        Navigation::Moved {
            section,
            counted_review,
        }
    }

    /// Flip completion of a section. Returns the new membership, or `None` for
    /// a section that is not part of the curriculum.
    pub fn toggle_complete(&self, state: &mut AppState, section: &SectionId) -> Option<bool> {
        if self.curriculum.section(section).is_none() {
            log::warn!("cannot complete unknown section {section}");
            return None;
        }
        let completed = state.toggle_completed(section);
        log::debug!("section {section} completed={completed}");
        Some(completed)
    }

    /// Flip the bookmark on a card. Returns the new membership, or `None` for a
    /// card that is not part of the curriculum.
    pub fn toggle_bookmark(&self, state: &mut AppState, card: &CardId) -> Option<bool> {
        if !self.curriculum.contains_card(card) {
            log::warn!("cannot bookmark unknown card {card}");
            return None;
        }
        let bookmarked = state.toggle_bookmark(card);
        log::debug!("card {card} bookmarked={bookmarked}");
        Some(bookmarked)
    }

    #[must_use]
    pub fn bookmark_summary(&self, state: &AppState) -> BookmarkSummary {
        match state.bookmarked_cards().len() {
            0 => BookmarkSummary::Empty,
            count => BookmarkSummary::Saved(count),
        }
    }

    pub fn reset(&self, state: &mut AppState) {
        state.reset();
        log::info!("progress reset");
    }

    /// Stamp `state` for writing. Build it before the next mutation so a slow
    /// commit cannot overwrite newer progress.
    pub fn pending_save(&self, state: &AppState) -> PendingSave {
        PendingSave::new(&self.progress, state)
    }
}

use std::collections::BTreeSet;

use mindmap_core::model::{AppState, CardId, QuizId, SectionId};
use mindmap_core::{Curriculum, StudyCard, StudySection};

/// Sections whose cards are folded away. Presentational only, never persisted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CollapsedSections(BTreeSet<SectionId>);

impl CollapsedSections {
    /// Flip the fold state of `section`. Returns `true` when it is now collapsed.
    pub fn toggle(&mut self, section: &SectionId) -> bool {
        if self.0.remove(section) {
            false
        } else {
            self.0.insert(section.clone());
            true
        }
    }

    #[must_use]
    pub fn contains(&self, section: &SectionId) -> bool {
        self.0.contains(section)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavEntryVm {
    pub id: SectionId,
    pub label: String,
    pub icon_class: String,
    pub active: bool,
    pub completed: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardVm {
    pub id: CardId,
    pub title: String,
    pub summary: String,
    pub bookmarked: bool,
    pub bookmark_icon: &'static str,
    pub quiz: Option<QuizId>,
}

impl CardVm {
    fn new(card: &StudyCard, state: &AppState) -> Self {
        let bookmarked = state.is_bookmarked(&card.id);
        Self {
            id: card.id.clone(),
            title: card.title.clone(),
            summary: card.summary.clone(),
            bookmarked,
            bookmark_icon: if bookmarked {
                "fas fa-bookmark"
            } else {
                "far fa-bookmark"
            },
            quiz: card.quiz.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SectionVm {
    pub id: SectionId,
    pub heading: String,
    pub icon_class: String,
    pub completed: bool,
    pub complete_icon: &'static str,
    pub collapsed: bool,
    pub collapse_icon: &'static str,
    pub cards: Vec<CardVm>,
}

impl SectionVm {
    fn new(section: &StudySection, state: &AppState, collapsed: &CollapsedSections) -> Self {
        let completed = state.is_completed(&section.id);
        let is_collapsed = collapsed.contains(&section.id);
        Self {
            id: section.id.clone(),
            heading: format!("{}. {}", section.number, section.title),
            icon_class: icon_class(&section.icon),
            completed,
            complete_icon: if completed {
                "fas fa-check-circle"
            } else {
                "far fa-check-circle"
            },
            collapsed: is_collapsed,
            collapse_icon: if is_collapsed {
                "fas fa-compress"
            } else {
                "fas fa-expand"
            },
            cards: section
                .cards
                .iter()
                .map(|card| CardVm::new(card, state))
                .collect(),
        }
    }
}

fn icon_class(token: &str) -> String {
    format!("fas {token}")
}

#[must_use]
pub fn map_nav_entries(curriculum: &Curriculum, state: &AppState) -> Vec<NavEntryVm> {
    curriculum
        .sections()
        .iter()
        .map(|section| NavEntryVm {
            id: section.id.clone(),
            label: section.title.clone(),
            icon_class: icon_class(&section.icon),
            active: state.current_section() == &section.id,
            completed: state.is_completed(&section.id),
        })
        .collect()
}

/// The section currently on screen, if the current id is part of `curriculum`.
#[must_use]
pub fn map_active_section(
    curriculum: &Curriculum,
    state: &AppState,
    collapsed: &CollapsedSections,
) -> Option<SectionVm> {
    curriculum
        .section(state.current_section())
        .map(|section| SectionVm::new(section, state, collapsed))
}

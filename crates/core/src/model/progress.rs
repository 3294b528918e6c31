use std::collections::BTreeSet;

use crate::model::{CardId, SectionId};

/// Number of top-level sections that count towards overall progress.
pub const TOTAL_SECTIONS: usize = 6;

/// Section shown when nothing else has been selected yet.
pub const DEFAULT_SECTION: &str = "fundamentos";

/// Rounds `100 * part / whole` half-up to an integer percentage.
///
/// Returns 0 when `whole` is 0. The result is capped at 100.
#[must_use]
pub fn percent(part: usize, whole: usize) -> u8 {
    if whole == 0 {
        return 0;
    }
    let part = part.min(whole) as u64;
    let whole = whole as u64;
    let rounded = (200 * part + whole) / (2 * whole);
    u8::try_from(rounded).unwrap_or(100)
}

/// Colour band of the progress bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressTier {
    Low,
    Medium,
    High,
}

impl ProgressTier {
    #[must_use]
    pub fn from_percent(value: u8) -> Self {
        match value {
            0..30 => Self::Low,
            30..70 => Self::Medium,
            _ => Self::High,
        }
    }
}

/// Mutable study progress owned by the running application.
///
/// The store performs no I/O: every mutation must be followed by a persistence
/// write and a UI refresh by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    progress_percent: u8,
    completed_sections: BTreeSet<SectionId>,
    bookmarked_cards: BTreeSet<CardId>,
    reviewed_count: u32,
    current_section: SectionId,
}

impl AppState {
    #[must_use]
    pub fn new(current_section: SectionId) -> Self {
        Self {
            progress_percent: 0,
            completed_sections: BTreeSet::new(),
            bookmarked_cards: BTreeSet::new(),
            reviewed_count: 0,
            current_section,
        }
    }

    /// Rehydrate progress from persisted values.
    ///
    /// The percentage is recomputed from `completed_sections` so a stale stored
    /// value can never break the progress invariant.
    #[must_use]
    pub fn from_persisted(
        completed_sections: impl IntoIterator<Item = SectionId>,
        bookmarked_cards: impl IntoIterator<Item = CardId>,
        reviewed_count: u32,
        current_section: SectionId,
    ) -> Self {
        let mut state = Self {
            progress_percent: 0,
            completed_sections: completed_sections.into_iter().collect(),
            bookmarked_cards: bookmarked_cards.into_iter().collect(),
            reviewed_count,
            current_section,
        };
        state.recompute_progress();
        state
    }

    #[must_use]
    pub fn progress_percent(&self) -> u8 {
        self.progress_percent
    }

    #[must_use]
    pub fn progress_tier(&self) -> ProgressTier {
        ProgressTier::from_percent(self.progress_percent)
    }

    #[must_use]
    pub fn completed_sections(&self) -> &BTreeSet<SectionId> {
        &self.completed_sections
    }

    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.completed_sections.len()
    }

    #[must_use]
    pub fn is_completed(&self, section: &SectionId) -> bool {
        self.completed_sections.contains(section)
    }

    #[must_use]
    pub fn bookmarked_cards(&self) -> &BTreeSet<CardId> {
        &self.bookmarked_cards
    }

    #[must_use]
    pub fn is_bookmarked(&self, card: &CardId) -> bool {
        self.bookmarked_cards.contains(card)
    }

    #[must_use]
    pub fn reviewed_count(&self) -> u32 {
        self.reviewed_count
    }

    #[must_use]
    pub fn current_section(&self) -> &SectionId {
        &self.current_section
    }

    pub fn set_current_section(&mut self, section: SectionId) {
        self.current_section = section;
    }

    /// Flip completion of `section`. Returns `true` when it is now completed.
    pub fn toggle_completed(&mut self, section: &SectionId) -> bool {
        let completed = if self.completed_sections.remove(section) {
            false
        } else {
            self.completed_sections.insert(section.clone());
            true
        };
        self.recompute_progress();
        completed
    }

    /// Flip the bookmark on `card`. Returns `true` when it is now bookmarked.
    pub fn toggle_bookmark(&mut self, card: &CardId) -> bool {
        if self.bookmarked_cards.remove(card) {
            false
        } else {
            self.bookmarked_cards.insert(card.clone());
            true
        }
    }

    pub fn increment_reviewed(&mut self) {
        self.reviewed_count = self.reviewed_count.saturating_add(1);
    }

    /// Clear every set and counter. The current section is kept.
    pub fn reset(&mut self) {
        self.completed_sections.clear();
        self.bookmarked_cards.clear();
        self.reviewed_count = 0;
        self.progress_percent = 0;
    }

    fn recompute_progress(&mut self) {
        self.progress_percent = percent(self.completed_sections.len(), TOTAL_SECTIONS);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(SectionId::from_static(DEFAULT_SECTION))
    }
}

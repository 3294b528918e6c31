//! Study outline shown on the page: top-level sections and their cards.

use std::collections::BTreeSet;

use serde::Deserialize;
use thiserror::Error;

use crate::model::{CardId, IdError, QuizId, SectionId, TOTAL_SECTIONS};

const EMBEDDED_CURRICULUM: &str = include_str!("../data/curriculum.json");

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CurriculumError {
    #[error("curriculum is not valid JSON: {0}")]
    Parse(String),

    #[error(transparent)]
    InvalidId(#[from] IdError),

    #[error("expected {expected} sections, found {found}")]
    SectionCount { expected: usize, found: usize },

    #[error("duplicate section id {0}")]
    DuplicateSection(SectionId),

    #[error("duplicate card id {0}")]
    DuplicateCard(CardId),
}

#[derive(Debug, Deserialize)]
struct CurriculumDraft {
    title: String,
    sections: Vec<SectionDraft>,
}

#[derive(Debug, Deserialize)]
struct SectionDraft {
    id: String,
    number: u32,
    title: String,
    #[serde(default)]
    icon: String,
    #[serde(default)]
    cards: Vec<CardDraft>,
}

#[derive(Debug, Deserialize)]
struct CardDraft {
    id: String,
    title: String,
    #[serde(default)]
    summary: String,
    quiz: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudyCard {
    pub id: CardId,
    pub title: String,
    pub summary: String,
    pub quiz: Option<QuizId>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudySection {
    pub id: SectionId,
    pub number: u32,
    pub title: String,
    /// Icon font token, e.g. `fa-atom`.
    pub icon: String,
    pub cards: Vec<StudyCard>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Curriculum {
    title: String,
    sections: Vec<StudySection>,
}

impl Curriculum {
    /// Load the outline compiled into the crate.
    ///
    /// # Errors
    ///
    /// Returns `CurriculumError` if the embedded content fails validation.
    pub fn embedded() -> Result<Self, CurriculumError> {
        Self::from_json(EMBEDDED_CURRICULUM)
    }

    /// Parse and validate an outline.
    ///
    /// # Errors
    ///
    /// Returns `CurriculumError` for malformed JSON, invalid or duplicate ids, or
    /// a section count other than `TOTAL_SECTIONS`.
    pub fn from_json(raw: &str) -> Result<Self, CurriculumError> {
        let draft: CurriculumDraft =
            serde_json::from_str(raw).map_err(|err| CurriculumError::Parse(err.to_string()))?;

        if draft.sections.len() != TOTAL_SECTIONS {
            return Err(CurriculumError::SectionCount {
                expected: TOTAL_SECTIONS,
                found: draft.sections.len(),
            });
        }

        let mut seen_sections = BTreeSet::new();
        let mut seen_cards = BTreeSet::new();
        let mut sections = Vec::with_capacity(draft.sections.len());
        for section in draft.sections {
            let id = SectionId::new(section.id)?;
            if !seen_sections.insert(id.clone()) {
                return Err(CurriculumError::DuplicateSection(id));
            }

            let mut cards = Vec::with_capacity(section.cards.len());
            for card in section.cards {
                let card_id = CardId::new(card.id)?;
                if !seen_cards.insert(card_id.clone()) {
                    return Err(CurriculumError::DuplicateCard(card_id));
                }
                let quiz = card.quiz.map(QuizId::new).transpose()?;
                cards.push(StudyCard {
                    id: card_id,
                    title: card.title,
                    summary: card.summary,
                    quiz,
                });
            }

            sections.push(StudySection {
                id,
                number: section.number,
                title: section.title,
                icon: section.icon,
                cards,
            });
        }

        Ok(Self {
            title: draft.title,
            sections,
        })
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn sections(&self) -> &[StudySection] {
        &self.sections
    }

    #[must_use]
    pub fn section(&self, id: &SectionId) -> Option<&StudySection> {
        self.sections.iter().find(|section| &section.id == id)
    }

    /// Resolve a raw section id coming from a navigation control.
    #[must_use]
    pub fn find_section(&self, raw: &str) -> Option<&StudySection> {
        let id = SectionId::new(raw).ok()?;
        self.section(&id)
    }

    #[must_use]
    pub fn contains_card(&self, id: &CardId) -> bool {
        self.sections
            .iter()
            .any(|section| section.cards.iter().any(|card| &card.id == id))
    }
}

use mindmap_core::model::{AppState, CardId, SectionId};
use serde::{Deserialize, Deserializer, Serialize};

use crate::repository::StorageError;

/// Persisted shape of study progress.
///
/// This mirrors the fixed JSON schema stored under a single key
/// (`{progress, completedSections, bookmarkedCards, reviewedCards}`) so the
/// domain `AppState` never sees storage concerns. Missing or `null` fields read
/// as empty / zero. `progress` is never trusted, so any value is accepted there.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressRecord {
    #[serde(default, deserialize_with = "lenient_progress")]
    pub progress: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub completed_sections: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub bookmarked_cards: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub reviewed_cards: u32,
}

impl ProgressRecord {
    #[must_use]
    pub fn from_state(state: &AppState) -> Self {
        Self {
            progress: i64::from(state.progress_percent()),
            completed_sections: state
                .completed_sections()
                .iter()
                .map(|id| id.as_str().to_owned())
                .collect(),
            bookmarked_cards: state
                .bookmarked_cards()
                .iter()
                .map(|id| id.as_str().to_owned())
                .collect(),
            reviewed_cards: state.reviewed_count(),
        }
    }

    /// Convert the record back into a domain `AppState`.
    ///
    /// The stored `progress` is not trusted; it is recomputed from the completed
    /// sections. Blank identifiers are dropped.
    #[must_use]
    pub fn into_state(self, current_section: SectionId) -> AppState {
        let completed = self
            .completed_sections
            .into_iter()
            .filter_map(|raw| match SectionId::new(raw) {
                Ok(id) => Some(id),
                Err(err) => {
                    log::warn!("dropping stored section: {err}");
                    None
                }
            });
        let bookmarked = self
            .bookmarked_cards
            .into_iter()
            .filter_map(|raw| match CardId::new(raw) {
                Ok(id) => Some(id),
                Err(err) => {
                    log::warn!("dropping stored bookmark: {err}");
                    None
                }
            });
        AppState::from_persisted(completed, bookmarked, self.reviewed_cards, current_section)
    }

    /// # Errors
    ///
    /// Returns `StorageError::Serialization` if the record cannot be encoded.
    pub fn to_json(&self) -> Result<String, StorageError> {
        serde_json::to_string(self).map_err(|err| StorageError::Serialization(err.to_string()))
    }

    /// # Errors
    ///
    /// Returns `StorageError::Serialization` for malformed JSON or a value of the
    /// wrong shape.
    pub fn from_json(raw: &str) -> Result<Self, StorageError> {
        serde_json::from_str(raw).map_err(|err| StorageError::Serialization(err.to_string()))
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Whole numbers are kept, fractions are rounded and anything else reads as 0.
fn lenient_progress<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let progress = match value {
        serde_json::Value::Number(number) => number
            .as_i64()
            .or_else(|| number.as_f64().map(|raw| raw.round() as i64)),
        _ => None,
    };
    Ok(progress.unwrap_or_default())
}

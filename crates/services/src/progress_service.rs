use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use mindmap_core::model::AppState;
use storage::ProgressRecord;
use storage::repository::KeyValueStore;
use tokio::sync::Mutex;

use crate::error::ProgressServiceError;

/// Fixed storage key of the progress record.
pub const PROGRESS_KEY: &str = "organicChemistryMindmap";

/// A copy of the state taken at a known point in the mutation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressSnapshot {
    revision: u64,
    state: AppState,
}

impl ProgressSnapshot {
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    #[must_use]
    pub fn state(&self) -> &AppState {
        &self.state
    }
}

/// What happened to a committed snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Written,
    /// A newer snapshot reached the store first; this one was dropped.
    Superseded,
    Failed,
}

/// Persistence adapter between `AppState` and the key-value store.
///
/// `load` and `save` never fail: storage problems are logged and the app keeps
/// running on its in-memory state.
///
/// Writes are serialized. Each snapshot carries the revision it was taken at,
/// and a snapshot older than the last one written is skipped, so the record
/// always ends on the newest state no matter how the writes were scheduled.
pub struct ProgressService {
    store: Arc<dyn KeyValueStore>,
    key: String,
    issued: AtomicU64,
    written: Mutex<u64>,
}

impl ProgressService {
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            key: PROGRESS_KEY.to_string(),
            issued: AtomicU64::new(0),
            written: Mutex::new(0),
        }
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Load persisted progress, or the default state if none is usable.
    pub async fn load(&self) -> AppState {
        match self.try_load().await {
            Ok(Some(state)) => state,
            Ok(None) => AppState::default(),
            Err(err) => {
                log::warn!("ignoring stored progress under {:?}: {err}", self.key);
                AppState::default()
            }
        }
    }

    /// Stamp a copy of `state` with the next revision.
    #[must_use]
    pub fn snapshot(&self, state: &AppState) -> ProgressSnapshot {
        ProgressSnapshot {
            revision: self.issued.fetch_add(1, Ordering::Relaxed) + 1,
            state: state.clone(),
        }
    }

    /// Write `snapshot` unless something newer is already stored. Failures are
    /// logged and dropped.
    pub async fn commit(&self, snapshot: ProgressSnapshot) -> SaveOutcome {
        match self.try_commit(snapshot).await {
            Ok(outcome) => outcome,
            Err(err) => {
                log::warn!("progress not saved under {:?}: {err}", self.key);
                SaveOutcome::Failed
            }
        }
    }

    /// Persist `state`, overwriting the previous record. The revision is taken
    /// when the future first runs.
    pub async fn save(&self, state: &AppState) {
        self.commit(self.snapshot(state)).await;
    }

    /// Read and decode the stored record.
    ///
    /// The current section is not part of the stored schema; the default section
    /// is used.
    ///
    /// # Errors
    ///
    /// Returns `ProgressServiceError` if the store cannot be read or the stored
    /// JSON is malformed.
    pub async fn try_load(&self) -> Result<Option<AppState>, ProgressServiceError> {
        let Some(raw) = self.store.get(&self.key).await? else {
            return Ok(None);
        };
        let record = ProgressRecord::from_json(&raw)?;
        let current = AppState::default().current_section().clone();
        Ok(Some(record.into_state(current)))
    }

    /// Encode and write `state` as the newest revision.
    ///
    /// # Errors
    ///
    /// Returns `ProgressServiceError` if encoding or the write fails.
    pub async fn try_save(&self, state: &AppState) -> Result<(), ProgressServiceError> {
        self.try_commit(self.snapshot(state)).await.map(|_| ())
    }

    /// Remove the stored record entirely. Snapshots taken before the call are
    /// not written afterwards.
    ///
    /// # Errors
    ///
    /// Returns `ProgressServiceError` if the store rejects the delete.
    pub async fn try_clear(&self) -> Result<(), ProgressServiceError> {
        let revision = self.issued.fetch_add(1, Ordering::Relaxed) + 1;
        let mut written = self.written.lock().await;
        *written = (*written).max(revision);
        self.store.remove(&self.key).await?;
        log::debug!("progress cleared under {:?}", self.key);
        Ok(())
    }

    async fn try_commit(
        &self,
        snapshot: ProgressSnapshot,
    ) -> Result<SaveOutcome, ProgressServiceError> {
        let mut written = self.written.lock().await;
        if snapshot.revision <= *written {
            log::debug!(
                "skipping progress revision {} (revision {} already stored)",
                snapshot.revision,
                *written
            );
            return Ok(SaveOutcome::Superseded);
        }
        *written = snapshot.revision;

        let state = &snapshot.state;
        let json = ProgressRecord::from_state(state).to_json()?;
        self.store.set(&self.key, &json).await?;
        log::debug!(
            "progress saved at revision {}: {}% ({} sections, {} bookmarks, {} reviewed)",
            snapshot.revision,
            state.progress_percent(),
            state.completed_count(),
            state.bookmarked_cards().len(),
            state.reviewed_count()
        );
        Ok(SaveOutcome::Written)
    }
}

/// A snapshot bound to the service that will write it.
///
/// The revision is fixed when the value is built, so saves created in mutation
/// order keep that order even when they are committed from separate tasks.
#[must_use = "nothing is written until the save is committed"]
pub struct PendingSave {
    progress: Arc<ProgressService>,
    snapshot: ProgressSnapshot,
}

impl PendingSave {
    pub fn new(progress: &Arc<ProgressService>, state: &AppState) -> Self {
        Self {
            snapshot: progress.snapshot(state),
            progress: Arc::clone(progress),
        }
    }

    #[must_use]
    pub fn revision(&self) -> u64 {
        self.snapshot.revision
    }

    pub async fn commit(self) -> SaveOutcome {
        self.progress.commit(self.snapshot).await
    }
}

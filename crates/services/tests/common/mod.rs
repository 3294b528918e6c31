#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use mindmap_core::{Curriculum, QuizBank};
use services::{ProgressService, QuizService, StudyService};
use storage::repository::{InMemoryKeyValueStore, KeyValueStore, StorageError};

/// In-memory store that counts writes.
#[derive(Clone, Default)]
pub struct CountingStore {
    inner: InMemoryKeyValueStore,
    writes: Arc<AtomicUsize>,
}

impl CountingStore {
    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl KeyValueStore for CountingStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.inner.get(key).await
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.inner.set(key, value).await
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.inner.remove(key).await
    }
}

/// Store whose every operation fails, like a full or disabled browser storage.
pub struct FailingStore;

#[async_trait]
impl KeyValueStore for FailingStore {
    async fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Connection("storage unavailable".to_string()))
    }

    async fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Connection("quota exceeded".to_string()))
    }

    async fn remove(&self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::Connection("storage unavailable".to_string()))
    }
}

pub struct Harness {
    pub store: CountingStore,
    pub progress: Arc<ProgressService>,
    pub study: StudyService,
    pub quiz: QuizService,
}

pub fn harness() -> Harness {
    let store = CountingStore::default();
    let progress = Arc::new(ProgressService::new(Arc::new(store.clone())));
    let curriculum = Arc::new(Curriculum::embedded().expect("curriculum"));
    let bank = Arc::new(QuizBank::embedded().expect("quiz bank"));
    Harness {
        study: StudyService::new(curriculum, Arc::clone(&progress)),
        quiz: QuizService::new(bank, Arc::clone(&progress)),
        store,
        progress,
    }
}

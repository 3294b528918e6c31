#![forbid(unsafe_code)]

pub mod record;
pub mod repository;
pub mod sqlite;

pub use record::ProgressRecord;
pub use repository::{InMemoryKeyValueStore, KeyValueStore, Storage, StorageError};

//! Persisted state document and its on-disk storage

pub mod document;
pub mod storage;

pub use document::{DeckSummary, StateDocument};
pub use storage::{StateStorage, StateStorageError};

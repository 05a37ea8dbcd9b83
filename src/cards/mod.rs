//! Flashcard and deck models plus the in-memory card store

pub mod models;
pub mod store;

pub use models::{Deck, FlashCard, Grade};
pub use store::CardStore;

//! In-memory card store
//!
//! Built once at startup from the scanned notes merged with any prior
//! persisted records; mutated only by the review session while it runs.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use crate::notes::{import, NoteFile};

use super::models::FlashCard;

/// Mapping from note path to flashcard, keyed stably across runs
#[derive(Debug, Default)]
pub struct CardStore {
    cards: BTreeMap<String, FlashCard>,
}

impl CardStore {
    /// Build the store from scanned notes. Extraction failure on any note
    /// aborts the build: a half-parsed card must not enter the store.
    pub fn build(
        notes: &[NoteFile],
        prior: &BTreeMap<String, FlashCard>,
        now: DateTime<Utc>,
    ) -> import::Result<Self> {
        let mut cards = BTreeMap::new();
        for note in notes {
            let qa = import::question_and_answer(note)?;
            let card = FlashCard::from_note(
                note.path.clone(),
                import::tags(note),
                qa,
                prior.get(&note.path),
                now,
            );
            cards.insert(note.path.clone(), card);
        }
        Ok(Self { cards })
    }

    pub fn get(&self, path: &str) -> Option<&FlashCard> {
        self.cards.get(path)
    }

    /// Replace a card's entry; the only mutation path during a session
    pub fn update(&mut self, card: FlashCard) {
        self.cards.insert(card.path.clone(), card);
    }

    pub fn cards(&self) -> impl Iterator<Item = &FlashCard> {
        self.cards.values()
    }

    /// Member paths for a deck: every card when `tag` is absent, otherwise
    /// the cards carrying the tag.
    pub fn member_paths(&self, tag: Option<&str>) -> Vec<String> {
        self.cards
            .values()
            .filter(|c| tag.map_or(true, |t| c.tags.iter().any(|ct| ct == t)))
            .map(|c| c.path.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

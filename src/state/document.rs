//! The persisted state document
//!
//! Two top-level maps, `decks` keyed by tag and `flash_cards` keyed by
//! note path. BTreeMaps keep the serialized keys sorted so the document
//! stays deterministic and diffable. A session only ever touches one deck
//! and its member cards, so merging into the prior document must leave
//! every other deck and card exactly as it was.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::cards::{CardStore, Deck, FlashCard};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StateDocument {
    #[serde(default)]
    pub decks: BTreeMap<String, Deck>,
    #[serde(default)]
    pub flash_cards: BTreeMap<String, FlashCard>,
}

/// Per-deck aggregate for the summary screen
#[derive(Debug, Clone)]
pub struct DeckSummary {
    pub tag: Option<String>,
    pub size: usize,
    pub due: usize,
    pub next_due: Option<DateTime<Utc>>,
}

impl StateDocument {
    /// Merge a session's outcome into this document, non-destructively:
    /// session cards override same-key priors, the active deck's entry is
    /// replaced or inserted under its tag, and everything else passes
    /// through untouched.
    pub fn merged(&self, store: &CardStore, deck: &Deck) -> StateDocument {
        let mut doc = self.clone();
        for card in store.cards() {
            doc.flash_cards.insert(card.path.clone(), card.clone());
        }
        doc.decks.insert(deck.key(), deck.clone());
        doc
    }

    /// Due-count aggregates across every persisted deck, scanned against
    /// every persisted card
    pub fn deck_summaries(&self, now: DateTime<Utc>) -> Vec<DeckSummary> {
        self.decks
            .values()
            .map(|deck| {
                let cards: Vec<&FlashCard> = deck
                    .flash_cards
                    .iter()
                    .filter_map(|path| self.flash_cards.get(path))
                    .collect();
                DeckSummary {
                    tag: deck.tag.clone(),
                    size: cards.len(),
                    due: cards.iter().filter(|c| c.is_due(now)).count(),
                    next_due: cards.iter().map(|c| c.due).min(),
                }
            })
            .collect()
    }
}

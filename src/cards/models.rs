//! Data models for flashcards and decks

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::notes::QuestionAnswer;

/// Starting easiness factor, also the floor the scheduler never goes below
pub const DEFAULT_FACTOR: f64 = 1300.0;

/// Default deck modifiers
pub const STANDARD_INTERVAL_MODIFIER: f64 = 1.0;
pub const EASY_INTERVAL_MODIFIER: f64 = 1.3;
pub const FAIL_INTERVAL_MODIFIER: f64 = 0.0;

/// Self-assessed recall quality for one review.
///
/// Restricting grades to this enum at the input boundary is what keeps
/// the scheduler total: there is no "unknown grade" case to handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Grade {
    Fail,
    Hard,
    Pass,
    Easy,
}

/// One question/answer unit with its scheduling state.
///
/// The note path is the stable identity. `interval == 0.0` is the
/// short-term learning sentinel: the card has not yet been scheduled out
/// to a future date and stays in rotation within a session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlashCard {
    pub path: String,
    pub tags: Vec<String>,
    pub question: String,
    pub answer: String,
    pub due: DateTime<Utc>,
    /// Days until the next review, fractional
    pub interval: f64,
    /// Easiness multiplier scaled by 1000, never below 1300
    pub factor: f64,
}

impl FlashCard {
    /// Build a card from freshly extracted note content, re-hydrating the
    /// scheduling fields from a prior persisted record when one exists.
    pub fn from_note(
        path: String,
        tags: Vec<String>,
        qa: QuestionAnswer,
        prior: Option<&FlashCard>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            path,
            tags,
            question: qa.question,
            answer: qa.answer,
            due: prior.map_or(now, |p| p.due),
            interval: prior.map_or(0.0, |p| p.interval),
            factor: prior.map_or(DEFAULT_FACTOR, |p| p.factor),
        }
    }

    /// Check if the card is due for review
    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        self.due <= now
    }

    /// Whether the card is still in the short-term learning queue
    pub fn in_learning_queue(&self) -> bool {
        self.interval == 0.0
    }
}

/// A tag-filtered view over the card store sharing scheduling modifiers.
/// `tag == None` is the all-cards deck.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Deck {
    pub tag: Option<String>,
    /// Paths of member cards, recomputed from the note set each run
    pub flash_cards: Vec<String>,
    pub standard_interval_modifier: f64,
    pub easy_interval_modifier: f64,
    pub fail_interval_modifier: f64,
}

impl Deck {
    /// Build a deck from its current membership, re-hydrating the
    /// modifiers from a prior persisted record when one exists.
    pub fn new(tag: Option<String>, flash_cards: Vec<String>, prior: Option<&Deck>) -> Self {
        Self {
            tag,
            flash_cards,
            standard_interval_modifier: prior
                .map_or(STANDARD_INTERVAL_MODIFIER, |p| p.standard_interval_modifier),
            easy_interval_modifier: prior
                .map_or(EASY_INTERVAL_MODIFIER, |p| p.easy_interval_modifier),
            fail_interval_modifier: prior
                .map_or(FAIL_INTERVAL_MODIFIER, |p| p.fail_interval_modifier),
        }
    }

    /// Key of this deck in the persisted document. The all-cards deck
    /// stores under the empty string.
    pub fn key(&self) -> String {
        self.tag.clone().unwrap_or_default()
    }

    pub fn size(&self) -> usize {
        self.flash_cards.len()
    }
}

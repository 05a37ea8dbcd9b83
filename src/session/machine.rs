//! Review-session state machine
//!
//! One session is a single pass over the deck's due cards. The due set is
//! a snapshot taken at start, shuffled once, then worked as a FIFO queue.
//! Grading writes exactly one card back into the store; a card whose new
//! interval is still 0 re-joins the back of the queue ("still learning"),
//! anything else is done for the session.
//!
//! Quit and interrupt never touch the machine: the driver just stops
//! calling it and runs the save path against whatever the store holds,
//! which is every grade finalized so far and nothing mid-flight.

use std::collections::VecDeque;

use chrono::{DateTime, Duration, Utc};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::cards::{CardStore, Deck, FlashCard, Grade};
use crate::scheduler::{next_factor, next_interval};

/// Where the session is between inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Question on screen, waiting for the reveal acknowledgement
    AwaitingQuestionAck,
    /// Answer on screen, waiting for a grade
    AwaitingGrade,
    /// Queue drained
    Complete,
}

/// Deck members due at `now`. A snapshot: cards that become due while the
/// session runs are not picked up.
pub fn due_cards<'a>(deck: &Deck, store: &'a CardStore, now: DateTime<Utc>) -> Vec<&'a FlashCard> {
    deck.flash_cards
        .iter()
        .filter_map(|path| store.get(path))
        .filter(|card| card.is_due(now))
        .collect()
}

/// One interactive pass over a deck's due cards.
///
/// The session borrows the store mutably for its whole lifetime, making
/// it the sole mutator while reviewing (and making the save-after-session
/// ordering a borrow-checker fact rather than a convention).
pub struct ReviewSession<'a> {
    deck: &'a Deck,
    store: &'a mut CardStore,
    queue: VecDeque<String>,
    due: usize,
    state: SessionState,
}

impl<'a> ReviewSession<'a> {
    /// Snapshot the due cards, shuffle them, and enter the first state.
    /// The shuffle is explicit so queue order never leans on container
    /// iteration order.
    pub fn start(deck: &'a Deck, store: &'a mut CardStore, rng: &mut impl Rng) -> Self {
        let now = Utc::now();
        let mut paths: Vec<String> = due_cards(deck, store, now)
            .into_iter()
            .map(|c| c.path.clone())
            .collect();
        paths.shuffle(rng);

        log::debug!(
            "session start: deck {:?}, {} due of {} member(s)",
            deck.tag,
            paths.len(),
            deck.size()
        );

        let due = paths.len();
        let state = if paths.is_empty() {
            SessionState::Complete
        } else {
            SessionState::AwaitingQuestionAck
        };
        Self {
            deck,
            store,
            queue: paths.into(),
            due,
            state,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Card at the front of the queue, if any
    pub fn current(&self) -> Option<&FlashCard> {
        self.queue.front().and_then(|path| self.store.get(path))
    }

    /// Size of the due snapshot this session started from
    pub fn due(&self) -> usize {
        self.due
    }

    /// Cards still queued, including any re-queued learners
    pub fn remaining(&self) -> usize {
        self.queue.len()
    }

    pub fn deck(&self) -> &Deck {
        self.deck
    }

    /// Acknowledge the question and show the answer
    pub fn reveal(&mut self) {
        if self.state == SessionState::AwaitingQuestionAck {
            self.state = SessionState::AwaitingGrade;
        }
    }

    /// Grade the current card: apply the scheduler, write the updated card
    /// back into the store, and re-queue it iff it stays in the learning
    /// queue (new interval 0).
    pub fn grade(&mut self, grade: Grade) {
        if self.state != SessionState::AwaitingGrade {
            return;
        }
        let Some(path) = self.queue.pop_front() else {
            self.state = SessionState::Complete;
            return;
        };
        let Some(card) = self.store.get(&path).cloned() else {
            self.state = SessionState::Complete;
            return;
        };

        let now = Utc::now();
        let interval = next_interval(grade, &card, self.deck, now);
        let factor = next_factor(grade, &card);
        let due = now + Duration::milliseconds((interval * 86_400_000.0) as i64);

        let updated = FlashCard {
            due,
            interval,
            factor,
            ..card
        };
        let requeue = updated.in_learning_queue();
        self.store.update(updated);

        if requeue {
            self.queue.push_back(path);
        }

        self.state = if self.queue.is_empty() {
            SessionState::Complete
        } else {
            SessionState::AwaitingQuestionAck
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::BTreeMap;

    use crate::notes::NoteFile;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    fn store_of(paths: &[&str]) -> CardStore {
        let notes: Vec<NoteFile> = paths
            .iter()
            .map(|p| {
                NoteFile::new(
                    p.to_string(),
                    format!("tags: :t:\n---\nanswer\n**Q** about {}?\n", p),
                )
            })
            .collect();
        CardStore::build(&notes, &BTreeMap::new(), Utc::now()).unwrap()
    }

    fn deck_for(store: &CardStore) -> Deck {
        Deck::new(Some("t".to_string()), store.member_paths(Some("t")), None)
    }

    #[test]
    fn test_empty_deck_completes_immediately() {
        let mut store = CardStore::default();
        let deck = Deck::new(Some("t".to_string()), vec![], None);
        let session = ReviewSession::start(&deck, &mut store, &mut rng());

        assert_eq!(session.state(), SessionState::Complete);
        assert_eq!(session.due(), 0);
        assert_eq!(session.remaining(), 0);
        assert!(session.current().is_none());
    }

    #[test]
    fn test_due_cards_ignores_future_cards() {
        let mut store = store_of(&["a.md", "b.md"]);
        let mut future = store.get("b.md").unwrap().clone();
        future.due = Utc::now() + Duration::days(3);
        store.update(future);
        let deck = deck_for(&store);

        let due = due_cards(&deck, &store, Utc::now());
        assert_eq!(due.len(), 1);
        assert_eq!(due[0].path, "a.md");
    }

    #[test]
    fn test_pass_schedules_card_out_of_session() {
        let mut store = store_of(&["a.md"]);
        let deck = deck_for(&store);
        let mut session = ReviewSession::start(&deck, &mut store, &mut rng());

        assert_eq!(session.state(), SessionState::AwaitingQuestionAck);
        session.reveal();
        assert_eq!(session.state(), SessionState::AwaitingGrade);
        session.grade(Grade::Pass);

        assert_eq!(session.state(), SessionState::Complete);
        assert_eq!(session.remaining(), 0);

        let card = store.get("a.md").unwrap();
        assert_eq!(card.interval, 2.0);
        assert!(card.due > Utc::now());
    }

    #[test]
    fn test_fail_requeues_within_session() {
        let mut store = store_of(&["a.md"]);
        let deck = deck_for(&store);
        let mut session = ReviewSession::start(&deck, &mut store, &mut rng());

        session.reveal();
        session.grade(Grade::Fail);

        // Default fail modifier keeps the interval at 0, so the card
        // stays in rotation
        assert_eq!(session.state(), SessionState::AwaitingQuestionAck);
        assert_eq!(session.remaining(), 1);
        assert_eq!(session.current().unwrap().path, "a.md");

        session.reveal();
        session.grade(Grade::Hard);
        assert_eq!(session.state(), SessionState::Complete);
        assert_eq!(store.get("a.md").unwrap().interval, 1.0);
    }

    #[test]
    fn test_grading_touches_exactly_one_card() {
        let mut store = store_of(&["a.md", "b.md", "c.md"]);
        let untouched: Vec<FlashCard> = store.cards().cloned().collect();
        let deck = deck_for(&store);

        let mut session = ReviewSession::start(&deck, &mut store, &mut rng());
        let first = session.current().unwrap().path.clone();
        session.reveal();
        session.grade(Grade::Easy);
        drop(session);

        for before in untouched {
            let after = store.get(&before.path).unwrap();
            if before.path == first {
                assert_eq!(after.interval, 3.0);
                assert_eq!(after.factor, 1450.0);
            } else {
                assert_eq!(after.interval, before.interval);
                assert_eq!(after.factor, before.factor);
                assert_eq!(after.due, before.due);
            }
        }
    }

    #[test]
    fn test_full_pass_drains_queue() {
        let mut store = store_of(&["a.md", "b.md", "c.md"]);
        let deck = deck_for(&store);
        let mut session = ReviewSession::start(&deck, &mut store, &mut rng());

        assert_eq!(session.due(), 3);
        while session.state() != SessionState::Complete {
            session.reveal();
            session.grade(Grade::Pass);
        }
        drop(session);

        assert!(store.cards().all(|c| c.interval == 2.0));
    }

    #[test]
    fn test_snapshot_excludes_cards_becoming_due_mid_session() {
        let mut store = store_of(&["a.md", "b.md"]);
        // b becomes due one second into the session
        let mut b = store.get("b.md").unwrap().clone();
        b.due = Utc::now() + Duration::seconds(1);
        store.update(b);
        let deck = deck_for(&store);

        let session = ReviewSession::start(&deck, &mut store, &mut rng());
        assert_eq!(session.due(), 1);
    }

    #[test]
    fn test_reveal_is_a_no_op_outside_question_state() {
        let mut store = store_of(&["a.md"]);
        let deck = deck_for(&store);
        let mut session = ReviewSession::start(&deck, &mut store, &mut rng());

        session.grade(Grade::Pass); // ignored, answer not shown yet
        assert_eq!(session.state(), SessionState::AwaitingQuestionAck);
        session.reveal();
        session.reveal(); // ignored, already revealed
        assert_eq!(session.state(), SessionState::AwaitingGrade);
    }
}

//! mneme — spaced-repetition flashcards over a directory of markdown notes
//!
//! The library is the scheduling core; the `mneme` binary under
//! `src/bin/cli` wires it to a terminal:
//! - `notes`: scans a note directory and scrapes question/answer pairs
//! - `cards`: flashcard and deck models plus the in-memory card store
//! - `scheduler`: the interval/factor update algorithm
//! - `session`: the interactive review-session state machine
//! - `state`: the persisted state document and its on-disk storage

pub mod cards;
pub mod notes;
pub mod scheduler;
pub mod session;
pub mod state;

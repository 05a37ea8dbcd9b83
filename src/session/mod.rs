//! Interactive review-session state machine

pub mod machine;

pub use machine::{due_cards, ReviewSession, SessionState};

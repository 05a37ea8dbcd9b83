//! Session orchestration: load state, build the store and deck, run the
//! review loop (or the summary), and save on every exit path.

use std::path::Path;

use anyhow::Context;
use chrono::Utc;
use crossterm::terminal;

use mneme::cards::{CardStore, Deck};
use mneme::notes;
use mneme::session::{ReviewSession, SessionState};
use mneme::state::StateStorage;

use crate::input::{self, GradeCommand, QuestionCommand};
use crate::render::{self, Pane};

pub fn run(
    notes_dir: &Path,
    deck_tag: Option<&str>,
    summary: bool,
    content_width: usize,
) -> anyhow::Result<()> {
    let storage = StateStorage::new(notes_dir);
    let prior = storage
        .load()
        .with_context(|| format!("failed to load {}", storage.path().display()))?;

    let notes = notes::scan_notes(notes_dir)
        .with_context(|| format!("failed to scan notes in {}", notes_dir.display()))?;
    let mut store = CardStore::build(&notes, &prior.flash_cards, Utc::now())?;

    let deck = Deck::new(
        deck_tag.map(str::to_string),
        store.member_paths(deck_tag),
        prior.decks.get(deck_tag.unwrap_or("")),
    );

    if summary {
        // Read-only pass over all persisted decks, not just the active one
        render::print_summary(&prior.deck_summaries(Utc::now()));
    } else {
        review(&deck, &mut store, content_width)?;
    }

    // Quit, interrupt, empty queue, and summary all land here; no graded
    // progress is ever dropped.
    storage
        .save(&prior.merged(&store, &deck))
        .context("failed to save state")?;
    Ok(())
}

fn review(deck: &Deck, store: &mut CardStore, content_width: usize) -> anyhow::Result<()> {
    let pane = Pane::new(content_width);
    let mut rng = rand::thread_rng();
    let mut session = ReviewSession::start(deck, store, &mut rng);

    terminal::enable_raw_mode()?;
    let outcome = review_loop(&mut session, &pane);
    terminal::disable_raw_mode()?;
    pane.reset()?;

    outcome
}

/// Drive the state machine against terminal input. Quit (or Ctrl-C, which
/// the input layer folds into Quit) simply stops the loop; the caller's
/// save step runs regardless.
fn review_loop(session: &mut ReviewSession, pane: &Pane) -> anyhow::Result<()> {
    loop {
        match session.state() {
            SessionState::Complete => return Ok(()),
            SessionState::AwaitingQuestionAck => {
                let Some(card) = session.current() else {
                    return Ok(());
                };
                pane.draw_question(card, session.deck(), session.due(), session.remaining())?;
                match input::read_question_command()? {
                    QuestionCommand::Reveal => session.reveal(),
                    QuestionCommand::Quit => return Ok(()),
                }
            }
            SessionState::AwaitingGrade => {
                let Some(card) = session.current() else {
                    return Ok(());
                };
                pane.draw_answer(card, session.deck(), session.due(), session.remaining())?;
                match input::read_grade_command()? {
                    GradeCommand::Grade(grade) => session.grade(grade),
                    GradeCommand::Quit => return Ok(()),
                }
            }
        }
    }
}

//! Flashcard extraction from note files
//!
//! Expected note shape (the marker line may sit anywhere in the file):
//!
//! ```text
//! tags: :rust:ownership:
//! ---
//! The answer body, one or more lines.
//! **Q** The question line?
//! ```

use std::fs;
use std::path::Path;

use regex::Regex;
use thiserror::Error;

use super::models::{NoteFile, QuestionAnswer};

/// Literal marker that makes a note file a flashcard candidate
const QUESTION_MARKER: &str = "**Q**";

#[derive(Error, Debug)]
pub enum NoteImportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid note directory pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("Unreadable note path: {0}")]
    Glob(#[from] glob::GlobError),

    #[error("Malformed flashcard in {path}: marker present but no parseable question/answer")]
    MalformedFlashcard { path: String },
}

pub type Result<T> = std::result::Result<T, NoteImportError>;

/// Read every `*.md` file in `dir` and keep the flashcard candidates
pub fn scan_notes(dir: &Path) -> Result<Vec<NoteFile>> {
    let pattern = format!("{}/*.md", dir.display());

    let mut notes = Vec::new();
    for entry in glob::glob(&pattern)? {
        let path = entry?;
        let content = fs::read_to_string(&path)?;
        let note = NoteFile::new(path.to_string_lossy().into_owned(), content);
        if is_flash_card(&note) {
            notes.push(note);
        }
    }

    log::debug!("scanned {}: {} flashcard note(s)", dir.display(), notes.len());
    Ok(notes)
}

/// A note is a flashcard iff it contains the question marker
pub fn is_flash_card(note: &NoteFile) -> bool {
    note.content.contains(QUESTION_MARKER)
}

/// Scrape the tag list from a `tags:` line. Notes without one are untagged
/// and only reachable through the all-cards deck.
pub fn tags(note: &NoteFile) -> Vec<String> {
    let re = Regex::new(r"tags:\s(.*)").unwrap();
    match re.captures(&note.content) {
        Some(caps) => caps[1]
            .split(':')
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect(),
        None => Vec::new(),
    }
}

/// Scrape the question/answer pair out of a flashcard note.
///
/// The question is the remainder of the marker line; the answer is the
/// block between the first `---` rule and the marker. A candidate missing
/// either half is malformed, which aborts the run rather than letting a
/// half-parsed card into the store.
pub fn question_and_answer(note: &NoteFile) -> Result<QuestionAnswer> {
    let answer_re = Regex::new(r"\n---\n((?:.*\n)*?)\*\*Q\*\*").unwrap();

    let question = note
        .content
        .lines()
        .find(|l| l.contains(QUESTION_MARKER))
        .and_then(|l| l.split_once(QUESTION_MARKER))
        .map(|(_, rest)| capitalize(rest.trim()))
        .filter(|q| !q.is_empty());

    let answer = answer_re
        .captures(&note.content)
        .map(|caps| caps[1].trim().to_string())
        .filter(|a| !a.is_empty());

    match (question, answer) {
        (Some(question), Some(answer)) => Ok(QuestionAnswer { question, answer }),
        _ => Err(NoteImportError::MalformedFlashcard {
            path: note.path.clone(),
        }),
    }
}

/// Uppercase the first character, leave the rest alone
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) => c.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

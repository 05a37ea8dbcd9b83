//! Note scanning and flashcard extraction
//!
//! A note file is a flashcard candidate iff it contains the literal
//! `**Q**` marker. For each candidate the importer yields the note's
//! path, its tags, and the question/answer pair.

pub mod import;
pub mod models;

pub use import::{scan_notes, NoteImportError};
pub use models::{NoteFile, QuestionAnswer};

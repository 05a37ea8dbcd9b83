//! Data models for note scanning

/// A note file read from the flashcard directory
#[derive(Debug, Clone)]
pub struct NoteFile {
    /// Path of the file, used as the card's stable identifier
    pub path: String,
    pub content: String,
}

impl NoteFile {
    pub fn new(path: String, content: String) -> Self {
        Self { path, content }
    }
}

/// Question and answer text scraped from one note
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionAnswer {
    pub question: String,
    pub answer: String,
}

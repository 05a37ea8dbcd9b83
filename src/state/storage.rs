//! On-disk storage for the state document
//!
//! The document lives as a hidden sibling file inside the note directory.
//! A missing file is simply "no prior state"; a present-but-malformed file
//! is fatal, there is no partial recovery. Writes go to a temporary
//! sibling and are renamed over the target so an interrupted save never
//! leaves a torn document behind.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::document::StateDocument;

/// Hidden state file kept next to the notes
pub const STATE_FILE_NAME: &str = ".mneme-state.json";

#[derive(Error, Debug)]
pub enum StateStorageError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Malformed state document: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, StateStorageError>;

pub struct StateStorage {
    path: PathBuf,
}

impl StateStorage {
    pub fn new(notes_dir: &Path) -> Self {
        Self {
            path: notes_dir.join(STATE_FILE_NAME),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the prior document. A missing file yields an empty document;
    /// any other failure propagates.
    pub fn load(&self) -> Result<StateDocument> {
        match fs::read_to_string(&self.path) {
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::debug!("no state file at {}, starting empty", self.path.display());
                Ok(StateDocument::default())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Write the document as a full-file replace: serialize to a
    /// temporary sibling, then rename it over the target.
    pub fn save(&self, document: &StateDocument) -> Result<()> {
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, serde_json::to_string_pretty(document)?)?;
        fs::rename(&tmp, &self.path)?;
        log::debug!(
            "saved {} deck(s), {} card(s) to {}",
            document.decks.len(),
            document.flash_cards.len(),
            self.path.display()
        );
        Ok(())
    }
}

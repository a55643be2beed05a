//! Note definitions - entries in the notebook.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Position of a note in the notebook, starting at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NoteId(pub u32);

impl std::fmt::Display for NoteId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A discovered clue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub id: NoteId,

    /// Fully resolved clue text.
    pub text: String,

    /// Display category (e.g. "Evidence", "Motive").
    pub category: String,

    /// Informational only; ordering comes from `id`.
    pub created_at: DateTime<Utc>,
}

impl Note {
    pub(crate) fn new(id: NoteId, category: String, text: String) -> Self {
        Self {
            id,
            text,
            category,
            created_at: Utc::now(),
        }
    }

    /// Key used to detect duplicate notes.
    pub fn dedup_key(text: &str) -> String {
        text.trim().to_lowercase()
    }

    /// "3. (Motive) Kabir admitted to arguing with the victim."
    pub fn display_line(&self) -> String {
        format!("{}. ({}) {}", self.id, self.category, self.text)
    }
}

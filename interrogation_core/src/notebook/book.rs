//! Notebook - the ordered, deduplicated store of discovered clues.

use std::collections::HashSet;

use super::{Note, NoteId};

const EMPTY_NOTEBOOK: &str = "You have no clues recorded yet. Keep interrogating.";
const HEADER: &str = "=== Detective Notebook ===";
const FOOTER: &str = "==========================";

/// The player's notebook.
///
/// Notes keep insertion order and are numbered `1..N`. Numbers are never
/// reused. Two notes never share the same text, compared case-insensitively.
#[derive(Debug, Clone)]
pub struct Notebook {
    notes: Vec<Note>,

    /// Dedup keys of every stored note.
    seen: HashSet<String>,

    next_id: u32,
}

impl Default for Notebook {
    fn default() -> Self {
        Self {
            notes: Vec::new(),
            seen: HashSet::new(),
            next_id: 1,
        }
    }
}

impl Notebook {
    /// Create a new empty notebook.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a clue.
    ///
    /// Returns `None` when the text is blank or already recorded; neither is
    /// an error.
    pub fn add_note(&mut self, category: impl Into<String>, text: &str) -> Option<Note> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        if !self.seen.insert(Note::dedup_key(text)) {
            tracing::trace!(text, "duplicate note skipped");
            return None;
        }

        let note = Note::new(NoteId(self.next_id), category.into(), text.to_string());
        self.next_id += 1;
        tracing::debug!(id = note.id.0, category = %note.category, text, "note added");

        self.notes.push(note.clone());
        Some(note)
    }

    /// Whether a clue with this text (in any case) is already recorded.
    pub fn contains(&self, text: &str) -> bool {
        self.seen.contains(&Note::dedup_key(text))
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    /// All notes in insertion order.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Get a note by its number.
    pub fn get(&self, id: NoteId) -> Option<&Note> {
        self.notes.iter().find(|note| note.id == id)
    }

    /// Notes with the given display category.
    pub fn by_category<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a Note> + 'a {
        self.notes.iter().filter(move |note| note.category == category)
    }

    /// Format the notebook for the player.
    pub fn format_for_display(&self) -> String {
        if self.notes.is_empty() {
            return EMPTY_NOTEBOOK.to_string();
        }

        let mut lines = Vec::with_capacity(self.notes.len() + 2);
        lines.push(HEADER.to_string());
        lines.extend(self.notes.iter().map(Note::display_line));
        lines.push(FOOTER.to_string());
        lines.join("\n")
    }
}

impl std::fmt::Display for Notebook {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.format_for_display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_number() {
        let mut notebook = Notebook::new();
        assert!(notebook.is_empty());

        let first = notebook.add_note("Timeline", "Laptop activity at 11:14 PM").unwrap();
        let second = notebook.add_note("Evidence", "The USB drive is missing").unwrap();

        assert_eq!(first.id, NoteId(1));
        assert_eq!(second.id, NoteId(2));
        assert_eq!(notebook.len(), 2);
        assert_eq!(notebook.get(NoteId(2)).unwrap().category, "Evidence");
    }

    #[test]
    fn test_exact_duplicate() {
        let mut notebook = Notebook::new();
        assert!(notebook.add_note("Evidence", "Laptop activity at 11:14 PM").is_some());
        assert!(notebook.add_note("Evidence", "Laptop activity at 11:14 PM").is_none());
        assert_eq!(notebook.len(), 1);
    }

    #[test]
    fn test_case_insensitive_duplicate() {
        let mut notebook = Notebook::new();
        notebook.add_note("Contradiction", "Rohit lied.");
        assert!(notebook.add_note("Contradiction", "rohit lied.").is_none());
        assert!(notebook.contains("ROHIT LIED."));
        assert_eq!(notebook.len(), 1);
    }

    #[test]
    fn test_duplicate_text_under_other_category() {
        let mut notebook = Notebook::new();
        notebook.add_note("Evidence", "Mud on the sill.");
        assert!(notebook.add_note("Location", "Mud on the sill.").is_none());
        assert_eq!(notebook.len(), 1);
    }

    #[test]
    fn test_blank_text_is_a_no_op() {
        let mut notebook = Notebook::new();
        assert!(notebook.add_note("Evidence", "").is_none());
        assert!(notebook.add_note("Evidence", "   \n\t").is_none());
        assert!(notebook.is_empty());

        // rejected submissions do not consume numbers
        assert_eq!(notebook.add_note("Evidence", "Real clue").unwrap().id, NoteId(1));
    }

    #[test]
    fn test_text_is_trimmed() {
        let mut notebook = Notebook::new();
        let note = notebook.add_note("Evidence", "  Chair overturned.  ").unwrap();
        assert_eq!(note.text, "Chair overturned.");
        assert!(notebook.add_note("Evidence", "chair overturned.").is_none());
    }

    #[test]
    fn test_by_category() {
        let mut notebook = Notebook::new();
        notebook.add_note("Motive", "Audit tension.");
        notebook.add_note("Evidence", "Mud on the sill.");
        notebook.add_note("Motive", "Forged loan.");

        let motives: Vec<_> = notebook.by_category("Motive").map(|n| n.text.as_str()).collect();
        assert_eq!(motives, ["Audit tension.", "Forged loan."]);
    }

    #[test]
    fn test_format_empty() {
        assert_eq!(
            Notebook::new().format_for_display(),
            "You have no clues recorded yet. Keep interrogating."
        );
    }

    #[test]
    fn test_format_for_display() {
        let mut notebook = Notebook::new();
        notebook.add_note("Timeline", "Laptop activity at 11:14 PM");
        notebook.add_note("Emotion", "Nisha showed signs of panic or fear.");

        let expected = "=== Detective Notebook ===\n\
                        1. (Timeline) Laptop activity at 11:14 PM\n\
                        2. (Emotion) Nisha showed signs of panic or fear.\n\
                        ==========================";
        assert_eq!(notebook.format_for_display(), expected);
        assert_eq!(notebook.to_string(), expected);
    }
}

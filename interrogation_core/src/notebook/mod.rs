//! Notebook module - the player's record of discovered clues.
//!
//! The notebook consists of:
//! - **Notes**: Resolved clue text with a display category and creation order
//! - **Book**: The ordered collection, deduplicated case-insensitively on note text

mod book;
mod note;

pub use book::*;
pub use note::*;

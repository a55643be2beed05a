//! # Interrogation Core
//!
//! The engine of the interrogation game. This crate reads a `case_rules`
//! case file, decides how a suspect reacts to each player question, compiles
//! the prompt handed to an external text generator, and mines the generated
//! reply for clues.
//!
//! ## Core Components
//!
//! - **rule_table**: Ordered regex rule tables with first-match or all-match evaluation
//! - **classifier**: Maps a player question to a confrontation category
//! - **escalation**: One-way emotional tier ratchet per suspect
//! - **prompt**: Fills the master prompt template for a suspect
//! - **clues**: Extracts clues from generated replies
//! - **notebook**: Deduplicated, ordered record of discovered clues
//! - **session**: Per-player state and the turn driver tying it all together
//!
//! ## Design Philosophy
//!
//! - **Deterministic**: All classification is surface pattern matching, never semantic
//! - **Session-Scoped**: Escalation and notebook state belong to a `Session` owned by the caller
//! - **Generator-Agnostic**: The language model sits behind the `NarrativeGenerator` trait

pub mod classifier;
pub mod clues;
pub mod escalation;
pub mod notebook;
pub mod prompt;
pub mod rule_table;
pub mod session;

pub use classifier::*;
pub use clues::*;
pub use escalation::*;
pub use notebook::*;
pub use prompt::*;
pub use rule_table::*;
pub use session::*;

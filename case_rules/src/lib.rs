//! # Case Rules
//!
//! The "Case File" crate - contains the static data of an interrogation case:
//! suspect profiles, confrontation categories, clue rules and evidence areas.
//! This crate is the single source of truth for case data and does not contain
//! any interrogation logic.

pub mod case_file;
pub mod confrontation;
pub mod error;
pub mod suspects;

pub use case_file::*;
pub use confrontation::*;
pub use error::*;
pub use suspects::*;

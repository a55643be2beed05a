//! Suspect definitions for the case.

mod profile;

pub use profile::*;

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;

/// Identifier of a suspect, which is also the name they are addressed by.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SuspectId(pub String);

impl SuspectId {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SuspectId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for SuspectId {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl Borrow<str> for SuspectId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SuspectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

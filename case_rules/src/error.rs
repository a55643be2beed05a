//! Configuration errors raised by lookups into static case data.

use thiserror::Error;

use crate::confrontation::ConfrontationCategory;
use crate::suspects::SuspectId;

/// A lookup into case data failed, or the case data itself is malformed.
///
/// These always indicate an authoring bug in the case file rather than a
/// runtime condition, so callers propagate them instead of defaulting.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("unknown suspect '{0}'")]
    UnknownSuspect(SuspectId),

    #[error("duplicate suspect '{0}' in case file")]
    DuplicateSuspect(SuspectId),

    #[error("tier {tier} is out of range for '{suspect}' (max tier {max_tier})")]
    TierOutOfRange {
        suspect: SuspectId,
        tier: u8,
        max_tier: u8,
    },

    #[error("'{suspect}' declares max tier {max_tier} but describes {described} tiers")]
    IncompleteTierTable {
        suspect: SuspectId,
        max_tier: u8,
        described: usize,
    },

    #[error("'{suspect}' has no reaction for {category}")]
    MissingReaction {
        suspect: SuspectId,
        category: ConfrontationCategory,
    },

    #[error("unknown confrontation category '{0}'")]
    UnknownCategory(String),

    #[error("neutral questions cannot carry confrontation patterns")]
    NeutralPatterns,

    #[error("invalid pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    #[error("clue template '{template}' must contain exactly one {{suspect}} slot")]
    ClueTemplateSlot { template: String },

    #[error("unknown prompt template slot '{{{0}}}'")]
    UnknownTemplateSlot(String),

    #[error("unknown evidence area '{0}'")]
    UnknownEvidenceArea(String),

    #[error("duplicate evidence area '{0}' in case file")]
    DuplicateEvidenceArea(String),

    #[error("failed to read case file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse case file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Result type for case data lookups.
pub type ConfigResult<T> = std::result::Result<T, ConfigurationError>;

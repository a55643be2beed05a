//! Confrontation categories: the rhetorical strategy behind a player's question.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ConfigurationError;

/// All confrontation categories a player message can be classified into.
///
/// Variants are ordered by priority: lower-numbered categories win when a
/// message matches patterns from several categories.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ConfrontationCategory {
    /// No confrontation; an ordinary question.
    #[default]
    Neutral = 0,
    TimelineChallenge = 1,
    EvidenceConfrontation = 2,
    KnowledgeContradiction = 3,
    BehaviorContradiction = 4,
    DirectAccusation = 5,
}

impl ConfrontationCategory {
    /// Every category, in priority order.
    pub const ALL: [ConfrontationCategory; 6] = [
        ConfrontationCategory::Neutral,
        ConfrontationCategory::TimelineChallenge,
        ConfrontationCategory::EvidenceConfrontation,
        ConfrontationCategory::KnowledgeContradiction,
        ConfrontationCategory::BehaviorContradiction,
        ConfrontationCategory::DirectAccusation,
    ];

    /// The categories a classifier scans, in the order it scans them.
    pub const CHECK_ORDER: [ConfrontationCategory; 5] = [
        ConfrontationCategory::TimelineChallenge,
        ConfrontationCategory::EvidenceConfrontation,
        ConfrontationCategory::KnowledgeContradiction,
        ConfrontationCategory::BehaviorContradiction,
        ConfrontationCategory::DirectAccusation,
    ];

    /// Numeric index of the category (0 = neutral).
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Look up a category by its numeric index.
    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    /// The key used for this category in case files.
    pub fn key(self) -> &'static str {
        match self {
            ConfrontationCategory::Neutral => "neutral",
            ConfrontationCategory::TimelineChallenge => "timeline_challenge",
            ConfrontationCategory::EvidenceConfrontation => "evidence_confrontation",
            ConfrontationCategory::KnowledgeContradiction => "knowledge_contradiction",
            ConfrontationCategory::BehaviorContradiction => "behavior_contradiction",
            ConfrontationCategory::DirectAccusation => "direct_accusation",
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            ConfrontationCategory::Neutral => "Neutral question",
            ConfrontationCategory::TimelineChallenge => "Timeline challenge",
            ConfrontationCategory::EvidenceConfrontation => "Evidence confrontation",
            ConfrontationCategory::KnowledgeContradiction => "Knowledge contradiction",
            ConfrontationCategory::BehaviorContradiction => "Behavior contradiction",
            ConfrontationCategory::DirectAccusation => "Direct accusation",
        }
    }

    pub fn is_neutral(self) -> bool {
        self == ConfrontationCategory::Neutral
    }
}

impl FromStr for ConfrontationCategory {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.key() == s)
            .ok_or_else(|| ConfigurationError::UnknownCategory(s.to_string()))
    }
}

impl std::fmt::Display for ConfrontationCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

//! Suspect profiles: who a suspect is and how they behave under pressure.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::SuspectId;
use crate::confrontation::ConfrontationCategory;
use crate::error::{ConfigResult, ConfigurationError};

/// Behavioral directive used for neutral questions, shared by every suspect.
pub const NEUTRAL_DIRECTIVE: &str = "Normal question; respond in character without escalation.";

/// Whether a suspect actually committed the crime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GuiltStatus {
    Guilty,
    Innocent,
}

impl GuiltStatus {
    /// The literal token rendered into prompts.
    pub fn token(self) -> &'static str {
        match self {
            GuiltStatus::Guilty => "GUILTY",
            GuiltStatus::Innocent => "INNOCENT",
        }
    }
}

impl From<bool> for GuiltStatus {
    fn from(is_killer: bool) -> Self {
        if is_killer {
            GuiltStatus::Guilty
        } else {
            GuiltStatus::Innocent
        }
    }
}

/// A full suspect definition.
#[derive(Debug, Clone)]
pub struct SuspectProfile {
    pub id: SuspectId,
    pub full_name: Option<String>,
    pub role: String,
    pub personality: String,
    pub public_motive: String,
    pub hidden_motives: String,
    pub is_killer: bool,

    /// Highest emotional tier this suspect can reach (inclusive).
    pub max_tier: u8,

    /// Tier index -> behavioral description.
    tiers: Vec<String>,

    /// Reaction text for each non-neutral confrontation category.
    reactions: HashMap<ConfrontationCategory, String>,
}

impl SuspectProfile {
    /// Create a new, empty profile for the given suspect.
    pub fn new(id: impl Into<SuspectId>) -> Self {
        Self {
            id: id.into(),
            full_name: None,
            role: String::new(),
            personality: String::new(),
            public_motive: String::new(),
            hidden_motives: String::new(),
            is_killer: false,
            max_tier: 0,
            tiers: Vec::new(),
            reactions: HashMap::new(),
        }
    }

    pub fn with_full_name(mut self, full_name: impl Into<String>) -> Self {
        self.full_name = Some(full_name.into());
        self
    }

    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into();
        self
    }

    pub fn with_personality(mut self, personality: impl Into<String>) -> Self {
        self.personality = personality.into();
        self
    }

    pub fn with_public_motive(mut self, motive: impl Into<String>) -> Self {
        self.public_motive = motive.into();
        self
    }

    pub fn with_hidden_motives(mut self, motives: impl Into<String>) -> Self {
        self.hidden_motives = motives.into();
        self
    }

    pub fn with_guilt(mut self, is_killer: bool) -> Self {
        self.is_killer = is_killer;
        self
    }

    /// Set the tier table. The maximum tier becomes the last index.
    pub fn with_tiers<I, S>(mut self, tiers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tiers = tiers.into_iter().map(Into::into).collect();
        self.max_tier = u8::try_from(self.tiers.len().saturating_sub(1)).unwrap_or(u8::MAX);
        self
    }

    /// Override the declared maximum tier.
    pub fn with_max_tier(mut self, max_tier: u8) -> Self {
        self.max_tier = max_tier;
        self
    }

    pub fn with_reaction(
        mut self,
        category: ConfrontationCategory,
        text: impl Into<String>,
    ) -> Self {
        self.reactions.insert(category, text.into());
        self
    }

    /// Name shown to the player.
    pub fn display_name(&self) -> &str {
        self.id.as_str()
    }

    pub fn guilt(&self) -> GuiltStatus {
        GuiltStatus::from(self.is_killer)
    }

    /// Behavioral description for a tier.
    pub fn tier_description(&self, tier: u8) -> ConfigResult<&str> {
        if tier > self.max_tier {
            return Err(ConfigurationError::TierOutOfRange {
                suspect: self.id.clone(),
                tier,
                max_tier: self.max_tier,
            });
        }
        self.tiers
            .get(tier as usize)
            .map(String::as_str)
            .ok_or_else(|| self.incomplete_tiers())
    }

    /// Reaction text for a confrontation category.
    ///
    /// Neutral questions always resolve to [`NEUTRAL_DIRECTIVE`].
    pub fn reaction(&self, category: ConfrontationCategory) -> ConfigResult<&str> {
        if category.is_neutral() {
            return Ok(NEUTRAL_DIRECTIVE);
        }
        self.reactions
            .get(&category)
            .map(String::as_str)
            .ok_or_else(|| ConfigurationError::MissingReaction {
                suspect: self.id.clone(),
                category,
            })
    }

    /// One-line roster entry, e.g. "Nisha Mehta – Wife (boutique owner)".
    pub fn roster_line(&self) -> String {
        format!(
            "{} – {}",
            self.full_name.as_deref().unwrap_or(self.id.as_str()),
            self.role
        )
    }

    /// Check that every tier up to `max_tier` is described and every
    /// non-neutral category has a reaction.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.tiers.len() != self.max_tier as usize + 1 {
            return Err(self.incomplete_tiers());
        }
        for category in ConfrontationCategory::CHECK_ORDER {
            self.reaction(category)?;
        }
        Ok(())
    }

    fn incomplete_tiers(&self) -> ConfigurationError {
        ConfigurationError::IncompleteTierTable {
            suspect: self.id.clone(),
            max_tier: self.max_tier,
            described: self.tiers.len(),
        }
    }
}

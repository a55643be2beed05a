//! Raw case-file records as authored in TOML.

use serde::Deserialize;
use std::collections::BTreeMap;

use super::{CaseBrief, ClueRule, EvidenceArea, PatternSet};
use crate::confrontation::ConfrontationCategory;
use crate::error::{ConfigResult, ConfigurationError};
use crate::suspects::{SuspectId, SuspectProfile};

#[derive(Debug, Deserialize)]
pub(crate) struct CaseFileRecord {
    pub title: String,
    pub brief: CaseBrief,
    #[serde(default)]
    pub suspects: Vec<SuspectRecord>,
    #[serde(default)]
    pub confrontations: Vec<ConfrontationRecord>,
    #[serde(default)]
    pub clue_rules: Vec<ClueRule>,
    #[serde(default)]
    pub evidence: Vec<EvidenceArea>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SuspectRecord {
    pub id: SuspectId,
    pub full_name: Option<String>,
    pub role: String,
    pub personality: String,
    pub public_motive: String,
    pub hidden_motives: String,
    #[serde(default)]
    pub is_killer: bool,
    pub max_tier: u8,
    pub tiers: Vec<String>,
    /// Category key -> reaction text.
    #[serde(default)]
    pub reactions: BTreeMap<String, String>,
}

impl TryFrom<SuspectRecord> for SuspectProfile {
    type Error = ConfigurationError;

    fn try_from(record: SuspectRecord) -> ConfigResult<Self> {
        let mut profile = SuspectProfile::new(record.id)
            .with_role(record.role)
            .with_personality(record.personality)
            .with_public_motive(record.public_motive)
            .with_hidden_motives(record.hidden_motives)
            .with_guilt(record.is_killer)
            .with_tiers(record.tiers)
            .with_max_tier(record.max_tier);
        if let Some(full_name) = record.full_name {
            profile = profile.with_full_name(full_name);
        }
        for (key, text) in record.reactions {
            let category: ConfrontationCategory = key.parse()?;
            if category.is_neutral() {
                return Err(ConfigurationError::UnknownCategory(key));
            }
            profile = profile.with_reaction(category, text);
        }
        Ok(profile)
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ConfrontationRecord {
    pub category: String,
    #[serde(default)]
    pub patterns: Vec<String>,
}

impl TryFrom<ConfrontationRecord> for PatternSet {
    type Error = ConfigurationError;

    fn try_from(record: ConfrontationRecord) -> ConfigResult<Self> {
        let category: ConfrontationCategory = record.category.parse()?;
        if category.is_neutral() {
            return Err(ConfigurationError::NeutralPatterns);
        }
        Ok(PatternSet {
            category,
            patterns: record.patterns,
        })
    }
}

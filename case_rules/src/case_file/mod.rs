//! The case file - the central structure holding all static case data.

mod record;

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use crate::confrontation::ConfrontationCategory;
use crate::error::{ConfigResult, ConfigurationError};
use crate::suspects::SuspectProfile;
use record::CaseFileRecord;

/// TOML source of the built-in clinic case.
pub const CLINIC_CASE: &str = include_str!("../../data/clinic_case.toml");

/// Background facts of the case, shared by every suspect's prompt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseBrief {
    pub victim: String,
    pub scene: String,
    /// Evidence known at the start of the investigation.
    #[serde(default)]
    pub evidence: Vec<String>,
    pub discovered_at: String,
    pub fatal_injury_at: String,
}

impl CaseBrief {
    /// Render the brief as the case-background section of a prompt.
    pub fn background(&self) -> String {
        let mut text = format!("Victim: {}\nScene: {}", self.victim, self.scene);
        if !self.evidence.is_empty() {
            text.push_str(" Evidence includes:");
            for item in &self.evidence {
                text.push_str("\n- ");
                text.push_str(item);
            }
        }
        text.push_str(&format!(
            "\n\nTime: Body discovered at {}.\nEstimated fatal injury time: {}.",
            self.discovered_at, self.fatal_injury_at
        ));
        text
    }
}

/// Ordered regex patterns that identify one confrontation category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternSet {
    pub category: ConfrontationCategory,
    pub patterns: Vec<String>,
}

impl PatternSet {
    pub fn new<I, S>(category: ConfrontationCategory, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            category,
            patterns: patterns.into_iter().map(Into::into).collect(),
        }
    }
}

/// A rule that turns a matching reply into a notebook entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClueRule {
    /// Display category of the resulting note (e.g. "Evidence").
    pub category: String,
    pub patterns: Vec<String>,
    /// Message with exactly one `{suspect}` slot.
    pub template: String,
}

impl ClueRule {
    /// Placeholder replaced by the suspect's display name.
    pub const SLOT: &'static str = "{suspect}";

    pub fn new<I, S>(category: impl Into<String>, patterns: I, template: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            category: category.into(),
            patterns: patterns.into_iter().map(Into::into).collect(),
            template: template.into(),
        }
    }

    /// Fill the template with a suspect's display name.
    pub fn render(&self, suspect: &str) -> String {
        self.template.replacen(Self::SLOT, suspect, 1)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.template.matches(Self::SLOT).count() != 1 {
            return Err(ConfigurationError::ClueTemplateSlot {
                template: self.template.clone(),
            });
        }
        Ok(())
    }
}

/// A single fact discovered by examining an evidence area.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub text: String,
    pub category: String,
}

/// A static piece of the crime scene the player can examine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvidenceArea {
    pub key: String,
    pub title: String,
    #[serde(default)]
    pub findings: Vec<Finding>,
}

/// The complete static data of a case. Loaded once and never mutated.
#[derive(Debug, Clone)]
pub struct CaseFile {
    pub title: String,
    pub brief: CaseBrief,

    /// Suspects in authoring order.
    pub suspects: Vec<SuspectProfile>,

    /// Confrontation patterns, in authoring order.
    pub confrontations: Vec<PatternSet>,

    pub clue_rules: Vec<ClueRule>,

    pub evidence: Vec<EvidenceArea>,
}

impl CaseFile {
    /// Create an empty case with the given title and brief.
    pub fn new(title: impl Into<String>, brief: CaseBrief) -> Self {
        Self {
            title: title.into(),
            brief,
            suspects: Vec::new(),
            confrontations: Vec::new(),
            clue_rules: Vec::new(),
            evidence: Vec::new(),
        }
    }

    /// The built-in clinic murder case.
    pub fn clinic() -> ConfigResult<Self> {
        Self::from_toml_str(CLINIC_CASE)
    }

    /// Read and validate a case file from disk.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let case = Self::from_toml_str(&text)?;
        tracing::info!(
            path = %path.display(),
            title = %case.title,
            suspects = case.suspects.len(),
            "case file loaded"
        );
        Ok(case)
    }

    /// Parse and validate a case file from TOML text.
    pub fn from_toml_str(text: &str) -> ConfigResult<Self> {
        let record: CaseFileRecord = toml::from_str(text)?;

        let case = Self {
            title: record.title,
            brief: record.brief,
            suspects: record
                .suspects
                .into_iter()
                .map(SuspectProfile::try_from)
                .collect::<ConfigResult<_>>()?,
            confrontations: record
                .confrontations
                .into_iter()
                .map(PatternSet::try_from)
                .collect::<ConfigResult<_>>()?,
            clue_rules: record.clue_rules,
            evidence: record.evidence,
        };
        case.validate()?;

        tracing::debug!(
            title = %case.title,
            suspects = case.suspects.len(),
            clue_rules = case.clue_rules.len(),
            evidence = case.evidence.len(),
            "case file parsed"
        );
        Ok(case)
    }

    pub fn with_suspect(mut self, profile: SuspectProfile) -> Self {
        self.suspects.push(profile);
        self
    }

    pub fn with_patterns(mut self, patterns: PatternSet) -> Self {
        self.confrontations.push(patterns);
        self
    }

    pub fn with_clue_rule(mut self, rule: ClueRule) -> Self {
        self.clue_rules.push(rule);
        self
    }

    pub fn with_evidence(mut self, area: EvidenceArea) -> Self {
        self.evidence.push(area);
        self
    }

    /// Check everything the interrogation engine relies on.
    ///
    /// Regex syntax is checked when the engine compiles its rule tables.
    pub fn validate(&self) -> ConfigResult<()> {
        let mut seen = HashSet::new();
        for profile in &self.suspects {
            if !seen.insert(&profile.id) {
                return Err(ConfigurationError::DuplicateSuspect(profile.id.clone()));
            }
            profile.validate()?;
        }

        if self.confrontations.iter().any(|set| set.category.is_neutral()) {
            return Err(ConfigurationError::NeutralPatterns);
        }

        for rule in &self.clue_rules {
            rule.validate()?;
        }

        let mut keys = HashSet::new();
        for area in &self.evidence {
            if !keys.insert(area.key.as_str()) {
                return Err(ConfigurationError::DuplicateEvidenceArea(area.key.clone()));
            }
        }
        Ok(())
    }

    /// Suspects in authoring order.
    pub fn suspects(&self) -> impl Iterator<Item = &SuspectProfile> {
        self.suspects.iter()
    }

    /// Get a suspect profile by identifier.
    pub fn suspect(&self, id: &str) -> ConfigResult<&SuspectProfile> {
        self.suspects
            .iter()
            .find(|profile| profile.id.as_str() == id)
            .ok_or_else(|| ConfigurationError::UnknownSuspect(id.into()))
    }

    /// The suspect who actually committed the crime, if the case names one.
    pub fn killer(&self) -> Option<&SuspectProfile> {
        self.suspects.iter().find(|profile| profile.is_killer)
    }

    /// Patterns for one category, concatenated across every set that names it.
    pub fn patterns_for(&self, category: ConfrontationCategory) -> Vec<&str> {
        self.confrontations
            .iter()
            .filter(|set| set.category == category)
            .flat_map(|set| set.patterns.iter().map(String::as_str))
            .collect()
    }

    /// Get an evidence area by key.
    pub fn evidence_area(&self, key: &str) -> ConfigResult<&EvidenceArea> {
        self.evidence
            .iter()
            .find(|area| area.key == key)
            .ok_or_else(|| ConfigurationError::UnknownEvidenceArea(key.to_string()))
    }
}

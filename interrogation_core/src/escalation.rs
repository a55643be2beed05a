//! Emotional escalation - a one-way tier ratchet per suspect.

use case_rules::{CaseFile, ConfigResult, ConfigurationError, SuspectId};
use std::collections::HashMap;

/// Current emotional tier of every suspect in a session.
///
/// Suspects start at tier 0. Only [`EscalationTracker`] changes a tier, and
/// only upwards.
#[derive(Debug, Clone, Default)]
pub struct EscalationState {
    tiers: HashMap<SuspectId, u8>,
}

impl EscalationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current tier of a suspect (0 if never escalated).
    pub fn tier(&self, suspect: &str) -> u8 {
        self.tiers.get(suspect).copied().unwrap_or(0)
    }

    /// Iterate over every suspect that has been escalated at least once.
    pub fn iter(&self) -> impl Iterator<Item = (&SuspectId, u8)> {
        self.tiers.iter().map(|(id, tier)| (id, *tier))
    }
}

/// Advances suspects' tiers, clamped to each suspect's ceiling.
#[derive(Debug, Clone)]
pub struct EscalationTracker {
    ceilings: HashMap<SuspectId, u8>,
}

impl EscalationTracker {
    /// Build the tracker from every suspect's maximum tier.
    pub fn from_case(case: &CaseFile) -> Self {
        Self {
            ceilings: case
                .suspects()
                .map(|profile| (profile.id.clone(), profile.max_tier))
                .collect(),
        }
    }

    /// Maximum tier of a suspect.
    pub fn max_tier(&self, suspect: &str) -> ConfigResult<u8> {
        self.ceilings
            .get(suspect)
            .copied()
            .ok_or_else(|| ConfigurationError::UnknownSuspect(suspect.into()))
    }

    /// Next tier after `current`: one higher, but never past the ceiling.
    ///
    /// At the ceiling this is a no-op. A `current` tier above the ceiling is
    /// itself invalid and is reported as out of range.
    pub fn advance(&self, suspect: &str, current: u8) -> ConfigResult<u8> {
        let max_tier = self.max_tier(suspect)?;
        if current > max_tier {
            return Err(ConfigurationError::TierOutOfRange {
                suspect: suspect.into(),
                tier: current,
                max_tier,
            });
        }
        Ok(current.saturating_add(1).min(max_tier))
    }

    /// Advance a suspect's tier within a session and return the new tier.
    pub fn escalate(&self, state: &mut EscalationState, suspect: &str) -> ConfigResult<u8> {
        let current = state.tier(suspect);
        let next = self.advance(suspect, current)?;
        if next != current {
            tracing::debug!(suspect, from = current, to = next, "suspect escalated");
        }
        state.tiers.insert(suspect.into(), next);
        Ok(next)
    }
}

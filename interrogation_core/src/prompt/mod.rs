//! Prompt Compiler - fills the master template for one suspect and one question.
//!
//! Compilation works as follows:
//! 1. **Profile**: Look up the suspect's profile
//! 2. **Tier**: Resolve the description of the current emotional tier
//! 3. **Reaction**: Resolve the reaction to the question's confrontation category
//! 4. **Fields**: Gather every named slot into a [`PromptFields`] record
//! 5. **Render**: Substitute the record into the template in a single pass
//!
//! The player message is inserted verbatim. Nothing is escaped or truncated.

mod template;

pub use template::*;

use case_rules::{CaseFile, ConfigResult, ConfrontationCategory, GuiltStatus};
use std::borrow::Cow;

/// Every value a prompt template can ask for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptFields<'a> {
    pub suspect_name: &'a str,
    pub role: &'a str,
    pub personality: &'a str,
    pub public_motive: &'a str,
    pub hidden_motives: &'a str,
    pub guilt: GuiltStatus,
    pub current_tier: u8,
    pub tier_description: &'a str,
    pub confrontation_behavior: &'a str,
    pub player_message: &'a str,
    pub case_background: Cow<'a, str>,
}

impl<'a> PromptFields<'a> {
    /// The rendered value of a slot.
    pub fn value(&self, slot: Slot) -> Cow<'a, str> {
        match slot {
            Slot::SuspectName => Cow::Borrowed(self.suspect_name),
            Slot::Role => Cow::Borrowed(self.role),
            Slot::Personality => Cow::Borrowed(self.personality),
            Slot::PublicMotive => Cow::Borrowed(self.public_motive),
            Slot::HiddenMotives => Cow::Borrowed(self.hidden_motives),
            Slot::Guilt => Cow::Borrowed(self.guilt.token()),
            Slot::CurrentTier => Cow::Owned(self.current_tier.to_string()),
            Slot::TierDescription => Cow::Borrowed(self.tier_description),
            Slot::ConfrontationBehavior => Cow::Borrowed(self.confrontation_behavior),
            Slot::PlayerMessage => Cow::Borrowed(self.player_message),
            Slot::CaseBackground => self.case_background.clone(),
        }
    }
}

/// Renders suspect prompts from a case file.
#[derive(Debug, Clone, Default)]
pub struct PromptCompiler {
    template: PromptTemplate,
}

impl PromptCompiler {
    /// Create a compiler using the master template.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a compiler using a custom template.
    pub fn with_template(template: PromptTemplate) -> Self {
        Self { template }
    }

    pub fn template(&self) -> &PromptTemplate {
        &self.template
    }

    /// Resolve every template field for a suspect, tier and category.
    pub fn fields<'a>(
        &self,
        case: &'a CaseFile,
        suspect: &str,
        tier: u8,
        category: ConfrontationCategory,
        player_message: &'a str,
    ) -> ConfigResult<PromptFields<'a>> {
        let profile = case.suspect(suspect)?;
        Ok(PromptFields {
            suspect_name: profile.display_name(),
            role: &profile.role,
            personality: &profile.personality,
            public_motive: &profile.public_motive,
            hidden_motives: &profile.hidden_motives,
            guilt: profile.guilt(),
            current_tier: tier,
            tier_description: profile.tier_description(tier)?,
            confrontation_behavior: profile.reaction(category)?,
            player_message,
            case_background: Cow::Owned(case.brief.background()),
        })
    }

    /// Compile the full prompt text. Pure: identical inputs give identical output.
    pub fn compile(
        &self,
        case: &CaseFile,
        suspect: &str,
        tier: u8,
        category: ConfrontationCategory,
        player_message: &str,
    ) -> ConfigResult<String> {
        let fields = self.fields(case, suspect, tier, category, player_message)?;
        Ok(self.render(&fields))
    }

    /// Render an already resolved field record.
    pub fn render(&self, fields: &PromptFields<'_>) -> String {
        self.template.render_with(|slot| fields.value(slot))
    }
}

//! Prompt templates with named `{SLOT}` placeholders.

use case_rules::{ConfigResult, ConfigurationError};

/// The master prompt every suspect is played with.
pub const MASTER_TEMPLATE: &str = "\
You are roleplaying as {SUSPECT_NAME}, a suspect in a murder mystery case.
Stay in first person at all times. Never break character.

==============================
CASE BACKGROUND
==============================
{CASE_BACKGROUND}

==============================
YOUR CHARACTER PROFILE
==============================
Name: {SUSPECT_NAME}
Role: {ROLE}
Personality: {PERSONALITY_DESCRIPTION}
Public Motive: {PUBLIC_MOTIVE}
Hidden Motives/Secrets: {HIDDEN_MOTIVES}
Guilt Truth: {GUILTY_OR_INNOCENT}
Emotional Tier: {CURRENT_EMOTIONAL_TIER}

==============================
EMOTIONAL TIER DESCRIPTION
==============================
{EMOTIONAL_TIER_DESCRIPTION}

==============================
HOW YOU REACT TO CONFRONTATION
==============================
{CONFRONTATION_BEHAVIOR_DESCRIPTION}

==============================
RESPONSE STYLE
==============================
- Speak in 2–5 sentences only.
- Natural emotional dialogue.
- Stay fully in character.
- Never confess the murder directly.
- If innocent, you may confess unrelated secrets under pressure.
- If guilty, hide it but let small cracks appear under pressure.

==============================
PLAYER QUESTION
==============================
{PLAYER_MESSAGE}

Now respond as {SUSPECT_NAME}.
";

/// A named placeholder in a prompt template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    SuspectName,
    Role,
    Personality,
    PublicMotive,
    HiddenMotives,
    Guilt,
    CurrentTier,
    TierDescription,
    ConfrontationBehavior,
    PlayerMessage,
    CaseBackground,
}

impl Slot {
    pub const ALL: [Slot; 11] = [
        Slot::SuspectName,
        Slot::Role,
        Slot::Personality,
        Slot::PublicMotive,
        Slot::HiddenMotives,
        Slot::Guilt,
        Slot::CurrentTier,
        Slot::TierDescription,
        Slot::ConfrontationBehavior,
        Slot::PlayerMessage,
        Slot::CaseBackground,
    ];

    /// The name written between braces in a template.
    pub fn name(self) -> &'static str {
        match self {
            Slot::SuspectName => "SUSPECT_NAME",
            Slot::Role => "ROLE",
            Slot::Personality => "PERSONALITY_DESCRIPTION",
            Slot::PublicMotive => "PUBLIC_MOTIVE",
            Slot::HiddenMotives => "HIDDEN_MOTIVES",
            Slot::Guilt => "GUILTY_OR_INNOCENT",
            Slot::CurrentTier => "CURRENT_EMOTIONAL_TIER",
            Slot::TierDescription => "EMOTIONAL_TIER_DESCRIPTION",
            Slot::ConfrontationBehavior => "CONFRONTATION_BEHAVIOR_DESCRIPTION",
            Slot::PlayerMessage => "PLAYER_MESSAGE",
            Slot::CaseBackground => "CASE_BACKGROUND",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|slot| slot.name() == name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Slot(Slot),
}

/// A parsed template: literal text interleaved with slots.
///
/// Rendering is a single pass over the segments, so substituted values are
/// never scanned for further placeholders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptTemplate {
    segments: Vec<Segment>,
}

impl PromptTemplate {
    /// The built-in master template.
    pub fn master() -> Self {
        let (segments, _) = scan(MASTER_TEMPLATE);
        Self { segments }
    }

    /// Parse a custom template.
    ///
    /// `{UPPER_CASE}` tokens must name a known [`Slot`]. Braces around
    /// anything else are kept as literal text.
    pub fn parse(text: &str) -> ConfigResult<Self> {
        let (segments, unknown) = scan(text);
        if let Some(name) = unknown.into_iter().next() {
            return Err(ConfigurationError::UnknownTemplateSlot(name));
        }
        Ok(Self { segments })
    }

    /// Slots in order of appearance (repeats included).
    pub fn slots(&self) -> impl Iterator<Item = Slot> + '_ {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Slot(slot) => Some(*slot),
            Segment::Literal(_) => None,
        })
    }

    /// Render the template, asking `value` for each slot.
    pub fn render_with<'v, F>(&self, mut value: F) -> String
    where
        F: FnMut(Slot) -> std::borrow::Cow<'v, str>,
    {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Slot(slot) => out.push_str(&value(*slot)),
            }
        }
        out
    }
}

impl Default for PromptTemplate {
    fn default() -> Self {
        Self::master()
    }
}

/// Split template text into segments, collecting unknown slot names.
fn scan(text: &str) -> (Vec<Segment>, Vec<String>) {
    let mut segments = Vec::new();
    let mut unknown = Vec::new();
    let mut literal = String::new();
    let mut rest = text;

    while let Some(open) = rest.find('{') {
        literal.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let name = after
            .find('}')
            .map(|close| &after[..close])
            .filter(|name| is_slot_name(name));

        match name {
            Some(name) => {
                match Slot::from_name(name) {
                    Some(slot) => {
                        if !literal.is_empty() {
                            segments.push(Segment::Literal(std::mem::take(&mut literal)));
                        }
                        segments.push(Segment::Slot(slot));
                    }
                    None => {
                        unknown.push(name.to_string());
                        literal.push('{');
                        literal.push_str(name);
                        literal.push('}');
                    }
                }
                rest = &after[name.len() + 1..];
            }
            None => {
                literal.push('{');
                rest = after;
            }
        }
    }

    literal.push_str(rest);
    if !literal.is_empty() {
        segments.push(Segment::Literal(literal));
    }
    (segments, unknown)
}

fn is_slot_name(name: &str) -> bool {
    name.starts_with(|c: char| c.is_ascii_uppercase())
        && name
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
}

//! Sessions and the turn driver.
//!
//! A turn runs strictly in order:
//! 1. **Classify** the player's question
//! 2. **Escalate** the suspect's emotional tier (every turn, neutral ones included)
//! 3. **Compile** the prompt
//! 4. **Generate** the reply through a [`NarrativeGenerator`]
//! 5. **Extract** clues from the reply into the session notebook

use case_rules::{
    CaseFile, ConfigResult, ConfigurationError, ConfrontationCategory, SuspectId,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::classifier::ConfrontationClassifier;
use crate::clues::ClueExtractor;
use crate::escalation::{EscalationState, EscalationTracker};
use crate::notebook::{Note, Notebook};
use crate::prompt::{PromptCompiler, PromptTemplate};

/// Unique identifier for sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub Uuid);

impl SessionId {
    /// Create a new random session ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The external text generator failed to produce a reply.
#[derive(Debug, Error)]
#[error("narrative generation failed: {message}")]
pub struct GenerationError {
    pub message: String,
}

impl GenerationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Errors that abort a turn.
#[derive(Debug, Error)]
pub enum TurnError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error(transparent)]
    Generation(#[from] GenerationError),
}

/// The external language model: one prompt in, one reply out.
pub trait NarrativeGenerator {
    fn generate(&mut self, prompt: &str) -> Result<String, GenerationError>;
}

impl<F> NarrativeGenerator for F
where
    F: FnMut(&str) -> Result<String, GenerationError>,
{
    fn generate(&mut self, prompt: &str) -> Result<String, GenerationError> {
        self(prompt)
    }
}

/// Mutable state of one player's game.
#[derive(Debug, Clone, Default)]
pub struct Session {
    id: SessionId,
    pub(crate) escalation: EscalationState,
    pub(crate) notebook: Notebook,
}

impl Session {
    /// Start a fresh session: every suspect at tier 0, empty notebook.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn escalation(&self) -> &EscalationState {
        &self.escalation
    }

    pub fn notebook(&self) -> &Notebook {
        &self.notebook
    }

    /// Current tier of a suspect in this session.
    pub fn tier(&self, suspect: &str) -> u8 {
        self.escalation.tier(suspect)
    }
}

/// A turn that has been classified, escalated and compiled, awaiting a reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedTurn {
    pub suspect: SuspectId,
    pub category: ConfrontationCategory,
    pub tier: u8,
    pub prompt: String,
}

/// Everything a completed turn produced.
#[derive(Debug, Clone)]
pub struct TurnOutcome {
    pub category: ConfrontationCategory,
    pub tier: u8,
    pub prompt: String,
    pub reply: String,
    pub new_notes: Vec<Note>,
}

/// Result of accusing a suspect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub accused: SuspectId,
    pub killer: Option<SuspectId>,
}

impl Verdict {
    pub fn is_correct(&self) -> bool {
        self.killer.as_ref() == Some(&self.accused)
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.killer {
            Some(killer) if *killer == self.accused => {
                write!(f, "Correct! {} was indeed the killer.", self.accused)
            }
            Some(killer) => write!(
                f,
                "Wrong! You accused {}, but the real killer was {}.",
                self.accused, killer
            ),
            None => write!(
                f,
                "Wrong! You accused {}, but no suspect was the killer.",
                self.accused
            ),
        }
    }
}

/// The interrogation engine for one case.
///
/// Immutable once built; any number of sessions can share it.
#[derive(Debug, Clone)]
pub struct Interrogation {
    case: CaseFile,
    classifier: ConfrontationClassifier,
    tracker: EscalationTracker,
    compiler: PromptCompiler,
    extractor: ClueExtractor,
}

impl Interrogation {
    /// Validate the case and compile every engine with the master template.
    pub fn new(case: CaseFile) -> ConfigResult<Self> {
        Self::with_template(case, PromptTemplate::master())
    }

    /// Validate the case and compile every engine with a custom template.
    pub fn with_template(case: CaseFile, template: PromptTemplate) -> ConfigResult<Self> {
        case.validate()?;
        Ok(Self {
            classifier: ConfrontationClassifier::from_case(&case)?,
            tracker: EscalationTracker::from_case(&case),
            compiler: PromptCompiler::with_template(template),
            extractor: ClueExtractor::from_case(&case)?,
            case,
        })
    }

    /// The built-in clinic case.
    pub fn clinic() -> ConfigResult<Self> {
        Self::new(CaseFile::clinic()?)
    }

    pub fn case(&self) -> &CaseFile {
        &self.case
    }

    pub fn classifier(&self) -> &ConfrontationClassifier {
        &self.classifier
    }

    pub fn tracker(&self) -> &EscalationTracker {
        &self.tracker
    }

    pub fn compiler(&self) -> &PromptCompiler {
        &self.compiler
    }

    pub fn extractor(&self) -> &ClueExtractor {
        &self.extractor
    }

    /// Classify, escalate and compile one player question.
    ///
    /// An unknown suspect fails before any state changes.
    pub fn begin_turn(
        &self,
        session: &mut Session,
        suspect: &str,
        message: &str,
    ) -> ConfigResult<PreparedTurn> {
        let profile = self.case.suspect(suspect)?;

        let category = self.classifier.classify(message);
        let tier = self.tracker.escalate(&mut session.escalation, suspect)?;
        let prompt = self
            .compiler
            .compile(&self.case, suspect, tier, category, message)?;

        Ok(PreparedTurn {
            suspect: profile.id.clone(),
            category,
            tier,
            prompt,
        })
    }

    /// Extract clues from a suspect's reply into the session notebook.
    pub fn finish_turn(
        &self,
        session: &mut Session,
        suspect: &str,
        reply: &str,
    ) -> ConfigResult<Vec<Note>> {
        let profile = self.case.suspect(suspect)?;
        Ok(self
            .extractor
            .extract(&mut session.notebook, profile.display_name(), reply))
    }

    /// Play a full turn against a generator.
    ///
    /// If the generator fails the turn is aborted: the tier advance stays in
    /// place and no clues are extracted.
    pub fn take_turn<G>(
        &self,
        session: &mut Session,
        suspect: &str,
        message: &str,
        generator: &mut G,
    ) -> Result<TurnOutcome, TurnError>
    where
        G: NarrativeGenerator + ?Sized,
    {
        let prepared = self.begin_turn(session, suspect, message)?;

        let reply = generator.generate(&prepared.prompt).map_err(|e| {
            tracing::warn!(session = %session.id, suspect, error = %e, "turn aborted");
            e
        })?;

        let new_notes = self.finish_turn(session, suspect, &reply)?;
        tracing::info!(
            session = %session.id,
            suspect,
            category = prepared.category.key(),
            tier = prepared.tier,
            new_notes = new_notes.len(),
            "turn complete"
        );

        Ok(TurnOutcome {
            category: prepared.category,
            tier: prepared.tier,
            prompt: prepared.prompt,
            reply,
            new_notes,
        })
    }

    /// Examine an evidence area, recording its findings in the notebook.
    pub fn examine(&self, session: &mut Session, area: &str) -> ConfigResult<Vec<Note>> {
        let area = self.case.evidence_area(area)?;
        let added: Vec<Note> = area
            .findings
            .iter()
            .filter_map(|finding| {
                session
                    .notebook
                    .add_note(finding.category.clone(), &finding.text)
            })
            .collect();
        tracing::info!(
            session = %session.id,
            area = %area.key,
            new_notes = added.len(),
            "evidence examined"
        );
        Ok(added)
    }

    /// Accuse a suspect of the crime.
    pub fn accuse(&self, suspect: &str) -> ConfigResult<Verdict> {
        let accused = self.case.suspect(suspect)?;
        Ok(Verdict {
            accused: accused.id.clone(),
            killer: self.case.killer().map(|profile| profile.id.clone()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn echo(reply: &'static str) -> impl FnMut(&str) -> Result<String, GenerationError> {
        move |_| Ok(reply.to_string())
    }

    #[test]
    fn test_session_ids_are_unique() {
        assert_ne!(Session::new().id(), Session::new().id());
    }

    #[test]
    fn test_begin_turn() {
        let game = Interrogation::clinic().unwrap();
        let mut session = Session::new();

        let turn = game
            .begin_turn(&mut session, "Rohit", "Where were you at 11 PM?")
            .unwrap();

        assert_eq!(turn.suspect, SuspectId::from("Rohit"));
        assert_eq!(turn.category, ConfrontationCategory::TimelineChallenge);
        assert_eq!(turn.tier, 1);
        assert_eq!(session.tier("Rohit"), 1);
    }

    #[test]
    fn test_unknown_suspect_changes_nothing() {
        let game = Interrogation::clinic().unwrap();
        let mut session = Session::new();

        let err = game.begin_turn(&mut session, "Watson", "Hello").unwrap_err();
        assert!(matches!(err, ConfigurationError::UnknownSuspect(_)));
        assert_eq!(session.escalation().iter().count(), 0);
    }

    #[test]
    fn test_take_turn_with_closure_generator() {
        let game = Interrogation::clinic().unwrap();
        let mut session = Session::new();
        let mut generator = echo("I was at the clinic, yes. I panicked.");

        let outcome = game
            .take_turn(&mut session, "Nisha", "Tell me about that night.", &mut generator)
            .unwrap();

        assert_eq!(outcome.category, ConfrontationCategory::Neutral);
        assert_eq!(outcome.tier, 1);
        assert_eq!(outcome.new_notes.len(), 2);
        assert_eq!(session.notebook().len(), 2);
    }

    #[test]
    fn test_examine_records_findings_once() {
        let game = Interrogation::clinic().unwrap();
        let mut session = Session::new();

        let first = game.examine(&mut session, "window").unwrap();
        assert_eq!(first.len(), 3);
        assert_eq!(first[0].category, "Location");

        assert!(game.examine(&mut session, "window").unwrap().is_empty());
        assert_eq!(session.notebook().len(), 3);

        assert!(matches!(
            game.examine(&mut session, "basement"),
            Err(ConfigurationError::UnknownEvidenceArea(_))
        ));
    }

    #[test]
    fn test_accuse() {
        let game = Interrogation::clinic().unwrap();

        let right = game.accuse("Rohit").unwrap();
        assert!(right.is_correct());
        assert_eq!(right.to_string(), "Correct! Rohit was indeed the killer.");

        let wrong = game.accuse("Kabir").unwrap();
        assert!(!wrong.is_correct());
        assert_eq!(
            wrong.to_string(),
            "Wrong! You accused Kabir, but the real killer was Rohit."
        );

        assert!(game.accuse("Watson").is_err());
    }

    #[test]
    fn test_invalid_pattern_rejected_at_build() {
        let mut case = CaseFile::clinic().unwrap();
        case.confrontations[0].patterns.push("(".to_string());
        assert!(matches!(
            Interrogation::new(case),
            Err(ConfigurationError::InvalidPattern { .. })
        ));
    }
}

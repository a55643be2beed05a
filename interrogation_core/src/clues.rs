//! Clue extraction - mines generated replies for facts worth noting.

use case_rules::{CaseFile, ClueRule, ConfigResult};

use crate::notebook::{Note, Notebook};
use crate::rule_table::{EvaluationPolicy, Rule, RuleTable};

/// Evaluates every clue rule against a reply and records what matches.
///
/// Unlike the classifier, extraction is multi-label: a single reply can
/// reveal several facts at once.
#[derive(Debug, Clone)]
pub struct ClueExtractor {
    table: RuleTable<ClueRule>,
}

impl ClueExtractor {
    /// Compile the extractor from a case file's clue rules.
    pub fn from_case(case: &CaseFile) -> ConfigResult<Self> {
        Self::from_rules(case.clue_rules.iter().cloned())
    }

    /// Compile the extractor from an explicit rule list.
    pub fn from_rules(rules: impl IntoIterator<Item = ClueRule>) -> ConfigResult<Self> {
        let mut table = RuleTable::new(EvaluationPolicy::AllMatches);
        for rule in rules {
            rule.validate()?;
            let patterns = rule.patterns.clone();
            table.push(Rule::compile(rule, patterns)?);
        }
        Ok(Self { table })
    }

    pub fn rule_count(&self) -> usize {
        self.table.len()
    }

    /// Record every clue revealed by `narrative` and return the new notes.
    ///
    /// Rules whose message is already in the notebook contribute nothing.
    /// Blank text yields no notes. Never fails.
    pub fn extract(
        &self,
        notebook: &mut Notebook,
        suspect_name: &str,
        narrative: &str,
    ) -> Vec<Note> {
        if narrative.trim().is_empty() {
            return Vec::new();
        }

        let added: Vec<Note> = self
            .table
            .evaluate(narrative)
            .into_iter()
            .filter_map(|rule| {
                notebook.add_note(rule.category.clone(), &rule.render(suspect_name))
            })
            .collect();

        if !added.is_empty() {
            tracing::debug!(suspect = suspect_name, count = added.len(), "clues extracted");
        }
        added
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use case_rules::ConfigurationError;

    fn clinic() -> ClueExtractor {
        ClueExtractor::from_case(&CaseFile::clinic().unwrap()).unwrap()
    }

    fn texts(notes: &[Note]) -> Vec<&str> {
        notes.iter().map(|n| n.text.as_str()).collect()
    }

    #[test]
    fn test_multi_label_extraction() {
        let extractor = clinic();
        let mut notebook = Notebook::new();

        let notes = extractor.extract(
            &mut notebook,
            "Nisha",
            "Fine. I was near the clinic that night. When I heard the news I panicked.",
        );

        assert_eq!(
            texts(&notes),
            [
                "Nisha admitted being at/near the clinic.",
                "Nisha showed signs of panic or fear.",
            ]
        );
        assert_eq!(notes[0].category, "Location");
        assert_eq!(notes[1].category, "Emotion");
        assert_eq!(notebook.len(), 2);
    }

    #[test]
    fn test_repeat_reply_adds_nothing() {
        let extractor = clinic();
        let mut notebook = Notebook::new();
        let reply = "I panicked and I got scared.";

        assert_eq!(extractor.extract(&mut notebook, "Kabir", reply).len(), 1);
        assert!(extractor.extract(&mut notebook, "Kabir", reply).is_empty());
        assert_eq!(notebook.len(), 1);
    }

    #[test]
    fn test_same_clue_from_different_suspects() {
        let extractor = clinic();
        let mut notebook = Notebook::new();

        extractor.extract(&mut notebook, "Kabir", "We argued about the audit.");
        extractor.extract(&mut notebook, "Nisha", "We argued about money.");

        assert_eq!(
            texts(notebook.notes()),
            [
                "Kabir admitted to arguing with the victim.",
                "Nisha admitted to arguing with the victim.",
            ]
        );
    }

    #[test]
    fn test_blank_reply() {
        let extractor = clinic();
        let mut notebook = Notebook::new();
        assert!(extractor.extract(&mut notebook, "Rohit", "").is_empty());
        assert!(extractor.extract(&mut notebook, "Rohit", "  \n ").is_empty());
        assert!(notebook.is_empty());
    }

    #[test]
    fn test_reply_case_is_ignored() {
        let extractor = clinic();
        let mut notebook = Notebook::new();
        let notes = extractor.extract(&mut notebook, "Kabir", "I SAW THE BODY AND RAN.");
        assert_eq!(texts(&notes), ["Kabir admitted seeing the body before discovery."]);
    }

    #[test]
    fn test_combined_conditions() {
        let extractor = clinic();
        let mut notebook = Notebook::new();

        // "cctv" alone is not enough
        assert!(extractor.extract(&mut notebook, "Rohit", "The CCTV? No idea.").is_empty());

        let notes = extractor.extract(
            &mut notebook,
            "Rohit",
            "Everyone knew the CCTV was down. I only used the laptop for charts.",
        );
        assert_eq!(
            texts(&notes),
            [
                "Rohit knows about the CCTV outage.",
                "Rohit mentioned laptop activity.",
            ]
        );
    }

    #[test]
    fn test_alibi_time() {
        let extractor = clinic();
        let mut notebook = Notebook::new();

        let notes = extractor.extract(&mut notebook, "Kabir", "At 11:25 I was in my car.");
        assert_eq!(texts(&notes), ["Kabir mentioned a specific time in their alibi."]);
        assert_eq!(notes[0].category, "Timeline");
    }

    #[test]
    fn test_no_match() {
        let extractor = clinic();
        let mut notebook = Notebook::new();
        assert!(extractor
            .extract(&mut notebook, "Nisha", "He was a good man. I miss him.")
            .is_empty());
    }

    #[test]
    fn test_rule_template_validated() {
        let no_slot = ClueRule::new("Evidence", ["usb"], "USB mentioned.");
        let err = ClueExtractor::from_rules([no_slot]).unwrap_err();
        assert!(matches!(err, ConfigurationError::ClueTemplateSlot { .. }));

        let bad_pattern = ClueRule::new("Evidence", ["[usb"], "{suspect} said USB.");
        let err = ClueExtractor::from_rules([bad_pattern]).unwrap_err();
        assert!(matches!(err, ConfigurationError::InvalidPattern { .. }));
    }

    #[test]
    fn test_clinic_rule_count() {
        assert_eq!(clinic().rule_count(), 10);
    }
}

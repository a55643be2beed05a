//! Confrontation classifier - maps a player question to a confrontation category.

use case_rules::{CaseFile, ConfigResult, ConfrontationCategory};

use crate::rule_table::{EvaluationPolicy, Rule, RuleTable};

/// First-match-wins classifier over the case's confrontation patterns.
///
/// Categories are always scanned Timeline → Evidence → Knowledge → Behavior →
/// Accusation, whatever order the case file lists them in. A message matching
/// several categories belongs to the earliest one; a message matching none is
/// [`ConfrontationCategory::Neutral`].
#[derive(Debug, Clone)]
pub struct ConfrontationClassifier {
    table: RuleTable<ConfrontationCategory>,
}

impl ConfrontationClassifier {
    /// Compile the classifier from a case file's pattern sets.
    pub fn from_case(case: &CaseFile) -> ConfigResult<Self> {
        let mut table = RuleTable::new(EvaluationPolicy::FirstMatch);
        for category in ConfrontationCategory::CHECK_ORDER {
            let patterns = case.patterns_for(category);
            if patterns.is_empty() {
                continue;
            }
            table.push(Rule::compile(category, patterns)?);
        }
        Ok(Self { table })
    }

    /// Classify a player message. Never fails.
    pub fn classify(&self, message: &str) -> ConfrontationCategory {
        let category = self
            .table
            .evaluate(message)
            .into_iter()
            .next()
            .copied()
            .unwrap_or_default();
        tracing::debug!(category = category.key(), "classified player message");
        category
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use case_rules::{CaseBrief, PatternSet};

    fn clinic() -> ConfrontationClassifier {
        ConfrontationClassifier::from_case(&CaseFile::clinic().unwrap()).unwrap()
    }

    fn bare_case() -> CaseFile {
        CaseFile::new(
            "Bare",
            CaseBrief {
                victim: "v".to_string(),
                scene: "s".to_string(),
                evidence: Vec::new(),
                discovered_at: "d".to_string(),
                fatal_injury_at: "f".to_string(),
            },
        )
    }

    #[test]
    fn test_timeline_beats_evidence() {
        assert_eq!(
            clinic().classify("where were you when the laptop was stolen"),
            ConfrontationCategory::TimelineChallenge
        );
    }

    #[test]
    fn test_neutral_default() {
        let classifier = clinic();
        assert_eq!(
            classifier.classify("what did you have for breakfast"),
            ConfrontationCategory::Neutral
        );
        assert_eq!(classifier.classify(""), ConfrontationCategory::Neutral);
    }

    #[test]
    fn test_each_category() {
        let classifier = clinic();
        let cases = [
            ("Where were you at 11 PM?", ConfrontationCategory::TimelineChallenge),
            ("We found your FINGERPRINT on the desk", ConfrontationCategory::EvidenceConfrontation),
            ("How would you know he was alone?", ConfrontationCategory::KnowledgeContradiction),
            ("Earlier you said you were home.", ConfrontationCategory::BehaviorContradiction),
            ("You did it, didn't you?", ConfrontationCategory::DirectAccusation),
        ];
        for (message, expected) in cases {
            assert_eq!(classifier.classify(message), expected, "message: {message}");
        }
    }

    #[test]
    fn test_broad_evidence_patterns_win_over_later_categories() {
        // "record" is an evidence pattern, checked before knowledge contradictions
        assert_eq!(
            clinic().classify("How do you know what was in the record?"),
            ConfrontationCategory::EvidenceConfrontation
        );
    }

    #[test]
    fn test_time_pattern() {
        assert_eq!(
            clinic().classify("The door opened at 10:42."),
            ConfrontationCategory::TimelineChallenge
        );
    }

    #[test]
    fn test_upper_case_patterns_match() {
        let case = bare_case().with_patterns(PatternSet::new(
            ConfrontationCategory::EvidenceConfrontation,
            ["CCTV"],
        ));
        let classifier = ConfrontationClassifier::from_case(&case).unwrap();
        assert_eq!(
            classifier.classify("The CCTV footage"),
            ConfrontationCategory::EvidenceConfrontation
        );
        assert_eq!(
            classifier.classify("what about the cctv?"),
            ConfrontationCategory::EvidenceConfrontation
        );
    }

    #[test]
    fn test_canonical_order_ignores_authoring_order() {
        let case = bare_case()
            .with_patterns(PatternSet::new(ConfrontationCategory::DirectAccusation, ["you"]))
            .with_patterns(PatternSet::new(ConfrontationCategory::TimelineChallenge, ["when"]));

        let classifier = ConfrontationClassifier::from_case(&case).unwrap();
        assert_eq!(
            classifier.classify("when did you leave"),
            ConfrontationCategory::TimelineChallenge
        );
        assert_eq!(
            classifier.classify("you liar"),
            ConfrontationCategory::DirectAccusation
        );
    }
}

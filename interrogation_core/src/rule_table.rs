//! Ordered rule tables: regex pattern sets mapped to outcomes.
//!
//! Both the confrontation classifier and the clue extractor are the same
//! engine with a different [`EvaluationPolicy`]:
//!
//! - **FirstMatch**: rules are scanned in order and the first matching rule wins
//! - **AllMatches**: every rule is evaluated and all matching outcomes are returned
//!
//! Patterns are compiled case-insensitively, so `"CCTV"` and `"cctv"` are the
//! same pattern.

use case_rules::{ConfigResult, ConfigurationError};
use regex::{Regex, RegexBuilder};

/// How a rule table treats text that matches several rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvaluationPolicy {
    FirstMatch,
    AllMatches,
}

/// A single rule: an outcome and the patterns that select it.
#[derive(Debug, Clone)]
pub struct Rule<T> {
    pub outcome: T,
    patterns: Vec<Regex>,
}

impl<T> Rule<T> {
    /// Compile a rule from pattern strings, ignoring letter case.
    pub fn compile<I, S>(outcome: T, patterns: I) -> ConfigResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns = patterns
            .into_iter()
            .map(|pattern| {
                let pattern = pattern.as_ref();
                RegexBuilder::new(pattern)
                    .case_insensitive(true)
                    .build()
                    .map_err(|e| ConfigurationError::InvalidPattern {
                        pattern: pattern.to_string(),
                        message: e.to_string(),
                    })
            })
            .collect::<ConfigResult<Vec<_>>>()?;
        Ok(Self { outcome, patterns })
    }

    /// Whether any pattern matches anywhere in the text.
    pub fn matches(&self, text: &str) -> bool {
        self.patterns.iter().any(|re| re.is_match(text))
    }

    pub fn pattern_count(&self) -> usize {
        self.patterns.len()
    }
}

/// An ordered list of rules evaluated under a fixed policy.
#[derive(Debug, Clone)]
pub struct RuleTable<T> {
    rules: Vec<Rule<T>>,
    policy: EvaluationPolicy,
}

impl<T> RuleTable<T> {
    /// Create an empty table.
    pub fn new(policy: EvaluationPolicy) -> Self {
        Self {
            rules: Vec::new(),
            policy,
        }
    }

    /// Append a rule. Rules are evaluated in insertion order.
    pub fn push(&mut self, rule: Rule<T>) {
        self.rules.push(rule);
    }

    /// Compile and append a rule.
    pub fn with_rule<I, S>(mut self, outcome: T, patterns: I) -> ConfigResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.push(Rule::compile(outcome, patterns)?);
        Ok(self)
    }

    pub fn policy(&self) -> EvaluationPolicy {
        self.policy
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Outcomes of the matching rules, in table order.
    ///
    /// Under [`EvaluationPolicy::FirstMatch`] at most one outcome is returned
    /// and later rules are not evaluated.
    pub fn evaluate(&self, text: &str) -> Vec<&T> {
        let mut matching = self
            .rules
            .iter()
            .filter(|rule| rule.matches(text))
            .map(|rule| &rule.outcome);

        match self.policy {
            EvaluationPolicy::FirstMatch => matching.next().into_iter().collect(),
            EvaluationPolicy::AllMatches => matching.collect(),
        }
    }
}

// File: src/rule.rs
// Purpose: Parsed field rules and rule-string parsing

use std::fmt;
use tracing::debug;

use crate::evaluator::Evaluator;
use crate::value::Value;

/// A single parsed constraint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    /// `required`
    Required,
    /// `email`
    Email,
    /// `min:<n>`, minimum length in UTF-16 code units
    Min(usize),
}

impl Rule {
    /// Parse one rule token
    ///
    /// Returns `None` for anything that is not exactly `required`, `email` or
    /// `min:` followed by a non-negative integer. Tokens are not trimmed.
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "required" => Some(Rule::Required),
            "email" => Some(Rule::Email),
            _ => token
                .strip_prefix("min:")
                .and_then(|n| n.parse::<usize>().ok())
                .map(Rule::Min),
        }
    }

    /// Error message for a field with the given label
    pub fn message(&self, label: &str) -> String {
        match self {
            Rule::Required => format!("{} is required", label),
            Rule::Email => format!("{} is not a valid email", label),
            Rule::Min(min) => format!("{} must be at least {} characters", label, min),
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::Required => f.write_str("required"),
            Rule::Email => f.write_str("email"),
            Rule::Min(min) => write!(f, "min:{}", min),
        }
    }
}

/// Ordered rules of one field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    /// Parse a pipe-delimited rule string
    ///
    /// Unrecognized and malformed tokens are skipped, so this never fails.
    pub fn parse(raw: &str) -> Self {
        raw.split('|')
            .filter_map(|token| {
                let rule = Rule::parse(token);
                if rule.is_none() && !token.is_empty() {
                    debug!(token, "ignoring unrecognized rule");
                }
                rule
            })
            .collect()
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Rule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// First rule the value fails, using the simple email pattern
    pub fn first_failure(&self, value: Option<&Value>) -> Option<Rule> {
        Evaluator::default().first_failure(self, value)
    }
}

impl FromIterator<Rule> for RuleSet {
    fn from_iter<I: IntoIterator<Item = Rule>>(iter: I) -> Self {
        Self {
            rules: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a Rule;
    type IntoIter = std::slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

impl fmt::Display for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, rule) in self.rules.iter().enumerate() {
            if i > 0 {
                f.write_str("|")?;
            }
            write!(f, "{}", rule)?;
        }
        Ok(())
    }
}

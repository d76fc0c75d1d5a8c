// File: src/evaluator.rs
// Purpose: Decide pass/fail for a rule against a submitted value

use crate::email::EmailPattern;
use crate::rule::{Rule, RuleSet};
use crate::value::Value;

/// Evaluates rules against values
///
/// The only knob is which email pattern `Rule::Email` applies. The default
/// evaluator uses [`EmailPattern::Simple`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Evaluator {
    pub email: EmailPattern,
}

impl Evaluator {
    pub fn new(email: EmailPattern) -> Self {
        Self { email }
    }

    /// Returns `true` when `value` satisfies `rule`
    ///
    /// `None` and `Some(Value::Null)` both mean "no value submitted".
    pub fn evaluate(&self, rule: &Rule, value: Option<&Value>) -> bool {
        let value = value.filter(|v| !v.is_null());

        match rule {
            Rule::Required => value.is_some_and(|v| !trim_js(&v.as_text()).is_empty()),
            Rule::Email => {
                let text = value.map(Value::as_text).unwrap_or_default();
                self.email.is_match(&text)
            }
            // Length is only enforced once something was entered; counted in UTF-16 units
            Rule::Min(min) => value.map_or(true, |v| {
                let text = v.as_text();
                text.is_empty() || text.encode_utf16().count() >= *min
            }),
        }
    }

    /// First rule in declaration order that `value` fails
    pub fn first_failure(&self, rules: &RuleSet, value: Option<&Value>) -> Option<Rule> {
        rules
            .iter()
            .copied()
            .find(|rule| !self.evaluate(rule, value))
    }
}

// Whitespace as stripped by browsers, which also includes the byte order mark
fn trim_js(text: &str) -> &str {
    text.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}

/// Evaluate one rule with the default evaluator
pub fn evaluate(rule: &Rule, value: Option<&Value>) -> bool {
    Evaluator::default().evaluate(rule, value)
}

/// Check a raw rule string against one value
///
/// Returns the message of the first failing rule, or `None` when the value
/// passes. Entry point for callers holding `(label, rules, value)` without a
/// compiled schema.
pub fn check_field(label: &str, raw_rules: &str, value: Option<&Value>) -> Option<String> {
    RuleSet::parse(raw_rules)
        .first_failure(value)
        .map(|rule| rule.message(label))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn text(s: &str) -> Value {
        Value::from(s)
    }

    #[test]
    fn test_required_fails_when_absent() {
        assert!(!evaluate(&Rule::Required, None));
        assert!(!evaluate(&Rule::Required, Some(&Value::Null)));
    }

    #[rstest]
    #[case(text(""), false)]
    #[case(text("   "), false)]
    #[case(text("\t\n"), false)]
    #[case(text("0"), true)]
    #[case(Value::from(0), true)]
    #[case(Value::from(false), true)]
    #[case(text(" a "), true)]
    #[case(text("\u{FEFF}"), false)]
    #[case(text(" \u{FEFF}\t"), false)]
    fn test_required(#[case] value: Value, #[case] expected: bool) {
        assert_eq!(evaluate(&Rule::Required, Some(&value)), expected);
    }

    #[rstest]
    #[case("a@b.co", true)]
    #[case("a@b", false)]
    #[case("a@", false)]
    #[case("noatsign.com", false)]
    #[case("", false)]
    fn test_email(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(evaluate(&Rule::Email, Some(&text(input))), expected);
    }

    #[test]
    fn test_email_fails_when_absent() {
        assert!(!evaluate(&Rule::Email, None));
    }

    #[test]
    fn test_email_uses_configured_pattern() {
        let html = Evaluator::new(EmailPattern::Html);
        assert!(html.evaluate(&Rule::Email, Some(&text("x@y"))));
        assert!(!Evaluator::default().evaluate(&Rule::Email, Some(&text("x@y"))));
    }

    #[rstest]
    #[case("abc", false)]
    #[case("abcdef", true)]
    #[case("abcdefg", true)]
    #[case("", true)]
    #[case("héllo!", true)]
    #[case("😀😀😀", true)]
    #[case("😀😀", false)]
    fn test_min_length(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(evaluate(&Rule::Min(6), Some(&text(input))), expected);
    }

    #[test]
    fn test_min_skipped_when_absent() {
        assert!(evaluate(&Rule::Min(6), None));
        assert!(evaluate(&Rule::Min(6), Some(&Value::Null)));
    }

    #[test]
    fn test_min_coerces_numbers() {
        assert!(!evaluate(&Rule::Min(3), Some(&Value::from(42))));
        assert!(evaluate(&Rule::Min(3), Some(&Value::from(1234))));
    }

    #[test]
    fn test_first_failure_follows_declaration_order() {
        let rules = RuleSet::parse("required|min:6");
        assert_eq!(rules.first_failure(Some(&text(""))), Some(Rule::Required));
        assert_eq!(rules.first_failure(Some(&text("abc"))), Some(Rule::Min(6)));
        assert_eq!(rules.first_failure(Some(&text("abcdef"))), None);

        let reversed = RuleSet::parse("min:6|email");
        assert_eq!(reversed.first_failure(Some(&text("a@b"))), Some(Rule::Min(6)));
    }

    #[test]
    fn test_check_field() {
        assert_eq!(
            check_field("Password", "required|min:6", Some(&text("abc"))).as_deref(),
            Some("Password must be at least 6 characters")
        );
        assert_eq!(
            check_field("Email", "required|email", None).as_deref(),
            Some("Email is required")
        );
        assert_eq!(check_field("Notes", "", None), None);
        assert_eq!(check_field("Notes", "min:abc", Some(&text("x"))), None);
    }
}

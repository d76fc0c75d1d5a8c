use colored::Colorize;
use formgen::{EmailPattern, Evaluator, RuleSet, Value};

/// Evaluate a rule string against one value; returns whether it passed
pub fn execute(rules: &str, label: &str, value: Option<&str>, email: EmailPattern) -> bool {
    let rule_set = RuleSet::parse(rules);
    let value = value.map(Value::from);

    match Evaluator::new(email).first_failure(&rule_set, value.as_ref()) {
        Some(rule) => {
            println!("{} {} ({})", "✗".red(), rule.message(label).red(), rule);
            false
        }
        None if rule_set.is_empty() => {
            println!("{} {} has no recognized rules", "✓".green(), label);
            true
        }
        None => {
            println!("{} {} passes {}", "✓".green(), label, rule_set);
            true
        }
    }
}

use anyhow::Result;
use colored::Colorize;
use formgen::{load_record, EmailPattern, FormSchema, OutputFormat, ValidationResult, Validator};
use std::path::Path;
use tracing::debug;

/// Validate a record file; returns whether the record passed
pub fn execute(
    schema: &FormSchema,
    record_path: &Path,
    format: OutputFormat,
    email: EmailPattern,
) -> Result<bool> {
    let record = load_record(record_path)?;
    let validator = schema.compile_with(email);

    for name in record.keys() {
        if validator.field(name).is_none() {
            debug!(field = %name, "record value has no matching schema field");
        }
    }

    let result = validator.validate(&record);

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
        OutputFormat::Text => print_report(&validator, &result),
    }

    Ok(result.is_valid())
}

fn print_report(validator: &Validator, result: &ValidationResult) {
    for field in validator.fields() {
        match result.get_error(field.name()) {
            Some(message) => println!("{} {}: {}", "✗".red(), field.name().bold(), message.red()),
            None => println!("{} {}", "✓".green(), field.name()),
        }
    }

    println!();
    if result.is_valid() {
        println!("{}", "Record is valid".green().bold());
    } else {
        println!(
            "{}",
            format!("{} field(s) failed validation", result.len()).red().bold()
        );
    }
}

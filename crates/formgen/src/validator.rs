// File: src/validator.rs
// Purpose: Compile field schemas into reusable validators

use tracing::{debug, warn};

use crate::record::Record;
use crate::result::ValidationResult;
use crate::schema::FieldDescriptor;
use formgen_rules::{EmailPattern, Evaluator, RuleSet, Value};

/// A field with its rule string parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledField {
    name: String,
    label: String,
    rules: RuleSet,
}

impl CompiledField {
    fn from_descriptor(field: &FieldDescriptor) -> Self {
        Self {
            name: field.name().to_string(),
            label: field.label().to_string(),
            rules: field.rules(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Message of the first failing rule, if any
    pub fn check(&self, evaluator: &Evaluator, value: Option<&Value>) -> Option<String> {
        evaluator
            .first_failure(&self.rules, value)
            .map(|rule| rule.message(&self.label))
    }
}

/// Compiled, stateless validator for a whole record
///
/// Holds no mutable state, so one instance can be shared across threads and
/// reused for any number of records.
#[derive(Debug, Clone, Default)]
pub struct Validator {
    fields: Vec<CompiledField>,
    evaluator: Evaluator,
}

impl Validator {
    /// Validate a record
    ///
    /// Fields are checked in schema order; a key missing from the record is
    /// an absent value.
    pub fn validate(&self, record: &Record) -> ValidationResult {
        let result: ValidationResult = self
            .fields
            .iter()
            .filter_map(|field| {
                field
                    .check(&self.evaluator, record.get(field.name()))
                    .map(|message| (field.name.clone(), message))
            })
            .collect();

        debug!(
            fields = self.fields.len(),
            errors = result.len(),
            "validated record"
        );
        result
    }

    /// Validate one field, e.g. on blur
    ///
    /// Unknown field names have no rules and are always valid.
    pub fn validate_field(&self, name: &str, value: Option<&Value>) -> Option<String> {
        self.field(name)
            .and_then(|field| field.check(&self.evaluator, value))
    }

    pub fn field(&self, name: &str) -> Option<&CompiledField> {
        self.fields.iter().find(|field| field.name == name)
    }

    pub fn fields(&self) -> impl Iterator<Item = &CompiledField> {
        self.fields.iter()
    }

    pub fn email_pattern(&self) -> EmailPattern {
        self.evaluator.email
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Compile fields using the form-level ([`EmailPattern::Html`]) email check
pub fn compile<'a, I>(fields: I) -> Validator
where
    I: IntoIterator<Item = &'a FieldDescriptor>,
{
    compile_with(fields, EmailPattern::Html)
}

/// Compile fields with an explicit email pattern
///
/// Never fails: malformed rule tokens are dropped while parsing. When two
/// descriptors share a name, the later one replaces the earlier one in place.
pub fn compile_with<'a, I>(fields: I, email: EmailPattern) -> Validator
where
    I: IntoIterator<Item = &'a FieldDescriptor>,
{
    let mut compiled: Vec<CompiledField> = Vec::new();

    for field in fields {
        let entry = CompiledField::from_descriptor(field);

        match compiled.iter_mut().find(|existing| existing.name == entry.name) {
            Some(existing) => {
                warn!(field = %entry.name, "duplicate field name, later definition wins");
                *existing = entry;
            }
            None => compiled.push(entry),
        }
    }

    debug!(fields = compiled.len(), email = %email, "compiled form schema");

    Validator {
        fields: compiled,
        evaluator: Evaluator::new(email),
    }
}

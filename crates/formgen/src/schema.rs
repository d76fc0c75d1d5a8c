// File: src/schema.rs
// Purpose: Declarative form field schema and schema file loading

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

use crate::validator::{compile, compile_with, Validator};
use formgen_rules::{EmailPattern, RuleSet};

/// Input type a field is rendered as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    #[default]
    Text,
    Password,
    Email,
    Number,
    Textarea,
    Select,
    Checkbox,
    #[serde(other)]
    Other,
}

impl FieldKind {
    pub fn as_str(self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Password => "password",
            FieldKind::Email => "email",
            FieldKind::Number => "number",
            FieldKind::Textarea => "textarea",
            FieldKind::Select => "select",
            FieldKind::Checkbox => "checkbox",
            FieldKind::Other => "other",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One choice of a select field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Static metadata describing one form input
///
/// The rule string is kept raw here and parsed when the schema is compiled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    name: String,
    label: String,
    #[serde(rename = "type", default)]
    kind: FieldKind,
    #[serde(
        rename = "validation",
        alias = "rule",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    raw_rule: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    options: Vec<SelectOption>,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            kind: FieldKind::default(),
            raw_rule: None,
            options: Vec::new(),
        }
    }

    pub fn with_rule(mut self, raw_rule: impl Into<String>) -> Self {
        self.raw_rule = Some(raw_rule.into());
        self
    }

    pub fn with_kind(mut self, kind: FieldKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_options(mut self, options: Vec<SelectOption>) -> Self {
        self.options = options;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    pub fn raw_rule(&self) -> Option<&str> {
        self.raw_rule.as_deref()
    }

    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    /// Parsed rules; a missing rule string yields an empty set
    pub fn rules(&self) -> RuleSet {
        self.raw_rule.as_deref().map(RuleSet::parse).unwrap_or_default()
    }
}

/// Ordered list of field descriptors
///
/// Names are expected to be unique. When they are not, the compiled
/// validator keeps the later descriptor (see [`compile`]).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormSchema {
    #[serde(default)]
    fields: Vec<FieldDescriptor>,
}

impl FormSchema {
    pub fn new(fields: Vec<FieldDescriptor>) -> Self {
        Self { fields }
    }

    /// Sign-up form: email, password and role
    pub fn example() -> Self {
        Self::new(vec![
            FieldDescriptor::new("email", "Email Address").with_rule("required|email"),
            FieldDescriptor::new("password", "Password")
                .with_kind(FieldKind::Password)
                .with_rule("required|min:6"),
            FieldDescriptor::new("role", "Role")
                .with_kind(FieldKind::Select)
                .with_options(vec![
                    SelectOption::new("admin", "Admin"),
                    SelectOption::new("user", "User"),
                ])
                .with_rule("required"),
        ])
    }

    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    /// Last descriptor with this name
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().rev().find(|field| field.name == name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Compile with form-level email semantics
    pub fn compile(&self) -> Validator {
        compile(&self.fields)
    }

    pub fn compile_with(&self, email: EmailPattern) -> Validator {
        compile_with(&self.fields, email)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse TOML schema")
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        serde_json::from_str(content).context("Failed to parse JSON schema")
    }

    /// Load a schema file; `.json` files are read as JSON, anything else as TOML
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read schema file: {:?}", path))?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let schema = if is_json {
            Self::from_json_str(&content)
        } else {
            Self::from_toml_str(&content)
        };

        schema.with_context(|| format!("Invalid schema file: {:?}", path))
    }
}

impl From<Vec<FieldDescriptor>> for FormSchema {
    fn from(fields: Vec<FieldDescriptor>) -> Self {
        Self::new(fields)
    }
}

// formgen - schema-driven form validation
// Field schemas compile into stateless validators that produce per-field error messages

pub mod config;
pub mod record;
pub mod result;
pub mod schema;
pub mod validator;

// Re-export the rule evaluator
pub use formgen_rules as rules;
pub use formgen_rules::{check_field, evaluate, EmailPattern, Evaluator, Rule, RuleSet, Value};

// Re-export framework types
pub use config::{Config, OutputFormat};
pub use record::{load_record, parse_record, Record};
pub use result::ValidationResult;
pub use schema::{FieldDescriptor, FieldKind, FormSchema, SelectOption};
pub use validator::{compile, compile_with, CompiledField, Validator};

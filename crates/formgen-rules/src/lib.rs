//! formgen rules
//!
//! The rule evaluator behind formgen's field validation. A field declares its
//! constraints as a pipe-delimited rule string (`"required|min:6"`); this crate
//! parses that string into [`Rule`]s once and evaluates them against submitted
//! [`Value`]s.
//!
//! Parsing is permissive: tokens that are not recognized (`"min"`, `"min:abc"`,
//! `"unique"`) are skipped rather than reported.
//!
//! ```
//! use formgen_rules::{check_field, Value};
//!
//! let value = Value::from("abc");
//! assert_eq!(
//!     check_field("Password", "required|min:6", Some(&value)).as_deref(),
//!     Some("Password must be at least 6 characters"),
//! );
//! ```

pub mod email;
pub mod evaluator;
pub mod rule;
pub mod value;

pub use email::{is_valid_email, EmailPattern};
pub use evaluator::{check_field, evaluate, Evaluator};
pub use rule::{Rule, RuleSet};
pub use value::Value;

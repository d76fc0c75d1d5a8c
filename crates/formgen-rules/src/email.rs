//! Email patterns applied by the `email` rule

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// non-whitespace, '@', non-whitespace, '.', non-whitespace
static SIMPLE_EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

// Pattern browsers apply to <input type="email">
static HTML_EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .unwrap()
});

/// Which structural check the `email` rule performs
///
/// Neither is RFC 5322 validation.
/// - `Simple` requires a dot after the `@` (`a@b` fails).
/// - `Html` follows the browser's email input and accepts dot-less domains (`x@y`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmailPattern {
    #[default]
    Simple,
    Html,
}

impl EmailPattern {
    pub fn is_match(self, email: &str) -> bool {
        match self {
            EmailPattern::Simple => SIMPLE_EMAIL_REGEX.is_match(email),
            EmailPattern::Html => HTML_EMAIL_REGEX.is_match(email),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            EmailPattern::Simple => "simple",
            EmailPattern::Html => "html",
        }
    }
}

impl fmt::Display for EmailPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EmailPattern {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "simple" => Ok(EmailPattern::Simple),
            "html" => Ok(EmailPattern::Html),
            other => Err(format!(
                "unknown email pattern '{}' (expected 'simple' or 'html')",
                other
            )),
        }
    }
}

/// Validate email format with the simple field-level pattern
pub fn is_valid_email(email: &str) -> bool {
    EmailPattern::Simple.is_match(email)
}

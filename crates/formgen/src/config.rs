// File: src/config.rs
// Purpose: Configuration parsing from formgen.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use formgen_rules::EmailPattern;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub schema: SchemaConfig,

    #[serde(default)]
    pub validation: ValidationConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

/// Where the form schema comes from
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchemaConfig {
    /// Schema file used when none is given on the command line (default: "form.toml")
    #[serde(default = "default_schema_path")]
    pub path: String,
}

/// Validation behaviour
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// Email check applied by the `email` rule (default: html)
    #[serde(default = "default_email_pattern")]
    pub email_pattern: EmailPattern,
}

/// Report rendering
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,

    #[serde(default = "default_true")]
    pub color: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => f.write_str("text"),
            OutputFormat::Json => f.write_str("json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!(
                "unknown output format '{}' (expected 'text' or 'json')",
                other
            )),
        }
    }
}

// Default values
fn default_schema_path() -> String {
    "form.toml".to_string()
}

fn default_email_pattern() -> EmailPattern {
    EmailPattern::Html
}

fn default_true() -> bool {
    true
}

// Default implementations
impl Default for SchemaConfig {
    fn default() -> Self {
        Self {
            path: default_schema_path(),
        }
    }
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            email_pattern: default_email_pattern(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            color: true,
        }
    }
}

impl Config {
    /// Load configuration from a formgen.toml file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // If file doesn't exist or is empty, return default config
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        Ok(config)
    }

    /// Load configuration from default path (./formgen.toml)
    pub fn load_default() -> Result<Self> {
        Self::load("formgen.toml")
    }
}

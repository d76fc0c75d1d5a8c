// File: src/record.rs
// Purpose: Submitted records and record file loading

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use formgen_rules::Value;

/// Field name to submitted value
pub type Record = HashMap<String, Value>;

/// Parse a record from a JSON object of scalar values
pub fn parse_record(json: &str) -> Result<Record> {
    serde_json::from_str(json).context("Record must be a JSON object of scalar values")
}

/// Load a record from a JSON file
pub fn load_record(path: impl AsRef<Path>) -> Result<Record> {
    let path = path.as_ref();

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read record file: {:?}", path))?;

    parse_record(&content).with_context(|| format!("Invalid record file: {:?}", path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_record() {
        let record = parse_record(r#"{"email": "a@b.co", "age": 30, "agree": false, "note": null}"#)
            .unwrap();
        assert_eq!(record.len(), 4);
        assert_eq!(record["email"], Value::from("a@b.co"));
        assert_eq!(record["age"], Value::from(30));
        assert_eq!(record["agree"], Value::from(false));
        assert!(record["note"].is_null());
    }

    #[test]
    fn test_parse_record_rejects_nested_values() {
        assert!(parse_record(r#"{"tags": ["a", "b"]}"#).is_err());
        assert!(parse_record(r#"["not", "an", "object"]"#).is_err());
    }
}

// File: src/value.rs
// Purpose: Submitted field values and their string coercion

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// A single submitted form value
///
/// Forms are flat, so only scalars are supported. `Null` is treated the same
/// as a missing key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Bool(bool),
    Number(f64),
    String(String),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// String form used by every rule
    ///
    /// Strings are borrowed; other variants are formatted with [`Display`](fmt::Display).
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            Value::String(s) => Cow::Borrowed(s),
            other => Cow::Owned(other.to_string()),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Number(n) => write_number(f, *n),
            Value::String(s) => f.write_str(s),
        }
    }
}

// Same text a browser produces for a number: plain decimals in [1e-6, 1e21),
// exponent form with an explicit sign outside it.
fn write_number(f: &mut fmt::Formatter<'_>, n: f64) -> fmt::Result {
    if n.is_nan() {
        return f.write_str("NaN");
    }
    if n.is_infinite() {
        return f.write_str(if n > 0.0 { "Infinity" } else { "-Infinity" });
    }
    if n == 0.0 {
        return f.write_str("0");
    }

    let magnitude = n.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return write!(f, "{}", n);
    }

    let exp = format!("{:e}", n);
    match exp.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            write!(f, "{}e+{}", mantissa, exponent)
        }
        _ => f.write_str(&exp),
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(n as f64)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Value::from("hello"), "hello")]
    #[case(Value::from(0), "0")]
    #[case(Value::from(42.0), "42")]
    #[case(Value::from(1.5), "1.5")]
    #[case(Value::from(-3), "-3")]
    #[case(Value::from(false), "false")]
    #[case(Value::Null, "")]
    #[case(Value::from(-0.0), "0")]
    #[case(Value::from(1e20), "100000000000000000000")]
    #[case(Value::from(1e21), "1e+21")]
    #[case(Value::from(1.5e-7), "1.5e-7")]
    #[case(Value::from(0.000001), "0.000001")]
    #[case(Value::from(f64::NAN), "NaN")]
    #[case(Value::from(f64::NEG_INFINITY), "-Infinity")]
    fn test_text_form(#[case] value: Value, #[case] expected: &str) {
        assert_eq!(value.as_text(), expected);
    }

    #[test]
    fn test_string_text_is_borrowed() {
        let value = Value::from("abc");
        assert!(matches!(value.as_text(), Cow::Borrowed("abc")));
    }

    #[test]
    fn test_option_conversion() {
        assert_eq!(Value::from(None::<&str>), Value::Null);
        assert_eq!(Value::from(Some("x")), Value::String("x".to_string()));
    }

    #[test]
    fn test_deserialize_scalars() {
        let values: Vec<Value> =
            serde_json::from_str(r#"[null, true, 0, 2.5, "text"]"#).unwrap();
        assert_eq!(
            values,
            vec![
                Value::Null,
                Value::Bool(true),
                Value::Number(0.0),
                Value::Number(2.5),
                Value::String("text".to_string()),
            ]
        );
    }

    #[test]
    fn test_deserialize_rejects_nested() {
        assert!(serde_json::from_str::<Value>(r#"["a", "b"]"#).is_err());
        assert!(serde_json::from_str::<Value>(r#"{"a": 1}"#).is_err());
    }
}

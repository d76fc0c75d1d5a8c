use std::fs;

use formgen::{load_record, FieldKind, FormSchema, Value};
use tempfile::TempDir;

#[test]
fn test_load_toml_schema_and_validate() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("signup.toml");
    fs::write(
        &path,
        r#"
[[fields]]
name = "email"
type = "text"
label = "Email Address"
validation = "required|email"

[[fields]]
name = "password"
type = "password"
label = "Password"
validation = "required|min:6"
"#,
    )
    .unwrap();

    let schema = FormSchema::load(&path).unwrap();
    assert_eq!(schema.len(), 2);
    assert_eq!(schema.fields()[1].kind(), FieldKind::Password);

    let record_path = dir.path().join("record.json");
    fs::write(&record_path, r#"{"email": "x@y", "password": "abc"}"#).unwrap();
    let record = load_record(&record_path).unwrap();
    assert_eq!(record["email"], Value::from("x@y"));

    let result = schema.compile().validate(&record);
    assert_eq!(result.get_error("email"), None);
    assert_eq!(
        result.get_error("password"),
        Some("Password must be at least 6 characters")
    );
}

#[test]
fn test_load_json_schema_by_extension() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("form.JSON");
    fs::write(
        &path,
        r#"{"fields": [{"name": "role", "type": "select", "label": "Role", "validation": "required",
            "options": [{"value": "admin", "label": "Admin"}]}]}"#,
    )
    .unwrap();

    let schema = FormSchema::load(&path).unwrap();
    assert_eq!(schema.fields()[0].options()[0].value, "admin");
}

#[test]
fn test_missing_schema_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let err = FormSchema::load(dir.path().join("missing.toml")).unwrap_err();
    assert!(format!("{:#}", err).contains("Failed to read schema file"));
}

#[test]
fn test_invalid_schema_reports_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.toml");
    fs::write(&path, "[[fields]]\nlabel = 3").unwrap();

    let err = FormSchema::load(&path).unwrap_err();
    assert!(format!("{:#}", err).contains("broken.toml"));
}

#[test]
fn test_record_with_nested_value_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("record.json");
    fs::write(&path, r#"{"tags": {"a": 1}}"#).unwrap();

    assert!(load_record(&path).is_err());
}

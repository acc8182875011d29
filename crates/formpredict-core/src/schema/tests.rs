//! Tests for feature schemas.

use super::*;
use crate::test_utils::{demo_schema, DEMO_SCHEMA_TOML};

#[test]
fn test_toml_parsing() {
    let schema = FeatureSchema::from_toml_str(DEMO_SCHEMA_TOML).unwrap();
    assert_eq!(schema.name(), "demo");
    assert_eq!(schema.version(), 3);
    assert_eq!(schema.field_names(), vec!["Gender", "Age", "Alcohol"]);
    assert_eq!(schema.code_for("Alcohol", "Frequently"), Some(2));
    assert_eq!(schema.tag(), "demo@v3");
}

#[test]
fn test_yaml_parsing() {
    let yaml = r#"
        name: demo
        fields:
          - name: Smoking
            type: categorical
            options:
              - { label: "No", code: 0 }
              - { label: "Yes", code: 1 }
          - name: Height
            type: numeric
            step: 0.01
    "#;

    let schema = FeatureSchema::from_yaml_str(yaml).unwrap();
    assert_eq!(schema.version(), 1);
    assert_eq!(schema.code_for("Smoking", "Yes"), Some(1));
    assert!(schema.field("Height").unwrap().is_numeric());
}

#[test]
fn test_builder_matches_toml() {
    let parsed = FeatureSchema::from_toml_str(DEMO_SCHEMA_TOML).unwrap();
    assert_eq!(parsed, demo_schema());
}

#[test]
fn test_serialize_round_trip_keeps_order() {
    let schema = demo_schema();
    let json = serde_json::to_string(&schema).unwrap();
    let back: FeatureSchema = serde_json::from_str(&json).unwrap();
    assert_eq!(back.field_names(), schema.field_names());
}

#[test]
fn test_lookups() {
    let schema = demo_schema();
    assert_eq!(schema.position("Age"), Some(1));
    assert_eq!(schema.position("Weight"), None);
    assert_eq!(schema.labels_for("Gender"), vec!["Female", "Male"]);
    assert!(schema.labels_for("Age").is_empty());
    assert_eq!(schema.code_for("Age", "Male"), None);
    assert_eq!(schema.code_for("Gender", "male"), None);
}

#[test]
fn test_rejects_empty_schema() {
    let err = FeatureSchema::new("empty", 1, vec![]).unwrap_err();
    assert!(matches!(err, FormPredictError::InvalidSchema(_)));
}

#[test]
fn test_rejects_duplicate_field() {
    let err = FeatureSchema::new(
        "dup",
        1,
        vec![FieldSpec::numeric("Age"), FieldSpec::numeric("Age")],
    )
    .unwrap_err();
    assert!(err.to_string().contains("declared twice"));
}

#[test]
fn test_rejects_duplicate_label_and_code() {
    let labels = FeatureSchema::new(
        "dup",
        1,
        vec![FieldSpec::categorical("Alcohol", [("No", 0), ("No", 1)])],
    );
    assert!(labels.unwrap_err().to_string().contains("repeats label"));

    let codes = FeatureSchema::new(
        "dup",
        1,
        vec![FieldSpec::categorical("Alcohol", [("No", 0), ("Sometimes", 0)])],
    );
    assert!(codes.unwrap_err().to_string().contains("repeats code"));
}

#[test]
fn test_rejects_empty_options() {
    let err = FeatureSchema::new(
        "bad",
        1,
        vec![FieldSpec::categorical::<_, &str>("Gender", [])],
    )
    .unwrap_err();
    assert!(err.to_string().contains("no options"));
}

#[test]
fn test_rejects_inverted_range() {
    let err = FeatureSchema::new(
        "bad",
        1,
        vec![FieldSpec::numeric("Age").with_range(10.0, 1.0)],
    )
    .unwrap_err();
    assert!(err.to_string().contains("above max"));
}

#[test]
fn test_deserialization_validates() {
    let toml = r#"
        name = "bad"
        fields = []
    "#;
    assert!(FeatureSchema::from_toml_str(toml).is_err());
}

#[test]
fn test_from_file_by_extension() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("schema.toml");
    std::fs::write(&path, DEMO_SCHEMA_TOML).unwrap();
    assert_eq!(FeatureSchema::from_file(&path).unwrap(), demo_schema());

    let missing = dir.path().join("missing.toml");
    assert!(matches!(
        FeatureSchema::from_file(missing),
        Err(FormPredictError::Io(_))
    ));
}

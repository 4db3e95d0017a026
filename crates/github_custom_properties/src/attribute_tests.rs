//! Tests for attribute containers and coercion rules.

use super::*;
use serde_json::json;

#[test]
fn test_attribute_defaults_to_not_set() {
    let attribute: Attribute<String> = Attribute::default();

    assert!(!attribute.is_set());
    assert_eq!(attribute.value(), None);
}

#[test]
fn test_attribute_require() {
    let set = Attribute::Set(42u64);
    let unset: Attribute<u64> = Attribute::NotSet;

    assert_eq!(*set.require("repository_id").expect("value is set"), 42);
    assert!(matches!(
        unset.require("repository_id"),
        Err(Error::AttributeNotSet {
            field: "repository_id"
        })
    ));
}

#[test]
fn test_attribute_merge_keeps_existing_value_when_other_is_unset() {
    let mut attribute = Attribute::Set("first".to_string());

    attribute.merge(Attribute::NotSet);
    assert_eq!(attribute.value().map(String::as_str), Some("first"));

    attribute.merge(Attribute::Set("second".to_string()));
    assert_eq!(attribute.value().map(String::as_str), Some("second"));
}

#[test]
fn test_attribute_from_option() {
    assert_eq!(Attribute::from(Some(true)), Attribute::Set(true));
    assert_eq!(Attribute::<bool>::from(None), Attribute::NotSet);
    assert_eq!(Attribute::Set(1).into_value(), Some(1));
}

#[test]
fn test_json_kind_classification() {
    assert_eq!(JsonKind::of(&json!(null)), JsonKind::Null);
    assert_eq!(JsonKind::of(&json!(true)), JsonKind::Boolean);
    assert_eq!(JsonKind::of(&json!(-3)), JsonKind::Integer);
    assert_eq!(JsonKind::of(&json!(1.5)), JsonKind::Number);
    assert_eq!(JsonKind::of(&json!("x")), JsonKind::String);
    assert_eq!(JsonKind::of(&json!([])), JsonKind::Array);
    assert_eq!(JsonKind::of(&json!({})), JsonKind::Object);
}

#[test]
fn test_string_coercion() {
    assert_eq!(string("name", &json!("team")), Ok("team".to_string()));
    assert_eq!(string("name", &json!("")), Ok(String::new()));
    assert_eq!(
        string("name", &json!(5)),
        Err(DecodeError::TypeMismatch {
            field: "name".to_string(),
            expected: "string",
            found: JsonKind::Integer,
        })
    );
}

#[test]
fn test_boolean_coercion_does_not_accept_strings() {
    assert_eq!(boolean("required", &json!(false)), Ok(false));

    let err = boolean("required", &json!("true")).unwrap_err();
    assert_eq!(
        err,
        DecodeError::TypeMismatch {
            field: "required".to_string(),
            expected: "boolean",
            found: JsonKind::String,
        }
    );
}

#[test]
fn test_integer_coercion() {
    assert_eq!(integer("repository_id", &json!(42)), Ok(42));
    assert!(integer("repository_id", &json!(42.0)).is_err());
    assert!(integer("repository_id", &json!(-1)).is_err());
    assert!(integer("repository_id", &json!("42")).is_err());
}

#[test]
fn test_list_of_strings_coercion() {
    assert_eq!(
        list_of_strings("allowed_values", &json!(["a", "b"])),
        Ok(vec!["a".to_string(), "b".to_string()])
    );
    assert_eq!(list_of_strings("allowed_values", &json!([])), Ok(vec![]));
}

#[test]
fn test_list_of_strings_reports_element_index() {
    let err = list_of_strings("allowed_values", &json!(["a", 2])).unwrap_err();

    assert_eq!(err.field(), "allowed_values[1]");
}

#[test]
fn test_string_or_list_of_strings_coercion() {
    assert_eq!(
        string_or_list_of_strings("default_value", &json!("prod")),
        Ok(DefaultValue::Single("prod".to_string()))
    );
    assert_eq!(
        string_or_list_of_strings("default_value", &json!(["a", "b"])),
        Ok(DefaultValue::Multiple(vec!["a".to_string(), "b".to_string()]))
    );
    assert!(string_or_list_of_strings("default_value", &json!(true)).is_err());
}

#[test]
fn test_property_values_collapses_property_list() {
    let value = json!([
        { "property_name": "env", "value": "prod" },
        { "property_name": "team", "value": "backend" }
    ]);

    let properties = property_values("properties", &value).expect("valid properties");

    assert_eq!(properties.len(), 2);
    assert_eq!(properties["env"], Some(PropertyValue::Single("prod".to_string())));
    assert_eq!(
        properties["team"],
        Some(PropertyValue::Single("backend".to_string()))
    );
}

#[test]
fn test_property_values_last_duplicate_wins() {
    let value = json!([
        { "property_name": "env", "value": "dev" },
        { "property_name": "env", "value": "prod" }
    ]);

    let properties = property_values("properties", &value).expect("valid properties");

    assert_eq!(properties.len(), 1);
    assert_eq!(properties["env"], Some(PropertyValue::Single("prod".to_string())));
}

#[test]
fn test_property_values_errors_carry_entry_path() {
    let missing_value = json!([{ "property_name": "env" }]);
    let wrong_type = json!([{ "property_name": "env", "value": 3 }]);
    let not_object = json!(["env"]);

    assert_eq!(
        property_values("properties", &missing_value).unwrap_err(),
        DecodeError::MissingField {
            field: "properties[0].value".to_string()
        }
    );
    assert_eq!(
        property_values("properties", &wrong_type)
            .unwrap_err()
            .field(),
        "properties[0].value"
    );
    assert_eq!(
        property_values("properties", &not_object)
            .unwrap_err()
            .field(),
        "properties[0]"
    );
    assert!(property_values("properties", &json!({})).is_err());
}

#[test]
fn test_property_value_accepts_null_string_and_list() {
    assert_eq!(property_value("value", &json!(null)), Ok(None));
    assert_eq!(
        property_value("value", &json!("prod")),
        Ok(Some(PropertyValue::Single("prod".to_string())))
    );
    assert_eq!(
        property_value("value", &json!(["rust", "go"])),
        Ok(Some(PropertyValue::Multiple(vec![
            "rust".to_string(),
            "go".to_string()
        ])))
    );
    assert_eq!(
        property_value("value", &json!({ "nested": true })),
        Err(DecodeError::TypeMismatch {
            field: "value".to_string(),
            expected: "null, string or array of strings",
            found: JsonKind::Object,
        })
    );
    assert_eq!(
        property_value("value", &json!(["rust", 1]))
            .unwrap_err()
            .field(),
        "value[1]"
    );
}

#[test]
fn test_property_values_keeps_null_and_multi_select_entries() {
    let value = json!([
        { "property_name": "env", "value": null },
        { "property_name": "languages", "value": ["rust", "go"] }
    ]);

    let properties = property_values("properties", &value).expect("valid properties");

    assert_eq!(properties["env"], None);
    assert_eq!(
        properties["languages"],
        Some(PropertyValue::Multiple(vec![
            "rust".to_string(),
            "go".to_string()
        ]))
    );
}

#[test]
fn test_default_value_serializes_untagged() {
    let single = serde_json::to_value(DefaultValue::Single("a".to_string())).expect("serialize");
    let multiple = serde_json::to_value(DefaultValue::Multiple(vec!["a".to_string()]))
        .expect("serialize");

    assert_eq!(single, json!("a"));
    assert_eq!(multiple, json!(["a"]));
}

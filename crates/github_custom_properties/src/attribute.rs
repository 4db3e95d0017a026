//! Attribute containers and JSON coercion rules.
//!
//! Every field of a resource record is held in an [`Attribute`], which tells
//! apart a value that GitHub actually sent from one that was never supplied.
//! The coercion functions in this module check the JSON type of a raw value and
//! convert it into the declared Rust type without any lenient casting.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::custom_property_payload::PropertyValue;
use crate::errors::{DecodeError, Error};

#[cfg(test)]
#[path = "attribute_tests.rs"]
mod tests;

/// A single field value that may or may not have been supplied by the server.
///
/// # Examples
///
/// ```rust
/// use github_custom_properties::Attribute;
///
/// let unset: Attribute<String> = Attribute::NotSet;
/// assert_eq!(unset.value(), None);
///
/// let set = Attribute::Set("team".to_string());
/// assert_eq!(set.value().map(String::as_str), Some("team"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Attribute<T> {
    /// The payload never contained the field.
    #[default]
    NotSet,
    /// The payload contained the field with this value.
    Set(T),
}

impl<T> Attribute<T> {
    /// Returns `true` if the field was supplied.
    pub fn is_set(&self) -> bool {
        matches!(self, Attribute::Set(_))
    }

    /// Returns the value, or `None` if the field was never supplied.
    pub fn value(&self) -> Option<&T> {
        match self {
            Attribute::Set(value) => Some(value),
            Attribute::NotSet => None,
        }
    }

    /// Consumes the attribute and returns the value, if any.
    pub fn into_value(self) -> Option<T> {
        match self {
            Attribute::Set(value) => Some(value),
            Attribute::NotSet => None,
        }
    }

    /// Returns the value of a required field.
    ///
    /// # Errors
    ///
    /// Returns `Error::AttributeNotSet` naming `field` if the record was never
    /// populated.
    pub fn require(&self, field: &'static str) -> Result<&T, Error> {
        self.value().ok_or(Error::AttributeNotSet { field })
    }

    /// Replaces `self` with `other` when `other` holds a value.
    ///
    /// Unset attributes never overwrite a previously populated one.
    pub(crate) fn merge(&mut self, other: Attribute<T>) {
        if other.is_set() {
            *self = other;
        }
    }
}

impl<T> From<Option<T>> for Attribute<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Attribute::Set(value),
            None => Attribute::NotSet,
        }
    }
}

/// The JSON type of a raw payload value, used in decode diagnostics.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum JsonKind {
    Null,
    Boolean,
    Integer,
    Number,
    String,
    Array,
    Object,
}

impl JsonKind {
    /// Classifies a raw JSON value.
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => JsonKind::Null,
            Value::Bool(_) => JsonKind::Boolean,
            Value::Number(n) if n.is_i64() || n.is_u64() => JsonKind::Integer,
            Value::Number(_) => JsonKind::Number,
            Value::String(_) => JsonKind::String,
            Value::Array(_) => JsonKind::Array,
            Value::Object(_) => JsonKind::Object,
        }
    }
}

impl fmt::Display for JsonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            JsonKind::Null => "null",
            JsonKind::Boolean => "boolean",
            JsonKind::Integer => "integer",
            JsonKind::Number => "number",
            JsonKind::String => "string",
            JsonKind::Array => "array",
            JsonKind::Object => "object",
        };
        f.write_str(name)
    }
}

/// Default value of an organization custom property.
///
/// Single-valued properties carry a string; `multi_select` properties carry a
/// list of strings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DefaultValue {
    /// A single string default
    Single(String),
    /// A list of defaults for multi-select properties
    Multiple(Vec<String>),
}

fn mismatch(field: &str, expected: &'static str, value: &Value) -> DecodeError {
    DecodeError::TypeMismatch {
        field: field.to_string(),
        expected,
        found: JsonKind::of(value),
    }
}

/// Accepts a JSON string.
pub fn string(field: &str, value: &Value) -> Result<String, DecodeError> {
    value
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| mismatch(field, "string", value))
}

/// Accepts a JSON boolean.
pub fn boolean(field: &str, value: &Value) -> Result<bool, DecodeError> {
    value
        .as_bool()
        .ok_or_else(|| mismatch(field, "boolean", value))
}

/// Accepts a non-negative JSON integer.
///
/// Floating point numbers are rejected even when they have no fractional part.
pub fn integer(field: &str, value: &Value) -> Result<u64, DecodeError> {
    value
        .as_u64()
        .ok_or_else(|| mismatch(field, "integer", value))
}

/// Accepts a JSON array of strings.
///
/// The first element that is not a string is reported with its index, e.g.
/// `allowed_values[2]`.
pub fn list_of_strings(field: &str, value: &Value) -> Result<Vec<String>, DecodeError> {
    let items = value
        .as_array()
        .ok_or_else(|| mismatch(field, "array of strings", value))?;

    items
        .iter()
        .enumerate()
        .map(|(index, item)| string(&format!("{field}[{index}]"), item))
        .collect()
}

/// Accepts either a JSON string or a JSON array of strings.
pub fn string_or_list_of_strings(field: &str, value: &Value) -> Result<DefaultValue, DecodeError> {
    match value {
        Value::String(s) => Ok(DefaultValue::Single(s.clone())),
        Value::Array(_) => list_of_strings(field, value).map(DefaultValue::Multiple),
        _ => Err(mismatch(field, "string or array of strings", value)),
    }
}

/// Accepts the value of a single repository property.
///
/// GitHub sends `null` for a property without a value, a string for single
/// valued properties and an array of strings for `multi_select` properties.
pub fn property_value(field: &str, value: &Value) -> Result<Option<PropertyValue>, DecodeError> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(PropertyValue::Single(s.clone()))),
        Value::Array(_) => list_of_strings(field, value).map(|v| Some(PropertyValue::Multiple(v))),
        _ => Err(mismatch(field, "null, string or array of strings", value)),
    }
}

/// Collapses an array of `{"property_name": .., "value": ..}` objects into a
/// single name to value mapping.
///
/// When the same `property_name` occurs more than once the last entry wins.
pub fn property_values(
    field: &str,
    value: &Value,
) -> Result<BTreeMap<String, Option<PropertyValue>>, DecodeError> {
    let entries = value
        .as_array()
        .ok_or_else(|| mismatch(field, "array of property objects", value))?;

    let mut properties = BTreeMap::new();
    for (index, entry) in entries.iter().enumerate() {
        let path = format!("{field}[{index}]");
        let object = entry
            .as_object()
            .ok_or_else(|| mismatch(&path, "object", entry))?;

        let name = entry_field(&path, object, "property_name", string)?;
        let value = entry_field(&path, object, "value", property_value)?;
        properties.insert(name, value);
    }

    Ok(properties)
}

fn entry_field<T>(
    path: &str,
    object: &serde_json::Map<String, Value>,
    key: &str,
    coerce: fn(&str, &Value) -> Result<T, DecodeError>,
) -> Result<T, DecodeError> {
    let field = format!("{path}.{key}");
    match object.get(key) {
        Some(value) => coerce(&field, value),
        None => Err(DecodeError::MissingField { field }),
    }
}

//! Error types for custom property resource decoding.
//!
//! This module defines the errors that can occur when a decoded GitHub API
//! response is mapped onto one of the typed resource records, and when a
//! field of a record is read before it was populated.

use crate::attribute::JsonKind;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Errors that can occur while populating or reading a resource record.
///
/// ## Examples
///
/// ```rust
/// use github_custom_properties::{Error, OrganizationCustomProperty, Resource};
/// use serde_json::json;
///
/// let result = OrganizationCustomProperty::from_value(json!({ "value_type": "string" }));
/// match result {
///     Err(Error::DecodeFailed { error_count, .. }) => assert_eq!(error_count, 1),
///     other => panic!("unexpected result: {other:?}"),
/// }
/// ```
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A required field was read before the record was populated.
    ///
    /// Records start with every field unset. Required fields are only guaranteed
    /// to hold a value after a successful call to `populate`.
    #[error("Attribute '{field}' has not been set")]
    AttributeNotSet { field: &'static str },

    /// One or more fields of the payload could not be decoded.
    ///
    /// All field failures found in a single pass are reported together. The
    /// record that was being populated is left unchanged.
    #[error("Failed to decode {resource} with {error_count} error(s)")]
    DecodeFailed {
        resource: &'static str,
        error_count: usize,
        errors: Vec<DecodeError>,
    },

    /// Error deserializing raw JSON text into a payload.
    #[error("Failed to deserialize GitHub response: {0}")]
    Deserialization(#[from] serde_json::Error),

    /// The payload handed to a record was not a JSON object.
    #[error("Expected a JSON object for the payload, found {found}")]
    NotAnObject { found: JsonKind },

    /// The `values_editable_by` field holds a value GitHub does not document.
    #[error("Unknown values_editable_by setting: {0}")]
    UnknownEditableBy(String),

    /// The `value_type` field holds a value GitHub does not document.
    #[error("Unknown custom property value type: {0}")]
    UnknownValueType(String),
}

/// A single field-level decode failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// A key the API contract guarantees was absent from the payload.
    #[error("Required field is missing: {field}")]
    MissingField { field: String },

    /// A key was present but its JSON type did not match the declared type.
    #[error("Field '{field}' expected {expected}, found {found}")]
    TypeMismatch {
        field: String,
        expected: &'static str,
        found: JsonKind,
    },
}

impl DecodeError {
    /// Returns the path of the field that failed, e.g. `properties[0].value`.
    pub fn field(&self) -> &str {
        match self {
            DecodeError::MissingField { field } => field,
            DecodeError::TypeMismatch { field, .. } => field,
        }
    }
}

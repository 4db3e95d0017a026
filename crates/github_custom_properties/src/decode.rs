//! Schema-driven decoding of raw GitHub payloads.
//!
//! A [`FieldDecoder`] walks one payload for one resource. Each declared field is
//! read exactly once as either required or optional, and every failure is
//! collected so that a malformed payload is reported in a single error.

use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::attribute::{Attribute, JsonKind};
use crate::errors::{DecodeError, Error};

#[cfg(test)]
#[path = "decode_tests.rs"]
mod tests;

/// One decoded JSON object as received from the GitHub API.
pub type Payload = Map<String, Value>;

/// Converts a decoded JSON value into a [`Payload`].
///
/// # Errors
///
/// Returns `Error::NotAnObject` if the value is not a JSON object.
pub fn payload_from_value(value: Value) -> Result<Payload, Error> {
    match value {
        Value::Object(map) => Ok(map),
        other => Err(Error::NotAnObject {
            found: JsonKind::of(&other),
        }),
    }
}

/// Decodes the fields of a single resource from a payload.
///
/// # Examples
///
/// ```rust
/// use github_custom_properties::{attribute, FieldDecoder, Payload};
/// use serde_json::json;
///
/// let payload: Payload = serde_json::from_value(json!({ "property_name": "team" })).unwrap();
/// let mut decoder = FieldDecoder::new("example", &payload);
///
/// let name = decoder.required("property_name", attribute::string);
/// let description = decoder.optional("description", attribute::string);
/// decoder.finish().unwrap();
///
/// assert_eq!(name.value().map(String::as_str), Some("team"));
/// assert!(!description.is_set());
/// ```
#[derive(Debug)]
pub struct FieldDecoder<'a> {
    resource: &'static str,
    payload: &'a Payload,
    errors: Vec<DecodeError>,
    fields_set: usize,
}

impl<'a> FieldDecoder<'a> {
    /// Creates a decoder for the named resource.
    pub fn new(resource: &'static str, payload: &'a Payload) -> Self {
        Self {
            resource,
            payload,
            errors: Vec::new(),
            fields_set: 0,
        }
    }

    /// Decodes a field the API contract guarantees is present.
    ///
    /// An absent key is recorded as `DecodeError::MissingField` and the returned
    /// attribute is unset.
    pub fn required<T, F>(&mut self, key: &str, coerce: F) -> Attribute<T>
    where
        F: FnOnce(&str, &Value) -> Result<T, DecodeError>,
    {
        let payload = self.payload;
        match payload.get(key) {
            Some(value) => self.coerce(key, value, coerce),
            None => {
                self.errors.push(DecodeError::MissingField {
                    field: key.to_string(),
                });
                Attribute::NotSet
            }
        }
    }

    /// Decodes a field the API contract may omit.
    ///
    /// Absent keys and explicit `null` values both leave the attribute unset.
    pub fn optional<T, F>(&mut self, key: &str, coerce: F) -> Attribute<T>
    where
        F: FnOnce(&str, &Value) -> Result<T, DecodeError>,
    {
        let payload = self.payload;
        match payload.get(key) {
            None => Attribute::NotSet,
            Some(Value::Null) => {
                debug!(
                    resource = self.resource,
                    field = key,
                    "Optional field is null, leaving it unset"
                );
                Attribute::NotSet
            }
            Some(value) => self.coerce(key, value, coerce),
        }
    }

    /// Completes the pass.
    ///
    /// # Errors
    ///
    /// Returns `Error::DecodeFailed` carrying every field failure recorded by
    /// this decoder.
    pub fn finish(self) -> Result<(), Error> {
        if self.errors.is_empty() {
            debug!(
                resource = self.resource,
                fields_set = self.fields_set,
                "Decoded payload"
            );
            return Ok(());
        }

        warn!(
            resource = self.resource,
            error_count = self.errors.len(),
            "Payload failed to decode"
        );
        Err(Error::DecodeFailed {
            resource: self.resource,
            error_count: self.errors.len(),
            errors: self.errors,
        })
    }

    fn coerce<T, F>(&mut self, key: &str, value: &Value, coerce: F) -> Attribute<T>
    where
        F: FnOnce(&str, &Value) -> Result<T, DecodeError>,
    {
        match coerce(key, value) {
            Ok(v) => {
                self.fields_set += 1;
                Attribute::Set(v)
            }
            Err(e) => {
                self.errors.push(e);
                Attribute::NotSet
            }
        }
    }
}

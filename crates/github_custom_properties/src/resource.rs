//! The resource record contract.
//!
//! A resource record is a named set of [`Attribute`](crate::Attribute) fields
//! describing one GitHub API object. Records go through two phases: they are
//! initialized with every field unset, then populated from a payload.

use serde_json::Value;

use crate::decode::{payload_from_value, Payload};
use crate::errors::Error;

#[cfg(test)]
#[path = "resource_tests.rs"]
mod tests;

/// Behaviour shared by every typed GitHub resource record.
pub trait Resource: Default {
    /// Name of the resource used in logs and decode errors.
    const RESOURCE_NAME: &'static str;

    /// Resets every field to the unset state.
    ///
    /// Calling this on an already initialized record has no further effect.
    fn initialize(&mut self);

    /// Decodes the payload into the record's fields.
    ///
    /// Required keys must be present. Optional keys are decoded only when
    /// present; fields whose keys are absent keep their current value, so
    /// repeated calls merge onto the earlier state.
    ///
    /// # Errors
    ///
    /// Returns `Error::DecodeFailed` listing every missing required key and
    /// every type mismatch. On error the record is left unchanged.
    fn populate(&mut self, payload: &Payload) -> Result<(), Error>;

    /// Builds a record from a payload.
    fn from_payload(payload: &Payload) -> Result<Self, Error> {
        let mut record = Self::default();
        record.initialize();
        record.populate(payload)?;
        Ok(record)
    }

    /// Builds a record from a decoded JSON value.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotAnObject` if the value is not a JSON object, or the
    /// errors of [`Resource::populate`].
    fn from_value(value: Value) -> Result<Self, Error> {
        let payload = payload_from_value(value)?;
        Self::from_payload(&payload)
    }

    /// Builds a record from raw JSON text.
    fn from_json_str(json: &str) -> Result<Self, Error> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }
}

/// Implements `serde::Deserialize` for a record by routing through
/// [`Resource::populate`].
macro_rules! deserialize_via_populate {
    ($record:ty) => {
        impl<'de> serde::Deserialize<'de> for $record {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let payload = <$crate::decode::Payload as serde::Deserialize>::deserialize(
                    deserializer,
                )?;
                <$record as $crate::resource::Resource>::from_payload(&payload)
                    .map_err(serde::de::Error::custom)
            }
        }
    };
}

pub(crate) use deserialize_via_populate;

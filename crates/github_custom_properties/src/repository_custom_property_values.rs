//! Custom property values set on a repository.
//!
//! See: https://docs.github.com/en/rest/orgs/custom-properties#list-custom-property-values-for-organization-repositories

use std::collections::BTreeMap;

use crate::attribute::{self, Attribute};
use crate::custom_property_payload::PropertyValue;
use crate::decode::{FieldDecoder, Payload};
use crate::errors::Error;
use crate::resource::{deserialize_via_populate, Resource};

#[cfg(test)]
#[path = "repository_custom_property_values_tests.rs"]
mod tests;

/// The custom property values of one repository.
///
/// GitHub sends the values as a list of `{"property_name", "value"}` objects.
/// The record collapses that list into a single name to value mapping. A value
/// is `None` when the property has no value on the repository.
///
/// # Examples
///
/// ```rust
/// use github_custom_properties::{RepositoryCustomPropertyValues, Resource};
/// use serde_json::json;
///
/// let values = RepositoryCustomPropertyValues::from_value(json!({
///     "repository_id": 42,
///     "repository_name": "repo1",
///     "repository_full_name": "org/repo1",
///     "properties": [{ "property_name": "env", "value": "prod" }]
/// }))?;
///
/// assert_eq!(values.repository_id()?, 42);
/// assert_eq!(values.property("env").and_then(|v| v.as_str()), Some("prod"));
/// # Ok::<(), github_custom_properties::Error>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RepositoryCustomPropertyValues {
    repository_id: Attribute<u64>,
    repository_name: Attribute<String>,
    repository_full_name: Attribute<String>,
    properties: Attribute<BTreeMap<String, Option<PropertyValue>>>,
}

impl RepositoryCustomPropertyValues {
    /// Creates a record with every field unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the numeric ID of the repository.
    ///
    /// # Errors
    ///
    /// Returns `Error::AttributeNotSet` if the record was never populated.
    pub fn repository_id(&self) -> Result<u64, Error> {
        self.repository_id.require("repository_id").copied()
    }

    /// Returns the repository name without the owner.
    ///
    /// # Errors
    ///
    /// Returns `Error::AttributeNotSet` if the record was never populated.
    pub fn repository_name(&self) -> Result<&str, Error> {
        self.repository_name
            .require("repository_name")
            .map(String::as_str)
    }

    /// Returns the repository name in `owner/name` form.
    ///
    /// # Errors
    ///
    /// Returns `Error::AttributeNotSet` if the record was never populated.
    pub fn repository_full_name(&self) -> Result<&str, Error> {
        self.repository_full_name
            .require("repository_full_name")
            .map(String::as_str)
    }

    /// Returns the property values keyed by property name.
    ///
    /// # Errors
    ///
    /// Returns `Error::AttributeNotSet` if the record was never populated.
    pub fn properties(&self) -> Result<&BTreeMap<String, Option<PropertyValue>>, Error> {
        self.properties.require("properties")
    }

    /// Looks up the value of a single property.
    ///
    /// Returns `None` if the record was never populated or the repository has
    /// no value for `name`.
    pub fn property(&self, name: &str) -> Option<&PropertyValue> {
        self.properties
            .value()
            .and_then(|properties| properties.get(name))
            .and_then(Option::as_ref)
    }
}

impl Resource for RepositoryCustomPropertyValues {
    const RESOURCE_NAME: &'static str = "RepositoryCustomPropertyValues";

    fn initialize(&mut self) {
        *self = Self::default();
    }

    fn populate(&mut self, payload: &Payload) -> Result<(), Error> {
        let mut decoder = FieldDecoder::new(Self::RESOURCE_NAME, payload);
        let decoded = Self {
            repository_id: decoder.required("repository_id", attribute::integer),
            repository_name: decoder.required("repository_name", attribute::string),
            repository_full_name: decoder.required("repository_full_name", attribute::string),
            properties: decoder.required("properties", attribute::property_values),
        };
        decoder.finish()?;

        self.repository_id.merge(decoded.repository_id);
        self.repository_name.merge(decoded.repository_name);
        self.repository_full_name
            .merge(decoded.repository_full_name);
        self.properties.merge(decoded.properties);
        Ok(())
    }
}

deserialize_via_populate!(RepositoryCustomPropertyValues);

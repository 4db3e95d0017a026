//! GitHub custom property API request bodies.
//!
//! The read side of the custom properties API returns resource records; the
//! write side expects a list of `{"property_name", "value"}` objects. This
//! module defines those request bodies.
//!
//! See: https://docs.github.com/en/rest/repos/custom-properties

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "custom_property_payload_tests.rs"]
mod tests;

/// The value assigned to a custom property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    /// Value of a `string`, `single_select`, `true_false` or `url` property
    Single(String),
    /// Values of a `multi_select` property
    Multiple(Vec<String>),
}

impl PropertyValue {
    /// Returns the value of a single valued property.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropertyValue::Single(value) => Some(value),
            PropertyValue::Multiple(_) => None,
        }
    }
}

/// A single property assignment.
///
/// A `value` of `None` is sent as `null`, which removes the property's value
/// from the repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomPropertyValue {
    /// Name of a property defined on the organization
    pub property_name: String,
    /// New value, or `None` to clear it
    pub value: Option<PropertyValue>,
}

impl CustomPropertyValue {
    /// Creates an assignment of a single string value.
    pub fn single(property_name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            property_name: property_name.into(),
            value: Some(PropertyValue::Single(value.into())),
        }
    }

    /// Creates an assignment that removes the property's value.
    pub fn cleared(property_name: impl Into<String>) -> Self {
        Self {
            property_name: property_name.into(),
            value: None,
        }
    }
}

/// Payload for updating repository custom properties via GitHub API.
///
/// This struct represents the expected format for the
/// `PATCH /repos/{owner}/{repo}/properties/values` endpoint.
///
/// # Examples
///
/// ```
/// use github_custom_properties::{CustomPropertiesPayload, CustomPropertyValue};
///
/// let payload = CustomPropertiesPayload::new(vec![
///     CustomPropertyValue::single("repository_type", "library"),
/// ]);
/// assert!(!payload.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomPropertiesPayload {
    /// Property values to set on the repository.
    ///
    /// The property definitions must already exist at the organization level.
    pub properties: Vec<CustomPropertyValue>,
}

impl CustomPropertiesPayload {
    /// Create a new custom properties payload from a list of properties.
    pub fn new(properties: Vec<CustomPropertyValue>) -> Self {
        Self { properties }
    }

    /// Create a payload that assigns every entry of a name to value map.
    ///
    /// This accepts the map returned by
    /// [`RepositoryCustomPropertyValues::properties`](crate::RepositoryCustomPropertyValues::properties),
    /// which makes it possible to copy the values of one repository onto another.
    /// Properties without a value are sent as `null`.
    pub fn from_map(properties: &BTreeMap<String, Option<PropertyValue>>) -> Self {
        Self::new(
            properties
                .iter()
                .map(|(name, value)| CustomPropertyValue {
                    property_name: name.clone(),
                    value: value.clone(),
                })
                .collect(),
        )
    }

    /// Returns `true` if the payload assigns no properties.
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

/// Payload for setting property values on many repositories of an organization.
///
/// This struct represents the expected format for the
/// `PATCH /orgs/{org}/properties/values` endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganizationPropertyValuesPayload {
    /// Names of the repositories to update
    pub repository_names: Vec<String>,
    /// Property values to set on every listed repository
    pub properties: Vec<CustomPropertyValue>,
}

//! Organization custom property definitions.
//!
//! An organization defines the schema of its custom properties once; every
//! repository in the organization can then carry a value for each of them.
//!
//! See: https://docs.github.com/en/rest/orgs/custom-properties

use std::fmt;
use std::str::FromStr;

use serde::ser::{Error as _, SerializeMap};
use serde::{Deserialize, Serialize, Serializer};

use crate::attribute::{self, Attribute, DefaultValue};
use crate::decode::{FieldDecoder, Payload};
use crate::errors::Error;
use crate::resource::{deserialize_via_populate, Resource};

#[cfg(test)]
#[path = "organization_custom_property_tests.rs"]
mod tests;

/// A custom property defined on an organization.
///
/// `property_name` and `value_type` are always sent by GitHub. All other fields
/// may be omitted, in which case their accessors return `None`.
///
/// # Examples
///
/// ```rust
/// use github_custom_properties::{OrganizationCustomProperty, Resource};
/// use serde_json::json;
///
/// let property = OrganizationCustomProperty::from_value(json!({
///     "property_name": "team",
///     "value_type": "single_select",
///     "required": true,
///     "allowed_values": ["a", "b"]
/// }))?;
///
/// assert_eq!(property.property_name()?, "team");
/// assert_eq!(property.required(), Some(true));
/// assert_eq!(property.description(), None);
/// # Ok::<(), github_custom_properties::Error>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OrganizationCustomProperty {
    property_name: Attribute<String>,
    value_type: Attribute<String>,
    required: Attribute<bool>,
    default_value: Attribute<DefaultValue>,
    description: Attribute<String>,
    allowed_values: Attribute<Vec<String>>,
    values_editable_by: Attribute<String>,
}

impl OrganizationCustomProperty {
    /// Creates a record with every field unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the name of the property.
    ///
    /// # Errors
    ///
    /// Returns `Error::AttributeNotSet` if the record was never populated.
    pub fn property_name(&self) -> Result<&str, Error> {
        self.property_name
            .require("property_name")
            .map(String::as_str)
    }

    /// Returns the raw value type, e.g. `single_select`.
    ///
    /// # Errors
    ///
    /// Returns `Error::AttributeNotSet` if the record was never populated.
    pub fn value_type(&self) -> Result<&str, Error> {
        self.value_type.require("value_type").map(String::as_str)
    }

    /// Returns the value type parsed into a [`CustomPropertyValueType`].
    ///
    /// # Errors
    ///
    /// Returns `Error::AttributeNotSet` if the record was never populated, or
    /// `Error::UnknownValueType` if GitHub sent a type this crate does not know.
    pub fn value_type_kind(&self) -> Result<CustomPropertyValueType, Error> {
        self.value_type()?.parse()
    }

    /// Returns whether repositories must carry a value for this property.
    pub fn required(&self) -> Option<bool> {
        self.required.value().copied()
    }

    /// Returns the default value applied to repositories without a value.
    pub fn default_value(&self) -> Option<&DefaultValue> {
        self.default_value.value()
    }

    /// Returns the human readable description.
    pub fn description(&self) -> Option<&str> {
        self.description.value().map(String::as_str)
    }

    /// Returns the values permitted for select properties.
    pub fn allowed_values(&self) -> Option<&[String]> {
        self.allowed_values.value().map(Vec::as_slice)
    }

    /// Returns who may edit the values of this property, as sent by GitHub.
    pub fn values_editable_by(&self) -> Option<&str> {
        self.values_editable_by.value().map(String::as_str)
    }

    /// Returns [`OrganizationCustomProperty::values_editable_by`] parsed into a
    /// [`ValuesEditableBy`].
    ///
    /// # Errors
    ///
    /// Returns `Error::UnknownEditableBy` if GitHub sent an unknown setting.
    pub fn values_editable_by_kind(&self) -> Result<Option<ValuesEditableBy>, Error> {
        self.values_editable_by().map(str::parse).transpose()
    }
}

impl Resource for OrganizationCustomProperty {
    const RESOURCE_NAME: &'static str = "OrganizationCustomProperty";

    fn initialize(&mut self) {
        *self = Self::default();
    }

    fn populate(&mut self, payload: &Payload) -> Result<(), Error> {
        let mut decoder = FieldDecoder::new(Self::RESOURCE_NAME, payload);
        let decoded = Self {
            property_name: decoder.required("property_name", attribute::string),
            value_type: decoder.required("value_type", attribute::string),
            required: decoder.optional("required", attribute::boolean),
            default_value: decoder.optional("default_value", attribute::string_or_list_of_strings),
            description: decoder.optional("description", attribute::string),
            allowed_values: decoder.optional("allowed_values", attribute::list_of_strings),
            values_editable_by: decoder.optional("values_editable_by", attribute::string),
        };
        decoder.finish()?;

        self.property_name.merge(decoded.property_name);
        self.value_type.merge(decoded.value_type);
        self.required.merge(decoded.required);
        self.default_value.merge(decoded.default_value);
        self.description.merge(decoded.description);
        self.allowed_values.merge(decoded.allowed_values);
        self.values_editable_by.merge(decoded.values_editable_by);
        Ok(())
    }
}

deserialize_via_populate!(OrganizationCustomProperty);

/// Serializes the property in the shape accepted by
/// `PUT /orgs/{org}/properties/schema/{custom_property_name}`.
///
/// Unset optional fields are omitted. Serialization fails if a required field
/// is unset.
impl Serialize for OrganizationCustomProperty {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let property_name = self.property_name().map_err(S::Error::custom)?;
        let value_type = self.value_type().map_err(S::Error::custom)?;

        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("property_name", property_name)?;
        map.serialize_entry("value_type", value_type)?;
        if let Some(required) = self.required() {
            map.serialize_entry("required", &required)?;
        }
        if let Some(default_value) = self.default_value() {
            map.serialize_entry("default_value", default_value)?;
        }
        if let Some(description) = self.description() {
            map.serialize_entry("description", description)?;
        }
        if let Some(allowed_values) = self.allowed_values() {
            map.serialize_entry("allowed_values", allowed_values)?;
        }
        if let Some(values_editable_by) = self.values_editable_by() {
            map.serialize_entry("values_editable_by", values_editable_by)?;
        }
        map.end()
    }
}

/// The kinds of value a custom property can hold.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CustomPropertyValueType {
    /// Free-form text
    String,
    /// One value picked from `allowed_values`
    SingleSelect,
    /// Any number of values picked from `allowed_values`
    MultiSelect,
    /// `true` or `false`
    TrueFalse,
    /// A URL
    Url,
}

impl CustomPropertyValueType {
    /// Returns the name GitHub uses for this value type.
    pub fn as_str(&self) -> &'static str {
        match self {
            CustomPropertyValueType::String => "string",
            CustomPropertyValueType::SingleSelect => "single_select",
            CustomPropertyValueType::MultiSelect => "multi_select",
            CustomPropertyValueType::TrueFalse => "true_false",
            CustomPropertyValueType::Url => "url",
        }
    }
}

impl fmt::Display for CustomPropertyValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CustomPropertyValueType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "string" => Ok(CustomPropertyValueType::String),
            "single_select" => Ok(CustomPropertyValueType::SingleSelect),
            "multi_select" => Ok(CustomPropertyValueType::MultiSelect),
            "true_false" => Ok(CustomPropertyValueType::TrueFalse),
            "url" => Ok(CustomPropertyValueType::Url),
            other => Err(Error::UnknownValueType(other.to_string())),
        }
    }
}

/// Who is allowed to edit the values of a custom property.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValuesEditableBy {
    /// Organization owners and custom property admins only
    OrgActors,
    /// Organization actors and repository admins
    OrgAndRepoActors,
}

impl ValuesEditableBy {
    /// Returns the name GitHub uses for this setting.
    pub fn as_str(&self) -> &'static str {
        match self {
            ValuesEditableBy::OrgActors => "org_actors",
            ValuesEditableBy::OrgAndRepoActors => "org_and_repo_actors",
        }
    }
}

impl fmt::Display for ValuesEditableBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ValuesEditableBy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "org_actors" => Ok(ValuesEditableBy::OrgActors),
            "org_and_repo_actors" => Ok(ValuesEditableBy::OrgAndRepoActors),
            other => Err(Error::UnknownEditableBy(other.to_string())),
        }
    }
}

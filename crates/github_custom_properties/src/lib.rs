//! Crate for decoding GitHub custom property resources.
//!
//! This crate maps decoded responses of GitHub's organization and repository
//! custom property endpoints onto typed records. Every field of a record is held
//! in an [`Attribute`] so that a field the server never sent is told apart from
//! any real value, including an empty string or an empty list.
//!
//! Fetching the responses is left to the caller; this crate only consumes the
//! decoded JSON objects.
//!
//! # Examples
//!
//! ```rust
//! use github_custom_properties::{OrganizationCustomProperty, Resource};
//!
//! let property = OrganizationCustomProperty::from_json_str(
//!     r#"{"property_name": "environment", "value_type": "string"}"#,
//! )?;
//!
//! assert_eq!(property.property_name()?, "environment");
//! assert_eq!(property.allowed_values(), None);
//! # Ok::<(), github_custom_properties::Error>(())
//! ```

pub mod attribute;
pub use attribute::{Attribute, DefaultValue, JsonKind};

pub mod custom_property_payload;
pub use custom_property_payload::{
    CustomPropertiesPayload, CustomPropertyValue, OrganizationPropertyValuesPayload,
    PropertyValue,
};

pub mod decode;
pub use decode::{payload_from_value, FieldDecoder, Payload};

pub mod errors;
pub use errors::{DecodeError, Error};

pub mod organization_custom_property;
pub use organization_custom_property::{
    CustomPropertyValueType, OrganizationCustomProperty, ValuesEditableBy,
};

pub mod repository_custom_property_values;
pub use repository_custom_property_values::RepositoryCustomPropertyValues;

pub mod resource;
pub use resource::Resource;

#![deny(missing_docs)]

//! # Schema Object
//!
//! The recursive JSON Schema subset OpenAPI uses for data types. Keywords the
//! filter engine has no reason to look at (numeric bounds, patterns, xml,
//! ...) are kept verbatim in [`Schema::extra`].
//!
//! OpenAPI 3.1 also allows `true` and `false` wherever a schema may appear.
//! Those load as a [`Schema`] with only [`Schema::boolean`] set and are
//! written back as the bare boolean.

use indexmap::IndexMap;
use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::collections::BTreeMap;

/// A schema, or a `$ref` to one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(remote = "Self", rename_all = "camelCase")]
pub struct Schema {
    /// Set for the boolean schema forms: `true` accepts anything, `false`
    /// nothing. Every other field is unset then.
    #[serde(skip)]
    pub boolean: Option<bool>,
    /// Reference to a schema defined elsewhere.
    #[serde(rename = "$ref", skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    /// Title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// `type`: a single type name, or a list of names in OpenAPI 3.1.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub schema_type: Option<Value>,
    /// Format hint (e.g. `int64`, `uuid`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    /// OpenAPI 3.0 nullability.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nullable: Option<bool>,
    /// Whether the schema is deprecated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deprecated: Option<bool>,
    /// Only sent in responses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_only: Option<bool>,
    /// Only sent in requests.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub write_only: Option<bool>,
    /// Names of required properties.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<Vec<String>>,
    /// Allowed values.
    #[serde(rename = "enum", skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<Value>>,
    /// Default value.
    #[serde(
        default,
        deserialize_with = "crate::model::value::present",
        skip_serializing_if = "Option::is_none"
    )]
    pub default: Option<Value>,
    /// Example value.
    #[serde(
        default,
        deserialize_with = "crate::model::value::present",
        skip_serializing_if = "Option::is_none"
    )]
    pub example: Option<Value>,
    /// Polymorphism discriminator, kept verbatim.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discriminator: Option<Value>,
    /// Named property schemas.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<IndexMap<String, Schema>>,
    /// Schema (or permission flag) for properties not named in `properties`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_properties: Option<AdditionalProperties>,
    /// Element schema of an array.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<Schema>>,
    /// Schemas the value must all match.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub all_of: Option<Vec<Schema>>,
    /// Schemas of which the value must match at least one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub any_of: Option<Vec<Schema>>,
    /// Schemas of which the value must match exactly one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub one_of: Option<Vec<Schema>>,
    /// Schema the value must not match.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub not: Option<Box<Schema>>,
    /// Remaining keywords and extensions.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// `additionalProperties`: either a boolean or a schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AdditionalProperties {
    /// `true` / `false`.
    Allowed(bool),
    /// A schema every additional property must match.
    Schema(Box<Schema>),
}

impl<'de> Deserialize<'de> for Schema {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::Bool(flag) => Ok(Schema::flag(flag)),
            value => Schema::deserialize(value).map_err(D::Error::custom),
        }
    }
}

impl Serialize for Schema {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self.boolean {
            Some(flag) => serializer.serialize_bool(flag),
            None => Schema::serialize(self, serializer),
        }
    }
}

impl Schema {
    /// Creates a boolean schema.
    pub fn flag(accepts: bool) -> Self {
        Self {
            boolean: Some(accepts),
            ..Default::default()
        }
    }

    /// Creates a schema with the given `type`.
    pub fn of_type(schema_type: &str) -> Self {
        Self {
            schema_type: Some(Value::String(schema_type.to_string())),
            ..Default::default()
        }
    }

    /// Creates a `$ref` schema.
    pub fn ref_to(target: impl Into<String>) -> Self {
        Self {
            reference: Some(target.into()),
            ..Default::default()
        }
    }

    /// Adds (or replaces) a named property, builder style.
    pub fn with_property(mut self, name: impl Into<String>, schema: Schema) -> Self {
        self.properties
            .get_or_insert_with(IndexMap::new)
            .insert(name.into(), schema);
        self
    }

    /// Looks up a named property.
    pub fn property(&self, name: &str) -> Option<&Schema> {
        self.properties.as_ref().and_then(|props| props.get(name))
    }

    /// Whether the schema is explicitly marked deprecated.
    pub fn is_deprecated(&self) -> bool {
        self.deprecated == Some(true)
    }
}

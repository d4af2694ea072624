#![deny(missing_docs)]

//! # Document Root
//!
//! The OpenAPI object, its Info block, the reusable `Components` and the
//! `Paths` map.

use super::keyed;
use super::{
    ApiResponse, Callback, Header, Link, Parameter, PathItem, RequestBody, Schema,
    SecurityScheme, Server, Tag,
};
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::collections::BTreeMap;

/// A security requirement: scheme name to required scopes.
pub type SecurityRequirement = IndexMap<String, Vec<String>>;

/// Root of the document graph.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// OpenAPI version (e.g. "3.0.3").
    pub openapi: String,

    /// Metadata about the API.
    pub info: Info,

    /// Server configuration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub servers: Option<Vec<Server>>,

    /// Path items keyed by path template.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paths: Option<Paths>,

    /// Reusable definitions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub components: Option<Components>,

    /// Global security requirements.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security: Option<Vec<SecurityRequirement>>,

    /// Tags used by the document with additional metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,

    /// External documentation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_docs: Option<ExternalDocs>,

    /// `x-` extensions and keys the model does not name
    /// (e.g. `webhooks`, `jsonSchemaDialect`).
    #[serde(flatten)]
    pub extensions: BTreeMap<String, Value>,
}

impl Document {
    /// Looks up a path item by its exact path template.
    pub fn path_item(&self, path: &str) -> Option<&PathItem> {
        self.paths.as_ref().and_then(|paths| paths.items.get(path))
    }

    /// Mutable variant of [`Document::path_item`].
    pub fn path_item_mut(&mut self, path: &str) -> Option<&mut PathItem> {
        self.paths.as_mut().and_then(|paths| paths.items.get_mut(path))
    }
}

/// Metadata about the API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Info {
    /// The title of the API.
    pub title: String,
    /// A short summary of the API.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// A description of the API.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// A URL to the Terms of Service for the API.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terms_of_service: Option<String>,
    /// Contact information, kept verbatim.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<Value>,
    /// License information, kept verbatim.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license: Option<Value>,
    /// The version of the API described by the document.
    pub version: String,
    /// Extensions.
    #[serde(flatten)]
    pub extensions: BTreeMap<String, Value>,
}

/// External documentation reference.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExternalDocs {
    /// Target URL.
    pub url: String,
    /// Description of the target.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Extensions.
    #[serde(flatten)]
    pub extensions: BTreeMap<String, Value>,
}

/// Reusable definitions, one keyed map per element kind.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Components {
    /// Named schemas.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schemas: Option<IndexMap<String, Schema>>,
    /// Named responses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub responses: Option<IndexMap<String, ApiResponse>>,
    /// Named parameters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<IndexMap<String, Parameter>>,
    /// Named examples. Not filterable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub examples: Option<IndexMap<String, Value>>,
    /// Named request bodies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_bodies: Option<IndexMap<String, RequestBody>>,
    /// Named headers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<IndexMap<String, Header>>,
    /// Named security schemes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security_schemes: Option<IndexMap<String, SecurityScheme>>,
    /// Named links.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<IndexMap<String, Link>>,
    /// Named callbacks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callbacks: Option<IndexMap<String, Callback>>,
    /// Extensions and component maps the model does not name.
    #[serde(flatten)]
    pub extensions: BTreeMap<String, Value>,
}

/// The Paths object: path templates to path items, plus `x-` extensions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Paths {
    /// Path items keyed by path template, in document order.
    pub items: IndexMap<String, PathItem>,
    /// Extensions attached to the Paths object.
    pub extensions: BTreeMap<String, Value>,
}

impl Paths {
    /// Returns true when no path items are present.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<'de> Deserialize<'de> for Paths {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let split = keyed::split_entries(deserializer, "path item", false)?;
        Ok(Self {
            items: split.entries,
            extensions: split.extensions,
        })
    }
}

impl Serialize for Paths {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        keyed::join_entries(serializer, None, &self.items, &self.extensions)
    }
}

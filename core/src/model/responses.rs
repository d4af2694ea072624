#![deny(missing_docs)]

//! # Responses and Links

use super::{Content, Header, Server};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// A single response from an operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse {
    /// Reference to a response defined elsewhere.
    #[serde(rename = "$ref", skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    /// Description. Required on inline responses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Response headers keyed by name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<IndexMap<String, Header>>,
    /// Media-type keyed response bodies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<Content>,
    /// Design-time links keyed by name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<IndexMap<String, Link>>,
    /// Extensions.
    #[serde(flatten)]
    pub extensions: BTreeMap<String, Value>,
}

impl ApiResponse {
    /// Creates an inline response with a description.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: Some(description.into()),
            ..Default::default()
        }
    }
}

/// A design-time link from a response to another operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Link {
    /// Reference to a link defined elsewhere.
    #[serde(rename = "$ref", skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    /// Relative or absolute reference to the target operation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation_ref: Option<String>,
    /// Target operation id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation_id: Option<String>,
    /// Parameters passed to the target, as runtime expressions or constants.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<IndexMap<String, Value>>,
    /// Request body passed to the target.
    #[serde(
        default,
        deserialize_with = "crate::model::value::present",
        skip_serializing_if = "Option::is_none"
    )]
    pub request_body: Option<Value>,
    /// Description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Server to use for the target operation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server: Option<Server>,
    /// Extensions.
    #[serde(flatten)]
    pub extensions: BTreeMap<String, Value>,
}

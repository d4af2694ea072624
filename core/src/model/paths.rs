#![deny(missing_docs)]

//! # Paths, Operations and Callbacks
//!
//! Path items with their per-method operation slots, operations, the
//! response collection of an operation, and callbacks (which nest path items).

use super::keyed;
use super::{ApiResponse, ExternalDocs, Parameter, RequestBody, SecurityRequirement, Server};
use derive_more::Display;
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::collections::BTreeMap;

/// HTTP methods that own an operation slot on a [`PathItem`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum HttpMethod {
    /// DELETE
    #[display("DELETE")]
    Delete,
    /// GET
    #[display("GET")]
    Get,
    /// HEAD
    #[display("HEAD")]
    Head,
    /// OPTIONS
    #[display("OPTIONS")]
    Options,
    /// PATCH
    #[display("PATCH")]
    Patch,
    /// POST
    #[display("POST")]
    Post,
    /// PUT
    #[display("PUT")]
    Put,
    /// TRACE
    #[display("TRACE")]
    Trace,
}

impl HttpMethod {
    /// Every method, in the order the filter engine visits the slots.
    pub const ALL: [HttpMethod; 8] = [
        HttpMethod::Delete,
        HttpMethod::Get,
        HttpMethod::Head,
        HttpMethod::Options,
        HttpMethod::Patch,
        HttpMethod::Post,
        HttpMethod::Put,
        HttpMethod::Trace,
    ];
}

/// Describes the operations available on a single path.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PathItem {
    /// Reference to a path item defined elsewhere.
    #[serde(rename = "$ref", skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    /// Summary applying to all operations on this path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// Description applying to all operations on this path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// GET operation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub get: Option<Operation>,
    /// PUT operation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub put: Option<Operation>,
    /// POST operation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post: Option<Operation>,
    /// DELETE operation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete: Option<Operation>,
    /// OPTIONS operation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Operation>,
    /// HEAD operation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub head: Option<Operation>,
    /// PATCH operation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patch: Option<Operation>,
    /// TRACE operation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace: Option<Operation>,
    /// Servers overriding the document servers for this path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub servers: Option<Vec<Server>>,
    /// Parameters shared by all operations on this path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Vec<Parameter>>,
    /// Extensions.
    #[serde(flatten)]
    pub extensions: BTreeMap<String, Value>,
}

impl PathItem {
    /// Returns the operation bound to `method`, if any.
    pub fn operation(&self, method: HttpMethod) -> Option<&Operation> {
        match method {
            HttpMethod::Delete => self.delete.as_ref(),
            HttpMethod::Get => self.get.as_ref(),
            HttpMethod::Head => self.head.as_ref(),
            HttpMethod::Options => self.options.as_ref(),
            HttpMethod::Patch => self.patch.as_ref(),
            HttpMethod::Post => self.post.as_ref(),
            HttpMethod::Put => self.put.as_ref(),
            HttpMethod::Trace => self.trace.as_ref(),
        }
    }

    /// Returns the slot holding the operation for `method`.
    pub fn operation_slot_mut(&mut self, method: HttpMethod) -> &mut Option<Operation> {
        match method {
            HttpMethod::Delete => &mut self.delete,
            HttpMethod::Get => &mut self.get,
            HttpMethod::Head => &mut self.head,
            HttpMethod::Options => &mut self.options,
            HttpMethod::Patch => &mut self.patch,
            HttpMethod::Post => &mut self.post,
            HttpMethod::Put => &mut self.put,
            HttpMethod::Trace => &mut self.trace,
        }
    }

    /// Iterates the populated operation slots in [`HttpMethod::ALL`] order.
    pub fn operations(&self) -> impl Iterator<Item = (HttpMethod, &Operation)> + '_ {
        HttpMethod::ALL
            .into_iter()
            .filter_map(move |method| self.operation(method).map(|op| (method, op)))
    }
}

/// A single API operation on a path.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    /// Tag names for grouping.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    /// Short summary.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// Verbose description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// External documentation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_docs: Option<ExternalDocs>,
    /// Unique operation identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation_id: Option<String>,
    /// Operation parameters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Vec<Parameter>>,
    /// Request body.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_body: Option<RequestBody>,
    /// Possible responses keyed by status code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub responses: Option<ApiResponses>,
    /// Out-of-band callbacks keyed by name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callbacks: Option<IndexMap<String, Callback>>,
    /// Whether the operation is deprecated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deprecated: Option<bool>,
    /// Security requirements for this operation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security: Option<Vec<SecurityRequirement>>,
    /// Servers overriding the path or document servers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub servers: Option<Vec<Server>>,
    /// Extensions.
    #[serde(flatten)]
    pub extensions: BTreeMap<String, Value>,
}

impl Operation {
    /// Whether the operation is explicitly marked deprecated.
    pub fn is_deprecated(&self) -> bool {
        self.deprecated == Some(true)
    }
}

/// The Responses object: status code (or `default`) to response.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApiResponses {
    /// Responses keyed by status code, in document order.
    pub responses: IndexMap<String, ApiResponse>,
    /// Extensions attached to the Responses object.
    pub extensions: BTreeMap<String, Value>,
}

impl<'de> Deserialize<'de> for ApiResponses {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let split = keyed::split_entries(deserializer, "response", false)?;
        Ok(Self {
            responses: split.entries,
            extensions: split.extensions,
        })
    }
}

impl Serialize for ApiResponses {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        keyed::join_entries(serializer, None, &self.responses, &self.extensions)
    }
}

/// A Callback object: runtime expressions to path items.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Callback {
    /// Reference to a callback defined elsewhere.
    pub reference: Option<String>,
    /// Path items keyed by runtime expression.
    pub path_items: IndexMap<String, PathItem>,
    /// Extensions attached to the Callback object.
    pub extensions: BTreeMap<String, Value>,
}

impl<'de> Deserialize<'de> for Callback {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let split = keyed::split_entries(deserializer, "callback path item", true)?;
        Ok(Self {
            reference: split.reference,
            path_items: split.entries,
            extensions: split.extensions,
        })
    }
}

impl Serialize for Callback {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        keyed::join_entries(
            serializer,
            self.reference.as_deref(),
            &self.path_items,
            &self.extensions,
        )
    }
}

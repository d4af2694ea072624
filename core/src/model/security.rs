#![deny(missing_docs)]

//! # Security Schemes

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// A security scheme (API key, HTTP, OAuth2, OpenID Connect, mutual TLS).
///
/// Kept flat rather than as a tagged enum so reference objects and unknown
/// scheme types load without loss.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecurityScheme {
    /// Reference to a scheme defined elsewhere.
    #[serde(rename = "$ref", skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    /// Scheme type: `apiKey`, `http`, `oauth2`, `openIdConnect`, `mutualTLS`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub scheme_type: Option<String>,
    /// Description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Header, query or cookie name (apiKey).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Location of the key (apiKey).
    #[serde(rename = "in", skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// HTTP authorization scheme (http).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheme: Option<String>,
    /// Bearer token format hint (http).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bearer_format: Option<String>,
    /// OAuth2 flows, kept verbatim.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flows: Option<Value>,
    /// OpenID Connect discovery URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open_id_connect_url: Option<String>,
    /// Extensions.
    #[serde(flatten)]
    pub extensions: BTreeMap<String, Value>,
}

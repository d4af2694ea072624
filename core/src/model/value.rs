//! # Literal Values
//!
//! `default`, `example` and similar members hold arbitrary JSON, where an
//! explicit `null` is a value of its own and must survive a round trip.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Reads a present member as `Some`, keeping `null` as `Some(Value::Null)`.
/// Pair with `#[serde(default)]` so an absent member stays `None`.
pub(crate) fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

//! # Extensible Keyed Maps
//!
//! Serde plumbing shared by the OpenAPI objects that are maps of named entries
//! but may also carry `x-` extensions (Paths, Responses) and, for Callbacks, a
//! `$ref`.

use indexmap::IndexMap;
use serde::de::{DeserializeOwned, Error as DeError};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::collections::BTreeMap;

/// Raw parts of a keyed map after separating entries from metadata keys.
pub(crate) struct Split<T> {
    pub reference: Option<String>,
    pub entries: IndexMap<String, T>,
    pub extensions: BTreeMap<String, Value>,
}

/// Deserializes an object into named entries of `T`, collecting `x-` keys as
/// extensions. `$ref` is only accepted when `allow_ref` is set; otherwise it
/// is parsed like any other entry key.
pub(crate) fn split_entries<'de, D, T>(
    deserializer: D,
    what: &str,
    allow_ref: bool,
) -> Result<Split<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let raw = IndexMap::<String, Value>::deserialize(deserializer)?;
    let mut split = Split {
        reference: None,
        entries: IndexMap::with_capacity(raw.len()),
        extensions: BTreeMap::new(),
    };

    for (key, value) in raw {
        if key.starts_with("x-") {
            split.extensions.insert(key, value);
            continue;
        }
        if allow_ref && key == "$ref" {
            let reference = value
                .as_str()
                .ok_or_else(|| D::Error::custom(format!("`$ref` of {} must be a string", what)))?;
            split.reference = Some(reference.to_string());
            continue;
        }
        let entry = serde_json::from_value::<T>(value).map_err(|e| {
            D::Error::custom(format!("Failed to parse {} '{}': {}", what, key, e))
        })?;
        split.entries.insert(key, entry);
    }

    Ok(split)
}

/// Serializes entries back into a single object: `$ref` first, then entries in
/// order, then extensions.
pub(crate) fn join_entries<S, T>(
    serializer: S,
    reference: Option<&str>,
    entries: &IndexMap<String, T>,
    extensions: &BTreeMap<String, Value>,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    T: Serialize,
{
    let len = entries.len() + extensions.len() + usize::from(reference.is_some());
    let mut map = serializer.serialize_map(Some(len))?;
    if let Some(reference) = reference {
        map.serialize_entry("$ref", reference)?;
    }
    for (key, value) in entries {
        map.serialize_entry(key, value)?;
    }
    for (key, value) in extensions {
        map.serialize_entry(key, value)?;
    }
    map.end()
}

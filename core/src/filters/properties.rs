#![deny(missing_docs)]

//! # Property Removal
//!
//! Removes properties by name from every schema, at any depth.

use crate::filter::OasFilter;
use crate::model::Schema;
use std::collections::BTreeSet;
use tracing::debug;

/// Drops the named properties (and their `required` entries) from every
/// schema offered to it.
///
/// Schemas are offered bottom-up, so a property is removed from its parent
/// only after its own subtree was processed.
#[derive(Debug, Clone, Default)]
pub struct IgnoreProperties {
    names: BTreeSet<String>,
}

impl IgnoreProperties {
    /// Creates the filter from a list of property names.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }
}

impl OasFilter for IgnoreProperties {
    fn filter_schema(&mut self, mut schema: Schema) -> Option<Schema> {
        if let Some(properties) = schema.properties.as_mut() {
            let before = properties.len();
            properties.retain(|name, _| !self.names.contains(name));
            if properties.len() != before {
                debug!(
                    removed = before - properties.len(),
                    title = schema.title.as_deref().unwrap_or("<anonymous>"),
                    "Dropped schema properties"
                );
            }
        }
        if let Some(required) = schema.required.as_mut() {
            required.retain(|name| !self.names.contains(name));
        }
        Some(schema)
    }
}

#![deny(missing_docs)]

//! # Tag Removal

use crate::filter::OasFilter;
use crate::model::{Operation, Tag};
use std::collections::BTreeSet;

/// Removes tags by name from the document tag list and from every
/// operation's `tags`. Operations themselves are kept.
#[derive(Debug, Clone, Default)]
pub struct DropTags {
    names: BTreeSet<String>,
}

impl DropTags {
    /// Creates the filter from a list of tag names.
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

impl OasFilter for DropTags {
    fn filter_tag(&mut self, tag: Tag) -> Option<Tag> {
        (!self.names.contains(&tag.name)).then_some(tag)
    }

    fn filter_operation(&mut self, mut operation: Operation) -> Option<Operation> {
        if let Some(tags) = operation.tags.as_mut() {
            tags.retain(|name| !self.names.contains(name));
            if tags.is_empty() {
                operation.tags = None;
            }
        }
        Some(operation)
    }
}

#![deny(missing_docs)]

//! # Filter Configuration
//!
//! Declarative selection of the stock filters, loadable from YAML or JSON:
//!
//! ```yaml
//! drop-properties: [ignoreMe]
//! exclude-paths: ['^/internal/']
//! drop-tags: [internal]
//! drop-deprecated: true
//! ```

use crate::error::AppResult;
use crate::filter::OasFilter;
use crate::filters::{DropDeprecated, DropTags, ExcludePaths, IgnoreProperties};
use crate::io;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Which stock filters to run, and with what arguments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct FilterConfig {
    /// Schema property names to drop everywhere.
    #[serde(default)]
    pub drop_properties: Vec<String>,
    /// Regular expressions; matching path templates are removed.
    #[serde(default)]
    pub exclude_paths: Vec<String>,
    /// Tag names to drop from the document and from operations.
    #[serde(default)]
    pub drop_tags: Vec<String>,
    /// Remove deprecated operations, parameters, headers and schemas.
    #[serde(default)]
    pub drop_deprecated: bool,
}

impl FilterConfig {
    /// Loads a configuration file; the format follows the file extension.
    pub fn from_path(path: &Path) -> AppResult<Self> {
        io::load(path)
    }

    /// Adds everything `other` enables on top of `self`.
    pub fn merge(&mut self, other: FilterConfig) {
        extend_unique(&mut self.drop_properties, other.drop_properties);
        extend_unique(&mut self.exclude_paths, other.exclude_paths);
        extend_unique(&mut self.drop_tags, other.drop_tags);
        self.drop_deprecated |= other.drop_deprecated;
    }

    /// Whether no filter is enabled.
    pub fn is_empty(&self) -> bool {
        self.drop_properties.is_empty()
            && self.exclude_paths.is_empty()
            && self.drop_tags.is_empty()
            && !self.drop_deprecated
    }

    /// Builds the enabled filters, one pass each, in a fixed order: path
    /// exclusion, tag removal, deprecation pruning, property removal.
    pub fn build_filters(&self) -> AppResult<Vec<Box<dyn OasFilter>>> {
        let mut filters: Vec<Box<dyn OasFilter>> = Vec::new();
        if !self.exclude_paths.is_empty() {
            filters.push(Box::new(ExcludePaths::new(&self.exclude_paths)?));
        }
        if !self.drop_tags.is_empty() {
            filters.push(Box::new(DropTags::new(self.drop_tags.iter().cloned())));
        }
        if self.drop_deprecated {
            filters.push(Box::new(DropDeprecated));
        }
        if !self.drop_properties.is_empty() {
            filters.push(Box::new(IgnoreProperties::new(
                self.drop_properties.iter().cloned(),
            )));
        }
        Ok(filters)
    }
}

fn extend_unique(target: &mut Vec<String>, values: Vec<String>) {
    for value in values {
        if !target.contains(&value) {
            target.push(value);
        }
    }
}

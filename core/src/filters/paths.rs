#![deny(missing_docs)]

//! # Path Exclusion
//!
//! Path items are offered to [`OasFilter::filter_path_item`] without their
//! template, so matching by template happens in the finishing step.

use crate::error::AppResult;
use crate::filter::OasFilter;
use crate::model::Document;
use regex::Regex;
use tracing::debug;

/// Removes every path whose template matches one of the patterns.
#[derive(Debug, Clone, Default)]
pub struct ExcludePaths {
    patterns: Vec<Regex>,
}

impl ExcludePaths {
    /// Compiles the patterns. Patterns are unanchored regular expressions;
    /// use `^...$` to match a whole template.
    pub fn new<I, S>(patterns: I) -> AppResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns = patterns
            .into_iter()
            .map(|p| Regex::new(p.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { patterns })
    }

    /// Whether `path` matches any pattern.
    pub fn matches(&self, path: &str) -> bool {
        self.patterns.iter().any(|re| re.is_match(path))
    }
}

impl OasFilter for ExcludePaths {
    fn filter_openapi(&mut self, document: &mut Document) {
        let Some(paths) = document.paths.as_mut() else {
            return;
        };
        paths.items.retain(|path, _| {
            let excluded = self.matches(path);
            if excluded {
                debug!(path = %path, "Excluded path");
            }
            !excluded
        });
    }
}

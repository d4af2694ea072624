#![deny(missing_docs)]

//! # Stock Filters
//!
//! Ready-made [`crate::filter::OasFilter`] implementations.
//!
//! - **properties**: drop named schema properties everywhere.
//! - **paths**: drop path items whose template matches a pattern.
//! - **tags**: drop tags from the document and from operations.
//! - **deprecated**: drop deprecated operations, parameters, headers, schemas.
//! - **chain**: run several filters within a single pass.

pub mod chain;
pub mod deprecated;
pub mod paths;
pub mod properties;
pub mod tags;

pub use chain::FilterChain;
pub use deprecated::DropDeprecated;
pub use paths::ExcludePaths;
pub use properties::IgnoreProperties;
pub use tags::DropTags;

#![deny(missing_docs)]

//! # Document Filtering
//!
//! - **traits**: the [`OasFilter`] capability, one callback per element kind.
//! - **engine**: the bottom-up traversal that applies a filter to a document.

pub mod engine;
pub mod traits;

pub use engine::{apply_filter, apply_filters};
pub use traits::{ElementKind, OasFilter};

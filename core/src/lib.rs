#![deny(missing_docs)]

//! # OAS Filter Core
//!
//! Typed OpenAPI 3.x documents and a bottom-up filter engine over them.
//! A filter sees every element of a kind once, after all of its children,
//! and may keep, replace or remove it.

/// Shared error types.
pub mod error;

/// OpenAPI document model.
pub mod model;

/// Filter capability and traversal engine.
pub mod filter;

/// Stock filters.
pub mod filters;

/// Declarative filter configuration.
pub mod config;

/// Reading and writing documents as YAML or JSON.
pub mod io;

/// Conversion to and from `utoipa` documents.
pub mod interop;

pub use config::FilterConfig;
pub use error::{AppError, AppResult};
pub use filter::{apply_filter, apply_filters, ElementKind, OasFilter};
pub use filters::{DropDeprecated, DropTags, ExcludePaths, FilterChain, IgnoreProperties};
pub use io::DocumentFormat;
pub use model::Document;

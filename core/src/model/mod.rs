#![deny(missing_docs)]

//! # OpenAPI Document Model
//!
//! A mutable, owned object graph for OpenAPI 3.x documents.
//!
//! - **document**: the root object, `Components` and `Paths`.
//! - **paths**: path items, operations, callbacks and response collections.
//! - **parameters**: parameters, request bodies and headers.
//! - **media**: media types and encodings.
//! - **responses**: responses and links.
//! - **schema**: the recursive schema object.
//! - **security**: security schemes.
//! - **server**: servers and tags.
//!
//! Keyed collections are `IndexMap`s so documents keep their authored order.
//! Optional collections stay `Option` so an absent map and an empty map are
//! not conflated. `$ref` objects are the element type with `reference` set;
//! references are plain strings and are never resolved, so the graph is
//! always a tree.

pub mod document;
pub mod media;
pub mod parameters;
pub mod paths;
pub mod responses;
pub mod schema;
pub mod security;
pub mod server;

mod keyed;
mod value;

pub use document::{Components, Document, ExternalDocs, Info, Paths, SecurityRequirement};
pub use media::{Content, Encoding, MediaType};
pub use parameters::{Header, Parameter, RequestBody};
pub use paths::{ApiResponses, Callback, HttpMethod, Operation, PathItem};
pub use responses::{ApiResponse, Link};
pub use schema::{AdditionalProperties, Schema};
pub use security::SecurityScheme;
pub use server::{Server, ServerVariable, Tag};

#![deny(missing_docs)]

//! # Filter Capability
//!
//! Defines the callbacks a filter may override to keep, replace or remove the
//! elements of a document.

use crate::model::{
    ApiResponse, Callback, Document, Header, Link, Operation, Parameter, PathItem, RequestBody,
    Schema, SecurityScheme, Server, Tag,
};
use derive_more::Display;

/// The kinds of document element a filter is offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum ElementKind {
    /// The whole document (finishing step).
    OpenApi,
    /// A path item, from `paths` or from a callback.
    PathItem,
    /// An operation bound to an HTTP method slot.
    Operation,
    /// A callback.
    Callback,
    /// A header.
    Header,
    /// A link.
    Link,
    /// A parameter.
    Parameter,
    /// A request body.
    RequestBody,
    /// A response.
    ApiResponse,
    /// A schema, at any nesting depth.
    Schema,
    /// A security scheme.
    SecurityScheme,
    /// A server.
    Server,
    /// A tag.
    Tag,
}

/// A set of per-kind callbacks deciding the fate of each document element.
///
/// Every callback receives an element whose children have already been
/// filtered and returns:
/// - `Some(element)` to keep it,
/// - `Some(other)` to put a replacement in the same place,
/// - `None` to remove it from its owning map, list or field.
///
/// All methods default to keeping the element, so implementors only override
/// the kinds they care about. Callbacks take `&mut self`; a filter may keep
/// state across one pass and rely on the call order documented in
/// [`crate::filter::engine`].
pub trait OasFilter {
    /// Finishing step, invoked once after every other element was filtered.
    /// May edit the document freely.
    fn filter_openapi(&mut self, document: &mut Document) {
        let _ = document;
    }

    /// Filters a path item.
    fn filter_path_item(&mut self, path_item: PathItem) -> Option<PathItem> {
        Some(path_item)
    }

    /// Filters the operation in one HTTP method slot of a path item.
    fn filter_operation(&mut self, operation: Operation) -> Option<Operation> {
        Some(operation)
    }

    /// Filters a callback.
    fn filter_callback(&mut self, callback: Callback) -> Option<Callback> {
        Some(callback)
    }

    /// Filters a header.
    fn filter_header(&mut self, header: Header) -> Option<Header> {
        Some(header)
    }

    /// Filters a link.
    fn filter_link(&mut self, link: Link) -> Option<Link> {
        Some(link)
    }

    /// Filters a parameter.
    fn filter_parameter(&mut self, parameter: Parameter) -> Option<Parameter> {
        Some(parameter)
    }

    /// Filters a request body.
    fn filter_request_body(&mut self, request_body: RequestBody) -> Option<RequestBody> {
        Some(request_body)
    }

    /// Filters a response.
    fn filter_api_response(&mut self, response: ApiResponse) -> Option<ApiResponse> {
        Some(response)
    }

    /// Filters a schema.
    fn filter_schema(&mut self, schema: Schema) -> Option<Schema> {
        Some(schema)
    }

    /// Filters a security scheme.
    fn filter_security_scheme(&mut self, scheme: SecurityScheme) -> Option<SecurityScheme> {
        Some(scheme)
    }

    /// Filters a server.
    fn filter_server(&mut self, server: Server) -> Option<Server> {
        Some(server)
    }

    /// Filters a tag.
    fn filter_tag(&mut self, tag: Tag) -> Option<Tag> {
        Some(tag)
    }
}

impl<F: OasFilter + ?Sized> OasFilter for Box<F> {
    fn filter_openapi(&mut self, document: &mut Document) {
        (**self).filter_openapi(document)
    }
    fn filter_path_item(&mut self, path_item: PathItem) -> Option<PathItem> {
        (**self).filter_path_item(path_item)
    }
    fn filter_operation(&mut self, operation: Operation) -> Option<Operation> {
        (**self).filter_operation(operation)
    }
    fn filter_callback(&mut self, callback: Callback) -> Option<Callback> {
        (**self).filter_callback(callback)
    }
    fn filter_header(&mut self, header: Header) -> Option<Header> {
        (**self).filter_header(header)
    }
    fn filter_link(&mut self, link: Link) -> Option<Link> {
        (**self).filter_link(link)
    }
    fn filter_parameter(&mut self, parameter: Parameter) -> Option<Parameter> {
        (**self).filter_parameter(parameter)
    }
    fn filter_request_body(&mut self, request_body: RequestBody) -> Option<RequestBody> {
        (**self).filter_request_body(request_body)
    }
    fn filter_api_response(&mut self, response: ApiResponse) -> Option<ApiResponse> {
        (**self).filter_api_response(response)
    }
    fn filter_schema(&mut self, schema: Schema) -> Option<Schema> {
        (**self).filter_schema(schema)
    }
    fn filter_security_scheme(&mut self, scheme: SecurityScheme) -> Option<SecurityScheme> {
        (**self).filter_security_scheme(scheme)
    }
    fn filter_server(&mut self, server: Server) -> Option<Server> {
        (**self).filter_server(server)
    }
    fn filter_tag(&mut self, tag: Tag) -> Option<Tag> {
        (**self).filter_tag(tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct KeepAll;
    impl OasFilter for KeepAll {}

    #[test]
    fn test_defaults_keep_elements() {
        let mut filter = KeepAll;
        let tag = Tag::new("pets");
        assert_eq!(filter.filter_tag(tag.clone()), Some(tag));
        assert_eq!(
            filter.filter_schema(Schema::of_type("string")),
            Some(Schema::of_type("string"))
        );

        let mut doc = Document::default();
        filter.filter_openapi(&mut doc);
        assert_eq!(doc, Document::default());
    }

    #[test]
    fn test_boxed_filter_forwards() {
        struct DropTags;
        impl OasFilter for DropTags {
            fn filter_tag(&mut self, _tag: Tag) -> Option<Tag> {
                None
            }
        }

        let mut boxed: Box<dyn OasFilter> = Box::new(DropTags);
        assert!(boxed.filter_tag(Tag::new("x")).is_none());
        assert!(boxed.filter_server(Server::new("https://a")).is_some());
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(ElementKind::SecurityScheme.to_string(), "SecurityScheme");
    }
}

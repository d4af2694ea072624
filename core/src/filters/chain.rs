#![deny(missing_docs)]

//! # Filter Chains
//!
//! Combines several filters into one, so a single traversal serves them all.

use crate::filter::OasFilter;
use crate::model::{
    ApiResponse, Callback, Document, Header, Link, Operation, Parameter, PathItem, RequestBody,
    Schema, SecurityScheme, Server, Tag,
};

/// Threads each element through its filters in order. The first filter to
/// reject an element ends the chain for it; later filters never see it.
#[derive(Default)]
pub struct FilterChain {
    filters: Vec<Box<dyn OasFilter>>,
}

impl FilterChain {
    /// Creates an empty chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a filter, builder style.
    pub fn with<F: OasFilter + 'static>(mut self, filter: F) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Appends an already boxed filter.
    pub fn push(&mut self, filter: Box<dyn OasFilter>) {
        self.filters.push(filter);
    }

    /// Number of filters in the chain.
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    /// Whether the chain holds no filters.
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}

impl From<Vec<Box<dyn OasFilter>>> for FilterChain {
    fn from(filters: Vec<Box<dyn OasFilter>>) -> Self {
        Self { filters }
    }
}

impl OasFilter for FilterChain {
    fn filter_openapi(&mut self, document: &mut Document) {
        for filter in self.filters.iter_mut() {
            filter.filter_openapi(document);
        }
    }

    fn filter_path_item(&mut self, path_item: PathItem) -> Option<PathItem> {
        self.filters
            .iter_mut()
            .try_fold(path_item, |item, f| f.filter_path_item(item))
    }

    fn filter_operation(&mut self, operation: Operation) -> Option<Operation> {
        self.filters
            .iter_mut()
            .try_fold(operation, |op, f| f.filter_operation(op))
    }

    fn filter_callback(&mut self, callback: Callback) -> Option<Callback> {
        self.filters
            .iter_mut()
            .try_fold(callback, |cb, f| f.filter_callback(cb))
    }

    fn filter_header(&mut self, header: Header) -> Option<Header> {
        self.filters
            .iter_mut()
            .try_fold(header, |h, f| f.filter_header(h))
    }

    fn filter_link(&mut self, link: Link) -> Option<Link> {
        self.filters
            .iter_mut()
            .try_fold(link, |l, f| f.filter_link(l))
    }

    fn filter_parameter(&mut self, parameter: Parameter) -> Option<Parameter> {
        self.filters
            .iter_mut()
            .try_fold(parameter, |p, f| f.filter_parameter(p))
    }

    fn filter_request_body(&mut self, request_body: RequestBody) -> Option<RequestBody> {
        self.filters
            .iter_mut()
            .try_fold(request_body, |b, f| f.filter_request_body(b))
    }

    fn filter_api_response(&mut self, response: ApiResponse) -> Option<ApiResponse> {
        self.filters
            .iter_mut()
            .try_fold(response, |r, f| f.filter_api_response(r))
    }

    fn filter_schema(&mut self, schema: Schema) -> Option<Schema> {
        self.filters
            .iter_mut()
            .try_fold(schema, |s, f| f.filter_schema(s))
    }

    fn filter_security_scheme(&mut self, scheme: SecurityScheme) -> Option<SecurityScheme> {
        self.filters
            .iter_mut()
            .try_fold(scheme, |s, f| f.filter_security_scheme(s))
    }

    fn filter_server(&mut self, server: Server) -> Option<Server> {
        self.filters
            .iter_mut()
            .try_fold(server, |s, f| f.filter_server(s))
    }

    fn filter_tag(&mut self, tag: Tag) -> Option<Tag> {
        self.filters
            .iter_mut()
            .try_fold(tag, |t, f| f.filter_tag(t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::apply_filter;
    use crate::filters::{DropTags, IgnoreProperties};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_chain_applies_all_in_one_pass() {
        let yaml = r#"
openapi: 3.0.3
info: {title: T, version: '1'}
tags: [{name: a}, {name: b}]
components:
  schemas:
    S:
      properties:
        secret: {type: string}
        visible: {type: string}
"#;
        let mut doc = Document::from_yaml_str(yaml).unwrap();
        let mut chain = FilterChain::new()
            .with(DropTags::new(["a"]))
            .with(IgnoreProperties::new(["secret"]));
        assert_eq!(chain.len(), 2);
        apply_filter(&mut chain, &mut doc);

        assert_eq!(doc.tags.as_ref().unwrap().len(), 1);
        let s = &doc.components.as_ref().unwrap().schemas.as_ref().unwrap()["S"];
        assert!(s.property("secret").is_none());
        assert!(s.property("visible").is_some());
    }

    #[test]
    fn test_rejection_short_circuits() {
        struct Reject;
        impl OasFilter for Reject {
            fn filter_tag(&mut self, _tag: Tag) -> Option<Tag> {
                None
            }
        }

        struct Count(Rc<RefCell<usize>>);
        impl OasFilter for Count {
            fn filter_tag(&mut self, tag: Tag) -> Option<Tag> {
                *self.0.borrow_mut() += 1;
                Some(tag)
            }
        }

        let seen = Rc::new(RefCell::new(0));
        let mut chain = FilterChain::new()
            .with(Count(seen.clone()))
            .with(Reject)
            .with(Count(seen.clone()));

        assert!(chain.filter_tag(Tag::new("x")).is_none());
        assert_eq!(*seen.borrow(), 1);
    }

    #[test]
    fn test_empty_chain_keeps_everything() {
        let mut chain = FilterChain::from(Vec::<Box<dyn OasFilter>>::new());
        assert!(chain.is_empty());
        assert!(chain.filter_server(Server::new("https://a")).is_some());
    }

    #[test]
    fn test_pushed_boxed_filters_run() {
        let mut chain = FilterChain::new();
        chain.push(Box::new(DropTags::new(["internal"])));
        assert_eq!(chain.len(), 1);

        assert!(chain.filter_tag(Tag::new("internal")).is_none());
        assert!(chain.filter_tag(Tag::new("public")).is_some());
    }
}

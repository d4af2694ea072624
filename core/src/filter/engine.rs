#![deny(missing_docs)]

//! # Filter Engine
//!
//! Applies an [`OasFilter`] to a [`Document`], depth-first and bottom-up: every
//! element's children are filtered before the element itself is offered to
//! its callback, and every reachable element is offered exactly once per pass.
//!
//! Three collection rules cover every element kind:
//! - **keyed maps**: entries are taken out of the map, visited in their
//!   original order and re-inserted only if the callback keeps them.
//! - **lists**: same, by position. Servers and tags have no children, so for
//!   them the rule reduces to the callback alone.
//! - **single slots**: the value is taken out of its field, descended,
//!   offered, and the field is set to whatever the callback returns.
//!
//! Taking the collection out before visiting it means no live iterator is
//! held while entries are dropped, so removal never skips a neighbour.
//!
//! Visit order:
//! 1. Components: callbacks, headers, links, parameters, request bodies,
//!    responses, schemas, security schemes.
//! 2. Paths.
//! 3. Document servers, then tags.
//! 4. [`OasFilter::filter_openapi`].
//!
//! Within a path item: parameters, the operation slots in
//! [`HttpMethod::ALL`] order, servers. Within an operation: callbacks,
//! parameters, request body, responses, servers. Within a schema:
//! `additionalProperties`, `allOf`, `anyOf`, `oneOf`, `items`, `not`,
//! `properties`.

use super::traits::{ElementKind, OasFilter};
use crate::model::{
    AdditionalProperties, ApiResponse, Callback, Components, Content, Document, Encoding, Header,
    HttpMethod, Link, MediaType, Operation, Parameter, PathItem, RequestBody, Schema,
    SecurityScheme, Server, Tag,
};
use indexmap::IndexMap;
use tracing::{debug, trace};

/// Applies `filter` to `document` in place and returns the same document.
///
/// Absent sub-structures (no components, no paths, ...) are skipped. The pass
/// never fails.
pub fn apply_filter<'a, F>(filter: &mut F, document: &'a mut Document) -> &'a mut Document
where
    F: OasFilter + ?Sized,
{
    debug!(
        paths = document.paths.as_ref().map_or(0, |p| p.items.len()),
        "Starting filter pass"
    );

    if let Some(components) = document.components.as_mut() {
        components.descend(filter);
    }
    if let Some(paths) = document.paths.as_mut() {
        filter_entries(filter, &mut paths.items);
    }
    filter_list(filter, &mut document.servers);
    filter_list(filter, &mut document.tags);
    filter.filter_openapi(document);

    debug!(
        paths = document.paths.as_ref().map_or(0, |p| p.items.len()),
        "Filter pass complete"
    );
    document
}

/// Runs one complete pass per filter, in order. Each pass sees the result of
/// the previous one.
pub fn apply_filters<'a, F>(filters: &mut [F], document: &'a mut Document) -> &'a mut Document
where
    F: OasFilter,
{
    for filter in filters.iter_mut() {
        apply_filter(filter, &mut *document);
    }
    document
}

// --- Traversal plumbing ---

/// Access to the filterable children of an element.
trait Descend {
    /// Filters every child collection and reference of `self`.
    fn descend<F: OasFilter + ?Sized>(&mut self, filter: &mut F) {
        let _ = filter;
    }
}

/// An element that is offered to its own callback.
trait Filterable: Descend + Sized {
    const KIND: ElementKind;

    /// Hands the element to the matching callback.
    fn offer<F: OasFilter + ?Sized>(self, filter: &mut F) -> Option<Self>;
}

fn filter_map<F, T>(filter: &mut F, map: &mut Option<IndexMap<String, T>>)
where
    F: OasFilter + ?Sized,
    T: Filterable,
{
    if let Some(map) = map.as_mut() {
        filter_entries(filter, map);
    }
}

fn filter_entries<F, T>(filter: &mut F, map: &mut IndexMap<String, T>)
where
    F: OasFilter + ?Sized,
    T: Filterable,
{
    let snapshot = std::mem::take(map);
    map.reserve(snapshot.len());
    for (key, mut value) in snapshot {
        value.descend(filter);
        match value.offer(filter) {
            Some(kept) => {
                map.insert(key, kept);
            }
            None => trace!(kind = %T::KIND, key = %key, "Removed entry"),
        }
    }
}

fn filter_list<F, T>(filter: &mut F, list: &mut Option<Vec<T>>)
where
    F: OasFilter + ?Sized,
    T: Filterable,
{
    let Some(list) = list.as_mut() else {
        return;
    };
    let snapshot = std::mem::take(list);
    list.reserve(snapshot.len());
    for (position, mut item) in snapshot.into_iter().enumerate() {
        item.descend(filter);
        match item.offer(filter) {
            Some(kept) => list.push(kept),
            None => trace!(kind = %T::KIND, position, "Removed list element"),
        }
    }
}

fn filter_slot<F, T>(filter: &mut F, slot: &mut Option<T>)
where
    F: OasFilter + ?Sized,
    T: Filterable,
{
    if let Some(mut value) = slot.take() {
        value.descend(filter);
        *slot = value.offer(filter);
        if slot.is_none() {
            trace!(kind = %T::KIND, "Cleared field");
        }
    }
}

/// Media types are descended but never offered to a callback.
fn descend_content<F>(filter: &mut F, content: &mut Option<Content>)
where
    F: OasFilter + ?Sized,
{
    for media_type in content.iter_mut().flat_map(|c| c.values_mut()) {
        media_type.descend(filter);
    }
}

impl<T: Filterable> Descend for Box<T> {
    fn descend<F: OasFilter + ?Sized>(&mut self, filter: &mut F) {
        (**self).descend(filter)
    }
}

impl<T: Filterable> Filterable for Box<T> {
    const KIND: ElementKind = T::KIND;

    fn offer<F: OasFilter + ?Sized>(self, filter: &mut F) -> Option<Self> {
        (*self).offer(filter).map(Box::new)
    }
}

// --- Per-kind shapes ---

impl Descend for Components {
    fn descend<F: OasFilter + ?Sized>(&mut self, filter: &mut F) {
        filter_map(filter, &mut self.callbacks);
        filter_map(filter, &mut self.headers);
        filter_map(filter, &mut self.links);
        filter_map(filter, &mut self.parameters);
        filter_map(filter, &mut self.request_bodies);
        filter_map(filter, &mut self.responses);
        filter_map(filter, &mut self.schemas);
        filter_map(filter, &mut self.security_schemes);
    }
}

impl Descend for Callback {
    fn descend<F: OasFilter + ?Sized>(&mut self, filter: &mut F) {
        filter_entries(filter, &mut self.path_items);
    }
}

impl Filterable for Callback {
    const KIND: ElementKind = ElementKind::Callback;

    fn offer<F: OasFilter + ?Sized>(self, filter: &mut F) -> Option<Self> {
        filter.filter_callback(self)
    }
}

impl Descend for PathItem {
    fn descend<F: OasFilter + ?Sized>(&mut self, filter: &mut F) {
        filter_list(filter, &mut self.parameters);
        for method in HttpMethod::ALL {
            filter_slot(filter, self.operation_slot_mut(method));
        }
        filter_list(filter, &mut self.servers);
    }
}

impl Filterable for PathItem {
    const KIND: ElementKind = ElementKind::PathItem;

    fn offer<F: OasFilter + ?Sized>(self, filter: &mut F) -> Option<Self> {
        filter.filter_path_item(self)
    }
}

impl Descend for Operation {
    fn descend<F: OasFilter + ?Sized>(&mut self, filter: &mut F) {
        filter_map(filter, &mut self.callbacks);
        filter_list(filter, &mut self.parameters);
        filter_slot(filter, &mut self.request_body);
        if let Some(responses) = self.responses.as_mut() {
            filter_entries(filter, &mut responses.responses);
        }
        filter_list(filter, &mut self.servers);
    }
}

impl Filterable for Operation {
    const KIND: ElementKind = ElementKind::Operation;

    fn offer<F: OasFilter + ?Sized>(self, filter: &mut F) -> Option<Self> {
        filter.filter_operation(self)
    }
}

impl Descend for Header {
    fn descend<F: OasFilter + ?Sized>(&mut self, filter: &mut F) {
        descend_content(filter, &mut self.content);
        filter_slot(filter, &mut self.schema);
    }
}

impl Filterable for Header {
    const KIND: ElementKind = ElementKind::Header;

    fn offer<F: OasFilter + ?Sized>(self, filter: &mut F) -> Option<Self> {
        filter.filter_header(self)
    }
}

impl Descend for Parameter {
    fn descend<F: OasFilter + ?Sized>(&mut self, filter: &mut F) {
        descend_content(filter, &mut self.content);
        filter_slot(filter, &mut self.schema);
    }
}

impl Filterable for Parameter {
    const KIND: ElementKind = ElementKind::Parameter;

    fn offer<F: OasFilter + ?Sized>(self, filter: &mut F) -> Option<Self> {
        filter.filter_parameter(self)
    }
}

impl Descend for MediaType {
    fn descend<F: OasFilter + ?Sized>(&mut self, filter: &mut F) {
        for encoding in self.encoding.iter_mut().flat_map(|e| e.values_mut()) {
            encoding.descend(filter);
        }
        filter_slot(filter, &mut self.schema);
    }
}

impl Descend for Encoding {
    fn descend<F: OasFilter + ?Sized>(&mut self, filter: &mut F) {
        filter_map(filter, &mut self.headers);
    }
}

impl Descend for RequestBody {
    fn descend<F: OasFilter + ?Sized>(&mut self, filter: &mut F) {
        descend_content(filter, &mut self.content);
    }
}

impl Filterable for RequestBody {
    const KIND: ElementKind = ElementKind::RequestBody;

    fn offer<F: OasFilter + ?Sized>(self, filter: &mut F) -> Option<Self> {
        filter.filter_request_body(self)
    }
}

impl Descend for ApiResponse {
    fn descend<F: OasFilter + ?Sized>(&mut self, filter: &mut F) {
        descend_content(filter, &mut self.content);
        filter_map(filter, &mut self.headers);
        filter_map(filter, &mut self.links);
    }
}

impl Filterable for ApiResponse {
    const KIND: ElementKind = ElementKind::ApiResponse;

    fn offer<F: OasFilter + ?Sized>(self, filter: &mut F) -> Option<Self> {
        filter.filter_api_response(self)
    }
}

impl Descend for Link {
    fn descend<F: OasFilter + ?Sized>(&mut self, filter: &mut F) {
        filter_slot(filter, &mut self.server);
    }
}

impl Filterable for Link {
    const KIND: ElementKind = ElementKind::Link;

    fn offer<F: OasFilter + ?Sized>(self, filter: &mut F) -> Option<Self> {
        filter.filter_link(self)
    }
}

impl Descend for Schema {
    fn descend<F: OasFilter + ?Sized>(&mut self, filter: &mut F) {
        // Only the schema form of additionalProperties is offered; a boolean stays.
        self.additional_properties = match self.additional_properties.take() {
            Some(AdditionalProperties::Schema(schema)) => {
                let mut slot = Some(schema);
                filter_slot(filter, &mut slot);
                slot.map(AdditionalProperties::Schema)
            }
            other => other,
        };
        filter_list(filter, &mut self.all_of);
        filter_list(filter, &mut self.any_of);
        filter_list(filter, &mut self.one_of);
        filter_slot(filter, &mut self.items);
        filter_slot(filter, &mut self.not);
        filter_map(filter, &mut self.properties);
    }
}

impl Filterable for Schema {
    const KIND: ElementKind = ElementKind::Schema;

    fn offer<F: OasFilter + ?Sized>(self, filter: &mut F) -> Option<Self> {
        filter.filter_schema(self)
    }
}

impl Descend for SecurityScheme {}

impl Filterable for SecurityScheme {
    const KIND: ElementKind = ElementKind::SecurityScheme;

    fn offer<F: OasFilter + ?Sized>(self, filter: &mut F) -> Option<Self> {
        filter.filter_security_scheme(self)
    }
}

impl Descend for Server {}

impl Filterable for Server {
    const KIND: ElementKind = ElementKind::Server;

    fn offer<F: OasFilter + ?Sized>(self, filter: &mut F) -> Option<Self> {
        filter.filter_server(self)
    }
}

impl Descend for Tag {}

impl Filterable for Tag {
    const KIND: ElementKind = ElementKind::Tag;

    fn offer<F: OasFilter + ?Sized>(self, filter: &mut F) -> Option<Self> {
        filter.filter_tag(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ApiResponses, Paths};

    /// Records `kind:label` for every callback, keeping everything.
    #[derive(Default)]
    struct Recorder {
        calls: Vec<String>,
    }

    impl Recorder {
        fn push(&mut self, kind: ElementKind, label: Option<&str>) {
            self.calls
                .push(format!("{}:{}", kind, label.unwrap_or("-")));
        }
    }

    impl OasFilter for Recorder {
        fn filter_openapi(&mut self, _document: &mut Document) {
            self.push(ElementKind::OpenApi, None);
        }
        fn filter_path_item(&mut self, item: PathItem) -> Option<PathItem> {
            self.push(ElementKind::PathItem, item.summary.as_deref());
            Some(item)
        }
        fn filter_operation(&mut self, op: Operation) -> Option<Operation> {
            self.push(ElementKind::Operation, op.operation_id.as_deref());
            Some(op)
        }
        fn filter_callback(&mut self, cb: Callback) -> Option<Callback> {
            self.push(ElementKind::Callback, cb.reference.as_deref());
            Some(cb)
        }
        fn filter_header(&mut self, header: Header) -> Option<Header> {
            self.push(ElementKind::Header, header.description.as_deref());
            Some(header)
        }
        fn filter_link(&mut self, link: Link) -> Option<Link> {
            self.push(ElementKind::Link, link.operation_id.as_deref());
            Some(link)
        }
        fn filter_parameter(&mut self, p: Parameter) -> Option<Parameter> {
            self.push(ElementKind::Parameter, p.name.as_deref());
            Some(p)
        }
        fn filter_request_body(&mut self, body: RequestBody) -> Option<RequestBody> {
            self.push(ElementKind::RequestBody, body.description.as_deref());
            Some(body)
        }
        fn filter_api_response(&mut self, r: ApiResponse) -> Option<ApiResponse> {
            self.push(ElementKind::ApiResponse, r.description.as_deref());
            Some(r)
        }
        fn filter_schema(&mut self, s: Schema) -> Option<Schema> {
            self.push(ElementKind::Schema, s.title.as_deref());
            Some(s)
        }
        fn filter_security_scheme(&mut self, s: SecurityScheme) -> Option<SecurityScheme> {
            self.push(ElementKind::SecurityScheme, s.description.as_deref());
            Some(s)
        }
        fn filter_server(&mut self, s: Server) -> Option<Server> {
            self.push(ElementKind::Server, Some(s.url.as_str()));
            Some(s)
        }
        fn filter_tag(&mut self, t: Tag) -> Option<Tag> {
            self.push(ElementKind::Tag, Some(t.name.as_str()));
            Some(t)
        }
    }

    fn titled(title: &str) -> Schema {
        Schema {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    fn doc_with_schema(name: &str, schema: Schema) -> Document {
        let mut schemas = IndexMap::new();
        schemas.insert(name.to_string(), schema);
        Document {
            components: Some(Components {
                schemas: Some(schemas),
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    #[test]
    fn test_schema_children_before_parent() {
        let parent = titled("parent").with_property("child", titled("child"));
        let mut doc = doc_with_schema("Parent", parent);

        let mut rec = Recorder::default();
        apply_filter(&mut rec, &mut doc);

        assert_eq!(rec.calls, vec!["Schema:child", "Schema:parent", "OpenApi:-"]);
    }

    #[test]
    fn test_schema_descent_order() {
        let schema = Schema {
            title: Some("root".into()),
            additional_properties: Some(AdditionalProperties::Schema(Box::new(titled("ap")))),
            all_of: Some(vec![titled("all1"), titled("all2")]),
            any_of: Some(vec![titled("any")]),
            one_of: Some(vec![titled("one")]),
            items: Some(Box::new(titled("items"))),
            not: Some(Box::new(titled("not"))),
            properties: Some(IndexMap::from([("p".to_string(), titled("prop"))])),
            ..Default::default()
        };
        let mut doc = doc_with_schema("Root", schema);

        let mut rec = Recorder::default();
        apply_filter(&mut rec, &mut doc);

        assert_eq!(
            rec.calls,
            vec![
                "Schema:ap",
                "Schema:all1",
                "Schema:all2",
                "Schema:any",
                "Schema:one",
                "Schema:items",
                "Schema:not",
                "Schema:prop",
                "Schema:root",
                "OpenApi:-",
            ]
        );
    }

    #[test]
    fn test_boolean_additional_properties_not_offered() {
        let schema = Schema {
            title: Some("closed".into()),
            additional_properties: Some(AdditionalProperties::Allowed(false)),
            ..Default::default()
        };
        let mut doc = doc_with_schema("Closed", schema);

        struct RejectAll;
        impl OasFilter for RejectAll {
            fn filter_schema(&mut self, s: Schema) -> Option<Schema> {
                // Keep only the top-level schema so the flag's fate is visible.
                (s.title.as_deref() == Some("closed")).then_some(s)
            }
        }
        apply_filter(&mut RejectAll, &mut doc);

        let closed = &doc.components.as_ref().unwrap().schemas.as_ref().unwrap()["Closed"];
        assert_eq!(
            closed.additional_properties,
            Some(AdditionalProperties::Allowed(false))
        );
    }

    #[test]
    fn test_rejected_nested_slots_are_cleared() {
        let schema = Schema {
            title: Some("root".into()),
            additional_properties: Some(AdditionalProperties::Schema(Box::new(titled("drop")))),
            all_of: Some(vec![titled("keep"), titled("drop"), titled("keep")]),
            items: Some(Box::new(titled("drop"))),
            not: Some(Box::new(titled("keep"))),
            ..Default::default()
        };
        let mut doc = doc_with_schema("Root", schema);

        struct DropNamed;
        impl OasFilter for DropNamed {
            fn filter_schema(&mut self, s: Schema) -> Option<Schema> {
                (s.title.as_deref() != Some("drop")).then_some(s)
            }
        }
        apply_filter(&mut DropNamed, &mut doc);

        let root = &doc.components.as_ref().unwrap().schemas.as_ref().unwrap()["Root"];
        assert!(root.additional_properties.is_none());
        assert!(root.items.is_none());
        assert!(root.not.is_some());
        assert_eq!(root.all_of.as_ref().map(Vec::len), Some(2));
    }

    #[test]
    fn test_components_order() {
        let yaml = r#"
callbacks:
  cb:
    $ref: '#/components/callbacks/other'
headers:
  h: {description: header}
links:
  l: {operationId: linked}
parameters:
  p: {name: param, in: query}
requestBodies:
  rb: {description: body}
responses:
  r: {description: response}
schemas:
  s: {title: schema}
securitySchemes:
  sec: {type: http, scheme: bearer, description: scheme}
"#;
        let components: Components = serde_yaml::from_str(yaml).unwrap();
        let mut doc = Document {
            components: Some(components),
            servers: Some(vec![Server::new("https://api")]),
            tags: Some(vec![Tag::new("t")]),
            ..Default::default()
        };

        let mut rec = Recorder::default();
        apply_filter(&mut rec, &mut doc);

        assert_eq!(
            rec.calls,
            vec![
                "Callback:#/components/callbacks/other",
                "Header:header",
                "Link:linked",
                "Parameter:param",
                "RequestBody:body",
                "ApiResponse:response",
                "Schema:schema",
                "SecurityScheme:scheme",
                "Server:https://api",
                "Tag:t",
                "OpenApi:-",
            ]
        );
    }

    #[test]
    fn test_path_item_and_operation_order() {
        let yaml = r#"
summary: pets
parameters:
  - {name: shared, in: query}
put: {operationId: put}
get:
  operationId: get
  callbacks:
    onEvent:
      '{$request.body#/url}':
        summary: hook
        post: {operationId: hookPost}
  parameters:
    - name: limit
      in: query
      schema: {title: limitSchema}
  requestBody:
    description: body
    content:
      application/json:
        schema: {title: bodySchema}
  responses:
    '200':
      description: ok
      headers:
        X-Rate: {description: rate}
      links:
        next: {operationId: nextPage, server: {url: 'https://link'}}
  servers:
    - url: https://op
delete: {operationId: delete}
trace: {operationId: trace}
servers:
  - url: https://path
"#;
        let item: PathItem = serde_yaml::from_str(yaml).unwrap();
        let mut doc = Document {
            paths: Some(Paths {
                items: IndexMap::from([("/pets".to_string(), item)]),
                ..Default::default()
            }),
            ..Default::default()
        };

        let mut rec = Recorder::default();
        apply_filter(&mut rec, &mut doc);

        assert_eq!(
            rec.calls,
            vec![
                "Parameter:shared",
                "Operation:delete",
                "Operation:hookPost",
                "PathItem:hook",
                "Callback:-",
                "Schema:limitSchema",
                "Parameter:limit",
                "Schema:bodySchema",
                "RequestBody:body",
                "Header:rate",
                "Server:https://link",
                "Link:nextPage",
                "ApiResponse:ok",
                "Server:https://op",
                "Operation:get",
                "Operation:put",
                "Operation:trace",
                "Server:https://path",
                "PathItem:pets",
                "OpenApi:-",
            ]
        );
    }

    #[test]
    fn test_media_type_encoding_headers_and_parameter_content() {
        let yaml = r#"
name: filter
in: query
content:
  application/json:
    schema: {title: contentSchema}
    encoding:
      field:
        headers:
          X-Part: {description: part, schema: {title: partSchema}}
schema: {title: paramSchema}
"#;
        let param: Parameter = serde_yaml::from_str(yaml).unwrap();
        let mut params = IndexMap::new();
        params.insert("filter".to_string(), param);
        let mut doc = Document {
            components: Some(Components {
                parameters: Some(params),
                ..Default::default()
            }),
            ..Default::default()
        };

        let mut rec = Recorder::default();
        apply_filter(&mut rec, &mut doc);

        assert_eq!(
            rec.calls,
            vec![
                "Schema:partSchema",
                "Header:part",
                "Schema:contentSchema",
                "Schema:paramSchema",
                "Parameter:filter",
                "OpenApi:-",
            ]
        );
    }

    #[test]
    fn test_even_keys_removed_each_visited_once() {
        let mut schemas = IndexMap::new();
        for i in 0..7 {
            schemas.insert(format!("S{}", i), titled(&i.to_string()));
        }
        let mut doc = Document {
            components: Some(Components {
                schemas: Some(schemas),
                ..Default::default()
            }),
            ..Default::default()
        };

        #[derive(Default)]
        struct DropEven {
            seen: Vec<String>,
        }
        impl OasFilter for DropEven {
            fn filter_schema(&mut self, s: Schema) -> Option<Schema> {
                let title = s.title.clone().unwrap_or_default();
                self.seen.push(title.clone());
                let index: usize = title.parse().unwrap();
                (index % 2 == 1).then_some(s)
            }
        }

        let mut filter = DropEven::default();
        apply_filter(&mut filter, &mut doc);

        assert_eq!(filter.seen, vec!["0", "1", "2", "3", "4", "5", "6"]);
        let remaining: Vec<_> = doc
            .components
            .unwrap()
            .schemas
            .unwrap()
            .keys()
            .cloned()
            .collect();
        assert_eq!(remaining, vec!["S1", "S3", "S5"]);
    }

    #[test]
    fn test_absent_collections_stay_absent() {
        let mut doc = Document {
            paths: Some(Paths {
                items: IndexMap::from([(
                    "/x".to_string(),
                    PathItem {
                        get: Some(Operation {
                            responses: Some(ApiResponses::default()),
                            ..Default::default()
                        }),
                        ..Default::default()
                    },
                )]),
                ..Default::default()
            }),
            ..Default::default()
        };

        apply_filter(&mut Recorder::default(), &mut doc);

        assert!(doc.servers.is_none());
        assert!(doc.tags.is_none());
        assert!(doc.components.is_none());
        let item = doc.path_item("/x").unwrap();
        assert!(item.parameters.is_none());
        assert!(item.servers.is_none());
        let get = item.get.as_ref().unwrap();
        assert!(get.parameters.is_none());
        assert!(get.callbacks.is_none());
        assert_eq!(get.responses, Some(ApiResponses::default()));
    }

    #[test]
    fn test_operation_slot_replacement_and_removal() {
        let mut item = PathItem::default();
        for method in HttpMethod::ALL {
            *item.operation_slot_mut(method) = Some(Operation {
                operation_id: Some(method.to_string()),
                ..Default::default()
            });
        }
        let mut doc = Document {
            paths: Some(Paths {
                items: IndexMap::from([("/all".to_string(), item)]),
                ..Default::default()
            }),
            ..Default::default()
        };

        struct OnlyReads;
        impl OasFilter for OnlyReads {
            fn filter_operation(&mut self, mut op: Operation) -> Option<Operation> {
                let is_read = matches!(op.operation_id.as_deref(), Some("GET") | Some("HEAD"));
                if !is_read {
                    return None;
                }
                op.summary = Some("read".into());
                Some(op)
            }
        }
        apply_filter(&mut OnlyReads, &mut doc);

        let item = doc.path_item("/all").unwrap();
        let kept: Vec<_> = item.operations().map(|(m, _)| m).collect();
        assert_eq!(kept, vec![HttpMethod::Get, HttpMethod::Head]);
        assert_eq!(
            item.get.as_ref().and_then(|op| op.summary.as_deref()),
            Some("read")
        );
    }

    #[test]
    fn test_link_server_cleared() {
        let mut links = IndexMap::new();
        links.insert(
            "next".to_string(),
            Link {
                operation_id: Some("next".into()),
                server: Some(Server::new("https://internal")),
                ..Default::default()
            },
        );
        let mut doc = Document {
            components: Some(Components {
                links: Some(links),
                ..Default::default()
            }),
            ..Default::default()
        };

        struct NoServers;
        impl OasFilter for NoServers {
            fn filter_server(&mut self, _server: Server) -> Option<Server> {
                None
            }
        }
        apply_filter(&mut NoServers, &mut doc);

        let links = doc.components.unwrap().links.unwrap();
        assert!(links["next"].server.is_none());
        assert_eq!(links["next"].operation_id.as_deref(), Some("next"));
    }

    #[test]
    fn test_rejected_parent_children_still_visited_once() {
        let parent = titled("parent").with_property("child", titled("child"));
        let mut doc = doc_with_schema("Parent", parent);

        #[derive(Default)]
        struct DropParent {
            seen: Vec<String>,
        }
        impl OasFilter for DropParent {
            fn filter_schema(&mut self, s: Schema) -> Option<Schema> {
                self.seen.push(s.title.clone().unwrap_or_default());
                (s.title.as_deref() != Some("parent")).then_some(s)
            }
        }
        let mut filter = DropParent::default();
        apply_filter(&mut filter, &mut doc);

        assert_eq!(filter.seen, vec!["child", "parent"]);
        assert!(doc.components.unwrap().schemas.unwrap().is_empty());
    }

    #[test]
    fn test_apply_filters_runs_sequential_passes() {
        let mut doc = Document {
            tags: Some(vec![Tag::new("a"), Tag::new("b")]),
            ..Default::default()
        };

        struct Rename(&'static str, &'static str);
        impl OasFilter for Rename {
            fn filter_tag(&mut self, tag: Tag) -> Option<Tag> {
                if tag.name == self.0 {
                    Some(Tag::new(self.1))
                } else {
                    Some(tag)
                }
            }
        }

        let mut filters = vec![Rename("a", "b"), Rename("b", "c")];
        apply_filters(&mut filters, &mut doc);

        let names: Vec<_> = doc.tags.unwrap().into_iter().map(|t| t.name).collect();
        assert_eq!(names, vec!["c", "c"]);
    }

    #[test]
    fn test_replaced_map_entry_keeps_key_and_position() {
        let mut schemas = IndexMap::new();
        for name in ["First", "Second", "Third"] {
            schemas.insert(name.to_string(), titled(name));
        }
        let mut doc = Document {
            components: Some(Components {
                schemas: Some(schemas),
                ..Default::default()
            }),
            ..Default::default()
        };

        struct ReplaceSecond;
        impl OasFilter for ReplaceSecond {
            fn filter_schema(&mut self, s: Schema) -> Option<Schema> {
                if s.title.as_deref() == Some("Second") {
                    Some(Schema::of_type("string"))
                } else {
                    Some(s)
                }
            }
        }
        apply_filter(&mut ReplaceSecond, &mut doc);

        let schemas = doc.components.as_ref().unwrap().schemas.as_ref().unwrap();
        let keys: Vec<_> = schemas.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["First", "Second", "Third"]);
        assert_eq!(schemas["Second"], Schema::of_type("string"));
        assert_eq!(schemas["First"], titled("First"));
        assert_eq!(schemas["Third"], titled("Third"));
    }

    #[test]
    fn test_boolean_schemas_are_offered() {
        let schema = titled("root")
            .with_property("anything", Schema::flag(true))
            .with_property("id", titled("id"));
        let mut doc = doc_with_schema("Root", schema);

        struct DropFlags;
        impl OasFilter for DropFlags {
            fn filter_schema(&mut self, s: Schema) -> Option<Schema> {
                s.boolean.is_none().then_some(s)
            }
        }
        apply_filter(&mut DropFlags, &mut doc);

        let root = &doc.components.as_ref().unwrap().schemas.as_ref().unwrap()["Root"];
        assert!(root.property("anything").is_none());
        assert!(root.property("id").is_some());
    }
}

#![deny(missing_docs)]

//! # utoipa Interop
//!
//! Converts between [`Document`] and `utoipa`'s `OpenApi`, so documents
//! generated with utoipa's derive macros can be filtered and handed back to
//! a utoipa-based server. Conversion goes through `serde_json::Value`.
//!
//! utoipa only models OpenAPI 3.1 and is stricter about required members, so
//! [`Document::to_utoipa`] first reshapes a copy of the document:
//! - `openapi` becomes `3.1.0` and a missing `paths` becomes empty;
//! - inline parameters without `required` get `required: false`;
//! - inline responses without a description get an empty one;
//! - inline request bodies without `content` get an empty map;
//! - inline headers without a schema get `{type: string}`;
//! - operation callbacks are dropped (utoipa keeps no callback objects).

use crate::error::{AppError, AppResult};
use crate::filter::{apply_filter, OasFilter};
use crate::model::{
    ApiResponse, ApiResponses, Document, Header, Operation, Parameter, Paths, RequestBody, Schema,
};
use tracing::debug;
use utoipa::openapi::OpenApi;

/// The only OpenAPI version utoipa accepts.
const UTOIPA_VERSION: &str = "3.1.0";

impl Document {
    /// Builds a document from a utoipa `OpenApi`.
    pub fn from_utoipa(openapi: &OpenApi) -> AppResult<Self> {
        let value = serde_json::to_value(openapi)
            .map_err(|e| AppError::Parse(format!("Failed to serialize utoipa document: {}", e)))?;
        serde_json::from_value(value)
            .map_err(|e| AppError::Parse(format!("Failed to read utoipa document: {}", e)))
    }

    /// Converts the document into a utoipa `OpenApi`. `self` is left as is.
    ///
    /// Fails if the document still uses forms utoipa cannot hold after
    /// reshaping, such as `$ref` parameters or boolean schemas.
    pub fn to_utoipa(&self) -> AppResult<OpenApi> {
        let mut shaped = self.clone();
        if shaped.openapi != UTOIPA_VERSION {
            debug!(from = %shaped.openapi, to = UTOIPA_VERSION, "Relabelling document version");
            shaped.openapi = UTOIPA_VERSION.to_string();
        }
        shaped.paths.get_or_insert_with(Paths::default);
        apply_filter(&mut UtoipaShape, &mut shaped);

        let value = serde_json::to_value(&shaped)
            .map_err(|e| AppError::Parse(format!("Failed to serialize document: {}", e)))?;
        serde_json::from_value(value)
            .map_err(|e| AppError::Parse(format!("Failed to build utoipa document: {}", e)))
    }
}

/// Fills in the members utoipa requires and drops the ones it cannot hold.
struct UtoipaShape;

impl OasFilter for UtoipaShape {
    fn filter_operation(&mut self, mut operation: Operation) -> Option<Operation> {
        operation.callbacks = None;
        operation.responses.get_or_insert_with(ApiResponses::default);
        Some(operation)
    }

    fn filter_parameter(&mut self, mut parameter: Parameter) -> Option<Parameter> {
        if parameter.reference.is_none() {
            parameter.required.get_or_insert(false);
        }
        Some(parameter)
    }

    fn filter_request_body(&mut self, mut request_body: RequestBody) -> Option<RequestBody> {
        if request_body.reference.is_none() {
            request_body.content.get_or_insert_with(Default::default);
        }
        Some(request_body)
    }

    fn filter_api_response(&mut self, mut response: ApiResponse) -> Option<ApiResponse> {
        if response.reference.is_none() {
            response.description.get_or_insert_with(String::new);
        }
        Some(response)
    }

    fn filter_header(&mut self, mut header: Header) -> Option<Header> {
        if header.reference.is_none() && header.schema.is_none() {
            header.schema = Some(Schema::of_type("string"));
        }
        Some(header)
    }
}

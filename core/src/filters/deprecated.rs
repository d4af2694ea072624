#![deny(missing_docs)]

//! # Deprecation Pruning

use crate::filter::OasFilter;
use crate::model::{Header, Operation, Parameter, Schema};

/// Removes every operation, parameter, header and schema marked
/// `deprecated: true`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DropDeprecated;

impl OasFilter for DropDeprecated {
    fn filter_operation(&mut self, operation: Operation) -> Option<Operation> {
        (!operation.is_deprecated()).then_some(operation)
    }

    fn filter_parameter(&mut self, parameter: Parameter) -> Option<Parameter> {
        (!parameter.is_deprecated()).then_some(parameter)
    }

    fn filter_header(&mut self, header: Header) -> Option<Header> {
        (!header.is_deprecated()).then_some(header)
    }

    fn filter_schema(&mut self, schema: Schema) -> Option<Schema> {
        (!schema.is_deprecated()).then_some(schema)
    }
}

//! Diagram document layer: wire schema, parsing, and layered validation.
//!
//! A [`FlowDocument`] is the serialized form of a diagram as exchanged with
//! the canvas host: a flat node list and edge list keyed by opaque string
//! ids. [`parse_document`] and [`serialize_document`] convert it to and from
//! text; [`validation`] checks a document at the import boundary before it
//! is turned into a live graph.

pub mod parser;
pub mod schema;
pub mod validation;

pub use parser::{parse_document, serialize_document, DocumentFormat};
pub use schema::*;
pub use validation::{
    validate_document, validate_document_text, Diagnostic, DiagnosticLevel, ValidationReport,
};

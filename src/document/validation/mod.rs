//! Layered validation for diagram documents.
//!
//! Layer 1 checks structural integrity (ids, kinds, edge endpoint
//! references, self-loops, duplicates, the fan-out cap); layer 2 checks the
//! topology rule that makes a diagram savable (a single entry point). The
//! topology layer is skipped when layer 1 finds damage that would make root
//! counting meaningless.

mod known_kinds;
mod layer1_structure;
mod layer2_topology;
mod types;

use crate::document::parser::{parse_document, DocumentFormat};
use crate::document::schema::FlowDocument;

pub use known_kinds::{is_known_node_kind, KNOWN_NODE_KINDS};
pub use types::{Diagnostic, DiagnosticLevel, ValidationReport};

/// Validate raw document text, reporting parse failures as a diagnostic.
pub fn validate_document_text(content: &str, format: DocumentFormat) -> ValidationReport {
    match parse_document(content, format) {
        Ok(document) => validate_document(&document),
        Err(err) => ValidationReport {
            is_valid: false,
            diagnostics: vec![types::Diagnostic {
                level: types::DiagnosticLevel::Error,
                code: "E001".to_string(),
                message: format!("Document parse error: {}", err),
                node_id: None,
                edge_id: None,
                field_path: None,
            }],
        },
    }
}

/// Validate a parsed document.
pub fn validate_document(document: &FlowDocument) -> ValidationReport {
    let mut diagnostics = layer1_structure::validate(document);

    let has_fatal_structure = diagnostics.iter().any(|d| {
        d.level == types::DiagnosticLevel::Error
            && matches!(d.code.as_str(), "E004" | "E006" | "E007")
    });

    if !has_fatal_structure {
        diagnostics.extend(layer2_topology::validate(document));
    }

    let is_valid = diagnostics
        .iter()
        .all(|d| d.level != types::DiagnosticLevel::Error);

    ValidationReport {
        is_valid,
        diagnostics,
    }
}

use std::collections::HashSet;

use crate::document::schema::FlowDocument;

use super::types::{Diagnostic, DiagnosticLevel};

/// Root-count rule: at most one node may lack incoming edges. This is the
/// save blocker — a diagram with several entry points is ambiguous.
pub fn validate(document: &FlowDocument) -> Vec<Diagnostic> {
    let mut diags = Vec::new();

    let targets: HashSet<&str> = document.edges.iter().map(|e| e.target.as_str()).collect();
    let root_count = document
        .nodes
        .iter()
        .filter(|n| !targets.contains(n.id.as_str()))
        .count();

    if root_count > 1 {
        diags.push(Diagnostic {
            level: DiagnosticLevel::Error,
            code: "E101".to_string(),
            message: "Cannot save Flow".to_string(),
            node_id: None,
            edge_id: None,
            field_path: None,
        });
    }

    diags
}

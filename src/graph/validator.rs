//! Flow validator: decides whether the current diagram is savable.

use std::collections::HashSet;

use crate::document::validation::{Diagnostic, DiagnosticLevel, ValidationReport};

use super::types::{FlowEdge, FlowNode};

/// Validate a diagram snapshot for saving.
///
/// A node is a root when its id never appears as an edge target. At most one
/// root is allowed: several entry points make the flow ambiguous, and a
/// forest of disconnected diagrams is rejected the same way. An empty
/// diagram has zero roots and is valid. Cycles and unreachable subgraphs are
/// not detected, and node payloads are not inspected.
pub fn validate_flow(nodes: &[FlowNode], edges: &[FlowEdge]) -> ValidationReport {
    let mut diagnostics = Vec::new();

    let targets: HashSet<&str> = edges.iter().map(|e| e.target.as_str()).collect();
    let root_count = nodes
        .iter()
        .filter(|n| !targets.contains(n.id.as_str()))
        .count();

    if root_count > 1 {
        diagnostics.push(Diagnostic {
            level: DiagnosticLevel::Error,
            code: "E101".to_string(),
            message: "Cannot save Flow".to_string(),
            node_id: None,
            edge_id: None,
            field_path: None,
        });
    }

    let is_valid = diagnostics.is_empty();
    ValidationReport {
        is_valid,
        diagnostics,
    }
}

//! Connection policy: decides whether a proposed edge may be created.
//!
//! Purely a predicate over the current edge list; no side effects. A
//! rejection is a silent policy decision, not an error — the caller simply
//! does not create the edge.

use super::types::FlowEdge;

/// Why a proposed connection was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionRejection {
    /// Source and target are the same node.
    SelfLoop,
    /// The source node already has an outgoing edge (fan-out cap of one).
    SourceOccupied,
    /// An edge with the same ordered pair already exists.
    DuplicateEdge,
}

impl ConnectionRejection {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConnectionRejection::SelfLoop => "self-loop",
            ConnectionRejection::SourceOccupied => "source-occupied",
            ConnectionRejection::DuplicateEdge => "duplicate-edge",
        }
    }
}

/// Check a proposed connection, naming the first failing rule.
///
/// Rules are evaluated in order: self-loop, fan-out cap, duplicate edge.
/// Ids are opaque strings; unknown ids are simply non-matching.
pub fn check_connection(
    source_id: &str,
    target_id: &str,
    edges: &[FlowEdge],
) -> Result<(), ConnectionRejection> {
    if source_id == target_id {
        return Err(ConnectionRejection::SelfLoop);
    }

    if edges.iter().any(|e| e.source == source_id) {
        return Err(ConnectionRejection::SourceOccupied);
    }

    // Subsumed by the fan-out cap while the cap is 1, kept as its own rule.
    if edges
        .iter()
        .any(|e| e.source == source_id && e.target == target_id)
    {
        return Err(ConnectionRejection::DuplicateEdge);
    }

    Ok(())
}

/// May an edge from `source_id` to `target_id` be added?
pub fn can_connect(source_id: &str, target_id: &str, edges: &[FlowEdge]) -> bool {
    check_connection(source_id, target_id, edges).is_ok()
}

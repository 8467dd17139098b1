use serde::{Deserialize, Serialize};

// ================================
// Diagram Document Schema
// ================================

/// Current supported document version
pub const CURRENT_DOCUMENT_VERSION: &str = "0.1.0";

/// All supported document versions
pub const SUPPORTED_DOCUMENT_VERSIONS: &[&str] = &["0.1.0"];

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct FlowDocument {
    /// Document version string, e.g. "0.1.0"
    #[serde(default = "default_version")]
    pub version: String,
    pub nodes: Vec<NodeSchema>,
    pub edges: Vec<EdgeSchema>,
}

fn default_version() -> String {
    CURRENT_DOCUMENT_VERSION.to_string()
}

impl FlowDocument {
    /// An empty document at the current version.
    pub fn empty() -> Self {
        FlowDocument {
            version: CURRENT_DOCUMENT_VERSION.to_string(),
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }
}

/// Node definition in the document.
/// The `type` tag names the node kind; the payload lives under `data`.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct NodeSchema {
    pub id: String,
    #[serde(rename = "type")]
    pub node_type: String,
    #[serde(default)]
    pub position: Position,
    #[serde(default)]
    pub data: NodeData,
}

/// Node payload: a single text message, possibly empty.
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct NodeData {
    #[serde(default)]
    pub message: String,
}

/// 2D canvas position. Not behaviorally significant.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Position { x, y }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct EdgeSchema {
    #[serde(default)]
    pub id: String,
    pub source: String,
    pub target: String,
    #[serde(rename = "type", default)]
    pub style: EdgeStyle,
}

/// Rendering-style tag for an edge. Not behaviorally significant.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum EdgeStyle {
    #[default]
    Smoothstep,
    Straight,
    Step,
}

impl EdgeStyle {
    /// Tag string as it appears on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            EdgeStyle::Smoothstep => "smoothstep",
            EdgeStyle::Straight => "straight",
            EdgeStyle::Step => "step",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_deserialize_full() {
        let json = r#"{
            "version": "0.1.0",
            "nodes": [
                {"id": "1", "type": "text", "position": {"x": 300.0, "y": 200.0}, "data": {"message": "test message 1"}}
            ],
            "edges": [
                {"id": "e1", "source": "1", "target": "2", "type": "smoothstep"}
            ]
        }"#;
        let doc: FlowDocument = serde_json::from_str(json).unwrap();
        assert_eq!(doc.version, "0.1.0");
        assert_eq!(doc.nodes.len(), 1);
        assert_eq!(doc.nodes[0].node_type, "text");
        assert_eq!(doc.nodes[0].data.message, "test message 1");
        assert_eq!(doc.nodes[0].position, Position::new(300.0, 200.0));
        assert_eq!(doc.edges[0].style, EdgeStyle::Smoothstep);
    }

    #[test]
    fn test_document_defaults() {
        // Version, position, data and edge style may all be omitted.
        let json = r#"{
            "nodes": [{"id": "1", "type": "text"}],
            "edges": [{"source": "1", "target": "2"}]
        }"#;
        let doc: FlowDocument = serde_json::from_str(json).unwrap();
        assert_eq!(doc.version, CURRENT_DOCUMENT_VERSION);
        assert_eq!(doc.nodes[0].position, Position::default());
        assert_eq!(doc.nodes[0].data.message, "");
        assert_eq!(doc.edges[0].id, "");
        assert_eq!(doc.edges[0].style, EdgeStyle::Smoothstep);
    }

    #[test]
    fn test_edge_style_tags() {
        assert_eq!(EdgeStyle::Smoothstep.as_str(), "smoothstep");
        assert_eq!(EdgeStyle::Straight.as_str(), "straight");
        assert_eq!(EdgeStyle::Step.as_str(), "step");
        let json = serde_json::to_string(&EdgeStyle::Step).unwrap();
        assert_eq!(json, "\"step\"");
    }

    #[test]
    fn test_empty_document() {
        let doc = FlowDocument::empty();
        assert_eq!(doc.version, CURRENT_DOCUMENT_VERSION);
        assert!(doc.nodes.is_empty());
        assert!(doc.edges.is_empty());
    }
}

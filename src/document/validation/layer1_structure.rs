use std::collections::{HashMap, HashSet};

use crate::document::schema::{EdgeSchema, FlowDocument, SUPPORTED_DOCUMENT_VERSIONS};

use super::known_kinds::is_known_node_kind;
use super::types::{Diagnostic, DiagnosticLevel};

pub fn validate(document: &FlowDocument) -> Vec<Diagnostic> {
    let mut diags = Vec::new();

    if !SUPPORTED_DOCUMENT_VERSIONS.contains(&document.version.as_str()) {
        diags.push(error(
            "E002",
            format!(
                "Unsupported document version: {}, supported versions: {}",
                document.version,
                SUPPORTED_DOCUMENT_VERSIONS.join(", ")
            ),
            None,
            None,
            None,
        ));
    }

    let mut ids = HashSet::new();
    let mut duplicates = HashSet::new();

    for node in &document.nodes {
        if node.id.trim().is_empty() {
            diags.push(error(
                "E003",
                "Node id is empty".to_string(),
                None,
                None,
                Some("id".to_string()),
            ));
        }
        if !ids.insert(node.id.clone()) {
            duplicates.insert(node.id.clone());
        }
        if !is_known_node_kind(&node.node_type) {
            diags.push(error(
                "E005",
                format!("Unknown node kind: {}", node.node_type),
                Some(node.id.clone()),
                None,
                Some("type".to_string()),
            ));
        }
        if node.data.message.trim().is_empty() {
            diags.push(warn(
                "W001",
                "Node message is empty".to_string(),
                Some(node.id.clone()),
                None,
                Some("data.message".to_string()),
            ));
        }
    }

    for dup in duplicates {
        diags.push(error(
            "E004",
            format!("Duplicate node id: {}", dup),
            Some(dup),
            None,
            None,
        ));
    }

    let node_ids: HashSet<&str> = document.nodes.iter().map(|n| n.id.as_str()).collect();
    let mut edge_keys = HashSet::new();
    let mut out_degree: HashMap<&str, usize> = HashMap::new();

    for edge in &document.edges {
        if !node_ids.contains(edge.source.as_str()) {
            diags.push(error(
                "E006",
                format!("Edge source not found: {}", edge.source),
                None,
                Some(edge.id.clone()),
                Some("source".to_string()),
            ));
        }
        if !node_ids.contains(edge.target.as_str()) {
            diags.push(error(
                "E007",
                format!("Edge target not found: {}", edge.target),
                None,
                Some(edge.id.clone()),
                Some("target".to_string()),
            ));
        }
        if edge.source == edge.target {
            diags.push(error(
                "E008",
                "Edge has same source and target".to_string(),
                None,
                Some(edge.id.clone()),
                None,
            ));
        }

        if !edge_keys.insert(edge_key(edge)) {
            diags.push(error(
                "E009",
                "Duplicate edge".to_string(),
                None,
                Some(edge.id.clone()),
                None,
            ));
        }

        *out_degree.entry(edge.source.as_str()).or_default() += 1;
    }

    for (source, count) in out_degree {
        if count > 1 {
            diags.push(error(
                "E010",
                format!("Node has {} outgoing edges, at most one is allowed", count),
                Some(source.to_string()),
                None,
                None,
            ));
        }
    }

    diags
}

fn edge_key(edge: &EdgeSchema) -> (String, String) {
    (edge.source.clone(), edge.target.clone())
}

fn error(
    code: &str,
    message: String,
    node_id: Option<String>,
    edge_id: Option<String>,
    field_path: Option<String>,
) -> Diagnostic {
    Diagnostic {
        level: DiagnosticLevel::Error,
        code: code.to_string(),
        message,
        node_id,
        edge_id,
        field_path,
    }
}

fn warn(
    code: &str,
    message: String,
    node_id: Option<String>,
    edge_id: Option<String>,
    field_path: Option<String>,
) -> Diagnostic {
    Diagnostic {
        level: DiagnosticLevel::Warning,
        code: code.to_string(),
        message,
        node_id,
        edge_id,
        field_path,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::parser::{parse_document, DocumentFormat};

    fn parse(json: &str) -> FlowDocument {
        parse_document(json, DocumentFormat::Json).unwrap()
    }

    fn codes(diags: &[Diagnostic]) -> Vec<&str> {
        diags.iter().map(|d| d.code.as_str()).collect()
    }

    #[test]
    fn test_clean_document() {
        let doc = parse(
            r#"{"nodes":[
                {"id":"a","type":"text","data":{"message":"hi"}},
                {"id":"b","type":"text","data":{"message":"there"}}
            ],"edges":[{"id":"e1","source":"a","target":"b"}]}"#,
        );
        assert!(validate(&doc).is_empty());
    }

    #[test]
    fn test_unsupported_version() {
        let doc = parse(r#"{"version":"99.0.0","nodes":[],"edges":[]}"#);
        assert!(codes(&validate(&doc)).contains(&"E002"));
    }

    #[test]
    fn test_empty_and_duplicate_ids() {
        let doc = parse(
            r#"{"nodes":[
                {"id":"","type":"text","data":{"message":"x"}},
                {"id":"a","type":"text","data":{"message":"x"}},
                {"id":"a","type":"text","data":{"message":"x"}}
            ],"edges":[]}"#,
        );
        let diags = validate(&doc);
        assert!(codes(&diags).contains(&"E003"));
        assert!(codes(&diags).contains(&"E004"));
    }

    #[test]
    fn test_unknown_kind_and_empty_message() {
        let doc = parse(r#"{"nodes":[{"id":"a","type":"llm"}],"edges":[]}"#);
        let diags = validate(&doc);
        assert!(codes(&diags).contains(&"E005"));
        // Empty message is only a warning.
        let w = diags.iter().find(|d| d.code == "W001").unwrap();
        assert_eq!(w.level, DiagnosticLevel::Warning);
    }

    #[test]
    fn test_dangling_edge_endpoints() {
        let doc = parse(
            r#"{"nodes":[{"id":"a","type":"text","data":{"message":"x"}}],
                "edges":[{"id":"e1","source":"missing","target":"gone"}]}"#,
        );
        let diags = validate(&doc);
        assert!(codes(&diags).contains(&"E006"));
        assert!(codes(&diags).contains(&"E007"));
    }

    #[test]
    fn test_self_loop_edge() {
        let doc = parse(
            r#"{"nodes":[{"id":"a","type":"text","data":{"message":"x"}}],
                "edges":[{"id":"e1","source":"a","target":"a"}]}"#,
        );
        assert!(codes(&validate(&doc)).contains(&"E008"));
    }

    #[test]
    fn test_duplicate_edge() {
        let doc = parse(
            r#"{"nodes":[
                {"id":"a","type":"text","data":{"message":"x"}},
                {"id":"b","type":"text","data":{"message":"x"}}
            ],"edges":[
                {"id":"e1","source":"a","target":"b"},
                {"id":"e2","source":"a","target":"b"}
            ]}"#,
        );
        let diags = validate(&doc);
        assert!(codes(&diags).contains(&"E009"));
        // Two edges out of "a" also trips the fan-out cap.
        assert!(codes(&diags).contains(&"E010"));
    }

    #[test]
    fn test_fan_out_cap() {
        let doc = parse(
            r#"{"nodes":[
                {"id":"a","type":"text","data":{"message":"x"}},
                {"id":"b","type":"text","data":{"message":"x"}},
                {"id":"c","type":"text","data":{"message":"x"}}
            ],"edges":[
                {"id":"e1","source":"a","target":"b"},
                {"id":"e2","source":"a","target":"c"}
            ]}"#,
        );
        let diags = validate(&doc);
        let fan_out: Vec<_> = diags.iter().filter(|d| d.code == "E010").collect();
        assert_eq!(fan_out.len(), 1);
        assert_eq!(fan_out[0].node_id.as_deref(), Some("a"));
    }

    #[test]
    fn test_fan_in_unrestricted() {
        // Multiple edges may target the same node.
        let doc = parse(
            r#"{"nodes":[
                {"id":"a","type":"text","data":{"message":"x"}},
                {"id":"b","type":"text","data":{"message":"x"}},
                {"id":"c","type":"text","data":{"message":"x"}}
            ],"edges":[
                {"id":"e1","source":"a","target":"c"},
                {"id":"e2","source":"b","target":"c"}
            ]}"#,
        );
        assert!(validate(&doc).is_empty());
    }
}

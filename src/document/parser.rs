//! Document parser: converts raw JSON/YAML text into [`FlowDocument`].

use super::schema::FlowDocument;
use crate::error::FlowError;

/// Supported document input formats.
#[derive(Debug, Clone, Copy)]
pub enum DocumentFormat {
    /// JSON format (`.json`) — what the canvas host exports.
    Json,
    /// YAML format (`.yaml` / `.yml`).
    Yaml,
}

/// Parse document content into a FlowDocument
pub fn parse_document(content: &str, format: DocumentFormat) -> Result<FlowDocument, FlowError> {
    match format {
        DocumentFormat::Json => serde_json::from_str(content)
            .map_err(|e| FlowError::DocumentParseError(e.to_string())),
        DocumentFormat::Yaml => serde_yml::from_str(content)
            .map_err(|e| FlowError::DocumentParseError(e.to_string())),
    }
}

/// Serialize a FlowDocument back to text
pub fn serialize_document(
    document: &FlowDocument,
    format: DocumentFormat,
) -> Result<String, FlowError> {
    match format {
        DocumentFormat::Json => serde_json::to_string_pretty(document)
            .map_err(|e| FlowError::DocumentSerializeError(e.to_string())),
        DocumentFormat::Yaml => serde_yml::to_string(document)
            .map_err(|e| FlowError::DocumentSerializeError(e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_json() {
        let json = r#"{"version":"0.1.0","nodes":[{"id":"1","type":"text","data":{"message":"hi"}}],"edges":[]}"#;
        let doc = parse_document(json, DocumentFormat::Json).unwrap();
        assert_eq!(doc.version, "0.1.0");
        assert_eq!(doc.nodes.len(), 1);
        assert_eq!(doc.nodes[0].data.message, "hi");
    }

    #[test]
    fn test_parse_yaml() {
        let yaml = r#"
version: "0.1.0"
nodes:
  - id: "1"
    type: text
    position: { x: 300.0, y: 200.0 }
    data:
      message: test message 1
  - id: "2"
    type: text
edges:
  - id: e1
    source: "1"
    target: "2"
"#;
        let doc = parse_document(yaml, DocumentFormat::Yaml).unwrap();
        assert_eq!(doc.nodes.len(), 2);
        assert_eq!(doc.edges.len(), 1);
        assert_eq!(doc.edges[0].source, "1");
        assert_eq!(doc.edges[0].target, "2");
    }

    #[test]
    fn test_parse_invalid_json() {
        assert!(parse_document("{{{invalid", DocumentFormat::Json).is_err());
    }

    #[test]
    fn test_parse_invalid_yaml() {
        let bad_yaml = r#"
nodes:
  - id: "1"
    type: { unclosed
"#;
        assert!(parse_document(bad_yaml, DocumentFormat::Yaml).is_err());
    }

    #[test]
    fn test_parse_empty() {
        assert!(parse_document("", DocumentFormat::Json).is_err());
    }

    #[test]
    fn test_serialize_json_reparses() {
        let doc = crate::document::FlowDocument::empty();
        let text = serialize_document(&doc, DocumentFormat::Json).unwrap();
        let back = parse_document(&text, DocumentFormat::Json).unwrap();
        assert!(back.nodes.is_empty());
        assert!(back.edges.is_empty());
    }

    #[test]
    fn test_serialize_yaml_reparses() {
        let yaml = r#"
nodes:
  - id: a
    type: text
    data: { message: "hello" }
edges: []
"#;
        let doc = parse_document(yaml, DocumentFormat::Yaml).unwrap();
        let text = serialize_document(&doc, DocumentFormat::Yaml).unwrap();
        let back = parse_document(&text, DocumentFormat::Yaml).unwrap();
        assert_eq!(back.nodes[0].data.message, "hello");
    }
}

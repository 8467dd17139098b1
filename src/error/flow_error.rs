//! Editor-level error types.

use crate::document::validation::ValidationReport;
use thiserror::Error;

/// Editor-level errors
#[derive(Debug, Error)]
pub enum FlowError {
    #[error("Document parse error: {0}")]
    DocumentParseError(String),
    #[error("Document serialize error: {0}")]
    DocumentSerializeError(String),
    #[error("Unsupported document version: {found}, supported versions: {supported}")]
    UnsupportedVersion { found: String, supported: String },
    #[error("Graph build error: {0}")]
    GraphBuildError(String),
    #[error("Duplicate node id: {0}")]
    DuplicateNodeId(String),
    #[error("Node not found: {0}")]
    NodeNotFound(String),
    #[error("Edge not found: {0}")]
    EdgeNotFound(String),
    #[error("Validation failed")]
    ValidationFailed(Box<ValidationReport>),
    #[error("Save failed: {0}")]
    SaveFailed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flow_error_display() {
        assert_eq!(
            FlowError::DocumentParseError("x".into()).to_string(),
            "Document parse error: x"
        );
        assert_eq!(
            FlowError::UnsupportedVersion {
                found: "1".into(),
                supported: "2".into()
            }
            .to_string(),
            "Unsupported document version: 1, supported versions: 2"
        );
        assert_eq!(
            FlowError::GraphBuildError("g".into()).to_string(),
            "Graph build error: g"
        );
        assert_eq!(
            FlowError::DuplicateNodeId("n".into()).to_string(),
            "Duplicate node id: n"
        );
        assert_eq!(
            FlowError::NodeNotFound("n".into()).to_string(),
            "Node not found: n"
        );
        assert_eq!(
            FlowError::EdgeNotFound("e".into()).to_string(),
            "Edge not found: e"
        );
        assert_eq!(
            FlowError::SaveFailed("disk".into()).to_string(),
            "Save failed: disk"
        );
    }

    #[test]
    fn test_flow_error_validation_failed() {
        let report = ValidationReport {
            is_valid: false,
            diagnostics: vec![],
        };
        let err = FlowError::ValidationFailed(Box::new(report));
        assert_eq!(err.to_string(), "Validation failed");
    }
}

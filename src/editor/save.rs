//! Save boundary.
//!
//! On save, a validated snapshot is handed to a [`SaveHandler`]. The default
//! handler only logs — durable storage lives outside this core.

use crate::document::schema::FlowDocument;
use crate::error::FlowError;

/// Receives a validated diagram snapshot when the user saves.
pub trait SaveHandler: Send + Sync {
    fn persist(&self, document: &FlowDocument) -> Result<(), FlowError>;
}

/// No-op stub handler: logs the snapshot and discards it.
pub struct LoggingSaveHandler;

impl SaveHandler for LoggingSaveHandler {
    fn persist(&self, document: &FlowDocument) -> Result<(), FlowError> {
        tracing::info!(
            nodes = document.nodes.len(),
            edges = document.edges.len(),
            "flow saved"
        );
        Ok(())
    }
}

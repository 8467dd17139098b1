//! Error types for the editor core.
//!
//! - [`FlowError`] — Top-level errors for document parsing, graph building,
//!   and the save boundary.

pub mod flow_error;

pub use flow_error::FlowError;

/// Convenience alias for editor-level results.
pub type FlowResult<T> = Result<T, FlowError>;

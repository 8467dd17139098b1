//! # FlowEdit — A Headless Message-Flow Editor Core
//!
//! `flowedit` is the logic core of a visual editor for linear message-flow
//! diagrams: nodes carrying a text message, connected by directed edges into
//! a single-entry chain. Rendering, drag handles, and panels belong to the
//! host canvas; this crate owns everything behind them:
//!
//! - **Graph state**: an owned, adjacency-aware node/edge store keyed by
//!   opaque string ids ([`FlowGraph`]), mutated synchronously per gesture.
//! - **Connection policy**: a pure predicate deciding whether a proposed
//!   edge may be created — no self-loops, a fan-out cap of one, no
//!   duplicate edges ([`can_connect`]).
//! - **Flow validation**: a pure check that the diagram has at most one
//!   entry point and may be saved ([`validate_flow`]).
//! - **Editor session**: gestures as [`EditorCommand`]s, selection and
//!   panel state, change events, and the save boundary ([`FlowEditor`]).
//! - **Documents**: serde schema plus JSON/YAML parsing and layered
//!   import validation for diagram documents.
//!
//! # Quick Start
//!
//! ```rust
//! use flowedit::{CommandOutcome, EditorCommand, FlowEditor, LoggingSaveHandler, Position};
//!
//! let mut editor = FlowEditor::new();
//!
//! let add = |editor: &mut FlowEditor, x: f64, y: f64| -> String {
//!     match editor
//!         .apply(EditorCommand::AddNode { position: Position::new(x, y) })
//!         .unwrap()
//!     {
//!         CommandOutcome::NodeAdded { node_id } => node_id,
//!         _ => unreachable!(),
//!     }
//! };
//!
//! let first = add(&mut editor, 300.0, 200.0);
//! let second = add(&mut editor, 300.0, 360.0);
//!
//! editor
//!     .apply(EditorCommand::Connect { source: first, target: second })
//!     .unwrap();
//!
//! assert!(editor.can_save());
//! editor.save(&LoggingSaveHandler).unwrap();
//! ```

pub mod document;
pub mod editor;
pub mod error;
pub mod graph;

pub use crate::document::{
    parse_document, serialize_document, validate_document, validate_document_text, Diagnostic,
    DiagnosticLevel, DocumentFormat, EdgeSchema, EdgeStyle, FlowDocument, NodeData, NodeSchema,
    Position, ValidationReport, CURRENT_DOCUMENT_VERSION,
};
pub use crate::editor::{
    create_event_channel, CommandOutcome, EditorCommand, EditorConfig, EditorEvent, EventReceiver,
    EventSender, FakeIdGenerator, FlowEditor, FlowEditorBuilder, IdGenerator, LoggingSaveHandler,
    PanelMode, RealIdGenerator, SaveHandler,
};
pub use crate::error::{FlowError, FlowResult};
pub use crate::graph::{
    can_connect, check_connection, validate_flow, ConnectionRejection, FlowEdge, FlowGraph,
    FlowNode,
};

//! The editor session: owned graph state plus selection, driven by commands.

use std::sync::Arc;

use chrono::Utc;

use crate::document::schema::FlowDocument;
use crate::document::validation::{validate_document, ValidationReport};
use crate::error::FlowError;
use crate::graph::store::FlowGraph;
use crate::graph::types::{FlowEdge, FlowNode};
use crate::graph::validator::validate_flow;

use super::command::{CommandOutcome, EditorCommand};
use super::config::EditorConfig;
use super::context::{IdGenerator, RealIdGenerator};
use super::events::{EditorEvent, EventSender};
use super::save::SaveHandler;

/// Which side panel the host should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelMode {
    /// The palette of draggable node kinds. Shown while nothing is selected.
    NodePalette,
    /// The settings panel for the selected node.
    NodeSettings,
}

/// Editor session with builder-based configuration.
///
/// Use [`FlowEditor::builder()`](Self::builder) to obtain a
/// [`FlowEditorBuilder`].
pub struct FlowEditor {
    graph: FlowGraph,
    selection: Option<String>,
    config: EditorConfig,
    ids: Arc<dyn IdGenerator>,
    events: Option<EventSender>,
}

impl FlowEditor {
    /// Create a new builder.
    pub fn builder() -> FlowEditorBuilder {
        FlowEditorBuilder {
            document: None,
            config: EditorConfig::default(),
            ids: Arc::new(RealIdGenerator),
            events: None,
        }
    }

    /// An empty editor with default configuration.
    pub fn new() -> Self {
        FlowEditor {
            graph: FlowGraph::new(),
            selection: None,
            config: EditorConfig::default(),
            ids: Arc::new(RealIdGenerator),
            events: None,
        }
    }

    pub fn graph(&self) -> &FlowGraph {
        &self.graph
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Id of the currently selected node, if any.
    pub fn selection(&self) -> Option<&str> {
        self.selection.as_deref()
    }

    /// The currently selected node, if any.
    pub fn selected_node(&self) -> Option<&FlowNode> {
        self.selection
            .as_deref()
            .and_then(|id| self.graph.get_node(id).ok())
    }

    /// Side-panel mode, derived from the selection.
    pub fn panel(&self) -> PanelMode {
        if self.selection.is_some() {
            PanelMode::NodeSettings
        } else {
            PanelMode::NodePalette
        }
    }

    /// Apply one gesture. Mutations commit atomically per command.
    pub fn apply(&mut self, command: EditorCommand) -> Result<CommandOutcome, FlowError> {
        match command {
            EditorCommand::AddNode { position } => {
                let index = self.graph.node_count() + 1;
                let node = FlowNode::text(
                    self.ids.next_id(),
                    position,
                    self.config.render_message(index),
                );
                let node_id = node.id.clone();
                self.graph.insert_node(node)?;
                tracing::debug!(node_id = %node_id, "node added");
                self.emit(EditorEvent::NodeAdded {
                    node_id: node_id.clone(),
                    timestamp: Utc::now(),
                });
                if self.config.select_on_add {
                    self.set_selection(Some(node_id.clone()));
                }
                Ok(CommandOutcome::NodeAdded { node_id })
            }
            EditorCommand::MoveNode { node_id, position } => {
                self.graph.move_node(&node_id, position)?;
                self.emit(EditorEvent::NodeMoved {
                    node_id: node_id.clone(),
                    position,
                    timestamp: Utc::now(),
                });
                Ok(CommandOutcome::NodeMoved { node_id })
            }
            EditorCommand::UpdateMessage { node_id, message } => {
                self.graph.update_message(&node_id, message)?;
                self.emit(EditorEvent::MessageUpdated {
                    node_id: node_id.clone(),
                    timestamp: Utc::now(),
                });
                Ok(CommandOutcome::MessageUpdated { node_id })
            }
            EditorCommand::Connect { source, target } => {
                let edge = FlowEdge {
                    id: self.ids.next_id(),
                    source,
                    target,
                    style: self.config.default_edge_style,
                };
                let edge_id = edge.id.clone();
                let source = edge.source.clone();
                let target = edge.target.clone();
                match self.graph.connect(edge)? {
                    None => {
                        tracing::debug!(edge_id = %edge_id, %source, %target, "edge added");
                        self.emit(EditorEvent::EdgeAdded {
                            edge_id: edge_id.clone(),
                            source,
                            target,
                            timestamp: Utc::now(),
                        });
                        Ok(CommandOutcome::EdgeAdded { edge_id })
                    }
                    Some(reason) => {
                        // Silent policy decision: no event, no user message.
                        tracing::debug!(%source, %target, reason = reason.as_str(), "connection ignored");
                        Ok(CommandOutcome::ConnectionIgnored { reason })
                    }
                }
            }
            EditorCommand::RemoveNode { node_id } => {
                let (node, removed_edges) = self.graph.remove_node(&node_id)?;
                tracing::debug!(node_id = %node.id, edges = removed_edges.len(), "node removed");
                self.emit(EditorEvent::NodeRemoved {
                    node_id: node.id.clone(),
                    removed_edges: removed_edges.clone(),
                    timestamp: Utc::now(),
                });
                if self.selection.as_deref() == Some(node.id.as_str()) {
                    self.set_selection(None);
                }
                Ok(CommandOutcome::NodeRemoved {
                    node_id: node.id,
                    removed_edges,
                })
            }
            EditorCommand::RemoveEdge { edge_id } => {
                let edge = self.graph.remove_edge(&edge_id)?;
                self.emit(EditorEvent::EdgeRemoved {
                    edge_id: edge.id.clone(),
                    timestamp: Utc::now(),
                });
                Ok(CommandOutcome::EdgeRemoved { edge_id: edge.id })
            }
            EditorCommand::SelectNode { node_id } => {
                // Clicking a missing node is a host bug, not a gesture.
                self.graph.get_node(&node_id)?;
                self.set_selection(Some(node_id.clone()));
                Ok(CommandOutcome::SelectionChanged {
                    node_id: Some(node_id),
                })
            }
            EditorCommand::ClearSelection => {
                self.set_selection(None);
                Ok(CommandOutcome::SelectionChanged { node_id: None })
            }
        }
    }

    /// May an edge from `source` to `target` be added right now?
    pub fn can_connect(&self, source: &str, target: &str) -> bool {
        crate::graph::policy::can_connect(source, target, &self.graph.edges())
    }

    /// Validate the current snapshot for saving.
    pub fn validate(&self) -> ValidationReport {
        validate_flow(&self.graph.nodes(), &self.graph.edges())
    }

    /// Whether the save button should be enabled.
    pub fn can_save(&self) -> bool {
        self.validate().is_valid
    }

    /// Validate and, if valid, hand the snapshot to the persistence handler.
    ///
    /// On rejection the first error string is what the host surfaces to the
    /// user; no handoff occurs.
    pub fn save(&self, handler: &dyn SaveHandler) -> Result<(), FlowError> {
        let report = self.validate();
        if !report.is_valid {
            let message = report
                .first_error()
                .unwrap_or("Cannot save Flow")
                .to_string();
            tracing::warn!(error = %message, "flow save rejected");
            self.emit(EditorEvent::SaveRejected {
                message,
                timestamp: Utc::now(),
            });
            return Err(FlowError::ValidationFailed(Box::new(report)));
        }

        let document = self.graph.to_document();
        handler.persist(&document)?;
        self.emit(EditorEvent::FlowSaved {
            node_count: document.nodes.len(),
            edge_count: document.edges.len(),
            timestamp: Utc::now(),
        });
        Ok(())
    }

    /// Export the current diagram.
    pub fn to_document(&self) -> FlowDocument {
        self.graph.to_document()
    }

    fn set_selection(&mut self, node_id: Option<String>) {
        if self.selection != node_id {
            self.selection = node_id.clone();
            self.emit(EditorEvent::SelectionChanged {
                node_id,
                timestamp: Utc::now(),
            });
        }
    }

    fn emit(&self, event: EditorEvent) {
        if let Some(sender) = &self.events {
            // Receiver may be gone; the editor keeps working without it.
            let _ = sender.send(event);
        }
    }
}

impl Default for FlowEditor {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for configuring and creating a [`FlowEditor`].
pub struct FlowEditorBuilder {
    document: Option<FlowDocument>,
    config: EditorConfig,
    ids: Arc<dyn IdGenerator>,
    events: Option<EventSender>,
}

impl FlowEditorBuilder {
    /// Start from an existing diagram document.
    pub fn document(mut self, document: FlowDocument) -> Self {
        self.document = Some(document);
        self
    }

    pub fn config(mut self, config: EditorConfig) -> Self {
        self.config = config;
        self
    }

    pub fn id_generator(mut self, ids: Arc<dyn IdGenerator>) -> Self {
        self.ids = ids;
        self
    }

    /// Emit [`EditorEvent`]s on the given channel.
    pub fn events(mut self, sender: EventSender) -> Self {
        self.events = Some(sender);
        self
    }

    /// Build the editor.
    ///
    /// A starting document is checked at the import boundary: structural and
    /// policy findings (bad ids, dangling endpoints, self-loops, duplicate
    /// edges, fan-out violations) reject the load. Topology findings do not
    /// — a diagram with several roots loads fine; the editor exists to fix
    /// it, only saving is blocked.
    pub fn build(self) -> Result<FlowEditor, FlowError> {
        let graph = match self.document {
            Some(mut document) => {
                let report = validate_document(&document);
                let blocking = report.errors().iter().any(|d| d.code != "E101");
                if blocking {
                    return Err(FlowError::ValidationFailed(Box::new(report)));
                }
                for edge in &mut document.edges {
                    if edge.id.is_empty() {
                        edge.id = self.ids.next_id();
                    }
                }
                FlowGraph::from_document(&document)?
            }
            None => FlowGraph::new(),
        };

        Ok(FlowEditor {
            graph,
            selection: None,
            config: self.config,
            ids: self.ids,
            events: self.events,
        })
    }
}

use crate::document::schema::Position;
use crate::graph::policy::ConnectionRejection;

/// A single interaction gesture, expressed as a graph mutation request.
#[derive(Debug, Clone, PartialEq)]
pub enum EditorCommand {
    /// Drop a new message node on the canvas.
    AddNode { position: Position },
    /// Drag an existing node to a new position.
    MoveNode { node_id: String, position: Position },
    /// Edit the text of a node from the settings panel.
    UpdateMessage { node_id: String, message: String },
    /// Drag a connection from one node's source handle to another's target.
    Connect { source: String, target: String },
    /// Delete a node (and every edge touching it).
    RemoveNode { node_id: String },
    /// Delete a single edge.
    RemoveEdge { edge_id: String },
    /// Click a node.
    SelectNode { node_id: String },
    /// Click the empty canvas, or leave the settings panel.
    ClearSelection,
}

/// What applying a command actually did.
#[derive(Debug, Clone, PartialEq)]
pub enum CommandOutcome {
    NodeAdded {
        node_id: String,
    },
    NodeMoved {
        node_id: String,
    },
    NodeRemoved {
        node_id: String,
        removed_edges: Vec<String>,
    },
    MessageUpdated {
        node_id: String,
    },
    EdgeAdded {
        edge_id: String,
    },
    /// The connection policy rejected the edge. Not an error: the edge is
    /// simply not created and no message is surfaced to the user.
    ConnectionIgnored {
        reason: ConnectionRejection,
    },
    EdgeRemoved {
        edge_id: String,
    },
    SelectionChanged {
        node_id: Option<String>,
    },
}

//! Graph state and the decision functions that govern it.
//!
//! [`FlowGraph`] is the owned, mutable diagram state: an adjacency-aware
//! node/edge store keyed by id, decoupled from any rendering concern. The
//! [`policy`] module decides whether a proposed connection may be created;
//! the [`validator`] module decides whether the current diagram is savable.

pub mod policy;
pub mod store;
pub mod types;
pub mod validator;

pub use policy::{can_connect, check_connection, ConnectionRejection};
pub use store::FlowGraph;
pub use types::*;
pub use validator::validate_flow;

//! Editor session layer.
//!
//! Translates interaction gestures into graph mutations: a host (canvas,
//! test harness, demo binary) sends [`EditorCommand`]s to a [`FlowEditor`],
//! which applies them synchronously against the owned [`FlowGraph`]
//! (consulting the connection policy before any edge commits), tracks the
//! selection and side-panel mode, emits timestamped [`EditorEvent`]s, and
//! guards the save boundary through the flow validator.

pub mod command;
pub mod config;
pub mod context;
pub mod events;
pub mod save;
pub mod session;

pub use command::{CommandOutcome, EditorCommand};
pub use config::EditorConfig;
pub use context::{FakeIdGenerator, IdGenerator, RealIdGenerator};
pub use events::{create_event_channel, EditorEvent, EventReceiver, EventSender};
pub use save::{LoggingSaveHandler, SaveHandler};
pub use session::{FlowEditor, FlowEditorBuilder, PanelMode};

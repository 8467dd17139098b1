use serde::{Deserialize, Serialize};

use crate::document::schema::EdgeStyle;

/// Editor behavior knobs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Template for the default text of a dropped node. `{index}` is
    /// replaced with the 1-based node count after the drop.
    #[serde(default = "default_message_template")]
    pub message_template: String,
    /// Render style for newly created edges.
    #[serde(default)]
    pub default_edge_style: EdgeStyle,
    /// Select a node immediately after it is dropped on the canvas.
    #[serde(default)]
    pub select_on_add: bool,
}

fn default_message_template() -> String {
    "New message {index}".to_string()
}

impl Default for EditorConfig {
    fn default() -> Self {
        EditorConfig {
            message_template: default_message_template(),
            default_edge_style: EdgeStyle::Smoothstep,
            select_on_add: false,
        }
    }
}

impl EditorConfig {
    /// Default message for the `index`-th node.
    pub fn render_message(&self, index: usize) -> String {
        self.message_template.replace("{index}", &index.to_string())
    }
}

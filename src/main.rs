use flowedit::{
    parse_document, CommandOutcome, DocumentFormat, EditorCommand, FlowEditor, LoggingSaveHandler,
    Position,
};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    println!("=== FlowEdit (headless message-flow editor) ===\n");

    let json = r#"
{
  "version": "0.1.0",
  "nodes": [
    {
      "id": "1",
      "type": "text",
      "position": { "x": 300.0, "y": 200.0 },
      "data": { "message": "test message 1" }
    }
  ],
  "edges": []
}
"#;

    // Load
    let document = parse_document(json, DocumentFormat::Json).expect("Failed to parse document");
    println!(
        "[OK] document parsed ({} nodes, {} edges)",
        document.nodes.len(),
        document.edges.len()
    );

    let mut editor = FlowEditor::builder()
        .document(document)
        .build()
        .expect("Failed to build editor");

    // Drop two more message nodes on the canvas
    let second = add_node(&mut editor, 300.0, 360.0);
    let third = add_node(&mut editor, 300.0, 520.0);
    println!("[OK] dropped nodes {} and {}", second, third);

    // Three roots: saving must be rejected
    match editor.save(&LoggingSaveHandler) {
        Err(err) => println!("[EXPECTED] save rejected: {}", err),
        Ok(()) => println!("[BUG] save unexpectedly succeeded"),
    }

    // Chain them up: 1 -> second -> third
    editor
        .apply(EditorCommand::Connect {
            source: "1".to_string(),
            target: second.clone(),
        })
        .expect("connect failed");
    editor
        .apply(EditorCommand::Connect {
            source: second.clone(),
            target: third.clone(),
        })
        .expect("connect failed");

    // Edit the dropped node's text from the settings panel
    editor
        .apply(EditorCommand::SelectNode {
            node_id: second.clone(),
        })
        .expect("select failed");
    editor
        .apply(EditorCommand::UpdateMessage {
            node_id: second,
            message: "How can I help you?".to_string(),
        })
        .expect("edit failed");
    editor.apply(EditorCommand::ClearSelection).expect("deselect failed");

    // Now a single chain with one root
    assert!(editor.can_save());
    editor.save(&LoggingSaveHandler).expect("save failed");
    println!("\n=== Flow saved ===");

    let out = flowedit::serialize_document(&editor.to_document(), DocumentFormat::Json)
        .expect("serialize failed");
    println!("{}", out);
}

fn add_node(editor: &mut FlowEditor, x: f64, y: f64) -> String {
    match editor
        .apply(EditorCommand::AddNode {
            position: Position::new(x, y),
        })
        .expect("add failed")
    {
        CommandOutcome::NodeAdded { node_id } => node_id,
        other => panic!("unexpected outcome: {:?}", other),
    }
}

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::mpsc;

use crate::document::schema::Position;

/// 编辑器事件 — 每次图状态变更后发出
#[derive(Clone, Debug, Serialize)]
pub enum EditorEvent {
    /// 节点已添加
    NodeAdded {
        node_id: String,
        timestamp: DateTime<Utc>,
    },

    /// 节点已移动
    NodeMoved {
        node_id: String,
        position: Position,
        timestamp: DateTime<Utc>,
    },

    /// 节点已删除（含级联删除的边）
    NodeRemoved {
        node_id: String,
        removed_edges: Vec<String>,
        timestamp: DateTime<Utc>,
    },

    /// 消息文本已更新
    MessageUpdated {
        node_id: String,
        timestamp: DateTime<Utc>,
    },

    /// 边已添加
    EdgeAdded {
        edge_id: String,
        source: String,
        target: String,
        timestamp: DateTime<Utc>,
    },

    /// 边已删除
    EdgeRemoved {
        edge_id: String,
        timestamp: DateTime<Utc>,
    },

    /// 选中状态变更（None 表示取消选中）
    SelectionChanged {
        node_id: Option<String>,
        timestamp: DateTime<Utc>,
    },

    /// 校验通过，快照已交给持久化层
    FlowSaved {
        node_count: usize,
        edge_count: usize,
        timestamp: DateTime<Utc>,
    },

    /// 保存被拒绝
    SaveRejected {
        message: String,
        timestamp: DateTime<Utc>,
    },
}

/// 事件发送器
pub type EventSender = mpsc::UnboundedSender<EditorEvent>;

/// 事件接收器
pub type EventReceiver = mpsc::UnboundedReceiver<EditorEvent>;

/// 创建事件通道
pub fn create_event_channel() -> (EventSender, EventReceiver) {
    mpsc::unbounded_channel()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_event_channel() {
        let (sender, mut receiver) = create_event_channel();

        sender
            .send(EditorEvent::NodeAdded {
                node_id: "node1".to_string(),
                timestamp: Utc::now(),
            })
            .unwrap();

        let event = receiver.recv().await.unwrap();
        match event {
            EditorEvent::NodeAdded { node_id, .. } => {
                assert_eq!(node_id, "node1");
            }
            _ => panic!("Unexpected event type"),
        }
    }

    #[test]
    fn test_event_serializes() {
        let event = EditorEvent::SaveRejected {
            message: "Cannot save Flow".to_string(),
            timestamp: Utc::now(),
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("SaveRejected"));
        assert!(json.contains("Cannot save Flow"));
    }
}

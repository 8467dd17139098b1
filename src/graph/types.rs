use petgraph::stable_graph::{EdgeIndex, NodeIndex};

use crate::document::schema::{EdgeStyle, Position};

/// 图节点 — 画布上的一条消息
#[derive(Debug, Clone)]
pub struct FlowNode {
    /// 节点 ID（对应文档中的 id）
    pub id: String,

    /// 节点类型（当前仅 "text"）
    pub kind: String,

    /// 画布坐标（对行为无影响）
    pub position: Position,

    /// 消息文本（可为空）
    pub message: String,
}

impl FlowNode {
    /// 创建一个 text 消息节点
    pub fn text(id: impl Into<String>, position: Position, message: impl Into<String>) -> Self {
        FlowNode {
            id: id.into(),
            kind: "text".to_string(),
            position,
            message: message.into(),
        }
    }
}

/// 图边 — 有向连接，表示消息流顺序
#[derive(Debug, Clone)]
pub struct FlowEdge {
    /// 边 ID
    pub id: String,

    /// 源节点 ID
    pub source: String,

    /// 目标节点 ID
    pub target: String,

    /// 渲染样式标签
    pub style: EdgeStyle,
}

/// 节点 ID 到 petgraph NodeIndex 的映射
pub type NodeIndexMap = std::collections::HashMap<String, NodeIndex>;

/// 边 ID 到 petgraph EdgeIndex 的映射
pub type EdgeIndexMap = std::collections::HashMap<String, EdgeIndex>;

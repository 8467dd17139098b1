use petgraph::stable_graph::StableDiGraph;
use petgraph::visit::EdgeRef;

use crate::document::schema::{
    EdgeSchema, FlowDocument, NodeData, NodeSchema, Position, CURRENT_DOCUMENT_VERSION,
};
use crate::error::FlowError;

use super::policy::{check_connection, ConnectionRejection};
use super::types::*;

/// 图状态 — 编辑器持有的可变图结构
///
/// 节点与边以 id 为键，另维护 id 到 petgraph 索引的映射。
/// 所有变更按手势逐个同步提交。
#[derive(Debug, Default)]
pub struct FlowGraph {
    /// 图结构
    graph: StableDiGraph<FlowNode, FlowEdge>,

    /// 节点 ID 到 NodeIndex 的映射
    node_index_map: NodeIndexMap,

    /// 边 ID 到 EdgeIndex 的映射
    edge_index_map: EdgeIndexMap,
}

impl FlowGraph {
    /// 创建空图
    pub fn new() -> Self {
        FlowGraph::default()
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    pub fn contains_node(&self, node_id: &str) -> bool {
        self.node_index_map.contains_key(node_id)
    }

    /// 插入节点；id 重复时报错
    pub fn insert_node(&mut self, node: FlowNode) -> Result<(), FlowError> {
        if self.node_index_map.contains_key(&node.id) {
            return Err(FlowError::DuplicateNodeId(node.id));
        }
        let id = node.id.clone();
        let idx = self.graph.add_node(node);
        self.node_index_map.insert(id, idx);
        Ok(())
    }

    /// 根据节点 ID 获取图节点
    pub fn get_node(&self, node_id: &str) -> Result<&FlowNode, FlowError> {
        let idx = self
            .node_index_map
            .get(node_id)
            .ok_or_else(|| FlowError::NodeNotFound(node_id.to_string()))?;
        self.graph
            .node_weight(*idx)
            .ok_or_else(|| FlowError::NodeNotFound(node_id.to_string()))
    }

    fn node_weight_mut(&mut self, node_id: &str) -> Result<&mut FlowNode, FlowError> {
        let idx = *self
            .node_index_map
            .get(node_id)
            .ok_or_else(|| FlowError::NodeNotFound(node_id.to_string()))?;
        self.graph
            .node_weight_mut(idx)
            .ok_or_else(|| FlowError::NodeNotFound(node_id.to_string()))
    }

    /// 移动节点到新坐标
    pub fn move_node(&mut self, node_id: &str, position: Position) -> Result<(), FlowError> {
        let node = self.node_weight_mut(node_id)?;
        node.position = position;
        Ok(())
    }

    /// 更新节点消息文本
    pub fn update_message(&mut self, node_id: &str, message: String) -> Result<(), FlowError> {
        let node = self.node_weight_mut(node_id)?;
        node.message = message;
        Ok(())
    }

    /// 删除节点，并级联删除所有相连的边；返回被删的节点与边 id
    pub fn remove_node(&mut self, node_id: &str) -> Result<(FlowNode, Vec<String>), FlowError> {
        let idx = *self
            .node_index_map
            .get(node_id)
            .ok_or_else(|| FlowError::NodeNotFound(node_id.to_string()))?;

        let mut removed_edges: Vec<String> = self
            .graph
            .edges_directed(idx, petgraph::Direction::Outgoing)
            .map(|e| e.weight().id.clone())
            .collect();
        removed_edges.extend(
            self.graph
                .edges_directed(idx, petgraph::Direction::Incoming)
                .map(|e| e.weight().id.clone()),
        );

        for edge_id in &removed_edges {
            self.edge_index_map.remove(edge_id);
        }

        let node = self
            .graph
            .remove_node(idx)
            .ok_or_else(|| FlowError::NodeNotFound(node_id.to_string()))?;
        self.node_index_map.remove(node_id);

        Ok((node, removed_edges))
    }

    /// 尝试建立连接
    ///
    /// 两端节点必须存在；连接策略拒绝时不建边，返回 `Ok(Some(原因))`。
    pub fn connect(&mut self, edge: FlowEdge) -> Result<Option<ConnectionRejection>, FlowError> {
        let source_idx = *self
            .node_index_map
            .get(&edge.source)
            .ok_or_else(|| FlowError::NodeNotFound(edge.source.clone()))?;
        let target_idx = *self
            .node_index_map
            .get(&edge.target)
            .ok_or_else(|| FlowError::NodeNotFound(edge.target.clone()))?;

        if self.edge_index_map.contains_key(&edge.id) {
            return Err(FlowError::GraphBuildError(format!(
                "Duplicate edge id: {}",
                edge.id
            )));
        }

        let edges = self.edges();
        if let Err(reason) = check_connection(&edge.source, &edge.target, &edges) {
            return Ok(Some(reason));
        }

        let id = edge.id.clone();
        let idx = self.graph.add_edge(source_idx, target_idx, edge);
        self.edge_index_map.insert(id, idx);
        Ok(None)
    }

    /// 删除边
    pub fn remove_edge(&mut self, edge_id: &str) -> Result<FlowEdge, FlowError> {
        let idx = *self
            .edge_index_map
            .get(edge_id)
            .ok_or_else(|| FlowError::EdgeNotFound(edge_id.to_string()))?;
        let edge = self
            .graph
            .remove_edge(idx)
            .ok_or_else(|| FlowError::EdgeNotFound(edge_id.to_string()))?;
        self.edge_index_map.remove(edge_id);
        Ok(edge)
    }

    /// 当前节点快照（按插入顺序）
    pub fn nodes(&self) -> Vec<FlowNode> {
        self.graph
            .node_indices()
            .filter_map(|idx| self.graph.node_weight(idx))
            .cloned()
            .collect()
    }

    /// 当前边快照
    pub fn edges(&self) -> Vec<FlowEdge> {
        self.graph
            .edge_indices()
            .filter_map(|idx| self.graph.edge_weight(idx))
            .cloned()
            .collect()
    }

    /// 所有根节点 ID（无入边的节点）
    pub fn roots(&self) -> Vec<String> {
        self.graph
            .node_indices()
            .filter(|idx| {
                self.graph
                    .neighbors_directed(*idx, petgraph::Direction::Incoming)
                    .next()
                    .is_none()
            })
            .filter_map(|idx| self.graph.node_weight(idx).map(|n| n.id.clone()))
            .collect()
    }

    /// 获取节点的所有后继节点 ID
    pub fn successors(&self, node_id: &str) -> Result<Vec<String>, FlowError> {
        let idx = self
            .node_index_map
            .get(node_id)
            .ok_or_else(|| FlowError::NodeNotFound(node_id.to_string()))?;

        Ok(self
            .graph
            .neighbors_directed(*idx, petgraph::Direction::Outgoing)
            .filter_map(|n| self.graph.node_weight(n).map(|node| node.id.clone()))
            .collect())
    }

    /// 获取节点的所有前驱节点 ID
    pub fn predecessors(&self, node_id: &str) -> Result<Vec<String>, FlowError> {
        let idx = self
            .node_index_map
            .get(node_id)
            .ok_or_else(|| FlowError::NodeNotFound(node_id.to_string()))?;

        Ok(self
            .graph
            .neighbors_directed(*idx, petgraph::Direction::Incoming)
            .filter_map(|n| self.graph.node_weight(n).map(|node| node.id.clone()))
            .collect())
    }

    /// 导出为文档
    pub fn to_document(&self) -> FlowDocument {
        FlowDocument {
            version: CURRENT_DOCUMENT_VERSION.to_string(),
            nodes: self
                .nodes()
                .iter()
                .map(|n| NodeSchema {
                    id: n.id.clone(),
                    node_type: n.kind.clone(),
                    position: n.position,
                    data: NodeData {
                        message: n.message.clone(),
                    },
                })
                .collect(),
            edges: self
                .edges()
                .iter()
                .map(|e| EdgeSchema {
                    id: e.id.clone(),
                    source: e.source.clone(),
                    target: e.target.clone(),
                    style: e.style,
                })
                .collect(),
        }
    }

    /// 从文档构建图结构
    ///
    /// 只做结构性检查（id 重复、端点缺失）。导入前应先通过
    /// [`validate_document`](crate::document::validation::validate_document)。
    pub fn from_document(document: &FlowDocument) -> Result<FlowGraph, FlowError> {
        let mut graph = FlowGraph::new();

        for node_schema in &document.nodes {
            graph
                .insert_node(FlowNode {
                    id: node_schema.id.clone(),
                    kind: node_schema.node_type.clone(),
                    position: node_schema.position,
                    message: node_schema.data.message.clone(),
                })
                .map_err(|_| {
                    FlowError::GraphBuildError(format!("Duplicate node id: {}", node_schema.id))
                })?;
        }

        for edge_schema in &document.edges {
            let source_idx = *graph.node_index_map.get(&edge_schema.source).ok_or_else(|| {
                FlowError::GraphBuildError(format!(
                    "Edge source not found: {}",
                    edge_schema.source
                ))
            })?;
            let target_idx = *graph.node_index_map.get(&edge_schema.target).ok_or_else(|| {
                FlowError::GraphBuildError(format!(
                    "Edge target not found: {}",
                    edge_schema.target
                ))
            })?;

            if graph.edge_index_map.contains_key(&edge_schema.id) {
                return Err(FlowError::GraphBuildError(format!(
                    "Duplicate edge id: {}",
                    edge_schema.id
                )));
            }

            let edge = FlowEdge {
                id: edge_schema.id.clone(),
                source: edge_schema.source.clone(),
                target: edge_schema.target.clone(),
                style: edge_schema.style,
            };
            let id = edge.id.clone();
            let idx = graph.graph.add_edge(source_idx, target_idx, edge);
            graph.edge_index_map.insert(id, idx);
        }

        Ok(graph)
    }
}

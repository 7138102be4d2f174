//! 无权图
//!
//! 节点到后继节点集合的映射。邻接关系是封闭的：每个后继节点本身也是图中的键。

use super::node::Node;
use crate::error::{Error, Result};
use std::collections::{BTreeMap, BTreeSet};

/// 无权有向图（邻接集合表示）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph<N: Node> {
    adjacency: BTreeMap<N, BTreeSet<N>>,
}

impl<N: Node> Graph<N> {
    /// 从邻接映射创建图，检查邻接关系是否封闭
    pub fn from_adjacency(adjacency: BTreeMap<N, BTreeSet<N>>) -> Result<Self> {
        for (node, successors) in &adjacency {
            if let Some(missing) = successors.iter().find(|s| !adjacency.contains_key(*s)) {
                return Err(Error::DanglingSuccessor {
                    node: format!("{:?}", node),
                    successor: format!("{:?}", missing),
                });
            }
        }
        Ok(Self { adjacency })
    }

    /// 从 (节点, 后继列表) 序列创建图
    pub fn from_lists<I, S>(lists: I) -> Result<Self>
    where
        I: IntoIterator<Item = (N, S)>,
        S: IntoIterator<Item = N>,
    {
        let adjacency = lists
            .into_iter()
            .map(|(node, successors)| (node, successors.into_iter().collect()))
            .collect();
        Self::from_adjacency(adjacency)
    }

    /// 从 0/1 邻接矩阵创建图：当且仅当 `matrix[i][j] == 1` 时添加边 i -> j
    ///
    /// 调用方保证矩阵为方阵且与节点列表等长（见 [`GraphStore`](super::GraphStore)）。
    pub(crate) fn from_matrix(nodes: &[N], matrix: &[Vec<f64>]) -> Self {
        let mut adjacency: BTreeMap<N, BTreeSet<N>> =
            nodes.iter().map(|n| (n.clone(), BTreeSet::new())).collect();

        for (i, row) in matrix.iter().enumerate() {
            for (j, &cell) in row.iter().enumerate() {
                if cell == 1.0 {
                    if let Some(successors) = adjacency.get_mut(&nodes[i]) {
                        successors.insert(nodes[j].clone());
                    }
                }
            }
        }

        Self { adjacency }
    }

    /// 节点是否存在
    pub fn contains(&self, node: &N) -> bool {
        self.adjacency.contains_key(node)
    }

    /// 按升序遍历所有节点
    pub fn nodes(&self) -> impl Iterator<Item = &N> {
        self.adjacency.keys()
    }

    /// 按升序获取节点的后继
    pub fn successors(&self, node: &N) -> Result<&BTreeSet<N>> {
        self.adjacency
            .get(node)
            .ok_or_else(|| Error::node_not_found(node))
    }

    /// 节点数量
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// 边数量
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(BTreeSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }
}

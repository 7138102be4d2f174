//! 图存储
//!
//! 由节点列表和方阵一次性构建，构建后只读。各算法需要的视图（无权图、带权图、
//! 边列表、容量矩阵）都从同一份原始数据派生，彼此不共享可变状态。

use super::adjacency::Graph;
use super::capacity::CapacityMatrix;
use super::node::Node;
use super::weighted::{Direction, Edge, WeightedGraph};
use crate::error::{Error, Result};
use std::collections::BTreeMap;

/// 不可变的图存储
#[derive(Debug, Clone, PartialEq)]
pub struct GraphStore<N: Node> {
    /// 节点列表（矩阵行列顺序）
    nodes: Vec<N>,
    /// 0/1 邻接矩阵或带符号权重矩阵
    matrix: Vec<Vec<f64>>,
    /// 节点 -> 矩阵下标
    index: BTreeMap<N, usize>,
}

impl<N: Node> GraphStore<N> {
    /// 创建图存储
    ///
    /// 矩阵必须是方阵且行数等于节点数，节点不能重复。
    pub fn new(nodes: Vec<N>, matrix: Vec<Vec<f64>>) -> Result<Self> {
        if matrix.len() != nodes.len() {
            return Err(Error::InvalidMatrix(format!(
                "矩阵有 {} 行, 节点有 {} 个",
                matrix.len(),
                nodes.len()
            )));
        }
        if let Some((i, row)) = matrix
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != nodes.len())
        {
            return Err(Error::InvalidMatrix(format!(
                "第 {} 行长度为 {}, 期望 {}",
                i,
                row.len(),
                nodes.len()
            )));
        }

        let mut index = BTreeMap::new();
        for (i, node) in nodes.iter().enumerate() {
            if index.insert(node.clone(), i).is_some() {
                return Err(Error::DuplicateNode(format!("{:?}", node)));
            }
        }

        Ok(Self {
            nodes,
            matrix,
            index,
        })
    }

    /// 节点列表（矩阵顺序）
    pub fn nodes(&self) -> &[N] {
        &self.nodes
    }

    /// 原始矩阵
    pub fn matrix(&self) -> &[Vec<f64>] {
        &self.matrix
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// 节点在矩阵中的下标
    pub fn index_of(&self, node: &N) -> Result<usize> {
        self.index
            .get(node)
            .copied()
            .ok_or_else(|| Error::node_not_found(node))
    }

    /// 下标对应的节点
    pub fn node_at(&self, index: usize) -> Option<&N> {
        self.nodes.get(index)
    }

    /// 无权视图：`matrix[i][j] == 1` 的位置成为边
    pub fn graph(&self) -> Graph<N> {
        Graph::from_matrix(&self.nodes, &self.matrix)
    }

    /// 带权视图：`matrix[i][j] != 0` 的位置成为边
    pub fn weighted(&self, direction: Direction) -> WeightedGraph<N> {
        WeightedGraph::from_matrix(&self.nodes, &self.matrix, direction)
    }

    /// 按矩阵行优先扫描顺序得到的有向边列表
    pub fn edge_list(&self) -> Vec<Edge<N>> {
        self.weighted(Direction::Directed).edge_list().to_vec()
    }

    /// 容量视图，负容量会被拒绝
    pub fn capacities(&self) -> Result<CapacityMatrix> {
        CapacityMatrix::new(self.matrix.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> GraphStore<&'static str> {
        GraphStore::new(
            vec!["A", "B", "C"],
            vec![
                vec![0.0, 1.0, 1.0],
                vec![0.0, 0.0, 1.0],
                vec![0.0, 0.0, 0.0],
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_views() {
        let store = sample();
        assert_eq!(store.graph().edge_count(), 3);
        assert_eq!(store.weighted(Direction::Undirected).edge_count(), 6);
        assert_eq!(store.edge_list().len(), 3);
        assert_eq!(store.capacities().unwrap().len(), 3);
        assert_eq!(store.index_of(&"C").unwrap(), 2);
        assert_eq!(store.node_at(1), Some(&"B"));
    }

    #[test]
    fn test_rejects_size_mismatch() {
        let err = GraphStore::new(vec![1, 2], vec![vec![0.0, 0.0]]).unwrap_err();
        assert!(matches!(err, Error::InvalidMatrix(_)));
    }

    #[test]
    fn test_rejects_ragged_row() {
        let err = GraphStore::new(vec![1, 2], vec![vec![0.0, 0.0], vec![0.0]]).unwrap_err();
        assert!(matches!(err, Error::InvalidMatrix(_)));
    }

    #[test]
    fn test_rejects_duplicate_node() {
        let err = GraphStore::new(vec!['a', 'a'], vec![vec![0.0; 2]; 2]).unwrap_err();
        assert!(matches!(err, Error::DuplicateNode(_)));
    }

    #[test]
    fn test_negative_weights_reject_capacity_view() {
        let store = GraphStore::new(vec![0, 1], vec![vec![0.0, -1.0], vec![0.0, 0.0]]).unwrap();
        assert!(store.capacities().is_err());
        assert_eq!(store.edge_list()[0].weight, -1.0);
    }
}

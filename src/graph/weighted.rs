//! 带权图
//!
//! 节点到 (邻居, 权重) 有序序列的映射，同时保留插入顺序的扁平边列表，
//! 供 Bellman-Ford 按插入顺序松弛。

use super::node::Node;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 有向带权边
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge<N> {
    pub from: N,
    pub to: N,
    pub weight: f64,
}

impl<N> Edge<N> {
    pub fn new(from: N, to: N, weight: f64) -> Self {
        Self { from, to, weight }
    }
}

impl<N> From<(N, N, f64)> for Edge<N> {
    fn from((from, to, weight): (N, N, f64)) -> Self {
        Self { from, to, weight }
    }
}

/// 矩阵建图时的方向语义
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Direction {
    /// 只添加 i -> j
    #[default]
    Directed,
    /// 额外添加对称边 j -> i（自环除外）
    Undirected,
}

/// 带权有向图
#[derive(Debug, Clone, PartialEq)]
pub struct WeightedGraph<N: Node> {
    adjacency: BTreeMap<N, Vec<(N, f64)>>,
    /// 插入顺序的边列表
    edges: Vec<Edge<N>>,
}

impl<N: Node> WeightedGraph<N> {
    /// 创建只有节点、没有边的图
    pub fn with_nodes<I: IntoIterator<Item = N>>(nodes: I) -> Self {
        Self {
            adjacency: nodes.into_iter().map(|n| (n, Vec::new())).collect(),
            edges: Vec::new(),
        }
    }

    /// 从边序列创建图；边的端点会自动加入节点集合
    pub fn from_edges<I, E>(edges: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<Edge<N>>,
    {
        let mut graph = Self::with_nodes(std::iter::empty());
        for edge in edges {
            let edge = edge.into();
            graph.adjacency.entry(edge.to.clone()).or_default();
            graph.push_edge(edge);
        }
        graph
    }

    /// 从权重矩阵创建图：当且仅当 `matrix[i][j] != 0` 时添加边
    ///
    /// 无向模式下额外插入对称边（自环除外），不做去重或对称性校验。
    pub(crate) fn from_matrix(nodes: &[N], matrix: &[Vec<f64>], direction: Direction) -> Self {
        let mut graph = Self::with_nodes(nodes.iter().cloned());

        for (i, row) in matrix.iter().enumerate() {
            for (j, &weight) in row.iter().enumerate() {
                if weight == 0.0 {
                    continue;
                }
                graph.push_edge(Edge::new(nodes[i].clone(), nodes[j].clone(), weight));
                if direction == Direction::Undirected && i != j {
                    graph.push_edge(Edge::new(nodes[j].clone(), nodes[i].clone(), weight));
                }
            }
        }

        graph
    }

    /// 添加一条边；端点必须已存在
    pub fn add_edge(&mut self, from: N, to: N, weight: f64) -> Result<()> {
        if !self.adjacency.contains_key(&to) {
            return Err(Error::node_not_found(&to));
        }
        if !self.adjacency.contains_key(&from) {
            return Err(Error::node_not_found(&from));
        }
        self.push_edge(Edge::new(from, to, weight));
        Ok(())
    }

    fn push_edge(&mut self, edge: Edge<N>) {
        self.adjacency
            .entry(edge.from.clone())
            .or_default()
            .push((edge.to.clone(), edge.weight));
        self.edges.push(edge);
    }

    pub fn contains(&self, node: &N) -> bool {
        self.adjacency.contains_key(node)
    }

    /// 按升序遍历所有节点
    pub fn nodes(&self) -> impl Iterator<Item = &N> {
        self.adjacency.keys()
    }

    /// 节点的出边（插入顺序）
    pub fn neighbors(&self, node: &N) -> Result<&[(N, f64)]> {
        self.adjacency
            .get(node)
            .map(Vec::as_slice)
            .ok_or_else(|| Error::node_not_found(node))
    }

    /// 插入顺序的扁平边列表
    pub fn edge_list(&self) -> &[Edge<N>] {
        &self.edges
    }

    /// 第一条负权边（如果有）
    pub fn find_negative_edge(&self) -> Option<&Edge<N>> {
        self.edges.iter().find(|e| e.weight < 0.0)
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

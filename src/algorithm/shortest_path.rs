//! 单源最短路径
//!
//! - Dijkstra：非负权重，二叉堆 + 惰性删除
//! - Bellman-Ford：任意权重，检测从源点可达的负权环

use super::path::{reconstruct_path, PathResult};
use crate::error::{Error, Result};
use crate::graph::{Edge, Node, WeightedGraph};
use std::cmp::{Ordering, Reverse};
use std::collections::{BTreeMap, BTreeSet, BinaryHeap};

/// 单源最短路径结果
///
/// 所有节点都有距离项（不可达为 +inf）和父节点项（源点与不可达节点为 None）。
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPaths<N: Node> {
    source: N,
    distances: BTreeMap<N, f64>,
    parents: BTreeMap<N, Option<N>>,
}

impl<N: Node> ShortestPaths<N> {
    /// 初始状态：源点距离 0，其余 +inf，父节点全部为空
    fn init<'n, I>(nodes: I, source: &N) -> Self
    where
        N: 'n,
        I: IntoIterator<Item = &'n N>,
    {
        let mut distances = BTreeMap::new();
        let mut parents = BTreeMap::new();
        for node in nodes {
            distances.insert(node.clone(), f64::INFINITY);
            parents.insert(node.clone(), None);
        }
        distances.insert(source.clone(), 0.0);
        Self {
            source: source.clone(),
            distances,
            parents,
        }
    }

    /// 松弛边 u -> v，返回是否更新
    fn relax(&mut self, u: &N, v: &N, weight: f64) -> Result<bool> {
        let du = self.distance_of(u)?;
        let dv = self.distance_of(v)?;
        if du + weight < dv {
            self.distances.insert(v.clone(), du + weight);
            self.parents.insert(v.clone(), Some(u.clone()));
            return Ok(true);
        }
        Ok(false)
    }

    fn distance_of(&self, node: &N) -> Result<f64> {
        self.distances
            .get(node)
            .copied()
            .ok_or_else(|| Error::node_not_found(node))
    }

    pub fn source(&self) -> &N {
        &self.source
    }

    /// 到节点的距离；不可达为 +inf，未知节点为 None
    pub fn distance(&self, node: &N) -> Option<f64> {
        self.distances.get(node).copied()
    }

    /// 节点的前驱
    pub fn parent(&self, node: &N) -> Option<&N> {
        self.parents.get(node).and_then(Option::as_ref)
    }

    pub fn is_reachable(&self, node: &N) -> bool {
        self.distance(node).is_some_and(f64::is_finite)
    }

    pub fn distances(&self) -> &BTreeMap<N, f64> {
        &self.distances
    }

    pub fn parents(&self) -> &BTreeMap<N, Option<N>> {
        &self.parents
    }

    /// 源点到目标的路径；不可达时返回 None
    pub fn path_to(&self, target: &N) -> Option<PathResult<N>> {
        let distance = self.distance(target).filter(|d| d.is_finite())?;
        let nodes = reconstruct_path(&self.parents, target);
        Some(PathResult::new(nodes, distance))
    }
}

/// 堆中的距离，按 `f64::total_cmp` 全序比较
#[derive(Debug, Clone, Copy, PartialEq)]
struct Distance(f64);

impl Eq for Distance {}

impl PartialOrd for Distance {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Distance {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

/// Dijkstra 最短路径
pub struct Dijkstra<'a, N: Node> {
    graph: &'a WeightedGraph<N>,
}

impl<'a, N: Node> Dijkstra<'a, N> {
    pub fn new(graph: &'a WeightedGraph<N>) -> Self {
        Self { graph }
    }

    /// 计算从 source 出发的最短路径
    ///
    /// 负权边在运行前被拒绝。堆按 (距离, 节点) 取最小，距离相同时节点小者优先。
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn run(&self, source: &N) -> Result<ShortestPaths<N>> {
        if !self.graph.contains(source) {
            return Err(Error::node_not_found(source));
        }
        if let Some(edge) = self.graph.find_negative_edge() {
            return Err(Error::NegativeWeight {
                from: format!("{:?}", edge.from),
                to: format!("{:?}", edge.to),
                weight: edge.weight,
            });
        }

        let mut result = ShortestPaths::init(self.graph.nodes(), source);
        let mut finalized: BTreeSet<N> = BTreeSet::new();
        let mut heap = BinaryHeap::new();
        heap.push(Reverse((Distance(0.0), source.clone())));

        while let Some(Reverse((_, u))) = heap.pop() {
            if !finalized.insert(u.clone()) {
                continue;
            }
            for (v, w) in self.graph.neighbors(&u)? {
                if result.relax(&u, v, *w)? {
                    heap.push(Reverse((Distance(result.distance_of(v)?), v.clone())));
                }
            }
        }

        tracing::debug!(finalized = finalized.len(), "Dijkstra 完成");
        Ok(result)
    }
}

/// Bellman-Ford 结果
#[derive(Debug, Clone, PartialEq)]
pub enum BellmanFordOutcome<N: Node> {
    /// 没有可达负权环，距离与父节点有效
    Shortest(ShortestPaths<N>),
    /// 存在从源点可达的负权环，距离无意义
    NegativeCycle,
}

impl<N: Node> BellmanFordOutcome<N> {
    pub fn has_negative_cycle(&self) -> bool {
        matches!(self, BellmanFordOutcome::NegativeCycle)
    }

    pub fn into_paths(self) -> Option<ShortestPaths<N>> {
        match self {
            BellmanFordOutcome::Shortest(paths) => Some(paths),
            BellmanFordOutcome::NegativeCycle => None,
        }
    }
}

/// Bellman-Ford 最短路径
pub struct BellmanFord<'a, N: Node> {
    nodes: Vec<&'a N>,
    edges: &'a [Edge<N>],
}

impl<'a, N: Node> BellmanFord<'a, N> {
    /// 由节点集合和扁平边列表创建
    pub fn new<I: IntoIterator<Item = &'a N>>(nodes: I, edges: &'a [Edge<N>]) -> Self {
        Self {
            nodes: nodes.into_iter().collect(),
            edges,
        }
    }

    /// 使用带权图的节点与插入顺序边列表
    pub fn from_graph(graph: &'a WeightedGraph<N>) -> Self {
        Self::new(graph.nodes(), graph.edge_list())
    }

    /// 计算从 source 出发的最短路径
    ///
    /// 最多 |V|-1 轮全边松弛，某轮无更新即提前结束；随后再做一轮检查，
    /// 仍可松弛说明存在可达负权环。
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn run(&self, source: &N) -> Result<BellmanFordOutcome<N>> {
        if !self.nodes.iter().any(|n| *n == source) {
            return Err(Error::node_not_found(source));
        }
        let mut result = ShortestPaths::init(self.nodes.iter().copied(), source);

        let passes = self.nodes.len().saturating_sub(1);
        for pass in 0..passes {
            let mut updated = false;
            for edge in self.edges {
                updated |= result.relax(&edge.from, &edge.to, edge.weight)?;
            }
            if !updated {
                tracing::trace!(pass, "无更新，提前结束");
                break;
            }
        }

        for edge in self.edges {
            let du = result.distance_of(&edge.from)?;
            let dv = result.distance_of(&edge.to)?;
            if du + edge.weight < dv {
                tracing::debug!(from = ?edge.from, to = ?edge.to, "检测到负权环");
                return Ok(BellmanFordOutcome::NegativeCycle);
            }
        }

        Ok(BellmanFordOutcome::Shortest(result))
    }
}

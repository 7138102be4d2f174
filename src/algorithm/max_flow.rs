//! 最大流算法
//!
//! 在容量矩阵的私有残量副本上重复寻找增广路径：
//! - Ford-Fulkerson：任意增广路径（这里用 DFS）
//! - Edmonds-Karp：总是用 BFS 找边数最少的增广路径，迭代次数有多项式上界
//!
//! 调用方的容量矩阵不会被修改。

use crate::error::Result;
use crate::graph::CapacityMatrix;
use std::collections::{BTreeMap, BTreeSet, VecDeque};

/// 残量网络
///
/// 推送 f 单位流量时，正向残量减 f，反向残量加 f；任何项都不会变为负数。
#[derive(Debug, Clone, PartialEq)]
pub struct ResidualNetwork {
    residual: Vec<Vec<f64>>,
}

impl ResidualNetwork {
    /// 复制容量矩阵作为初始残量
    pub fn new(capacity: &CapacityMatrix) -> Self {
        Self {
            residual: capacity.rows().to_vec(),
        }
    }

    pub fn len(&self) -> usize {
        self.residual.len()
    }

    pub fn is_empty(&self) -> bool {
        self.residual.is_empty()
    }

    /// 边 u -> v 的剩余容量；下标越界时为 None
    pub fn residual(&self, u: usize, v: usize) -> Option<f64> {
        self.residual.get(u)?.get(v).copied()
    }

    /// 路径上的最小剩余容量，路径来自 `find_path`
    pub(crate) fn bottleneck(&self, path: &[usize]) -> f64 {
        path.windows(2)
            .map(|e| self.residual[e[0]][e[1]])
            .fold(f64::INFINITY, f64::min)
    }

    /// 沿路径推送 amount 单位流量
    pub(crate) fn augment(&mut self, path: &[usize], amount: f64) {
        for e in path.windows(2) {
            let (u, v) = (e[0], e[1]);
            self.residual[u][v] -= amount;
            self.residual[v][u] += amount;
        }
    }

    /// 从 source 出发经正残量边可达的节点；source 越界时为空集
    pub fn reachable_from(&self, source: usize) -> BTreeSet<usize> {
        if source >= self.len() {
            return BTreeSet::new();
        }
        let mut visited = BTreeSet::from([source]);
        let mut queue = VecDeque::from([source]);
        while let Some(u) = queue.pop_front() {
            for v in 0..self.len() {
                if self.residual[u][v] > 0.0 && visited.insert(v) {
                    queue.push_back(v);
                }
            }
        }
        visited
    }
}

/// 增广路径搜索策略
pub trait AugmentingPathSearch {
    /// 寻找 source -> sink 且每条边残量为正的路径，返回节点序列
    ///
    /// 每次搜索都使用新分配的 visited/parent 状态。下标越界时返回 None。
    fn find_path(&self, residual: &ResidualNetwork, source: usize, sink: usize)
        -> Option<Vec<usize>>;
}

/// 深度优先搜索（按下标升序）
#[derive(Debug, Clone, Copy, Default)]
pub struct DepthFirst;

impl AugmentingPathSearch for DepthFirst {
    fn find_path(
        &self,
        residual: &ResidualNetwork,
        source: usize,
        sink: usize,
    ) -> Option<Vec<usize>> {
        let n = residual.len();
        if source >= n || sink >= n {
            return None;
        }
        let mut visited = vec![false; n];
        // 栈上是当前路径，以及每个节点下一个待检查的邻居下标
        let mut path = vec![source];
        let mut next = vec![0usize];
        visited[source] = true;

        while let Some(&u) = path.last() {
            if u == sink {
                return Some(path);
            }
            let cursor = next.last_mut()?;
            match (*cursor..n).find(|&v| !visited[v] && residual.residual[u][v] > 0.0) {
                Some(v) => {
                    *cursor = v + 1;
                    visited[v] = true;
                    path.push(v);
                    next.push(0);
                }
                None => {
                    path.pop();
                    next.pop();
                }
            }
        }

        None
    }
}

/// 广度优先搜索，得到边数最少的增广路径
#[derive(Debug, Clone, Copy, Default)]
pub struct BreadthFirst;

impl AugmentingPathSearch for BreadthFirst {
    fn find_path(
        &self,
        residual: &ResidualNetwork,
        source: usize,
        sink: usize,
    ) -> Option<Vec<usize>> {
        let n = residual.len();
        if source >= n || sink >= n {
            return None;
        }
        let mut visited = vec![false; n];
        let mut parent: Vec<Option<usize>> = vec![None; n];
        let mut queue = VecDeque::from([source]);
        visited[source] = true;

        'search: while let Some(u) = queue.pop_front() {
            for v in 0..n {
                if !visited[v] && residual.residual[u][v] > 0.0 {
                    visited[v] = true;
                    parent[v] = Some(u);
                    if v == sink {
                        break 'search;
                    }
                    queue.push_back(v);
                }
            }
        }

        if !visited[sink] {
            return None;
        }

        let mut path = vec![sink];
        let mut current = sink;
        while let Some(prev) = parent[current] {
            path.push(prev);
            current = prev;
        }
        path.reverse();
        Some(path)
    }
}

/// 最大流结果
#[derive(Debug, Clone, PartialEq)]
pub struct MaxFlow {
    /// 最大流量值
    pub value: f64,
    /// 每条边上的正净流量 (u, v) -> flow
    pub flow: BTreeMap<(usize, usize), f64>,
    /// 最小割的源侧节点集
    pub source_side: BTreeSet<usize>,
    /// 增广次数
    pub augmentations: usize,
    /// 终止时的残量网络
    ///
    /// 计算结束后的只读快照，求解过程中使用的是求解器私有的副本。
    pub residual: ResidualNetwork,
}

impl MaxFlow {
    /// 最小割边：从源侧指向汇侧且容量为正的原始边
    pub fn cut_edges(&self, capacity: &CapacityMatrix) -> Vec<(usize, usize, f64)> {
        capacity
            .edges()
            .filter(|(u, v, _)| self.source_side.contains(u) && !self.source_side.contains(v))
            .collect()
    }

    /// 流量等于容量的饱和边
    pub fn saturated_edges(&self, capacity: &CapacityMatrix) -> Vec<(usize, usize, f64)> {
        capacity
            .edges()
            .filter(|&(u, v, c)| self.flow.get(&(u, v)).is_some_and(|&f| f >= c))
            .collect()
    }

    /// 节点的净流出量（流出减流入）
    pub fn net_outflow(&self, node: usize) -> f64 {
        self.flow
            .iter()
            .map(|(&(u, v), &f)| {
                if u == node {
                    f
                } else if v == node {
                    -f
                } else {
                    0.0
                }
            })
            .sum()
    }
}

/// 增广路径最大流求解器
pub struct FlowSolver<'a, S> {
    capacity: &'a CapacityMatrix,
    search: S,
}

/// Ford-Fulkerson（DFS 增广）
pub type FordFulkerson<'a> = FlowSolver<'a, DepthFirst>;

/// Edmonds-Karp（BFS 增广）
pub type EdmondsKarp<'a> = FlowSolver<'a, BreadthFirst>;

impl<'a> FlowSolver<'a, DepthFirst> {
    /// 创建 Ford-Fulkerson 实例
    pub fn new(capacity: &'a CapacityMatrix) -> Self {
        Self::with_search(capacity, DepthFirst)
    }
}

impl<'a> FlowSolver<'a, BreadthFirst> {
    /// 创建 Edmonds-Karp 实例
    pub fn new(capacity: &'a CapacityMatrix) -> Self {
        Self::with_search(capacity, BreadthFirst)
    }
}

impl<'a, S: AugmentingPathSearch> FlowSolver<'a, S> {
    /// 使用指定搜索策略
    pub fn with_search(capacity: &'a CapacityMatrix, search: S) -> Self {
        Self { capacity, search }
    }

    /// 计算从 source 到 sink 的最大流
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn max_flow(&self, source: usize, sink: usize) -> Result<MaxFlow> {
        self.capacity.check_index(source)?;
        self.capacity.check_index(sink)?;

        let mut residual = ResidualNetwork::new(self.capacity);
        let mut value = 0.0;
        let mut augmentations = 0;

        if source != sink {
            while let Some(path) = self.search.find_path(&residual, source, sink) {
                let bottleneck = residual.bottleneck(&path);
                residual.augment(&path, bottleneck);
                value += bottleneck;
                augmentations += 1;
                tracing::trace!(?path, bottleneck, total = value, "增广");
            }
        }

        // 净流量 = 原容量 - 剩余容量，只保留正值
        let flow = self
            .capacity
            .edges()
            .filter_map(|(u, v, c)| {
                let f = c - residual.residual[u][v];
                (f > 0.0).then_some(((u, v), f))
            })
            .collect();

        let source_side = residual.reachable_from(source);
        tracing::debug!(value, augmentations, "最大流计算完成");

        Ok(MaxFlow {
            value,
            flow,
            source_side,
            augmentations,
            residual,
        })
    }
}

//! 连通性分析
//!
//! 环检测与连通分量划分。
//!
//! `has_cycle` 使用"已访问且不是直接父节点即为环"的规则，这是为无向邻接（对称矩阵）
//! 设计的：排除父节点避免把"原路返回"误判为环。直接用于有向图时，横叉边和前向边
//! 也会被判为环。需要有向图语义时使用 `has_directed_cycle`（三色标记）。
//!
//! 同理，`connected_components` 沿后继方向做 BFS，对有向图得到的是按发现顺序划分的
//! 可达集合，而不是弱连通分量。

use crate::graph::{Graph, Node};
use std::collections::{btree_set, BTreeMap, BTreeSet, VecDeque};

/// 三色标记
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Color {
    /// 在 DFS 栈上
    Gray,
    /// 已完成
    Black,
}

/// 连通性分析器
pub struct Connectivity<'a, N: Node> {
    graph: &'a Graph<N>,
}

impl<'a, N: Node> Connectivity<'a, N> {
    pub fn new(graph: &'a Graph<N>) -> Self {
        Self { graph }
    }

    /// 带父节点排除的环检测（无向规则）
    ///
    /// 按升序从每个未访问节点出发，覆盖非连通图。自环总是被判为环。
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn has_cycle(&self) -> bool {
        let mut visited: BTreeSet<&'a N> = BTreeSet::new();
        // (节点, 父节点, 剩余后继)
        let mut stack: Vec<(&'a N, Option<&'a N>, btree_set::Iter<'a, N>)> = Vec::new();

        for root in self.graph.nodes() {
            if visited.contains(root) {
                continue;
            }
            visited.insert(root);
            stack.push((root, None, self.successors(root)));

            while let Some((u, parent, successors)) = stack.last_mut() {
                let u: &'a N = *u;
                match successors.next() {
                    Some(v) if !visited.contains(v) => {
                        visited.insert(v);
                        stack.push((v, Some(u), self.successors(v)));
                    }
                    Some(v) if Some(v) != *parent => {
                        tracing::debug!(from = ?u, to = ?v, "检测到环");
                        return true;
                    }
                    Some(_) => {}
                    None => {
                        stack.pop();
                    }
                }
            }
        }

        false
    }

    /// 有向环检测（白/灰/黑三色）
    ///
    /// 只有指向灰色节点（仍在当前 DFS 路径上）的边才构成环。
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn has_directed_cycle(&self) -> bool {
        let mut color: BTreeMap<&'a N, Color> = BTreeMap::new();
        let mut stack: Vec<(&'a N, btree_set::Iter<'a, N>)> = Vec::new();

        for root in self.graph.nodes() {
            if color.contains_key(root) {
                continue;
            }
            color.insert(root, Color::Gray);
            stack.push((root, self.successors(root)));

            while let Some((u, successors)) = stack.last_mut() {
                let u: &'a N = *u;
                match successors.next() {
                    Some(v) => match color.get(v) {
                        None => {
                            color.insert(v, Color::Gray);
                            stack.push((v, self.successors(v)));
                        }
                        Some(Color::Gray) => {
                            tracing::debug!(from = ?u, to = ?v, "检测到有向环");
                            return true;
                        }
                        Some(Color::Black) => {}
                    },
                    None => {
                        color.insert(u, Color::Black);
                        stack.pop();
                    }
                }
            }
        }

        false
    }

    /// 连通分量（按发现顺序）
    ///
    /// 按升序遍历节点，每个未访问节点作为新分量的起点做 BFS。
    /// 每个节点恰好出现在一个分量中。
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn connected_components(&self) -> Vec<Vec<N>> {
        let mut visited: BTreeSet<&'a N> = BTreeSet::new();
        let mut components = Vec::new();

        for node in self.graph.nodes() {
            if visited.contains(node) {
                continue;
            }

            let mut component = Vec::new();
            let mut queue = VecDeque::from([node]);
            while let Some(u) = queue.pop_front() {
                if !visited.insert(u) {
                    continue;
                }
                component.push(u.clone());
                queue.extend(self.successors(u).filter(|v| !visited.contains(*v)));
            }
            components.push(component);
        }

        tracing::debug!(components = components.len(), "连通分量计算完成");
        components
    }

    /// 节点是否全部位于同一分量
    pub fn is_connected(&self) -> bool {
        self.connected_components().len() <= 1
    }

    /// 邻接封闭，节点一定存在
    fn successors(&self, node: &N) -> btree_set::Iter<'a, N> {
        let graph: &'a Graph<N> = self.graph;
        match graph.successors(node) {
            Ok(set) => set.iter(),
            Err(_) => btree_set::Iter::default(),
        }
    }
}

//! 图遍历
//!
//! 广度优先与深度优先遍历，邻居总是按升序访问，因此结果是确定的。

use crate::error::{Error, Result};
use crate::graph::{Graph, Node};
use std::collections::{btree_set, BTreeSet, VecDeque};

/// 遍历器
pub struct Traversal<'a, N: Node> {
    graph: &'a Graph<N>,
}

impl<'a, N: Node> Traversal<'a, N> {
    pub fn new(graph: &'a Graph<N>) -> Self {
        Self { graph }
    }

    /// BFS 访问顺序
    ///
    /// 入队时不检查是否已在队列中，同一节点可能多次入队；出队后的 visited 检查保证
    /// 每个节点只输出一次。
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn bfs(&self, start: &N) -> Result<Vec<N>> {
        if !self.graph.contains(start) {
            return Err(Error::node_not_found(start));
        }

        let mut visited = BTreeSet::new();
        let mut queue = VecDeque::from([start.clone()]);
        let mut order = Vec::new();

        while let Some(u) = queue.pop_front() {
            if visited.contains(&u) {
                continue;
            }
            visited.insert(u.clone());
            for v in self.graph.successors(&u)? {
                if !visited.contains(v) {
                    queue.push_back(v.clone());
                }
            }
            order.push(u);
        }

        tracing::trace!(visited = order.len(), "BFS 完成");
        Ok(order)
    }

    /// DFS 可达节点集合
    pub fn dfs(&self, start: &N) -> Result<BTreeSet<N>> {
        let mut visited = BTreeSet::new();
        self.dfs_from(start, &mut visited)?;
        Ok(visited)
    }

    /// DFS 先序访问顺序
    pub fn dfs_order(&self, start: &N) -> Result<Vec<N>> {
        let mut visited = BTreeSet::new();
        self.dfs_from(start, &mut visited)
    }

    /// 在已有的 visited 集合上继续 DFS，返回本次新访问节点的先序顺序
    ///
    /// 如果 `start` 已在 visited 中，仍会从它出发探索其未访问的后继。
    /// 使用显式栈，深度不受调用栈限制；访问顺序与递归版本一致。
    #[tracing::instrument(level = "debug", skip(self, visited))]
    pub fn dfs_from(&self, start: &N, visited: &mut BTreeSet<N>) -> Result<Vec<N>> {
        let mut stack: Vec<btree_set::Iter<'a, N>> = vec![self.graph.successors(start)?.iter()];

        let mut order = Vec::new();
        if visited.insert(start.clone()) {
            order.push(start.clone());
        }

        while let Some(frame) = stack.last_mut() {
            match frame.find(|v| !visited.contains(*v)) {
                Some(v) => {
                    visited.insert(v.clone());
                    order.push(v.clone());
                    stack.push(self.graph.successors(v)?.iter());
                }
                None => {
                    stack.pop();
                }
            }
        }

        Ok(order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diamond() -> Graph<&'static str> {
        Graph::from_lists(vec![
            ("A", vec!["B", "C"]),
            ("B", vec!["D"]),
            ("C", vec!["D"]),
            ("D", vec![]),
        ])
        .unwrap()
    }

    #[test]
    fn test_bfs_diamond() {
        let graph = diamond();
        let order = Traversal::new(&graph).bfs(&"A").unwrap();
        assert_eq!(order, vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn test_bfs_is_deterministic() {
        let graph = diamond();
        let t = Traversal::new(&graph);
        assert_eq!(t.bfs(&"A").unwrap(), t.bfs(&"A").unwrap());
    }

    #[test]
    fn test_bfs_duplicate_enqueue() {
        // D 会在 B 和 C 出队时各入队一次，但只输出一次
        let graph = Graph::from_lists(vec![
            (1, vec![2, 3]),
            (2, vec![4]),
            (3, vec![4]),
            (4, vec![1]),
        ])
        .unwrap();
        let order = Traversal::new(&graph).bfs(&1).unwrap();
        assert_eq!(order, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_bfs_unknown_start() {
        let graph = diamond();
        assert!(matches!(
            Traversal::new(&graph).bfs(&"Z"),
            Err(Error::NodeNotFound(_))
        ));
    }

    #[test]
    fn test_dfs_order_matches_recursive() {
        let graph = Graph::from_lists(vec![
            ('a', vec!['c', 'b']),
            ('b', vec!['d']),
            ('c', vec!['a']),
            ('d', vec!['c']),
        ])
        .unwrap();
        // 递归版本：a -> b -> d -> c
        let order = Traversal::new(&graph).dfs_order(&'a').unwrap();
        assert_eq!(order, vec!['a', 'b', 'd', 'c']);
    }

    #[test]
    fn test_dfs_reachable_set() {
        let graph = diamond();
        let visited = Traversal::new(&graph).dfs(&"B").unwrap();
        assert_eq!(visited.into_iter().collect::<Vec<_>>(), vec!["B", "D"]);
    }

    #[test]
    fn test_dfs_from_existing_visited() {
        let graph = diamond();
        let t = Traversal::new(&graph);
        let mut visited = BTreeSet::from(["C"]);
        let order = t.dfs_from(&"A", &mut visited).unwrap();
        assert_eq!(order, vec!["A", "B", "D"]);
        assert_eq!(visited.len(), 4);
    }

    #[test]
    fn test_dfs_deep_chain() {
        let n = 100_000;
        let graph = Graph::from_lists((0..n).map(|i| {
            let next = if i + 1 < n { vec![i + 1] } else { vec![] };
            (i, next)
        }))
        .unwrap();
        let visited = Traversal::new(&graph).dfs(&0).unwrap();
        assert_eq!(visited.len(), n);
    }
}

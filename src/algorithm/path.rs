//! 路径重构
//!
//! 沿父指针从目标回溯到没有前驱的节点，再反转得到 源 -> 目标 顺序。

use crate::graph::Node;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 路径结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathResult<N> {
    /// 路径上的节点序列（源 -> 目标）
    pub nodes: Vec<N>,
    /// 路径边数
    pub length: usize,
    /// 路径总权重
    pub total_weight: f64,
}

impl<N> PathResult<N> {
    pub(crate) fn new(nodes: Vec<N>, total_weight: f64) -> Self {
        let length = nodes.len().saturating_sub(1);
        Self {
            nodes,
            length,
            total_weight,
        }
    }

    pub fn source(&self) -> Option<&N> {
        self.nodes.first()
    }

    pub fn target(&self) -> Option<&N> {
        self.nodes.last()
    }
}

/// 沿父指针重构路径
///
/// 目标不可达时父链立即终止，结果只有目标自身；目标不在映射中时结果为空。
/// 调用方应先通过距离（非无穷）确认可达。
pub fn reconstruct_path<N: Node>(parents: &BTreeMap<N, Option<N>>, target: &N) -> Vec<N> {
    let mut path = Vec::new();
    let mut current = match parents.get_key_value(target) {
        Some((node, _)) => node,
        None => return path,
    };

    // 父链长度不会超过节点数
    for _ in 0..parents.len() {
        path.push(current.clone());
        match parents.get(current) {
            Some(Some(prev)) => current = prev,
            _ => break,
        }
    }

    path.reverse();
    path
}

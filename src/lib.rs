//! GraphAlgo - 经典图算法库
//!
//! 在小规模、显式表示的图上提供：
//! - 广度优先 / 深度优先遍历
//! - 环检测与连通分量
//! - 单源最短路径（Dijkstra、Bellman-Ford 负权环检测）
//! - 最大流（Ford-Fulkerson、Edmonds-Karp）
//!
//! 调用方先由节点列表和矩阵构建 [`GraphStore`]，再独立调用各算法。

pub mod algorithm;
pub mod error;
pub mod graph;
pub mod import;

// 重导出常用类型
pub use algorithm::{
    BellmanFord, BellmanFordOutcome, Connectivity, Dijkstra, EdmondsKarp, FordFulkerson, MaxFlow,
    ShortestPaths, Traversal,
};
pub use error::{Error, Result};
pub use graph::{CapacityMatrix, Direction, Edge, Graph, GraphCatalog, GraphStore, Node, WeightedGraph};

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

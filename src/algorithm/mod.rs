//! 图算法模块
//!
//! 包含遍历、连通性、最短路径和最大流算法。各算法只读取图，
//! 每次调用自行分配工作状态并返回独立的结果。

mod connectivity;
mod max_flow;
mod path;
mod shortest_path;
mod traversal;

pub use connectivity::Connectivity;
pub use max_flow::{
    AugmentingPathSearch, BreadthFirst, DepthFirst, EdmondsKarp, FlowSolver, FordFulkerson,
    MaxFlow, ResidualNetwork,
};
pub use path::{reconstruct_path, PathResult};
pub use shortest_path::{BellmanFord, BellmanFordOutcome, Dijkstra, ShortestPaths};
pub use traversal::Traversal;

//! 图核心模块
//!
//! 定义节点、无权图、带权图、容量矩阵，以及从原始矩阵构建它们的 [`GraphStore`]

mod adjacency;
mod capacity;
mod catalog;
mod node;
mod store;
mod weighted;

pub use adjacency::Graph;
pub use capacity::CapacityMatrix;
pub use catalog::GraphCatalog;
pub use node::Node;
pub use store::GraphStore;
pub use weighted::{Direction, Edge, WeightedGraph};

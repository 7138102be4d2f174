//! 错误类型定义

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("节点不存在: {0}")]
    NodeNotFound(String),

    #[error("节点重复: {0}")]
    DuplicateNode(String),

    #[error("后继节点 {successor} 不是图中的节点 (来自 {node})")]
    DanglingSuccessor { node: String, successor: String },

    #[error("无效的矩阵: {0}")]
    InvalidMatrix(String),

    #[error("Dijkstra 不支持负权边: {from} -> {to} (权重 {weight})")]
    NegativeWeight {
        from: String,
        to: String,
        weight: f64,
    },

    #[error("无效的容量: [{row}][{col}] = {capacity}")]
    InvalidCapacity { row: usize, col: usize, capacity: f64 },

    #[error("索引越界: {index} (节点数 {len})")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("图不存在: {0}")]
    GraphNotFound(String),

    #[error("导入错误: {0}")]
    ImportError(String),

    #[error("IO 错误: {0}")]
    IoError(#[from] std::io::Error),

    #[error("序列化错误: {0}")]
    SerializationError(String),
}

impl Error {
    /// 以 Debug 格式构造节点不存在错误
    pub fn node_not_found<N: std::fmt::Debug>(node: &N) -> Self {
        Error::NodeNotFound(format!("{:?}", node))
    }
}

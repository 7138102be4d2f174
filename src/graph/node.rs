//! 节点标识
//!
//! 节点是不透明且全序的标识符。遍历顺序依赖这个全序：邻居总是按升序访问。

use std::fmt::Debug;

/// 图节点
///
/// 任何满足 `Ord + Clone + Debug` 的类型都可以作为节点，例如 `&str`、`char`、
/// `String` 或整数。
pub trait Node: Ord + Clone + Debug {}

impl<T: Ord + Clone + Debug> Node for T {}

//! 容量矩阵
//!
//! 以整数下标索引的方阵，`matrix[u][v]` 是有向边 u -> v 的容量，0 表示无边。

use crate::error::{Error, Result};
use serde::Serialize;

/// 流网络的容量矩阵
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CapacityMatrix {
    rows: Vec<Vec<f64>>,
}

impl CapacityMatrix {
    /// 创建容量矩阵，校验方阵形状以及容量非负且有限
    pub fn new(rows: Vec<Vec<f64>>) -> Result<Self> {
        let n = rows.len();
        for (row_index, row) in rows.iter().enumerate() {
            if row.len() != n {
                return Err(Error::InvalidMatrix(format!(
                    "第 {} 行长度为 {}, 期望 {}",
                    row_index,
                    row.len(),
                    n
                )));
            }
            for (col, &capacity) in row.iter().enumerate() {
                if !capacity.is_finite() || capacity < 0.0 {
                    return Err(Error::InvalidCapacity {
                        row: row_index,
                        col,
                        capacity,
                    });
                }
            }
        }
        Ok(Self { rows })
    }

    /// 节点数量
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// 边 u -> v 的容量；下标越界时为 None
    pub fn capacity(&self, u: usize, v: usize) -> Option<f64> {
        self.rows.get(u)?.get(v).copied()
    }

    /// 校验下标合法
    pub fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.len() {
            return Err(Error::IndexOutOfBounds {
                index,
                len: self.len(),
            });
        }
        Ok(())
    }

    /// 所有容量为正的边 (u, v, capacity)
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        self.rows.iter().enumerate().flat_map(|(u, row)| {
            row.iter()
                .enumerate()
                .filter(|&(_, &c)| c > 0.0)
                .map(move |(v, &c)| (u, v, c))
        })
    }

    pub(crate) fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_ragged() {
        let err = CapacityMatrix::new(vec![vec![0.0, 1.0], vec![0.0]]).unwrap_err();
        assert!(matches!(err, Error::InvalidMatrix(_)));
    }

    #[test]
    fn test_rejects_negative_capacity() {
        let err = CapacityMatrix::new(vec![vec![0.0, -1.0], vec![0.0, 0.0]]).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidCapacity { row: 0, col: 1, .. }
        ));
    }

    #[test]
    fn test_rejects_nan() {
        assert!(CapacityMatrix::new(vec![vec![f64::NAN]]).is_err());
    }

    #[test]
    fn test_edges() {
        let m = CapacityMatrix::new(vec![vec![0.0, 3.0], vec![2.0, 0.0]]).unwrap();
        let edges: Vec<_> = m.edges().collect();
        assert_eq!(edges, vec![(0, 1, 3.0), (1, 0, 2.0)]);
        assert!(m.check_index(2).is_err());
        assert_eq!(m.capacity(1, 0), Some(2.0));
        assert_eq!(m.capacity(0, 2), None);
    }
}

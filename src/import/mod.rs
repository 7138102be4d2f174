//! 图描述导入模块
//!
//! 解析 JSON 图描述文件：
//!
//! ```json
//! { "graphs": [ { "id": "G1", "nodes": ["A", "B"], "matrix": [[0, 1], [0, 0]] } ] }
//! ```
//!
//! 无权图使用 0/1 矩阵，带权图与容量网络使用带符号数值矩阵。

use crate::error::{Error, Result};
use serde::{Deserialize, Deserializer, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// 单个图的描述
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphDescription {
    #[serde(deserialize_with = "deserialize_label")]
    pub id: String,
    #[serde(deserialize_with = "deserialize_labels")]
    pub nodes: Vec<String>,
    pub matrix: Vec<Vec<f64>>,
}

/// 图描述文件
#[derive(Debug, Serialize, Deserialize)]
struct GraphFile {
    graphs: Vec<GraphDescription>,
}

/// 标签既可以写成字符串也可以写成数字
#[derive(Deserialize)]
#[serde(untagged)]
enum Label {
    Text(String),
    Number(serde_json::Number),
}

impl From<Label> for String {
    fn from(label: Label) -> Self {
        match label {
            Label::Text(s) => s,
            Label::Number(n) => n.to_string(),
        }
    }
}

fn deserialize_label<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<String, D::Error> {
    Label::deserialize(deserializer).map(String::from)
}

fn deserialize_labels<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> std::result::Result<Vec<String>, D::Error> {
    let labels = Vec::<Label>::deserialize(deserializer)?;
    Ok(labels.into_iter().map(String::from).collect())
}

/// 解析 JSON 文本
pub fn parse_graph_file(json: &str) -> Result<Vec<GraphDescription>> {
    let file: GraphFile = serde_json::from_str(json)
        .map_err(|e| Error::SerializationError(format!("JSON 解析错误: {}", e)))?;
    tracing::debug!(graphs = file.graphs.len(), "解析图描述");
    Ok(file.graphs)
}

/// 读取 JSON 图描述文件
pub fn read_graph_file<P: AsRef<Path>>(path: P) -> Result<Vec<GraphDescription>> {
    let path = path.as_ref();
    let file = File::open(path)
        .map_err(|e| Error::ImportError(format!("无法打开 {:?}: {}", path, e)))?;
    let parsed: GraphFile = serde_json::from_reader(BufReader::new(file))
        .map_err(|e| Error::SerializationError(format!("JSON 解析错误: {}", e)))?;
    tracing::debug!(path = ?path, graphs = parsed.graphs.len(), "读取图描述文件");
    Ok(parsed.graphs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_numeric_labels() {
        let json = r#"{"graphs": [{"id": 7, "nodes": [1, "b"], "matrix": [[0, 1.5], [-2, 0]]}]}"#;
        let graphs = parse_graph_file(json).unwrap();

        assert_eq!(graphs.len(), 1);
        assert_eq!(graphs[0].id, "7");
        assert_eq!(graphs[0].nodes, vec!["1", "b"]);
        assert_eq!(graphs[0].matrix[1][0], -2.0);
    }

    #[test]
    fn test_parse_malformed() {
        assert!(matches!(
            parse_graph_file(r#"{"graphs": [{"id": "x"}]}"#),
            Err(Error::SerializationError(_))
        ));
    }

    #[test]
    fn test_read_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"{{"graphs": [{{"id": "G1", "nodes": ["A", "B"], "matrix": [[0, 1], [1, 0]]}}]}}"#
        )
        .unwrap();

        let graphs = read_graph_file(file.path()).unwrap();
        assert_eq!(graphs[0].id, "G1");
        assert_eq!(graphs[0].matrix, vec![vec![0.0, 1.0], vec![1.0, 0.0]]);
    }

    #[test]
    fn test_read_missing_file() {
        assert!(matches!(
            read_graph_file("/nonexistent/graphalgo/matrice.json"),
            Err(Error::ImportError(_))
        ));
    }
}

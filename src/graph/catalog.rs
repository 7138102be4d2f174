//! Graph catalog for named graphs
//!
//! Keeps every graph of a description file under its id, in file order.

use super::store::GraphStore;
use crate::error::{Error, Result};
use crate::import::{self, GraphDescription};
use indexmap::IndexMap;
use std::path::Path;

/// GraphCatalog maps graph ids to their immutable stores.
#[derive(Debug, Clone, Default)]
pub struct GraphCatalog {
    graphs: IndexMap<String, GraphStore<String>>,
}

impl GraphCatalog {
    /// Build a catalog from parsed descriptions. Fails on a duplicate id.
    pub fn from_descriptions(descriptions: Vec<GraphDescription>) -> Result<Self> {
        let mut graphs = IndexMap::with_capacity(descriptions.len());
        for desc in descriptions {
            if graphs.contains_key(&desc.id) {
                return Err(Error::ImportError(format!("图 '{}' 重复定义", desc.id)));
            }
            let store = GraphStore::new(desc.nodes, desc.matrix)?;
            graphs.insert(desc.id, store);
        }
        Ok(Self { graphs })
    }

    /// Parse a catalog from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Self::from_descriptions(import::parse_graph_file(json)?)
    }

    /// Load a catalog from a JSON description file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_descriptions(import::read_graph_file(path)?)
    }

    /// Get a graph by id.
    pub fn get(&self, name: &str) -> Result<&GraphStore<String>> {
        self.graphs
            .get(name)
            .ok_or_else(|| Error::GraphNotFound(name.to_string()))
    }

    /// List graph ids in file order.
    pub fn list_graphs(&self) -> Vec<&str> {
        self.graphs.keys().map(String::as_str).collect()
    }

    /// Iterate (id, store) pairs in file order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &GraphStore<String>)> {
        self.graphs.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.graphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.graphs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG: &str = r#"{
        "graphs": [
            {"id": "g2", "nodes": ["A", "B"], "matrix": [[0, 1], [0, 0]]},
            {"id": "g1", "nodes": ["X"], "matrix": [[0]]}
        ]
    }"#;

    #[test]
    fn test_catalog_keeps_file_order() {
        let catalog = GraphCatalog::from_json_str(CATALOG).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.list_graphs(), vec!["g2", "g1"]);
        assert_eq!(catalog.get("g2").unwrap().node_count(), 2);
    }

    #[test]
    fn test_catalog_unknown_graph() {
        let catalog = GraphCatalog::from_json_str(CATALOG).unwrap();
        assert!(matches!(catalog.get("nope"), Err(Error::GraphNotFound(_))));
    }

    #[test]
    fn test_load_sample_file() {
        use crate::algorithm::{BellmanFord, EdmondsKarp, FordFulkerson, Traversal};
        use crate::graph::Direction;

        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/matrice.json");
        let catalog = GraphCatalog::load(path).unwrap();
        assert_eq!(catalog.list_graphs(), vec!["G1", "G2", "flow", "negative"]);

        let a = "A".to_string();
        let g1 = catalog.get("G1").unwrap().graph();
        assert_eq!(Traversal::new(&g1).bfs(&a).unwrap(), vec!["A", "B", "C", "D"]);

        let flow = catalog.get("flow").unwrap();
        let capacity = flow.capacities().unwrap();
        let (s, t) = (flow.index_of(&a).unwrap(), flow.index_of(&"D".to_string()).unwrap());
        assert_eq!(FordFulkerson::new(&capacity).max_flow(s, t).unwrap().value, 4.0);
        assert_eq!(EdmondsKarp::new(&capacity).max_flow(s, t).unwrap().value, 4.0);

        let negative = catalog.get("negative").unwrap().weighted(Direction::Directed);
        let outcome = BellmanFord::from_graph(&negative).run(&a).unwrap();
        assert!(outcome.has_negative_cycle());
    }

    #[test]
    fn test_catalog_duplicate_id() {
        let json = r#"{"graphs": [
            {"id": "g", "nodes": [], "matrix": []},
            {"id": "g", "nodes": [], "matrix": []}
        ]}"#;
        assert!(matches!(
            GraphCatalog::from_json_str(json),
            Err(Error::ImportError(_))
        ));
    }
}

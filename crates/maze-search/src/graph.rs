//! Undirected adjacency-list graph built from a maze edge list.
//!
//! Neighbor lists keep edge-insertion order. Searches expand neighbors in
//! exactly this order, so the edge list fully determines which path is found.

use std::collections::HashMap;

use smallvec::SmallVec;
use tracing::debug;

use crate::error::{MazeError, Result};

/// Neighbors of a single node, in insertion order.
/// Most maze cells have at most four corridors.
pub type Neighbors = SmallVec<[String; 4]>;

/// Immutable adjacency structure: node id -> ordered neighbor ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    adjacency: HashMap<String, Neighbors>,
    edge_count: usize,
}

impl Graph {
    /// Build a graph from raw edge entries as they appear in a maze document.
    ///
    /// Every entry must hold exactly two node identifiers. The first entry
    /// that does not fails the whole build with [`MazeError::MalformedEdge`].
    /// Duplicate edges are kept and produce duplicate neighbor entries.
    pub fn build(edges: &[Vec<String>]) -> Result<Self> {
        let mut graph = Graph::default();

        for (index, edge) in edges.iter().enumerate() {
            match edge.as_slice() {
                [a, b] => graph.add_edge(a.clone(), b.clone()),
                _ => {
                    return Err(MazeError::MalformedEdge {
                        index,
                        len: edge.len(),
                    })
                }
            }
        }

        debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "graph built"
        );
        Ok(graph)
    }

    /// Build a graph from typed `(a, b)` pairs. Cannot fail.
    pub fn from_pairs<I, A, B>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (A, B)>,
        A: Into<String>,
        B: Into<String>,
    {
        let mut graph = Graph::default();
        for (a, b) in pairs {
            graph.add_edge(a.into(), b.into());
        }
        graph
    }

    fn add_edge(&mut self, a: String, b: String) {
        self.adjacency
            .entry(a.clone())
            .or_default()
            .push(b.clone());
        self.adjacency.entry(b).or_default().push(a);
        self.edge_count += 1;
    }

    /// Neighbors of `node` in insertion order. Unknown nodes have none.
    pub fn neighbors(&self, node: &str) -> &[String] {
        self.adjacency
            .get(node)
            .map(|n| n.as_slice())
            .unwrap_or(&[])
    }

    /// Whether `node` appears in at least one edge
    pub fn contains(&self, node: &str) -> bool {
        self.adjacency.contains_key(node)
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of edges added, duplicates included
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Iterate over all node ids (unordered)
    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.adjacency.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }
}

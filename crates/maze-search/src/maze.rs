//! Maze document types matching the JSON maze format.
//!
//! A maze file looks like:
//!
//! ```json
//! {
//!   "nodes": { "A": { "c": 0, "r": 0 }, "B": { "c": 1, "r": 0 } },
//!   "edges": [["A", "B"]],
//!   "start": "A",
//!   "goal": "B"
//! }
//! ```
//!
//! Node positions are only used for rendering; search needs the edge list
//! plus start and goal.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::error::{MazeError, Result};
use crate::graph::Graph;

/// Display position of a node: column and row
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NodePosition {
    pub c: f64,
    pub r: f64,
}

impl NodePosition {
    pub fn new(c: f64, r: f64) -> Self {
        Self { c, r }
    }
}

/// The complete maze configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MazeConfig {
    #[serde(default)]
    pub nodes: HashMap<String, NodePosition>,
    /// Raw edge entries. Each should hold exactly two node ids; this is
    /// checked when the graph is built, not when the document is parsed.
    pub edges: Vec<Vec<String>>,
    pub start: String,
    pub goal: String,
}

impl MazeConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| MazeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Build the search graph from this maze's edge list
    pub fn build_graph(&self) -> Result<Graph> {
        Graph::build(&self.edges)
    }

    /// Get the display position of a node, if the document has one
    pub fn position(&self, node: &str) -> Option<NodePosition> {
        self.nodes.get(node).copied()
    }

    /// Shuffle the edge list in place. See [`shuffle_edges`].
    pub fn shuffle_edges(&mut self, seed: u64) {
        shuffle_edges(&mut self.edges, seed);
    }
}

/// Shuffle edges with a seeded RNG.
///
/// Neighbor order follows edge order, so this changes which path DFS finds
/// while keeping the result reproducible for a given seed.
pub fn shuffle_edges<T>(edges: &mut [T], seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    edges.shuffle(&mut rng);
}

//! Maze path search library.
//!
//! Builds an undirected graph from a maze's edge list and finds a path
//! between start and goal with depth-first or breadth-first search.

pub mod error;
pub mod graph;
pub mod maze;
pub mod render;
pub mod report;
pub mod search;

// Re-export main types
pub use error::{MazeError, Result};
pub use graph::{Graph, Neighbors};
pub use maze::{shuffle_edges, MazeConfig, NodePosition};
pub use render::render;
pub use report::{RunReport, SearchReport};
pub use search::{
    breadth_first_search, depth_first_search, reconstruct_path, search, SearchResult,
    SearchStatus, Strategy,
};

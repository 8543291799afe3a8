//! Error types for maze loading and graph construction.
//!
//! Search outcomes such as "no path" or "unknown start node" are not errors;
//! they are reported through [`crate::search::SearchStatus`].

use std::path::PathBuf;

/// Failures that prevent a graph from being built.
#[derive(Debug, thiserror::Error)]
pub enum MazeError {
    /// An edge entry did not hold exactly two node identifiers
    #[error("malformed edge at index {index}: expected 2 node identifiers, found {len}")]
    MalformedEdge { index: usize, len: usize },

    #[error("invalid maze document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("failed to read maze file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, MazeError>;

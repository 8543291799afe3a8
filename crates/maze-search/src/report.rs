//! Serializable summaries of search runs, printed by the CLI.

use std::fmt;

use serde::Serialize;

use crate::search::{SearchResult, SearchStatus, Strategy};

/// Summary of one search
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchReport {
    pub algorithm: Strategy,
    pub status: SearchStatus,
    pub path: Vec<String>,
    /// Nodes on the path, start and goal included
    pub path_length: usize,
    pub nodes_visited: usize,
    pub time_elapsed_us: f64,
}

impl From<&SearchResult> for SearchReport {
    fn from(result: &SearchResult) -> Self {
        Self {
            algorithm: result.strategy,
            status: result.status,
            path: result.path.clone(),
            path_length: result.path_len(),
            nodes_visited: result.visited,
            time_elapsed_us: result.elapsed.as_secs_f64() * 1_000_000.0,
        }
    }
}

impl SearchReport {
    pub fn found(&self) -> bool {
        self.status == SearchStatus::Found
    }
}

impl fmt::Display for SearchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status {
            SearchStatus::Found => {
                writeln!(
                    f,
                    "Resultant path found by {}: [{}]",
                    self.algorithm,
                    self.path.join(", ")
                )?;
                write!(
                    f,
                    "{} found the path in {:.3} micro seconds, and visited {} nodes. \
                     The final path is {} nodes long.",
                    self.algorithm, self.time_elapsed_us, self.nodes_visited, self.path_length
                )
            }
            SearchStatus::Exhausted => write!(f, "{} did not find the path.", self.algorithm),
            SearchStatus::UnknownNode => write!(
                f,
                "{} did not find the path: start or goal is not in the maze.",
                self.algorithm
            ),
        }
    }
}

/// Summary of a full CLI run over one maze
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunReport {
    pub start: String,
    pub goal: String,
    pub node_count: usize,
    pub edge_count: usize,
    /// Seed used to shuffle the edge list, if it was shuffled
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shuffle_seed: Option<u64>,
    pub searches: Vec<SearchReport>,
}

impl RunReport {
    /// True when every search reached the goal
    pub fn all_found(&self) -> bool {
        self.searches.iter().all(SearchReport::found)
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Maze: {} nodes, {} edges, start {}, goal {}",
            self.node_count, self.edge_count, self.start, self.goal
        )?;
        if let Some(seed) = self.shuffle_seed {
            write!(f, " (edges shuffled, seed {})", seed)?;
        }
        for search in &self.searches {
            write!(f, "\n\n{}", search)?;
        }
        Ok(())
    }
}

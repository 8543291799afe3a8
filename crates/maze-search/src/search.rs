//! Uninformed path search: depth-first and breadth-first.
//!
//! Both strategies share one loop and differ only in which end of the
//! frontier is popped. Nodes are marked visited when first discovered, and
//! the discovering node is recorded as the parent. When the goal is popped
//! the parent chain is walked back to the start.
//!
//! Each call owns its frontier, visited set and parent map, so searches over
//! the same [`Graph`] can run concurrently without synchronization.

use std::collections::{HashMap, HashSet, VecDeque};
use std::fmt;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::graph::Graph;

/// Frontier discipline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Strategy {
    /// LIFO frontier. Finds a path, not necessarily a shortest one.
    #[serde(rename = "dfs")]
    DepthFirst,
    /// FIFO frontier. Finds a path with the fewest edges.
    #[serde(rename = "bfs")]
    BreadthFirst,
}

impl Strategy {
    pub fn name(self) -> &'static str {
        match self {
            Strategy::DepthFirst => "DFS",
            Strategy::BreadthFirst => "BFS",
        }
    }

    fn pop<'a>(self, frontier: &mut VecDeque<&'a str>) -> Option<&'a str> {
        match self {
            Strategy::DepthFirst => frontier.pop_back(),
            Strategy::BreadthFirst => frontier.pop_front(),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How a search ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchStatus {
    /// Goal reached
    Found,
    /// Frontier emptied before reaching the goal
    Exhausted,
    /// Start or goal does not appear in the graph
    UnknownNode,
}

/// Result of a single search run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub strategy: Strategy,
    pub status: SearchStatus,
    /// Start to goal inclusive. Empty unless `status` is `Found`.
    pub path: Vec<String>,
    /// Wall-clock time spent in the search, measured for every outcome
    pub elapsed: Duration,
    /// Distinct nodes marked visited. Reported as 0 when no path was found.
    pub visited: usize,
}

impl SearchResult {
    pub fn is_found(&self) -> bool {
        self.status == SearchStatus::Found
    }

    /// Number of nodes on the path
    pub fn path_len(&self) -> usize {
        self.path.len()
    }

    /// Number of edges traversed along the path
    pub fn edge_count(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Search with a LIFO frontier
pub fn depth_first_search(graph: &Graph, start: &str, goal: &str) -> SearchResult {
    search(graph, start, goal, Strategy::DepthFirst)
}

/// Search with a FIFO frontier
pub fn breadth_first_search(graph: &Graph, start: &str, goal: &str) -> SearchResult {
    search(graph, start, goal, Strategy::BreadthFirst)
}

/// Find a path from `start` to `goal`.
///
/// Neighbors are expanded in the graph's insertion order, so the returned
/// path is deterministic for a given graph.
pub fn search(graph: &Graph, start: &str, goal: &str, strategy: Strategy) -> SearchResult {
    let start_time = Instant::now();

    // A node is always reachable from itself, even if no edge mentions it
    if start == goal {
        return finish(
            strategy,
            start_time,
            SearchStatus::Found,
            vec![start.to_string()],
            1,
        );
    }

    if !graph.contains(start) || !graph.contains(goal) {
        warn!(%strategy, start, goal, "start or goal is not in the graph");
        return finish(strategy, start_time, SearchStatus::UnknownNode, Vec::new(), 0);
    }

    let mut frontier: VecDeque<&str> = VecDeque::new();
    frontier.push_back(start);
    let mut visited: HashSet<&str> = HashSet::new();
    visited.insert(start);
    let mut parents: HashMap<&str, Option<&str>> = HashMap::new();
    parents.insert(start, None);

    while let Some(current) = strategy.pop(&mut frontier) {
        if current == goal {
            let path = reconstruct_path(&parents, goal);
            return finish(
                strategy,
                start_time,
                SearchStatus::Found,
                path,
                visited.len(),
            );
        }

        for neighbor in graph.neighbors(current) {
            if visited.insert(neighbor.as_str()) {
                parents.insert(neighbor.as_str(), Some(current));
                frontier.push_back(neighbor.as_str());
            }
        }
    }

    finish(strategy, start_time, SearchStatus::Exhausted, Vec::new(), 0)
}

fn finish(
    strategy: Strategy,
    start_time: Instant,
    status: SearchStatus,
    path: Vec<String>,
    visited: usize,
) -> SearchResult {
    let elapsed = start_time.elapsed();
    debug!(
        %strategy,
        ?status,
        visited,
        path_len = path.len(),
        elapsed_us = elapsed.as_micros() as u64,
        "search finished"
    );
    SearchResult {
        strategy,
        status,
        path,
        elapsed,
        visited,
    }
}

/// Walk parent links from `goal` back to the root and return the path
/// root-first.
///
/// The root is the node whose parent is `None`. A node missing from the map
/// is treated as a root. Parents are assigned once, at first discovery, so
/// the chain is acyclic and the walk takes at most `parents.len()` steps.
pub fn reconstruct_path(parents: &HashMap<&str, Option<&str>>, goal: &str) -> Vec<String> {
    let mut path = Vec::new();
    let mut current = Some(goal);

    while let Some(node) = current {
        path.push(node.to_string());
        current = parents.get(node).copied().flatten();
        debug_assert!(path.len() <= parents.len() + 1, "cycle in parent map");
    }

    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Graph {
        Graph::from_pairs([("A", "B"), ("B", "C"), ("A", "C")])
    }

    /// Two routes from A to G. A's neighbor order is [C, B], so DFS dives
    /// into the long branch through B while BFS finds the short one via C.
    fn two_routes() -> Graph {
        Graph::from_pairs([
            ("A", "C"),
            ("A", "B"),
            ("C", "G"),
            ("B", "D"),
            ("D", "E"),
            ("E", "G"),
        ])
    }

    /// `size` x `size` grid with 4-neighbour corridors, nodes named "row,col"
    fn grid(size: usize) -> Graph {
        let mut pairs = Vec::new();
        for row in 0..size {
            for col in 0..size {
                if col + 1 < size {
                    pairs.push((format!("{},{}", row, col), format!("{},{}", row, col + 1)));
                }
                if row + 1 < size {
                    pairs.push((format!("{},{}", row, col), format!("{},{}", row + 1, col)));
                }
            }
        }
        Graph::from_pairs(pairs)
    }

    #[test]
    fn test_triangle_paths() {
        let graph = triangle();

        let bfs = breadth_first_search(&graph, "A", "C");
        assert_eq!(bfs.status, SearchStatus::Found);
        assert_eq!(bfs.path, ["A", "C"]);
        assert_eq!(bfs.visited, 3);

        // LIFO pops C (pushed last) right after expanding A
        let dfs = depth_first_search(&graph, "A", "C");
        assert_eq!(dfs.path, ["A", "C"]);
        assert_eq!(dfs.visited, 3);
    }

    #[test]
    fn test_dfs_follows_lifo_order() {
        let graph = two_routes();

        let dfs = depth_first_search(&graph, "A", "G");
        assert_eq!(dfs.path, ["A", "B", "D", "E", "G"]);
        assert_eq!(dfs.visited, 6);
        assert_eq!(dfs.edge_count(), 4);
    }

    #[test]
    fn test_bfs_finds_fewest_edges() {
        let graph = two_routes();

        let bfs = breadth_first_search(&graph, "A", "G");
        assert_eq!(bfs.path, ["A", "C", "G"]);
        assert_eq!(bfs.visited, 5);
        assert_eq!(bfs.edge_count(), 2);
    }

    #[test]
    fn test_bfs_optimal_on_grid() {
        for size in [2, 3, 5, 8] {
            let graph = grid(size);
            let goal = format!("{},{}", size - 1, size - 1);

            let bfs = breadth_first_search(&graph, "0,0", &goal);
            let dfs = depth_first_search(&graph, "0,0", &goal);

            assert_eq!(bfs.edge_count(), 2 * (size - 1));
            assert!(dfs.is_found());
            assert!(dfs.edge_count() >= bfs.edge_count());
        }
    }

    #[test]
    fn test_path_is_connected() {
        let graph = grid(6);
        for strategy in [Strategy::DepthFirst, Strategy::BreadthFirst] {
            let result = search(&graph, "0,5", "5,0", strategy);
            assert_eq!(result.path.first().map(String::as_str), Some("0,5"));
            assert_eq!(result.path.last().map(String::as_str), Some("5,0"));
            for step in result.path.windows(2) {
                assert!(graph.neighbors(&step[0]).contains(&step[1]));
            }
        }
    }

    #[test]
    fn test_start_equals_goal() {
        let graph = triangle();
        for strategy in [Strategy::DepthFirst, Strategy::BreadthFirst] {
            let result = search(&graph, "B", "B", strategy);
            assert_eq!(result.status, SearchStatus::Found);
            assert_eq!(result.path, ["B"]);
            assert_eq!(result.visited, 1);
            assert_eq!(result.edge_count(), 0);
        }

        // Not in any edge, still trivially reachable
        let lonely = search(&graph, "Q", "Q", Strategy::BreadthFirst);
        assert_eq!(lonely.path, ["Q"]);
    }

    #[test]
    fn test_unreachable_goal() {
        let graph = Graph::from_pairs([("A", "B"), ("C", "D")]);
        for strategy in [Strategy::DepthFirst, Strategy::BreadthFirst] {
            let outer = Instant::now();
            let result = search(&graph, "A", "D", strategy);
            let bound = outer.elapsed();
            assert_eq!(result.status, SearchStatus::Exhausted);
            assert!(result.path.is_empty());
            assert_eq!(result.visited, 0);
            // Measured, not a placeholder
            assert!(result.elapsed.as_secs_f64().is_finite());
            assert!(result.elapsed <= bound);
        }
    }

    #[test]
    fn test_unknown_goal_is_not_a_fault() {
        let graph = Graph::from_pairs([("A", "B")]);
        for strategy in [Strategy::DepthFirst, Strategy::BreadthFirst] {
            let result = search(&graph, "A", "Z", strategy);
            assert_eq!(result.status, SearchStatus::UnknownNode);
            assert!(result.path.is_empty());
            assert_eq!(result.visited, 0);

            let result = search(&graph, "Z", "A", strategy);
            assert_eq!(result.status, SearchStatus::UnknownNode);
        }
    }

    #[test]
    fn test_no_path_distinct_from_trivial_path() {
        let graph = Graph::from_pairs([("A", "B")]);
        let trivial = breadth_first_search(&graph, "A", "A");
        let missing = breadth_first_search(&graph, "A", "Z");

        assert!(trivial.is_found());
        assert!(!missing.is_found());
        assert_ne!(trivial.path, missing.path);
    }

    #[test]
    fn test_search_is_deterministic() {
        let graph = grid(7);
        for strategy in [Strategy::DepthFirst, Strategy::BreadthFirst] {
            let first = search(&graph, "0,0", "6,3", strategy);
            let second = search(&graph, "0,0", "6,3", strategy);
            assert_eq!(first.path, second.path);
            assert_eq!(first.visited, second.visited);
        }
    }

    #[test]
    fn test_reconstruct_path() {
        let mut parents: HashMap<&str, Option<&str>> = HashMap::new();
        parents.insert("A", None);
        parents.insert("B", Some("A"));
        parents.insert("C", Some("B"));
        parents.insert("X", Some("A"));

        assert_eq!(reconstruct_path(&parents, "C"), ["A", "B", "C"]);
        assert_eq!(reconstruct_path(&parents, "A"), ["A"]);
    }
}

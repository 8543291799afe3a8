//! Text rendering of a maze and an optional solution path.
//!
//! Node `(c, r)` positions are rounded and laid out on a character canvas at
//! twice their spacing, leaving room between nodes for corridor glyphs.
//! Horizontal and vertical corridors between neighbouring grid positions are
//! drawn; diagonal ones are skipped.
//!
//! Glyphs: `o` node, `*` node on the path, `S` start, `G` goal, `-`/`|` corridor.

use std::collections::HashSet;

use crate::maze::MazeConfig;

/// Largest canvas we are willing to allocate
pub const MAX_CANVAS_CELLS: usize = 1 << 20;

struct Canvas {
    cells: Vec<Vec<char>>,
    min_c: i64,
    min_r: i64,
}

impl Canvas {
    fn cell(&self, c: i64, r: i64) -> (usize, usize) {
        (((r - self.min_r) * 2) as usize, ((c - self.min_c) * 2) as usize)
    }

    fn put(&mut self, row: usize, col: usize, glyph: char) {
        if let Some(cell) = self.cells.get_mut(row).and_then(|r| r.get_mut(col)) {
            *cell = glyph;
        }
    }

    fn into_string(self) -> String {
        self.cells
            .into_iter()
            .map(|row| row.into_iter().collect::<String>().trim_end().to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn grid_position(maze: &MazeConfig, node: &str) -> Option<(i64, i64)> {
    maze.position(node)
        .filter(|p| p.c.is_finite() && p.r.is_finite())
        .map(|p| (p.c.round() as i64, p.r.round() as i64))
}

/// Draw the maze, marking `path` if it is non-empty.
///
/// Returns `None` when the maze has no positioned nodes or would need more
/// than [`MAX_CANVAS_CELLS`] cells.
pub fn render(maze: &MazeConfig, path: &[String]) -> Option<String> {
    let positions: Vec<(i64, i64)> = maze
        .nodes
        .keys()
        .filter_map(|id| grid_position(maze, id))
        .collect();

    let min_c = positions.iter().map(|p| p.0).min()?;
    let max_c = positions.iter().map(|p| p.0).max()?;
    let min_r = positions.iter().map(|p| p.1).min()?;
    let max_r = positions.iter().map(|p| p.1).max()?;

    let span = |min: i64, max: i64| -> Option<usize> {
        let cells = max.checked_sub(min)?.checked_mul(2)?.checked_add(1)?;
        usize::try_from(cells).ok()
    };
    let width = span(min_c, max_c)?;
    let height = span(min_r, max_r)?;
    if width.checked_mul(height)? > MAX_CANVAS_CELLS {
        return None;
    }

    let mut canvas = Canvas {
        cells: vec![vec![' '; width]; height],
        min_c,
        min_r,
    };

    for edge in &maze.edges {
        let [a, b] = edge.as_slice() else {
            continue;
        };
        let (Some((ca, ra)), Some((cb, rb))) = (grid_position(maze, a), grid_position(maze, b))
        else {
            continue;
        };

        let (row_a, col_a) = canvas.cell(ca, ra);
        let (row_b, col_b) = canvas.cell(cb, rb);
        if row_a == row_b {
            for col in col_a.min(col_b) + 1..col_a.max(col_b) {
                canvas.put(row_a, col, '-');
            }
        } else if col_a == col_b {
            for row in row_a.min(row_b) + 1..row_a.max(row_b) {
                canvas.put(row, col_a, '|');
            }
        }
    }

    let on_path: HashSet<&str> = path.iter().map(String::as_str).collect();
    for id in maze.nodes.keys() {
        let Some((c, r)) = grid_position(maze, id) else {
            continue;
        };
        let glyph = if *id == maze.start {
            'S'
        } else if *id == maze.goal {
            'G'
        } else if on_path.contains(id.as_str()) {
            '*'
        } else {
            'o'
        };
        let (row, col) = canvas.cell(c, r);
        canvas.put(row, col, glyph);
    }

    Some(canvas.into_string())
}

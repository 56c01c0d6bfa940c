//! # grid_pathviz
//!
//! The pathfinding engine behind a grid pathfinding visualizer. A [PathingGrid] holds a start
//! cell, a finish cell and walls; [Dijkstra's algorithm](https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm)
//! and [A*](https://en.wikipedia.org/wiki/A*_search_algorithm) explore it step by step and
//! report both the order in which cells were visited and the shortest path, so that a
//! presentation layer can animate them. Movement is 4-connected with unit cost.
//!
//! Walls can be drawn by hand or produced by one of the [maze] generators.
//!
//! Points follow the [grid_util] convention of `x` for the column and `y` for the row. Use
//! [cell] to build one from a `(row, col)` pair.
mod astar_grid;
pub mod error;
pub mod maze;
pub mod pathing_grid;
pub mod solver;

pub use astar_grid::Parents;
pub use error::{GridError, UnknownAlgorithm};
pub use pathing_grid::{Cell, PathingGrid};
pub use solver::{
    astar::AstarSolver, dijkstra::DijkstraSolver, Algorithm, GridSolver, SearchOutcome,
};

use fxhash::FxBuildHasher;
use grid_util::point::Point;
use indexmap::{IndexMap, IndexSet};
use itertools::Itertools;

use astar_grid::NO_PARENT;

pub type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;
pub type FxIndexSet<K> = IndexSet<K, FxBuildHasher>;

pub const DEFAULT_ROWS: usize = 20;
pub const DEFAULT_COLS: usize = 50;
pub const DEFAULT_START: (usize, usize) = (10, 15);
pub const DEFAULT_FINISH: (usize, usize) = (10, 35);

/// Builds the [Point] for a `(row, col)` pair.
pub fn cell(row: usize, col: usize) -> Point {
    Point::new(col as i32, row as i32)
}

pub(crate) fn row_of(point: &Point) -> usize {
    point.y as usize
}

pub(crate) fn col_of(point: &Point) -> usize {
    point.x as usize
}

/// Dimensions and marker placement used to build a [PathingGrid].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridConfig {
    pub rows: usize,
    pub cols: usize,
    pub start: Point,
    pub finish: Point,
}

impl Default for GridConfig {
    fn default() -> GridConfig {
        GridConfig {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            start: cell(DEFAULT_START.0, DEFAULT_START.1),
            finish: cell(DEFAULT_FINISH.0, DEFAULT_FINISH.1),
        }
    }
}

/// Walks the predecessor chain back from `finish` and returns the path from `start` to `finish`,
/// both inclusive.
///
/// The result is empty when `finish` was never visited, or when the chain does not lead back to
/// `start`. The walk is bounded by the number of recorded points, so a malformed map cannot make
/// it loop.
pub fn reconstruct_path(
    visited: &[Point],
    parents: &Parents,
    start: Point,
    finish: Point,
) -> Vec<Point> {
    if !visited.contains(&finish) {
        return Vec::new();
    }
    let Some(finish_ix) = parents.get_index_of(&finish) else {
        return Vec::new();
    };
    let chain = std::iter::successors(Some(finish_ix), |&i| {
        parents
            .get_index(i)
            .map(|(_, &(parent, _))| parent)
            .filter(|&p| p != NO_PARENT)
    })
    .take(parents.len())
    .collect::<Vec<usize>>();
    let terminated = chain
        .last()
        .and_then(|&i| parents.get_index(i))
        .is_some_and(|(_, &(parent, _))| parent == NO_PARENT);
    if !terminated {
        return Vec::new();
    }
    let mut path = chain
        .into_iter()
        .filter_map(|i| parents.get_index(i).map(|(p, _)| *p))
        .collect::<Vec<Point>>();
    path.reverse();
    if path.first() == Some(&start) && is_contiguous_path(&path) {
        path
    } else {
        Vec::new()
    }
}

/// True when every consecutive pair of points is 4-adjacent.
pub fn is_contiguous_path(path: &[Point]) -> bool {
    path.iter()
        .tuple_windows()
        .all(|(a, b)| (a.x - b.x).abs() + (a.y - b.y).abs() == 1)
}

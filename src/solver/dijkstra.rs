use grid_util::point::Point;

use crate::solver::{Algorithm, GridSolver};

/// Uniform-cost search: cells are finalized in order of their distance from the start, so the
/// visiting order spreads out evenly in every direction.
#[derive(Clone, Copy, Debug, Default)]
pub struct DijkstraSolver;

impl DijkstraSolver {
    pub fn new() -> DijkstraSolver {
        DijkstraSolver
    }
}

impl GridSolver for DijkstraSolver {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Dijkstra
    }

    /// No estimate at all, which turns the best-first search into Dijkstra's algorithm.
    fn heuristic(&self, _: &Point, _: &Point) -> i32 {
        0
    }
}

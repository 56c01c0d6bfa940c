use crate::astar_grid::astar_grid;
use crate::{reconstruct_path, GridError, Parents, PathingGrid, UnknownAlgorithm};
use core::fmt;
use fxhash::FxHashSet;
use grid_util::point::Point;
use log::debug;
use smallvec::SmallVec;
use std::str::FromStr;

pub mod astar;
pub mod dijkstra;

use astar::AstarSolver;
use dijkstra::DijkstraSolver;

/// The result of one search: the order in which cells were finalized and the predecessor map
/// built along the way.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchOutcome {
    pub algorithm: Algorithm,
    pub start: Point,
    pub finish: Point,
    /// Finalized cells in visiting order. Ends with `finish` if and only if it was reached.
    pub visited: Vec<Point>,
    pub parents: Parents,
}

impl SearchOutcome {
    pub fn found(&self) -> bool {
        self.visited.last() == Some(&self.finish)
    }

    /// The shortest path from start to finish, or an empty path when the finish was not reached.
    pub fn path(&self) -> Vec<Point> {
        reconstruct_path(&self.visited, &self.parents, self.start, self.finish)
    }

    pub fn predecessor(&self, point: &Point) -> Option<Point> {
        let &(parent, _) = self.parents.get(point)?;
        self.parents.get_index(parent).map(|(p, _)| *p)
    }

    /// Best known cost from the start (distance for Dijkstra, `g` for A*). [None] means the
    /// point was never discovered.
    pub fn cost(&self, point: &Point) -> Option<i32> {
        self.parents.get(point).map(|&(_, c)| c)
    }

    /// Draws the grid with visited cells as `o` and the path as `*`.
    pub fn render(&self, grid: &PathingGrid) -> String {
        let path = self.path().into_iter().collect::<FxHashSet<Point>>();
        let visited = self.visited.iter().copied().collect::<FxHashSet<Point>>();
        let mut out = String::with_capacity((grid.cols() + 1) * grid.rows());
        for c in grid.cells() {
            let p = c.point();
            out.push(if c.is_start {
                'S'
            } else if c.is_finish {
                'F'
            } else if c.is_wall {
                '#'
            } else if path.contains(&p) {
                '*'
            } else if visited.contains(&p) {
                'o'
            } else {
                '.'
            });
            if c.col + 1 == grid.cols() {
                out.push('\n');
            }
        }
        out
    }
}

pub trait GridSolver {
    fn algorithm(&self) -> Algorithm;

    /// Estimated remaining cost from `p1` to `p2`; must never overestimate.
    fn heuristic(&self, p1: &Point, p2: &Point) -> i32;

    fn successors(&self, grid: &PathingGrid, node: &Point) -> SmallVec<[Point; 4]> {
        grid.passable_neighbours(node)
    }

    /// Explores the grid from `start` towards `finish`. Fails only on invalid endpoints; an
    /// unreachable finish yields an outcome whose path is empty.
    fn search(
        &self,
        grid: &PathingGrid,
        start: Point,
        finish: Point,
    ) -> Result<SearchOutcome, GridError> {
        grid.validate_endpoint(start)?;
        grid.validate_endpoint(finish)?;
        let (visited, parents) = astar_grid(
            &start,
            &finish,
            |node| self.successors(grid, node),
            |point| self.heuristic(point, &finish),
        );
        let outcome = SearchOutcome {
            algorithm: self.algorithm(),
            start,
            finish,
            visited,
            parents,
        };
        debug!(
            "{} from {} to {}: visited {} cells, finish reached: {}",
            outcome.algorithm,
            start,
            finish,
            outcome.visited.len(),
            outcome.found()
        );
        Ok(outcome)
    }

    /// Shortest path between `start` and `finish`, discarding the visiting order.
    fn get_path(
        &self,
        grid: &PathingGrid,
        start: Point,
        finish: Point,
    ) -> Result<Vec<Point>, GridError> {
        Ok(self.search(grid, start, finish)?.path())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Algorithm {
    #[default]
    Dijkstra,
    Astar,
}

impl Algorithm {
    pub const ALL: [Algorithm; 2] = [Algorithm::Dijkstra, Algorithm::Astar];

    pub fn search(
        self,
        grid: &PathingGrid,
        start: Point,
        finish: Point,
    ) -> Result<SearchOutcome, GridError> {
        match self {
            Algorithm::Dijkstra => DijkstraSolver::new().search(grid, start, finish),
            Algorithm::Astar => AstarSolver::new().search(grid, start, finish),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Algorithm::Dijkstra => write!(f, "dijkstra"),
            Algorithm::Astar => write!(f, "astar"),
        }
    }
}

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dijkstra" => Ok(Algorithm::Dijkstra),
            "astar" | "a*" => Ok(Algorithm::Astar),
            _ => Err(UnknownAlgorithm(s.to_owned())),
        }
    }
}

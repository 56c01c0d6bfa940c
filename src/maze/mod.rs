//! Wall generators. Each one marks walls on the grid as a side effect and returns the marked
//! cells in the order they were placed, which is the order a visualizer animates them in. The
//! start and finish cells are never walled.
use crate::{FxIndexSet, PathingGrid};
use core::fmt;
use grid_util::point::Point;
use log::info;
use rand::Rng;

pub mod random;
pub mod recursive_division;
pub mod stair;

pub use random::RandomMaze;
pub use recursive_division::RecursiveDivision;
pub use stair::StairPattern;

pub trait WallGenerator {
    fn generate<R: Rng + ?Sized>(&self, grid: &mut PathingGrid, rng: &mut R)
        -> FxIndexSet<Point>;
}

/// Walls `point` unless it is out of bounds or holds a marker. Returns whether a wall was placed.
pub(crate) fn place_wall(
    grid: &mut PathingGrid,
    walls: &mut FxIndexSet<Point>,
    point: Point,
) -> bool {
    if grid.is_endpoint(point) || grid.set_wall(point, true).is_err() {
        return false;
    }
    walls.insert(point);
    true
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MazeKind {
    Stair,
    RecursiveDivision,
    Random,
}

impl MazeKind {
    pub const ALL: [MazeKind; 3] = [
        MazeKind::Stair,
        MazeKind::RecursiveDivision,
        MazeKind::Random,
    ];

    /// Runs the generator with its default settings.
    pub fn generate<R: Rng + ?Sized>(
        self,
        grid: &mut PathingGrid,
        rng: &mut R,
    ) -> FxIndexSet<Point> {
        let walls = match self {
            MazeKind::Stair => StairPattern.generate(grid, rng),
            MazeKind::RecursiveDivision => RecursiveDivision::default().generate(grid, rng),
            MazeKind::Random => RandomMaze::default().generate(grid, rng),
        };
        info!("{} placed {} walls", self, walls.len());
        walls
    }
}

impl fmt::Display for MazeKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MazeKind::Stair => write!(f, "stair pattern"),
            MazeKind::RecursiveDivision => write!(f, "recursive division"),
            MazeKind::Random => write!(f, "random maze"),
        }
    }
}

use crate::maze::{place_wall, WallGenerator};
use crate::{cell, FxIndexSet, PathingGrid};
use grid_util::point::Point;
use log::warn;
use rand::Rng;

pub const DEFAULT_WALL_COUNT: usize = 290;

/// Scatters `wall_count` distinct walls uniformly over the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RandomMaze {
    pub wall_count: usize,
}

impl Default for RandomMaze {
    fn default() -> RandomMaze {
        RandomMaze {
            wall_count: DEFAULT_WALL_COUNT,
        }
    }
}

impl WallGenerator for RandomMaze {
    fn generate<R: Rng + ?Sized>(&self, grid: &mut PathingGrid, rng: &mut R) -> FxIndexSet<Point> {
        let mut walls = FxIndexSet::default();
        // Everything but the two marker cells can take a wall.
        let available = (grid.rows() * grid.cols()).saturating_sub(2);
        let target = if self.wall_count > available {
            warn!(
                "Requested {} walls but only {} cells are free, placing {}",
                self.wall_count, available, available
            );
            available
        } else {
            self.wall_count
        };
        while walls.len() < target {
            let point = cell(rng.gen_range(0..grid.rows()), rng.gen_range(0..grid.cols()));
            if walls.contains(&point) {
                continue;
            }
            place_wall(grid, &mut walls, point);
        }
        walls
    }
}

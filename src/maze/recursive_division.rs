use crate::maze::{place_wall, WallGenerator};
use crate::{FxIndexSet, PathingGrid};
use fxhash::FxHashSet;
use grid_util::point::Point;
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// [Recursive division](https://en.wikipedia.org/wiki/Maze_generation_algorithm#Recursive_division_method)
/// maze: the grid is boxed in by an outer wall, then chambers are split by walls on even
/// offsets, each with a single gap, alternating direction as chambers get narrow or flat.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RecursiveDivision {
    /// Direction of the first dividing wall.
    pub orientation: Orientation,
}

impl Default for RecursiveDivision {
    fn default() -> RecursiveDivision {
        RecursiveDivision {
            orientation: Orientation::Horizontal,
        }
    }
}

impl WallGenerator for RecursiveDivision {
    fn generate<R: Rng + ?Sized>(&self, grid: &mut PathingGrid, rng: &mut R) -> FxIndexSet<Point> {
        let mut walls = FxIndexSet::default();
        let rows = grid.rows() as i32;
        let cols = grid.cols() as i32;
        for col in 0..cols {
            place_wall(grid, &mut walls, Point::new(col, 0));
            place_wall(grid, &mut walls, Point::new(col, rows - 1));
        }
        for row in 0..rows {
            place_wall(grid, &mut walls, Point::new(0, row));
            place_wall(grid, &mut walls, Point::new(cols - 1, row));
        }
        let mut division = Division {
            grid,
            walls: &mut walls,
            gaps: FxHashSet::default(),
            rng,
        };
        division.divide(2, rows - 3, 2, cols - 3, self.orientation);
        walls
    }
}

struct Division<'a, R: Rng + ?Sized> {
    grid: &'a mut PathingGrid,
    walls: &'a mut FxIndexSet<Point>,
    /// (row, col) of every gap left open so far; later walls never close one.
    gaps: FxHashSet<(i32, i32)>,
    rng: &'a mut R,
}

impl<R: Rng + ?Sized> Division<'_, R> {
    /// Picks one of `start, start + 2, ..` up to and including `end`.
    fn pick_even_offset(&mut self, start: i32, end: i32) -> i32 {
        start + 2 * self.rng.gen_range(0..=(end - start) / 2)
    }

    fn divide(
        &mut self,
        row_start: i32,
        row_end: i32,
        col_start: i32,
        col_end: i32,
        orientation: Orientation,
    ) {
        if row_end <= row_start || col_end <= col_start {
            return;
        }
        match orientation {
            Orientation::Vertical => self.divide_vertical(row_start, row_end, col_start, col_end),
            Orientation::Horizontal => {
                self.divide_horizontal(row_start, row_end, col_start, col_end)
            }
        }
    }

    fn divide_vertical(&mut self, row_start: i32, row_end: i32, col_start: i32, col_end: i32) {
        let wall_col = self.pick_even_offset(col_start, col_end);
        let gap_row = self.pick_even_offset(row_start, row_end);
        self.gaps.insert((gap_row, wall_col));
        for row in row_start..=row_end {
            if row != gap_row && !self.gaps.contains(&(row, wall_col)) {
                place_wall(self.grid, self.walls, Point::new(wall_col, row));
            }
        }

        let height = row_end - row_start;
        let left = if height > wall_col - 2 - col_start {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        };
        self.divide(row_start, row_end, col_start, wall_col - 2, left);
        let right = if height > col_end - (wall_col + 2) {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        };
        self.divide(row_start, row_end, wall_col + 2, col_end, right);
    }

    fn divide_horizontal(&mut self, row_start: i32, row_end: i32, col_start: i32, col_end: i32) {
        let wall_row = self.pick_even_offset(row_start, row_end);
        let gap_col = self.pick_even_offset(col_start, col_end);
        self.gaps.insert((wall_row, gap_col));
        for col in col_start..=col_end {
            if col != gap_col && !self.gaps.contains(&(wall_row, col)) {
                place_wall(self.grid, self.walls, Point::new(col, wall_row));
            }
        }

        let width = col_end - col_start;
        // A chamber that stays wider than tall is split vertically next, reusing the wall row
        // as its boundary.
        if wall_row - 2 - row_start > width {
            self.divide(row_start, wall_row - 2, col_start, col_end, Orientation::Horizontal);
        } else {
            self.divide(row_start, wall_row, col_start, col_end, Orientation::Vertical);
        }
        if row_end - (wall_row + 2) > width {
            self.divide(wall_row + 2, row_end, col_start, col_end, Orientation::Horizontal);
        } else {
            self.divide(wall_row, row_end, col_start, col_end, Orientation::Vertical);
        }
    }
}

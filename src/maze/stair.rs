use crate::maze::{place_wall, WallGenerator};
use crate::{cell, FxIndexSet, PathingGrid};
use grid_util::point::Point;
use rand::Rng;

/// A zig-zag line starting in the bottom-left corner that climbs one row per column until it
/// hits the top row, then descends to the bottom row, and so on until the last column.
#[derive(Clone, Copy, Debug, Default)]
pub struct StairPattern;

impl WallGenerator for StairPattern {
    fn generate<R: Rng + ?Sized>(&self, grid: &mut PathingGrid, _rng: &mut R) -> FxIndexSet<Point> {
        let mut walls = FxIndexSet::default();
        let rows = grid.rows();
        if rows < 2 {
            return walls;
        }
        let mut row = rows - 1;
        let mut up = true;
        for col in 0..grid.cols() {
            place_wall(grid, &mut walls, cell(row, col));
            if up {
                row -= 1;
            } else {
                row += 1;
            }
            if row == 0 || row == rows - 1 {
                up = !up;
            }
        }
        walls
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn zig_zags_between_bottom_and_top() {
        let mut grid = PathingGrid::new(3, 6, cell(0, 0), cell(2, 5)).unwrap();
        let walls = StairPattern.generate(&mut grid, &mut StdRng::seed_from_u64(0));
        // |S.#...|
        // |.#.#.#|
        // |#...#F|
        assert_eq!(
            walls.into_iter().collect::<Vec<_>>(),
            vec![cell(2, 0), cell(1, 1), cell(0, 2), cell(1, 3), cell(2, 4), cell(1, 5)]
        );
        assert_eq!(grid.to_string(), "S.#...\n.#.#.#\n#...#F\n");
    }

    #[test]
    fn skips_markers_on_the_stair() {
        let mut grid = PathingGrid::new(2, 3, cell(1, 0), cell(1, 2)).unwrap();
        let walls = StairPattern.generate(&mut grid, &mut StdRng::seed_from_u64(0));
        assert_eq!(walls.into_iter().collect::<Vec<_>>(), vec![cell(0, 1)]);
    }

    #[test]
    fn single_row_gets_no_stairs() {
        let mut grid = PathingGrid::new(1, 4, cell(0, 0), cell(0, 3)).unwrap();
        assert!(StairPattern.generate(&mut grid, &mut StdRng::seed_from_u64(0)).is_empty());
    }
}

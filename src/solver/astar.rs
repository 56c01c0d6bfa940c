use grid_util::point::Point;

use crate::solver::{Algorithm, GridSolver};

#[derive(Clone, Copy, Debug, Default)]
pub struct AstarSolver;

impl AstarSolver {
    pub fn new() -> AstarSolver {
        AstarSolver
    }
}

impl GridSolver for AstarSolver {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Astar
    }

    /// [Manhattan distance](https://en.wikipedia.org/wiki/Taxicab_geometry), exact on an open
    /// 4-connected grid with unit moves and therefore admissible and consistent.
    fn heuristic(&self, p1: &Point, p2: &Point) -> i32 {
        (p1.x - p2.x).abs() + (p1.y - p2.y).abs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::dijkstra::DijkstraSolver;
    use crate::{cell, is_contiguous_path, PathingGrid};

    /// Asserts that the case in which start and goal are equal is handled correctly.
    #[test]
    fn equal_start_goal() {
        let grid = PathingGrid::new(1, 2, cell(0, 0), cell(0, 1)).unwrap();
        let outcome = AstarSolver::new().search(&grid, cell(0, 0), cell(0, 0)).unwrap();
        assert_eq!(outcome.visited, vec![cell(0, 0)]);
        assert_eq!(outcome.path(), vec![cell(0, 0)]);
    }

    #[test]
    fn heuristic_is_manhattan() {
        let solver = AstarSolver::new();
        assert_eq!(solver.heuristic(&cell(0, 0), &cell(4, 4)), 8);
        assert_eq!(solver.heuristic(&cell(3, 1), &cell(1, 4)), 5);
    }

    /// Asserts that the optimal 9 cell solution is found.
    #[test]
    fn solve_open_problem() {
        let grid = PathingGrid::new(5, 5, cell(0, 0), cell(4, 4)).unwrap();
        let outcome = AstarSolver::new().search(&grid, cell(0, 0), cell(4, 4)).unwrap();
        let path = outcome.path();
        assert_eq!(path.len(), 9);
        assert!(path.windows(2).all(|w| w[1].x + w[1].y == w[0].x + w[0].y + 1));
        assert_eq!(outcome.cost(&cell(4, 4)), Some(8));
        // Every cell has f = 8 here, so the row-major tie-break sweeps the rows in order.
        assert_eq!(
            &outcome.visited[..5],
            &[cell(0, 0), cell(0, 1), cell(0, 2), cell(0, 3), cell(0, 4)]
        );
    }

    #[test]
    fn explores_less_than_dijkstra_in_a_corridor() {
        let grid = PathingGrid::new(5, 20, cell(2, 0), cell(2, 19)).unwrap();
        let astar = AstarSolver::new().search(&grid, cell(2, 0), cell(2, 19)).unwrap();
        let dijkstra = DijkstraSolver::new().search(&grid, cell(2, 0), cell(2, 19)).unwrap();
        assert_eq!(astar.path().len(), dijkstra.path().len());
        assert_eq!(astar.visited.len(), 20);
        assert!(dijkstra.visited.len() > astar.visited.len());
    }

    #[test]
    fn routes_around_a_wall() {
        // |.S.|
        // |.#.|
        // |.F.|
        let mut grid = PathingGrid::new(3, 3, cell(0, 1), cell(2, 1)).unwrap();
        grid.set_wall(cell(1, 1), true).unwrap();
        let outcome = AstarSolver::new().search(&grid, cell(0, 1), cell(2, 1)).unwrap();
        let path = outcome.path();
        assert_eq!(path.len(), 5);
        assert_eq!(path.first(), Some(&cell(0, 1)));
        assert_eq!(path.last(), Some(&cell(2, 1)));
        assert!(is_contiguous_path(&path));
        assert!(!path.contains(&cell(1, 1)));
        assert_eq!(outcome.cost(&cell(2, 1)), Some(4));
    }

    #[test]
    fn test_complex() {
        // |S.........|
        // |.#...#....|
        // |.#...#....|
        // |.#...#....|
        // |.....#..F.|
        let mut grid = PathingGrid::new(5, 10, cell(0, 0), cell(4, 8)).unwrap();
        for row in 1..4 {
            grid.set_wall(cell(row, 1), true).unwrap();
        }
        for row in 1..5 {
            grid.set_wall(cell(row, 5), true).unwrap();
        }
        let outcome = AstarSolver::new().search(&grid, cell(0, 0), cell(4, 8)).unwrap();
        let path = outcome.path();
        assert_eq!(path.len(), 13);
        assert!(is_contiguous_path(&path));
        assert!(path.iter().all(|p| !grid.is_wall(*p)));
        assert!(path.contains(&cell(0, 5)));
    }

    #[test]
    fn enclosed_start() {
        let mut grid = PathingGrid::new(3, 3, cell(1, 1), cell(0, 0)).unwrap();
        for p in [cell(0, 1), cell(2, 1), cell(1, 0), cell(1, 2)] {
            grid.set_wall(p, true).unwrap();
        }
        let outcome = AstarSolver::new().search(&grid, cell(1, 1), cell(0, 0)).unwrap();
        assert_eq!(outcome.visited, vec![cell(1, 1)]);
        assert!(!outcome.found());
        assert!(outcome.path().is_empty());
    }

    #[test]
    fn enclosed_finish() {
        let mut grid = PathingGrid::new(4, 4, cell(0, 0), cell(3, 3)).unwrap();
        grid.set_wall(cell(2, 3), true).unwrap();
        grid.set_wall(cell(3, 2), true).unwrap();
        let outcome = AstarSolver::new().search(&grid, cell(0, 0), cell(3, 3)).unwrap();
        assert!(!outcome.visited.contains(&cell(3, 3)));
        assert_eq!(outcome.cost(&cell(3, 3)), None);
        assert!(outcome.path().is_empty());
    }
}

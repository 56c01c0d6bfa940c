use crate::error::GridError;
use crate::solver::{Algorithm, SearchOutcome};
use crate::{cell, col_of, row_of, GridConfig};
use core::fmt;
use grid_util::point::Point;
use itertools::iproduct;
use log::info;
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;

/// A single grid position together with its markers. Search bookkeeping never lives here.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
    pub is_wall: bool,
    pub is_start: bool,
    pub is_finish: bool,
}

impl Cell {
    pub fn point(&self) -> Point {
        cell(self.row, self.col)
    }
}

/// [PathingGrid] owns the cells of a fixed-size rectangular grid along with the single start
/// and finish markers. Connectivity is tracked with a [UnionFind] over the free cells so that
/// reachability can be answered without running a search.
///
/// Points use `x` for the column and `y` for the row, see [cell](crate::cell).
#[derive(Clone, Debug)]
pub struct PathingGrid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
    start: Point,
    finish: Point,
    components: UnionFind<usize>,
    components_dirty: bool,
}

impl Default for PathingGrid {
    fn default() -> PathingGrid {
        let config = GridConfig::default();
        PathingGrid::build(config.rows, config.cols, config.start, config.finish)
    }
}

impl PathingGrid {
    /// Creates an empty grid with the given markers. Fails if the dimensions are zero, if a
    /// marker lies outside the grid or if both markers share a cell.
    pub fn new(rows: usize, cols: usize, start: Point, finish: Point) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::InvalidDimensions { rows, cols });
        }
        for point in [start, finish] {
            if !in_bounds(rows, cols, point) {
                return Err(GridError::OutOfBounds(point));
            }
        }
        if start == finish {
            return Err(GridError::EndpointOverlap(start));
        }
        Ok(PathingGrid::build(rows, cols, start, finish))
    }

    pub fn from_config(config: &GridConfig) -> Result<Self, GridError> {
        PathingGrid::new(config.rows, config.cols, config.start, config.finish)
    }

    fn build(rows: usize, cols: usize, start: Point, finish: Point) -> Self {
        let cells = iproduct!(0..rows, 0..cols)
            .map(|(row, col)| Cell {
                row,
                col,
                is_wall: false,
                is_start: cell(row, col) == start,
                is_finish: cell(row, col) == finish,
            })
            .collect();
        let mut grid = PathingGrid {
            rows,
            cols,
            cells,
            start,
            finish,
            components: UnionFind::new(rows * cols),
            components_dirty: false,
        };
        grid.generate_components();
        grid
    }

    pub fn rows(&self) -> usize {
        self.rows
    }
    pub fn cols(&self) -> usize {
        self.cols
    }
    pub fn start(&self) -> Point {
        self.start
    }
    pub fn finish(&self) -> Point {
        self.finish
    }

    pub fn in_bounds(&self, point: Point) -> bool {
        in_bounds(self.rows, self.cols, point)
    }

    /// Row-major index of an in-bounds point.
    pub(crate) fn get_ix_point(&self, point: &Point) -> usize {
        row_of(point) * self.cols + col_of(point)
    }

    pub fn get_cell(&self, point: Point) -> Option<&Cell> {
        if self.in_bounds(point) {
            Some(&self.cells[self.get_ix_point(&point)])
        } else {
            None
        }
    }

    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    pub fn walls(&self) -> impl Iterator<Item = Point> + '_ {
        self.cells.iter().filter(|c| c.is_wall).map(Cell::point)
    }

    pub fn is_wall(&self, point: Point) -> bool {
        self.get_cell(point).is_some_and(|c| c.is_wall)
    }

    pub fn is_endpoint(&self, point: Point) -> bool {
        point == self.start || point == self.finish
    }

    pub fn can_move_to(&self, point: Point) -> bool {
        self.get_cell(point).is_some_and(|c| !c.is_wall)
    }

    /// In-bounds 4-neighbours of a point, in the order up, down, left, right.
    pub fn neighborhood_points(&self, point: &Point) -> SmallVec<[Point; 4]> {
        [
            Point::new(point.x, point.y - 1),
            Point::new(point.x, point.y + 1),
            Point::new(point.x - 1, point.y),
            Point::new(point.x + 1, point.y),
        ]
        .into_iter()
        .filter(|p| self.in_bounds(*p))
        .collect()
    }

    /// The 4-neighbours a search may step onto.
    pub fn passable_neighbours(&self, point: &Point) -> SmallVec<[Point; 4]> {
        self.neighborhood_points(point)
            .into_iter()
            .filter(|p| self.can_move_to(*p))
            .collect()
    }

    /// Checks that a point can serve as the start or finish of a search.
    pub fn validate_endpoint(&self, point: Point) -> Result<(), GridError> {
        match self.get_cell(point) {
            None => Err(GridError::OutOfBounds(point)),
            Some(c) if c.is_wall => Err(GridError::WallEndpoint(point)),
            Some(_) => Ok(()),
        }
    }

    /// Updates a position on the grid. Joins newly connected components and flags the components
    /// as dirty if components are (potentially) broken apart into multiple.
    pub fn set_wall(&mut self, point: Point, blocked: bool) -> Result<(), GridError> {
        if !self.in_bounds(point) {
            return Err(GridError::OutOfBounds(point));
        }
        if blocked && self.is_endpoint(point) {
            return Err(GridError::EndpointWall(point));
        }
        let ix = self.get_ix_point(&point);
        let was_wall = self.cells[ix].is_wall;
        self.cells[ix].is_wall = blocked;
        if blocked {
            if !was_wall {
                self.components_dirty = true;
            }
        } else {
            for n in self.passable_neighbours(&point) {
                let n_ix = self.get_ix_point(&n);
                self.components.union(ix, n_ix);
            }
        }
        Ok(())
    }

    /// Flips the wall state of a point and returns the new state.
    pub fn toggle_wall(&mut self, point: Point) -> Result<bool, GridError> {
        let blocked = !self.is_wall(point);
        self.set_wall(point, blocked)?;
        Ok(blocked)
    }

    /// Removes every wall and rebuilds the components from scratch.
    pub fn clear_walls(&mut self) {
        for c in self.cells.iter_mut() {
            c.is_wall = false;
        }
        self.generate_components();
    }

    /// Relocates the start marker. The target must be free and distinct from the finish.
    pub fn move_start(&mut self, point: Point) -> Result<(), GridError> {
        self.validate_endpoint(point)?;
        if point == self.finish {
            return Err(GridError::EndpointOverlap(point));
        }
        let old = self.get_ix_point(&self.start);
        let new = self.get_ix_point(&point);
        self.cells[old].is_start = false;
        self.cells[new].is_start = true;
        self.start = point;
        Ok(())
    }

    /// Relocates the finish marker. The target must be free and distinct from the start.
    pub fn move_finish(&mut self, point: Point) -> Result<(), GridError> {
        self.validate_endpoint(point)?;
        if point == self.start {
            return Err(GridError::EndpointOverlap(point));
        }
        let old = self.get_ix_point(&self.finish);
        let new = self.get_ix_point(&point);
        self.cells[old].is_finish = false;
        self.cells[new].is_finish = true;
        self.finish = point;
        Ok(())
    }

    /// Runs the chosen algorithm between the grid's own start and finish markers.
    pub fn search(&self, algorithm: Algorithm) -> Result<SearchOutcome, GridError> {
        algorithm.search(self, self.start, self.finish)
    }

    /// Retrieves the component id a given [Point] belongs to.
    pub fn get_component(&self, point: &Point) -> Result<usize, GridError> {
        if !self.in_bounds(*point) {
            return Err(GridError::OutOfBounds(*point));
        }
        Ok(self.components.find(self.get_ix_point(point)))
    }

    /// Checks if start and goal are on the same component.
    pub fn reachable(&self, start: &Point, goal: &Point) -> bool {
        !self.unreachable(start, goal)
    }

    /// Checks if start and goal are not on the same component. Walls are never reachable.
    pub fn unreachable(&self, start: &Point, goal: &Point) -> bool {
        if self.can_move_to(*start) && self.can_move_to(*goal) {
            let start_ix = self.get_ix_point(start);
            let goal_ix = self.get_ix_point(goal);
            if self.components.equiv(start_ix, goal_ix) {
                false
            } else {
                info!("{} and {} are not on the same component", start, goal);
                true
            }
        } else {
            true
        }
    }

    pub fn components_dirty(&self) -> bool {
        self.components_dirty
    }

    /// Regenerates the components if they are marked as dirty.
    pub fn update(&mut self) {
        if self.components_dirty {
            info!("Components are dirty: regenerating components");
            self.generate_components();
        }
    }

    /// Generates a new [UnionFind] structure and links up free 4-neighbours to the same components.
    pub fn generate_components(&mut self) {
        self.components = UnionFind::new(self.rows * self.cols);
        self.components_dirty = false;
        for (row, col) in iproduct!(0..self.rows, 0..self.cols) {
            let point = cell(row, col);
            if !self.can_move_to(point) {
                continue;
            }
            let parent_ix = self.get_ix_point(&point);
            // Linking right and down is enough to cover every 4-neighbour pair once.
            for n in [Point::new(point.x + 1, point.y), Point::new(point.x, point.y + 1)] {
                if self.can_move_to(n) {
                    let ix = self.get_ix_point(&n);
                    self.components.union(parent_ix, ix);
                }
            }
        }
    }
}

fn in_bounds(rows: usize, cols: usize, point: Point) -> bool {
    point.x >= 0 && point.y >= 0 && (point.y as usize) < rows && (point.x as usize) < cols
}

impl fmt::Display for PathingGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.cells.chunks(self.cols) {
            let line = row
                .iter()
                .map(|c| {
                    if c.is_start {
                        'S'
                    } else if c.is_finish {
                        'F'
                    } else if c.is_wall {
                        '#'
                    } else {
                        '.'
                    }
                })
                .collect::<String>();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

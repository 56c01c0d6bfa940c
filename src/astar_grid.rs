/// Best-first search over grid points shared by the Dijkstra and A* solvers. Dijkstra is the
/// special case of a zero heuristic. All bookkeeping lives in maps owned by a single call,
/// so the grid itself is only borrowed.
use fxhash::FxHashSet;
use grid_util::point::Point;
use indexmap::map::Entry::{Occupied, Vacant};

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::FxIndexMap;

/// Per-cell search record: index of the predecessor in the same map ([usize::MAX] for the
/// start) and the best known cost from the start.
pub type Parents = FxIndexMap<Point, (usize, i32)>;

pub(crate) const NO_PARENT: usize = usize::MAX;

struct SmallestCostHolder {
    estimated_cost: i32,
    cost: i32,
    point: Point,
    index: usize,
}

impl Eq for SmallestCostHolder {}

impl PartialEq for SmallestCostHolder {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl PartialOrd for SmallestCostHolder {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SmallestCostHolder {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so the max-heap pops the smallest estimate first. Equal estimates go to the
        // lowest row, then the lowest column, which keeps the visiting order reproducible.
        other
            .estimated_cost
            .cmp(&self.estimated_cost)
            .then_with(|| other.point.y.cmp(&self.point.y))
            .then_with(|| other.point.x.cmp(&self.point.x))
            .then_with(|| self.cost.cmp(&other.cost))
    }
}

/// Explores from `start` until `finish` is closed or the frontier runs dry. Every move costs 1.
///
/// Returns the closed points in the order they were closed (ending with `finish` when it was
/// reached) together with the predecessor map of every point that was discovered.
pub(crate) fn astar_grid<FN, IN, FH>(
    start: &Point,
    finish: &Point,
    mut successors: FN,
    mut heuristic: FH,
) -> (Vec<Point>, Parents)
where
    FN: FnMut(&Point) -> IN,
    IN: IntoIterator<Item = Point>,
    FH: FnMut(&Point) -> i32,
{
    let mut to_see = BinaryHeap::new();
    to_see.push(SmallestCostHolder {
        estimated_cost: 0,
        cost: 0,
        point: *start,
        index: 0,
    });
    let mut parents: Parents = FxIndexMap::default();
    parents.insert(*start, (NO_PARENT, 0));
    let mut closed: FxHashSet<usize> = FxHashSet::default();
    let mut visited = Vec::new();

    while let Some(SmallestCostHolder {
        cost, point, index, ..
    }) = to_see.pop()
    {
        if closed.contains(&index) {
            continue;
        }
        // A point is pushed again whenever a cheaper way to it is found; only the entry
        // carrying the best cost is processed.
        if parents.get_index(index).is_some_and(|(_, &(_, c))| cost > c) {
            continue;
        }
        closed.insert(index);
        visited.push(point);
        if point == *finish {
            break;
        }
        for successor in successors(&point) {
            let new_cost = cost + 1;
            let h;
            let n;
            match parents.entry(successor) {
                Vacant(e) => {
                    h = heuristic(e.key());
                    n = e.index();
                    e.insert((index, new_cost));
                }
                Occupied(mut e) => {
                    if closed.contains(&e.index()) || e.get().1 <= new_cost {
                        continue;
                    }
                    h = heuristic(e.key());
                    n = e.index();
                    e.insert((index, new_cost));
                }
            }
            to_see.push(SmallestCostHolder {
                estimated_cost: new_cost + h,
                cost: new_cost,
                point: successor,
                index: n,
            });
        }
    }
    (visited, parents)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_successors(len: i32) -> impl FnMut(&Point) -> Vec<Point> {
        move |p: &Point| {
            [p.x - 1, p.x + 1]
                .into_iter()
                .filter(|x| (0..len).contains(x))
                .map(|x| Point::new(x, 0))
                .collect()
        }
    }

    #[test]
    fn heap_pops_lowest_estimate_then_row_then_col() {
        let mut heap = BinaryHeap::new();
        for (estimated_cost, x, y) in [(2, 0, 0), (1, 3, 1), (1, 2, 1), (1, 5, 0)] {
            heap.push(SmallestCostHolder {
                estimated_cost,
                cost: 0,
                point: Point::new(x, y),
                index: 0,
            });
        }
        let order = std::iter::from_fn(|| heap.pop().map(|h| h.point)).collect::<Vec<_>>();
        assert_eq!(
            order,
            vec![
                Point::new(5, 0),
                Point::new(2, 1),
                Point::new(3, 1),
                Point::new(0, 0)
            ]
        );
    }

    #[test]
    fn explores_a_line() {
        let start = Point::new(0, 0);
        let finish = Point::new(3, 0);
        let (visited, parents) = astar_grid(&start, &finish, line_successors(5), |_| 0);
        assert_eq!(visited.len(), 4);
        assert_eq!(visited.last(), Some(&finish));
        assert_eq!(parents.get(&finish).map(|v| v.1), Some(3));
        assert_eq!(parents.get(&start), Some(&(NO_PARENT, 0)));
    }

    #[test]
    fn stops_when_frontier_is_empty() {
        let start = Point::new(0, 0);
        let finish = Point::new(9, 9);
        let (visited, parents) = astar_grid(&start, &finish, line_successors(3), |_| 0);
        assert_eq!(visited.len(), 3);
        assert!(!visited.contains(&finish));
        assert!(!parents.contains_key(&finish));
    }
}

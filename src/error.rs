use grid_util::point::Point;
use thiserror::Error;

/// Invalid input to a grid edit or a search. An unreachable finish is not an error; it shows
/// up as an empty path instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("grid dimensions {rows}x{cols} are invalid, both must be at least 1")]
    InvalidDimensions { rows: usize, cols: usize },

    #[error("{0} lies outside the grid")]
    OutOfBounds(Point),

    #[error("{0} is a wall and cannot be used as an endpoint")]
    WallEndpoint(Point),

    #[error("{0} holds the start or finish marker and cannot become a wall")]
    EndpointWall(Point),

    #[error("start and finish markers cannot share {0}")]
    EndpointOverlap(Point),
}

/// Returned when parsing an [Algorithm](crate::solver::Algorithm) name fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown algorithm {0:?}, expected \"dijkstra\" or \"astar\"")]
pub struct UnknownAlgorithm(pub String);

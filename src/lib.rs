//! # grid_astar
//!
//! [A*](https://en.wikipedia.org/wiki/A*_search_algorithm) pathfinding on a bounded integer grid
//! with polygonal obstacles. Cells lying inside or on the boundary of any obstacle are blocked.
//! Moves are 4-connected or 8-connected and every move has the same cost, including diagonal
//! ones, so paths are shortest in the number of steps.
//!
//! ```
//! use grid_astar::{find_path, Bounds, Connectivity, Polygon};
//! use grid_util::point::Point;
//!
//! let obstacles = [Polygon::rect(4.0, 4.0, 6.0, 6.0)];
//! let path = find_path(
//!     Point::new(1, 1),
//!     Point::new(9, 9),
//!     &obstacles,
//!     &Bounds::new(10, 10),
//!     Connectivity::Four,
//! )
//! .unwrap();
//! assert_eq!(path.len(), 17);
//! ```
pub mod astar;
pub mod connectivity;
pub mod error;
pub mod geometry;
pub mod heuristic;
pub mod pathfinder;

use grid_util::point::Point;
use itertools::Itertools;

pub use crate::connectivity::Connectivity;
pub use crate::error::{Endpoint, EndpointIssue, SearchError};
pub use crate::geometry::{Bounds, ContainsPoint, Polygon};
pub use crate::heuristic::Heuristic;
pub use crate::pathfinder::GridAStarPathfinder;

/// Cost of a single move in fixed-point units. Heuristic values are scaled by the same factor.
pub const C: i32 = 100;

/// Inline capacity of neighbour lists, enough for a full Moore neighbourhood.
pub const N_SMALLVEC_SIZE: usize = 8;

/// Finds a shortest path with a [GridAStarPathfinder] using the default heuristic for
/// `connectivity`. See [GridAStarPathfinder::find_path].
pub fn find_path<O: ContainsPoint>(
    start: Point,
    goal: Point,
    obstacles: &[O],
    bounds: &Bounds,
    connectivity: Connectivity,
) -> Result<Vec<Point>, SearchError> {
    GridAStarPathfinder::new(connectivity).find_path(start, goal, obstacles, bounds)
}

/// Number of moves along the path.
pub fn path_cost(path: &[Point]) -> usize {
    path.len().saturating_sub(1)
}

/// Euclidean length of the polyline through the cell centres.
pub fn geometric_length(path: &[Point]) -> f64 {
    path.iter()
        .tuple_windows()
        .map(|(a, b)| (b.x as f64 - a.x as f64).hypot(b.y as f64 - a.y as f64))
        .sum()
}

/// Checks that every consecutive pair of cells is a single move under `connectivity`.
pub fn is_contiguous(path: &[Point], connectivity: Connectivity) -> bool {
    path.iter()
        .tuple_windows()
        .all(|(a, b)| connectivity.is_step(a, b))
}

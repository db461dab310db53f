use grid_util::point::Point;
use log::{debug, info};
use smallvec::SmallVec;

use crate::astar::astar;
use crate::connectivity::Connectivity;
use crate::error::{Endpoint, EndpointIssue, SearchError};
use crate::geometry::{Bounds, ContainsPoint};
use crate::heuristic::Heuristic;
use crate::{C, N_SMALLVEC_SIZE};

/// A* over the cells of a bounded grid, avoiding every cell that lies inside (or on the boundary
/// of) one of the obstacles. Each move costs [C] regardless of direction.
///
/// The pathfinder only holds configuration; all search state is created per call, so a single
/// instance can be shared between threads.
#[derive(Clone, Debug)]
pub struct GridAStarPathfinder {
    pub connectivity: Connectivity,
    pub heuristic: Heuristic,
    /// Multiplies the heuristic. Values above 1 expand fewer cells but may return longer paths.
    pub heuristic_factor: f32,
    /// Upper bound on the number of expanded cells, unbounded if [None].
    pub max_expansions: Option<usize>,
}

impl Default for GridAStarPathfinder {
    fn default() -> GridAStarPathfinder {
        GridAStarPathfinder::new(Connectivity::default())
    }
}

impl GridAStarPathfinder {
    /// Creates a pathfinder with the admissible default heuristic for the connectivity:
    /// [Heuristic::Euclidean] for 4-connected grids and [Heuristic::Chebyshev] for 8-connected
    /// ones, where straight-line distance would overestimate unit-cost diagonal moves.
    pub fn new(connectivity: Connectivity) -> GridAStarPathfinder {
        let heuristic = match connectivity {
            Connectivity::Four => Heuristic::Euclidean,
            Connectivity::Eight => Heuristic::Chebyshev,
        };
        GridAStarPathfinder {
            connectivity,
            heuristic,
            heuristic_factor: 1.0,
            max_expansions: None,
        }
    }

    pub fn with_heuristic(mut self, heuristic: Heuristic) -> Self {
        self.heuristic = heuristic;
        self
    }

    pub fn with_heuristic_factor(mut self, heuristic_factor: f32) -> Self {
        self.heuristic_factor = heuristic_factor;
        self
    }

    pub fn with_max_expansions(mut self, max_expansions: usize) -> Self {
        self.max_expansions = Some(max_expansions);
        self
    }

    /// Heuristic value in integer cost units, truncated so that it never rounds up. Distances too
    /// large for `i32` saturate at `i32::MAX`.
    pub fn heuristic(&self, p1: &Point, p2: &Point) -> i32 {
        (self.heuristic.estimate(p1, p2) * C as f64 * self.heuristic_factor as f64) as i32
    }

    /// Whether `point` is inside the bounds and not covered by any obstacle.
    pub fn can_move_to<O: ContainsPoint>(
        &self,
        point: &Point,
        obstacles: &[O],
        bounds: &Bounds,
    ) -> bool {
        bounds.contains(point) && !obstacles.iter().any(|o| o.contains_point(point))
    }

    /// Traversable neighbours of `pos` paired with the cost of moving there.
    pub fn neighborhood_points_and_cost<O: ContainsPoint>(
        &self,
        pos: &Point,
        obstacles: &[O],
        bounds: &Bounds,
    ) -> SmallVec<[(Point, i32); N_SMALLVEC_SIZE]> {
        self.connectivity
            .neighborhood_points(pos)
            .into_iter()
            .filter(|p| self.can_move_to(p, obstacles, bounds))
            .map(|p| (p, C))
            .collect()
    }

    fn check_endpoint<O: ContainsPoint>(
        endpoint: Endpoint,
        point: &Point,
        obstacles: &[O],
        bounds: &Bounds,
    ) -> Result<(), SearchError> {
        let issue = if !bounds.contains(point) {
            Some(EndpointIssue::OutOfBounds)
        } else {
            obstacles
                .iter()
                .position(|o| o.contains_point(point))
                .map(|index| EndpointIssue::InsideObstacle { index })
        };
        match issue {
            Some(issue) => Err(SearchError::InvalidEndpoint {
                endpoint,
                point: *point,
                issue,
            }),
            None => Ok(()),
        }
    }

    /// Computes a shortest path from `start` to `goal`, both included.
    ///
    /// An unreachable goal yields an empty path. Endpoints outside the bounds or inside an
    /// obstacle are rejected with [SearchError::InvalidEndpoint] before searching.
    pub fn find_path<O: ContainsPoint>(
        &self,
        start: Point,
        goal: Point,
        obstacles: &[O],
        bounds: &Bounds,
    ) -> Result<Vec<Point>, SearchError> {
        Self::check_endpoint(Endpoint::Start, &start, obstacles, bounds)?;
        Self::check_endpoint(Endpoint::Goal, &goal, obstacles, bounds)?;
        debug!(
            "Searching from {} to {} on {:?} ({:?}, {:?})",
            start, goal, bounds, self.connectivity, self.heuristic
        );
        let result = astar(
            &start,
            |node| self.neighborhood_points_and_cost(node, obstacles, bounds),
            |point| self.heuristic(point, &goal),
            |point| *point == goal,
            self.max_expansions,
        )?;
        match result {
            Some((path, _cost)) => Ok(path),
            None => {
                info!("{} is not reachable from {}", goal, start);
                Ok(Vec::new())
            }
        }
    }
}

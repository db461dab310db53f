//! Errors reported by [GridAStarPathfinder](crate::GridAStarPathfinder).
//!
//! Note that an unreachable goal is not an error: the search returns an empty path instead.
use grid_util::point::Point;
use thiserror::Error;

/// Why an endpoint was rejected before searching.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EndpointIssue {
    /// The point lies outside the grid bounds.
    OutOfBounds,
    /// The point lies inside (or on the boundary of) the obstacle with this index.
    InsideObstacle { index: usize },
}

/// Which endpoint of the search a [SearchError::InvalidEndpoint] refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    Goal,
}

#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum SearchError {
    /// Start or goal cannot be occupied.
    #[error("{endpoint:?} ({}, {}) is not traversable: {issue:?}", .point.x, .point.y)]
    InvalidEndpoint {
        endpoint: Endpoint,
        point: Point,
        issue: EndpointIssue,
    },

    /// The search expanded more cells than the configured budget allows.
    #[error("search budget exceeded after expanding {expansions} cells")]
    SearchBudgetExceeded { expansions: usize },
}

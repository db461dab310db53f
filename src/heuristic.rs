use core::f64::consts::SQRT_2;
use grid_util::point::Point;

/// Estimates of the remaining number of steps to the goal, in unit step costs.
///
/// Every step costs the same, including diagonal ones. Under 4-connectivity all variants are
/// admissible. Under 8-connectivity only [Heuristic::Chebyshev] is, since a diagonal step covers
/// a Euclidean distance of √2 for the price of one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Heuristic {
    /// Straight-line distance between cell centres.
    Euclidean,
    Manhattan,
    /// `max(dx, dy)`, the exact step count on an open 8-connected grid.
    Chebyshev,
    /// `max(dx, dy) + (√2 - 1) * min(dx, dy)`, the length of the shortest octile path.
    Octile,
}

impl Heuristic {
    pub fn estimate(self, p1: &Point, p2: &Point) -> f64 {
        let dx = (p1.x as f64 - p2.x as f64).abs();
        let dy = (p1.y as f64 - p2.y as f64).abs();
        match self {
            Heuristic::Euclidean => dx.hypot(dy),
            Heuristic::Manhattan => dx + dy,
            Heuristic::Chebyshev => dx.max(dy),
            Heuristic::Octile => dx.max(dy) + (SQRT_2 - 1.0) * dx.min(dy),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn estimates() {
        let a = Point::new(1, 1);
        let b = Point::new(4, 5);
        assert_eq!(Heuristic::Euclidean.estimate(&a, &b), 5.0);
        assert_eq!(Heuristic::Manhattan.estimate(&a, &b), 7.0);
        assert_eq!(Heuristic::Chebyshev.estimate(&a, &b), 4.0);
        let octile = Heuristic::Octile.estimate(&a, &b);
        assert!((octile - (4.0 + 3.0 * (SQRT_2 - 1.0))).abs() < 1e-12);
        for h in [
            Heuristic::Euclidean,
            Heuristic::Manhattan,
            Heuristic::Chebyshev,
            Heuristic::Octile,
        ] {
            assert_eq!(h.estimate(&a, &a), 0.0);
            assert_eq!(h.estimate(&a, &b), h.estimate(&b, &a));
        }
        let (west, east) = (Point::new(i32::MIN, 0), Point::new(i32::MAX, 0));
        assert_eq!(Heuristic::Manhattan.estimate(&west, &east), u32::MAX as f64);
    }
}

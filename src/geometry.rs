//! Grid extents and obstacle shapes.
use grid_util::point::Point;

/// Tolerance used when deciding whether a point lies on a polygon edge.
const EDGE_EPSILON: f64 = 1e-9;

/// Anything that can block a cell of the grid. Points on the boundary of a region count as
/// contained.
pub trait ContainsPoint {
    fn contains_point(&self, point: &Point) -> bool;
}

impl<T: ContainsPoint + ?Sized> ContainsPoint for &T {
    fn contains_point(&self, point: &Point) -> bool {
        (**self).contains_point(point)
    }
}

impl<T: ContainsPoint + ?Sized> ContainsPoint for Box<T> {
    fn contains_point(&self, point: &Point) -> bool {
        (**self).contains_point(point)
    }
}

/// The inclusive rectangle `[0, max_x] x [0, max_y]` of traversable cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Bounds {
    pub max_x: i32,
    pub max_y: i32,
}

impl Bounds {
    pub fn new(max_x: i32, max_y: i32) -> Bounds {
        Bounds { max_x, max_y }
    }
    pub fn contains(&self, point: &Point) -> bool {
        point.x >= 0 && point.y >= 0 && point.x <= self.max_x && point.y <= self.max_y
    }
    /// Number of columns, 0 if the bounds are empty.
    pub fn width(&self) -> usize {
        (self.max_x as i64 + 1).max(0) as usize
    }
    /// Number of rows, 0 if the bounds are empty.
    pub fn height(&self) -> usize {
        (self.max_y as i64 + 1).max(0) as usize
    }
    /// Iterates over all cells, row by row.
    pub fn cells(&self) -> impl Iterator<Item = Point> {
        let max_x = self.max_x;
        (0..=self.max_y).flat_map(move |y| (0..=max_x).map(move |x| Point::new(x, y)))
    }
}

/// A simple (non self-intersecting) polygon, possibly concave. The closing edge from the last
/// vertex back to the first is implicit.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    vertices: Vec<(f64, f64)>,
    min: (f64, f64),
    max: (f64, f64),
}

impl Polygon {
    pub fn new<I>(vertices: I) -> Polygon
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        let vertices = vertices.into_iter().collect::<Vec<_>>();
        let mut min = (f64::INFINITY, f64::INFINITY);
        let mut max = (f64::NEG_INFINITY, f64::NEG_INFINITY);
        for &(x, y) in &vertices {
            min = (min.0.min(x), min.1.min(y));
            max = (max.0.max(x), max.1.max(y));
        }
        Polygon { vertices, min, max }
    }

    /// Axis-aligned rectangle spanning the two corners.
    pub fn rect(x0: f64, y0: f64, x1: f64, y1: f64) -> Polygon {
        Polygon::new([(x0, y0), (x1, y0), (x1, y1), (x0, y1)])
    }

    pub fn vertices(&self) -> &[(f64, f64)] {
        &self.vertices
    }

    /// Lower-left and upper-right corners of the bounding box. Inverted (infinite) for a polygon
    /// without vertices.
    pub fn bounding_box(&self) -> ((f64, f64), (f64, f64)) {
        (self.min, self.max)
    }

    fn edges(&self) -> impl Iterator<Item = ((f64, f64), (f64, f64))> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| (self.vertices[i], self.vertices[(i + 1) % n]))
    }
}

fn on_segment(p: (f64, f64), a: (f64, f64), b: (f64, f64)) -> bool {
    let cross = (b.0 - a.0) * (p.1 - a.1) - (b.1 - a.1) * (p.0 - a.0);
    if cross.abs() > EDGE_EPSILON * (1.0 + (b.0 - a.0).abs() + (b.1 - a.1).abs()) {
        return false;
    }
    p.0 >= a.0.min(b.0) - EDGE_EPSILON
        && p.0 <= a.0.max(b.0) + EDGE_EPSILON
        && p.1 >= a.1.min(b.1) - EDGE_EPSILON
        && p.1 <= a.1.max(b.1) + EDGE_EPSILON
}

impl ContainsPoint for Polygon {
    /// Even-odd ray casting towards +x, after an explicit boundary check so that points on an
    /// edge or vertex are always inside.
    fn contains_point(&self, point: &Point) -> bool {
        let p = (point.x as f64, point.y as f64);
        if p.0 < self.min.0 - EDGE_EPSILON
            || p.0 > self.max.0 + EDGE_EPSILON
            || p.1 < self.min.1 - EDGE_EPSILON
            || p.1 > self.max.1 + EDGE_EPSILON
        {
            return false;
        }
        if self.edges().any(|(a, b)| on_segment(p, a, b)) {
            return true;
        }
        if self.vertices.len() < 3 {
            return false;
        }
        let mut inside = false;
        for (a, b) in self.edges() {
            // Half-open rule on y so a ray through a vertex is counted once.
            if (a.1 > p.1) != (b.1 > p.1) {
                let x_cross = a.0 + (p.1 - a.1) * (b.0 - a.0) / (b.1 - a.1);
                if p.0 < x_cross {
                    inside = !inside;
                }
            }
        }
        inside
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_are_inclusive() {
        let bounds = Bounds::new(2, 3);
        assert!(bounds.contains(&Point::new(0, 0)));
        assert!(bounds.contains(&Point::new(2, 3)));
        assert!(!bounds.contains(&Point::new(3, 3)));
        assert!(!bounds.contains(&Point::new(-1, 0)));
        assert_eq!(bounds.width(), 3);
        assert_eq!(bounds.height(), 4);
        assert_eq!(bounds.cells().count(), 12);
        assert_eq!(Bounds::new(-1, 5).width(), 0);
        let widest = Bounds::new(i32::MAX, 0);
        assert_eq!(widest.width(), 1usize << 31);
        assert_eq!(widest.height(), 1);
    }

    #[test]
    fn rect_interior_and_boundary_are_contained() {
        let square = Polygon::rect(4.0, 4.0, 6.0, 6.0);
        assert!(square.contains_point(&Point::new(5, 5)));
        // Edges and corners
        assert!(square.contains_point(&Point::new(4, 5)));
        assert!(square.contains_point(&Point::new(6, 6)));
        assert!(square.contains_point(&Point::new(5, 4)));
        assert!(!square.contains_point(&Point::new(7, 5)));
        assert!(!square.contains_point(&Point::new(3, 3)));
    }

    #[test]
    fn concave_polygon_notch_is_outside() {
        // U shape opening upwards:
        // #.#
        // #.#
        // ###
        let u = Polygon::new([
            (0.0, 0.0),
            (6.0, 0.0),
            (6.0, 6.0),
            (4.0, 6.0),
            (4.0, 2.0),
            (2.0, 2.0),
            (2.0, 6.0),
            (0.0, 6.0),
        ]);
        assert!(!u.contains_point(&Point::new(3, 4)));
        assert!(u.contains_point(&Point::new(1, 4)));
        assert!(u.contains_point(&Point::new(5, 4)));
        assert!(u.contains_point(&Point::new(3, 1)));
        // Lies on the notch floor
        assert!(u.contains_point(&Point::new(3, 2)));
    }

    #[test]
    fn ray_through_vertex_counts_once() {
        let diamond = Polygon::new([(2.0, 0.0), (4.0, 2.0), (2.0, 4.0), (0.0, 2.0)]);
        assert!(diamond.contains_point(&Point::new(2, 2)));
        assert!(diamond.contains_point(&Point::new(1, 2)));
        assert!(!diamond.contains_point(&Point::new(-1, 2)));
        assert!(!diamond.contains_point(&Point::new(0, 0)));
    }

    #[test]
    fn fractional_vertices() {
        let sliver = Polygon::rect(2.5, 0.5, 3.5, 1.5);
        assert!(sliver.contains_point(&Point::new(3, 1)));
        assert!(!sliver.contains_point(&Point::new(2, 1)));
    }

    #[test]
    fn degenerate_polygons_only_contain_their_edges() {
        let segment = Polygon::new([(0.0, 0.0), (4.0, 0.0)]);
        assert!(segment.contains_point(&Point::new(2, 0)));
        assert!(!segment.contains_point(&Point::new(2, 1)));
        let empty = Polygon::new(Vec::<(f64, f64)>::new());
        assert!(!empty.contains_point(&Point::new(0, 0)));
    }
}

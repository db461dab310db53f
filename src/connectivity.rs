use grid_util::point::Point;
use smallvec::SmallVec;

use crate::N_SMALLVEC_SIZE;

/// Orthogonal moves, in expansion order: west, east, south, north.
static NEUMANN_OFFSETS: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
/// Diagonal moves appended after the orthogonal ones for 8-connectivity.
static DIAGONAL_OFFSETS: [(i32, i32); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// The set of unit moves allowed from a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Connectivity {
    /// Von Neumann neighbourhood.
    Four,
    /// Moore neighbourhood. Diagonal steps cost the same as orthogonal ones.
    #[default]
    Eight,
}

impl Connectivity {
    pub fn allows_diagonal(self) -> bool {
        self == Connectivity::Eight
    }

    /// The move offsets in the fixed order in which neighbours are generated.
    pub fn offsets(self) -> impl Iterator<Item = (i32, i32)> {
        let diagonals: &'static [(i32, i32)] = if self.allows_diagonal() {
            &DIAGONAL_OFFSETS
        } else {
            &[]
        };
        NEUMANN_OFFSETS.iter().chain(diagonals).copied()
    }

    /// Neighbours of `point` in offset order. Offsets that would leave the `i32` range are
    /// skipped.
    pub fn neighborhood_points(self, point: &Point) -> SmallVec<[Point; N_SMALLVEC_SIZE]> {
        self.offsets()
            .filter_map(|(dx, dy)| {
                Some(Point::new(
                    point.x.checked_add(dx)?,
                    point.y.checked_add(dy)?,
                ))
            })
            .collect()
    }

    /// Whether `b` can be reached from `a` in exactly one move.
    pub fn is_step(self, a: &Point, b: &Point) -> bool {
        match (b.x.checked_sub(a.x), b.y.checked_sub(a.y)) {
            (Some(dx), Some(dy)) => self.offsets().any(|offset| offset == (dx, dy)),
            _ => false,
        }
    }

    /// Minimal number of moves between two cells on an open grid, saturating at `i32::MAX`.
    pub fn move_distance(self, a: &Point, b: &Point) -> i32 {
        let dx = a.x.saturating_sub(b.x).saturating_abs();
        let dy = a.y.saturating_sub(b.y).saturating_abs();
        match self {
            Connectivity::Four => dx.saturating_add(dy),
            Connectivity::Eight => dx.max(dy),
        }
    }
}

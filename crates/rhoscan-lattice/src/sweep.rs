//! Halo-aware lattice traversals.
//!
//! Every traversal exists in two forms: an iterator of [`LatticeCoord`]
//! ([`Sweep`]) and a visitor method taking `FnMut(x, y, z)`. Both visit the
//! same cells in the same order.
//!
//! | Traversal | Range per axis | Order (outer → inner) |
//! |-----------|----------------|------------------------|
//! | [`interior`](LatticeGeometry::interior) / `skip_bounds` | `[1, M]` | z, y, x |
//! | [`with_halo`](LatticeGeometry::with_halo) / `system_plus_bounds` | `[0, M+1]` | z, y, x |
//! | X faces | x fixed, y and z `[0, M+1]` | y, z |
//! | Y faces | y fixed, x and z `[0, M+1]` | x, z |
//! | Z faces | z fixed, x and y `[0, M+1]` | x, y |

use crate::dimensionality::Axis;
use crate::geometry::{LatticeCoord, LatticeGeometry, BOUNDARIES, HALO};

/// One of the six halo faces of a lattice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Face {
    /// `x = 0`.
    X0,
    /// `x = MX + 1`.
    XM,
    /// `y = 0`.
    Y0,
    /// `y = MY + 1`.
    YM,
    /// `z = 0`.
    Z0,
    /// `z = MZ + 1`.
    ZM,
}

impl Face {
    /// All six faces.
    pub const ALL: [Face; 6] = [Face::X0, Face::XM, Face::Y0, Face::YM, Face::Z0, Face::ZM];

    /// The axis this face holds fixed.
    pub fn axis(self) -> Axis {
        match self {
            Face::X0 | Face::XM => Axis::X,
            Face::Y0 | Face::YM => Axis::Y,
            Face::Z0 | Face::ZM => Axis::Z,
        }
    }

    /// Whether the face sits at `M + 1` rather than at 0.
    pub fn is_upper(self) -> bool {
        matches!(self, Face::XM | Face::YM | Face::ZM)
    }
}

/// Whether a full-field traversal includes the halo.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BoundaryMode {
    /// Visit the halo too ([`LatticeGeometry::with_halo`]).
    WithBounds,
    /// Interior only ([`LatticeGeometry::interior`]).
    #[default]
    WithoutBounds,
}

/// Iterator over a box of lattice coordinates in a fixed axis order.
///
/// The box is `[start, end)` per axis; `order` lists axes outermost first.
/// An empty range on any axis makes the whole sweep empty.
#[derive(Clone, Debug)]
pub struct Sweep {
    start: [usize; 3],
    end: [usize; 3],
    order: [Axis; 3],
    cursor: [usize; 3],
    remaining: usize,
}

impl Sweep {
    fn new(start: [usize; 3], end: [usize; 3], order: [Axis; 3]) -> Self {
        let remaining = (0..3)
            .map(|i| end[i].saturating_sub(start[i]))
            .product();
        Self {
            start,
            end,
            order,
            cursor: start,
            remaining,
        }
    }

    fn advance(&mut self) {
        for &axis in self.order.iter().rev() {
            let i = axis.position();
            self.cursor[i] += 1;
            if self.cursor[i] < self.end[i] {
                return;
            }
            self.cursor[i] = self.start[i];
        }
    }
}

impl Iterator for Sweep {
    type Item = LatticeCoord;

    fn next(&mut self) -> Option<LatticeCoord> {
        if self.remaining == 0 {
            return None;
        }
        let current = LatticeCoord::from_array(self.cursor);
        self.remaining -= 1;
        if self.remaining > 0 {
            self.advance();
        }
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Sweep {}

impl std::iter::FusedIterator for Sweep {}

impl LatticeGeometry {
    fn spans(&self) -> [usize; 3] {
        let e = self.extents();
        [e.mx + BOUNDARIES, e.my + BOUNDARIES, e.mz + BOUNDARIES]
    }

    /// Interior cells, each axis over `[1, M]`, x fastest.
    ///
    /// Yields exactly `MX * MY * MZ` coordinates, so a lattice with an
    /// empty axis (including the inactive axes of 1D and 2D lattices)
    /// has no interior sweep.
    pub fn interior(&self) -> Sweep {
        let e = self.extents();
        Sweep::new(
            [HALO; 3],
            [e.mx + HALO, e.my + HALO, e.mz + HALO],
            [Axis::Z, Axis::Y, Axis::X],
        )
    }

    /// Every cell including the halo, each axis over `[0, M+1]`, x fastest.
    pub fn with_halo(&self) -> Sweep {
        Sweep::new([0; 3], self.spans(), [Axis::Z, Axis::Y, Axis::X])
    }

    /// Cells of one halo face.
    ///
    /// ```
    /// use rhoscan_lattice::{Dimensionality, Extents, Face, LatticeGeometry};
    ///
    /// let g = LatticeGeometry::new(Extents::new(2, 3, 4), Dimensionality::Three).unwrap();
    /// let cells: Vec<_> = g.face(Face::XM).collect();
    /// assert_eq!(cells.len(), 5 * 6);
    /// assert!(cells.iter().all(|c| c.x == 3));
    /// ```
    pub fn face(&self, face: Face) -> Sweep {
        let spans = self.spans();
        let fixed = face.axis().position();
        let mut start = [0; 3];
        let mut end = spans;
        if face.is_upper() {
            start[fixed] = spans[fixed] - 1;
        } else {
            end[fixed] = 1;
        }
        let order = match face.axis() {
            Axis::X => [Axis::X, Axis::Y, Axis::Z],
            Axis::Y => [Axis::Y, Axis::X, Axis::Z],
            Axis::Z => [Axis::Z, Axis::X, Axis::Y],
        };
        Sweep::new(start, end, order)
    }

    /// [`with_halo`](Self::with_halo) or [`interior`](Self::interior),
    /// depending on `mode`.
    pub fn sweep(&self, mode: BoundaryMode) -> Sweep {
        match mode {
            BoundaryMode::WithBounds => self.with_halo(),
            BoundaryMode::WithoutBounds => self.interior(),
        }
    }

    /// Call `visit(x, y, z)` for every interior cell.
    pub fn skip_bounds(&self, visit: impl FnMut(usize, usize, usize)) {
        drive(self.interior(), visit);
    }

    /// Call `visit(x, y, z)` for every cell, halo included.
    pub fn system_plus_bounds(&self, visit: impl FnMut(usize, usize, usize)) {
        drive(self.with_halo(), visit);
    }

    /// Call `visit(x, y, z)` for every cell of `face`.
    pub fn boundary(&self, face: Face, visit: impl FnMut(usize, usize, usize)) {
        drive(self.face(face), visit);
    }

    /// Call `visit(x, y, z)` for every cell selected by `mode`.
    pub fn visit(&self, mode: BoundaryMode, visit: impl FnMut(usize, usize, usize)) {
        drive(self.sweep(mode), visit);
    }
}

fn drive(sweep: Sweep, mut visit: impl FnMut(usize, usize, usize)) {
    for c in sweep {
        visit(c.x, c.y, c.z);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Dimensionality, Extents};

    fn cube(mx: usize, my: usize, mz: usize) -> LatticeGeometry {
        LatticeGeometry::new(Extents::new(mx, my, mz), Dimensionality::Three).unwrap()
    }

    #[test]
    fn interior_order_is_x_fastest() {
        let g = cube(2, 2, 1);
        let cells: Vec<(usize, usize, usize)> = g.interior().map(|c| (c.x, c.y, c.z)).collect();
        assert_eq!(cells, vec![(1, 1, 1), (2, 1, 1), (1, 2, 1), (2, 2, 1)]);
    }

    #[test]
    fn skip_bounds_matches_interior_iterator() {
        let g = cube(3, 2, 4);
        let mut visited = Vec::new();
        g.skip_bounds(|x, y, z| visited.push(LatticeCoord::new(x, y, z)));
        assert_eq!(visited, g.interior().collect::<Vec<_>>());
        assert_eq!(visited.len(), 24);
    }

    #[test]
    fn system_plus_bounds_visits_every_offset_once() {
        let g = cube(3, 2, 4);
        let mut hits = vec![0u32; g.system_size()];
        g.system_plus_bounds(|x, y, z| hits[g.index(x, y, z)] += 1);
        assert!(hits.iter().all(|&h| h == 1));
    }

    #[test]
    fn with_halo_starts_and_ends_at_corners() {
        let g = cube(2, 3, 4);
        let cells: Vec<_> = g.with_halo().collect();
        assert_eq!(cells.first(), Some(&LatticeCoord::new(0, 0, 0)));
        assert_eq!(cells.get(1), Some(&LatticeCoord::new(1, 0, 0)));
        assert_eq!(cells.last(), Some(&LatticeCoord::new(3, 4, 5)));
    }

    #[test]
    fn face_orders() {
        let g = cube(1, 1, 1);
        let x0: Vec<_> = g.face(Face::X0).take(3).collect();
        assert_eq!(
            x0,
            vec![
                LatticeCoord::new(0, 0, 0),
                LatticeCoord::new(0, 0, 1),
                LatticeCoord::new(0, 0, 2)
            ]
        );
        let ym: Vec<_> = g.face(Face::YM).take(4).collect();
        assert_eq!(ym[3], LatticeCoord::new(1, 2, 0));
        let z0: Vec<_> = g.face(Face::Z0).take(4).collect();
        assert_eq!(z0[3], LatticeCoord::new(1, 0, 0));
    }

    #[test]
    fn faces_fix_one_axis() {
        let g = cube(2, 3, 4);
        for face in Face::ALL {
            let axis = face.axis();
            let expected = if face.is_upper() { g.extent(axis) + 1 } else { 0 };
            let mut count = 0;
            g.boundary(face, |x, y, z| {
                assert_eq!(LatticeCoord::new(x, y, z).get(axis), expected, "{face:?}");
                count += 1;
            });
            let spans = [4, 5, 6];
            let others: usize = Axis::ALL
                .iter()
                .filter(|&&a| a != axis)
                .map(|a| spans[a.position()])
                .product();
            assert_eq!(count, others, "{face:?}");
        }
    }

    #[test]
    fn boundary_mode_selects_sweep() {
        let g = cube(2, 2, 2);
        assert_eq!(g.sweep(BoundaryMode::WithBounds).len(), 64);
        assert_eq!(g.sweep(BoundaryMode::WithoutBounds).len(), 8);
        let mut n = 0;
        g.visit(BoundaryMode::default(), |_, _, _| n += 1);
        assert_eq!(n, 8);
    }

    #[test]
    fn empty_axis_gives_empty_interior() {
        let g = cube(0, 3, 3);
        assert_eq!(g.interior().count(), 0);
        assert_eq!(g.with_halo().count(), 2 * 5 * 5);
    }

    #[test]
    fn sweep_reports_exact_size() {
        let g = cube(3, 3, 3);
        let mut s = g.interior();
        assert_eq!(s.len(), 27);
        s.next();
        assert_eq!(s.size_hint(), (26, Some(26)));
        assert_eq!(s.by_ref().count(), 26);
        assert_eq!(s.next(), None);
    }
}

//! Lattice extents, strides, and coordinate/index conversion.

use crate::dimensionality::{Axis, Dimensionality};
use crate::error::LatticeError;
use std::fmt;

/// Width of the halo on each side of a bounded axis.
pub const HALO: usize = 1;

/// Halo cells added per axis (one on each side).
pub const BOUNDARIES: usize = 2 * HALO;

/// Interior extents `MX, MY, MZ`, excluding the halo.
///
/// Axes beyond a lattice's dimensionality must be 0.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Extents {
    /// Interior cells along x.
    pub mx: usize,
    /// Interior cells along y.
    pub my: usize,
    /// Interior cells along z.
    pub mz: usize,
}

impl Extents {
    /// Extents for all three axes.
    pub fn new(mx: usize, my: usize, mz: usize) -> Self {
        Self { mx, my, mz }
    }

    /// Extents of a 1D line.
    pub fn line(mx: usize) -> Self {
        Self::new(mx, 0, 0)
    }

    /// Extents of a 2D plane.
    pub fn plane(mx: usize, my: usize) -> Self {
        Self::new(mx, my, 0)
    }

    /// Interior extent along `axis`.
    pub fn get(&self, axis: Axis) -> usize {
        match axis {
            Axis::X => self.mx,
            Axis::Y => self.my,
            Axis::Z => self.mz,
        }
    }

    /// Number of interior cells, `MX*MY*MZ`.
    pub fn interior_cells(&self) -> usize {
        self.mx * self.my * self.mz
    }
}

impl fmt::Display for Extents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}x{}", self.mx, self.my, self.mz)
    }
}

/// A halo-inclusive lattice coordinate.
///
/// Components beyond the active dimensionality are 0 when produced by
/// [`LatticeGeometry::coordinate`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LatticeCoord {
    /// x component.
    pub x: usize,
    /// y component.
    pub y: usize,
    /// z component.
    pub z: usize,
}

impl LatticeCoord {
    /// Build a coordinate from its components.
    pub fn new(x: usize, y: usize, z: usize) -> Self {
        Self { x, y, z }
    }

    /// Component along `axis`.
    pub fn get(&self, axis: Axis) -> usize {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    /// Copy with every inactive component zeroed.
    pub fn masked(self, dimensionality: Dimensionality) -> Self {
        let keep = |axis: Axis, v: usize| if dimensionality.is_active(axis) { v } else { 0 };
        Self {
            x: keep(Axis::X, self.x),
            y: keep(Axis::Y, self.y),
            z: keep(Axis::Z, self.z),
        }
    }

    pub(crate) fn from_array(c: [usize; 3]) -> Self {
        Self::new(c[0], c[1], c[2])
    }
}

impl From<(usize, usize, usize)> for LatticeCoord {
    fn from((x, y, z): (usize, usize, usize)) -> Self {
        Self::new(x, y, z)
    }
}

impl fmt::Display for LatticeCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// Geometry of a halo-padded, depth-major lattice.
///
/// Maps halo-inclusive `(x, y, z)` coordinates onto a flat array where the
/// last active axis varies fastest. Every axis carries a one-cell halo, so
/// each coordinate component ranges over `[0, M+1]`.
///
/// Strides and the system size are computed by [`setup`](Self::setup);
/// extents cannot be changed any other way, so they are always in sync.
///
/// # Examples
///
/// ```
/// use rhoscan_lattice::{Dimensionality, Extents, LatticeGeometry};
///
/// let g = LatticeGeometry::new(Extents::new(4, 5, 6), Dimensionality::Three).unwrap();
/// assert_eq!(g.jumps(), (56, 8, 1));
/// assert_eq!(g.system_size(), 336);
///
/// let offset = g.index(2, 3, 4);
/// assert_eq!(g.coordinate(offset), (2, 3, 4).into());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LatticeGeometry {
    extents: Extents,
    dimensionality: Dimensionality,
    jump_x: usize,
    jump_y: usize,
    jump_z: usize,
    system_size: usize,
}

impl LatticeGeometry {
    /// Set up a geometry for the given interior extents.
    ///
    /// # Errors
    ///
    /// See [`setup`](Self::setup).
    pub fn new(extents: Extents, dimensionality: Dimensionality) -> Result<Self, LatticeError> {
        let mut geometry = Self {
            extents: Extents::default(),
            dimensionality: Dimensionality::One,
            jump_x: 1,
            jump_y: 0,
            jump_z: 0,
            system_size: BOUNDARIES * BOUNDARIES * BOUNDARIES,
        };
        geometry.setup(extents, dimensionality)?;
        Ok(geometry)
    }

    /// Recompute strides and system size from `extents`.
    ///
    /// On error the geometry is left unchanged.
    ///
    /// # Errors
    ///
    /// - [`LatticeError::InactiveAxisExtent`] if an axis beyond
    ///   `dimensionality` has a nonzero extent.
    /// - [`LatticeError::SizeOverflow`] if the halo-inclusive cell count
    ///   does not fit in `usize`.
    pub fn setup(
        &mut self,
        extents: Extents,
        dimensionality: Dimensionality,
    ) -> Result<(), LatticeError> {
        for &axis in &Axis::ALL[dimensionality.get()..] {
            let extent = extents.get(axis);
            if extent != 0 {
                return Err(LatticeError::InactiveAxisExtent {
                    axis,
                    extent,
                    dimensionality,
                });
            }
        }

        let overflow = || LatticeError::SizeOverflow { extents };
        let span = |m: usize| m.checked_add(BOUNDARIES).ok_or_else(overflow);
        let (sx, sy, sz) = (span(extents.mx)?, span(extents.my)?, span(extents.mz)?);
        let system_size = sx
            .checked_mul(sy)
            .and_then(|n| n.checked_mul(sz))
            .ok_or_else(overflow)?;

        let (jump_x, jump_y, jump_z) = match dimensionality {
            Dimensionality::One => (1, 0, 0),
            Dimensionality::Two => (sy, 1, 0),
            Dimensionality::Three => (sy * sz, sz, 1),
        };

        self.extents = extents;
        self.dimensionality = dimensionality;
        self.jump_x = jump_x;
        self.jump_y = jump_y;
        self.jump_z = jump_z;
        self.system_size = system_size;
        Ok(())
    }

    /// Interior extents.
    pub fn extents(&self) -> Extents {
        self.extents
    }

    /// Interior extent along `axis`.
    pub fn extent(&self, axis: Axis) -> usize {
        self.extents.get(axis)
    }

    /// Active dimensionality.
    pub fn dimensionality(&self) -> Dimensionality {
        self.dimensionality
    }

    /// Strides `(jump_x, jump_y, jump_z)`.
    pub fn jumps(&self) -> (usize, usize, usize) {
        (self.jump_x, self.jump_y, self.jump_z)
    }

    /// Stride along `axis`; 0 for inactive axes.
    pub fn stride(&self, axis: Axis) -> usize {
        match axis {
            Axis::X => self.jump_x,
            Axis::Y => self.jump_y,
            Axis::Z => self.jump_z,
        }
    }

    /// Flat length of a field on this lattice, halo included.
    pub fn system_size(&self) -> usize {
        self.system_size
    }

    /// Flat offset of `(x, y, z)`.
    ///
    /// Not bounds-checked: coordinates outside `[0, M+1]` silently alias
    /// other cells. Use [`checked_index`](Self::checked_index) for untrusted input.
    #[inline]
    pub fn index(&self, x: usize, y: usize, z: usize) -> usize {
        x * self.jump_x + y * self.jump_y + z * self.jump_z
    }

    /// Flat offset of `coord`, rejecting components outside `[0, M+1]`.
    pub fn checked_index(&self, coord: LatticeCoord) -> Result<usize, LatticeError> {
        let in_range = Axis::ALL
            .iter()
            .all(|&axis| coord.get(axis) <= self.extent(axis) + HALO);
        if !in_range {
            return Err(LatticeError::CoordOutOfBounds {
                coord,
                bounds: format!(
                    "[0, {}] x [0, {}] x [0, {}]",
                    self.extents.mx + HALO,
                    self.extents.my + HALO,
                    self.extents.mz + HALO,
                ),
            });
        }
        Ok(self.index(coord.x, coord.y, coord.z))
    }

    /// Inverse of [`index`](Self::index) by successive integer division.
    ///
    /// Components beyond the active dimensionality are 0.
    pub fn coordinate(&self, offset: usize) -> LatticeCoord {
        let mut coord = LatticeCoord::new(offset / self.jump_x, 0, 0);
        let mut rem = offset % self.jump_x;

        if self.dimensionality > Dimensionality::One {
            coord.y = rem / self.jump_y;
            rem %= self.jump_y;
        }
        if self.dimensionality > Dimensionality::Two {
            coord.z = rem / self.jump_z;
        }
        coord
    }

    /// Value of `field` at halo-inclusive `(x, y, z)`.
    ///
    /// `None` if the coordinate lies outside the halo-inclusive box or past
    /// the end of `field`.
    pub fn value<T: Copy>(&self, field: &[T], x: usize, y: usize, z: usize) -> Option<T> {
        let i = self.checked_index(LatticeCoord::new(x, y, z)).ok()?;
        field.get(i).copied()
    }

    /// Mutable reference into `field` at halo-inclusive `(x, y, z)`, with
    /// the same bounds as [`value`](Self::value).
    pub fn value_mut<'a, T>(
        &self,
        field: &'a mut [T],
        x: usize,
        y: usize,
        z: usize,
    ) -> Option<&'a mut T> {
        let i = self.checked_index(LatticeCoord::new(x, y, z)).ok()?;
        field.get_mut(i)
    }
}

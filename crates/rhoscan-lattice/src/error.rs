//! Error types for lattice construction and addressing.

use crate::dimensionality::{Axis, Dimensionality};
use crate::geometry::{Extents, LatticeCoord};
use std::fmt;

/// Errors arising from lattice setup or checked addressing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LatticeError {
    /// Only 1D, 2D and 3D lattices exist.
    UnsupportedDimensionality {
        /// The rejected dimensionality value.
        value: u8,
    },
    /// An axis beyond the active dimensionality was given a nonzero extent.
    InactiveAxisExtent {
        /// The inactive axis.
        axis: Axis,
        /// The extent it was given.
        extent: usize,
        /// Dimensionality of the lattice being set up.
        dimensionality: Dimensionality,
    },
    /// `(MX+2)*(MY+2)*(MZ+2)` does not fit in `usize`.
    SizeOverflow {
        /// The extents that overflowed.
        extents: Extents,
    },
    /// A coordinate lies outside the halo-inclusive range.
    CoordOutOfBounds {
        /// The offending coordinate.
        coord: LatticeCoord,
        /// Human-readable description of the valid range.
        bounds: String,
    },
}

impl fmt::Display for LatticeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedDimensionality { value } => {
                write!(f, "unsupported dimensionality {value}, expected 1, 2 or 3")
            }
            Self::InactiveAxisExtent {
                axis,
                extent,
                dimensionality,
            } => write!(
                f,
                "axis {axis} is inactive in a {dimensionality} lattice but has extent {extent}"
            ),
            Self::SizeOverflow { extents } => {
                write!(f, "system size for extents {extents} overflows usize")
            }
            Self::CoordOutOfBounds { coord, bounds } => {
                write!(f, "coordinate {coord} out of bounds: {bounds}")
            }
        }
    }
}

impl std::error::Error for LatticeError {}

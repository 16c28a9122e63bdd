//! Error types for edge detection.

use rhoscan_lattice::{Dimensionality, LatticeError};
use std::error::Error;
use std::fmt;

/// Errors from detector construction or a detection run.
#[derive(Clone, Debug, PartialEq)]
pub enum EdgeError {
    /// The lattice itself could not be set up.
    Lattice(LatticeError),
    /// The 3×3×3 stencil only exists for 3D lattices.
    UnsupportedDimensionality {
        /// Dimensionality of the rejected geometry.
        dimensionality: Dimensionality,
    },
    /// The density field does not cover the lattice, halo included.
    FieldLengthMismatch {
        /// `system_size` of the geometry.
        expected: usize,
        /// Length of the supplied field.
        found: usize,
    },
    /// A kernel and the window it is applied to differ in length.
    ShapeMismatch {
        /// Required number of weights.
        expected: usize,
        /// Number of weights supplied.
        found: usize,
    },
    /// The density field contains NaN or an infinity.
    NonFiniteDensity {
        /// Flat offset of the first offending cell.
        index: usize,
        /// The offending value.
        value: f64,
    },
    /// A [`DetectorConfig`](crate::DetectorConfig) invariant was violated.
    InvalidConfig {
        /// Description of which invariant was violated.
        reason: String,
    },
}

impl fmt::Display for EdgeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lattice(e) => write!(f, "lattice: {e}"),
            Self::UnsupportedDimensionality { dimensionality } => {
                write!(f, "edge detection needs a 3D lattice, got {dimensionality}")
            }
            Self::FieldLengthMismatch { expected, found } => write!(
                f,
                "density field has {found} cells, lattice needs {expected} (halo included)"
            ),
            Self::ShapeMismatch { expected, found } => {
                write!(f, "kernel has {found} weights, window has {expected}")
            }
            Self::NonFiniteDensity { index, value } => {
                write!(f, "non-finite density {value} at offset {index}")
            }
            Self::InvalidConfig { reason } => write!(f, "invalid detector config: {reason}"),
        }
    }
}

impl Error for EdgeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Lattice(e) => Some(e),
            _ => None,
        }
    }
}

impl From<LatticeError> for EdgeError {
    fn from(e: LatticeError) -> Self {
        Self::Lattice(e)
    }
}

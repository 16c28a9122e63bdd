//! Lattice dimensionality and axis naming.

use crate::error::LatticeError;
use std::fmt;

/// Number of active axes in a lattice.
///
/// # Examples
///
/// ```
/// use rhoscan_lattice::Dimensionality;
///
/// let dim = Dimensionality::try_from(3u8).unwrap();
/// assert_eq!(dim, Dimensionality::Three);
/// assert_eq!(dim.get(), 3);
/// assert!(Dimensionality::try_from(4u8).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Dimensionality {
    /// Only X is active.
    One = 1,
    /// X and Y are active.
    Two = 2,
    /// X, Y and Z are active.
    Three = 3,
}

impl Dimensionality {
    /// Number of active axes.
    pub fn get(self) -> usize {
        self as usize
    }

    /// Whether `axis` takes part in addressing at this dimensionality.
    pub fn is_active(self, axis: Axis) -> bool {
        axis.position() < self.get()
    }

    /// The active axes, slowest-varying first.
    pub fn active_axes(self) -> &'static [Axis] {
        &Axis::ALL[..self.get()]
    }
}

impl TryFrom<u8> for Dimensionality {
    type Error = LatticeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::One),
            2 => Ok(Self::Two),
            3 => Ok(Self::Three),
            _ => Err(LatticeError::UnsupportedDimensionality { value }),
        }
    }
}

impl fmt::Display for Dimensionality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}D", self.get())
    }
}

/// A lattice axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Axis {
    /// Slowest-varying axis in memory.
    X,
    /// Middle axis.
    Y,
    /// Fastest-varying axis in memory (3D).
    Z,
}

impl Axis {
    /// All three axes in `X, Y, Z` order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Position of this axis in `[x, y, z]` triples.
    pub fn position(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn try_from_accepts_one_to_three() {
        assert_eq!(Dimensionality::try_from(1u8).unwrap(), Dimensionality::One);
        assert_eq!(Dimensionality::try_from(2u8).unwrap(), Dimensionality::Two);
        assert_eq!(Dimensionality::try_from(3u8).unwrap(), Dimensionality::Three);
    }

    #[test]
    fn try_from_rejects_others() {
        for value in [0u8, 4, 255] {
            assert_eq!(
                Dimensionality::try_from(value),
                Err(LatticeError::UnsupportedDimensionality { value })
            );
        }
    }

    #[test]
    fn active_axes_follow_dimensionality() {
        assert_eq!(Dimensionality::One.active_axes(), &[Axis::X]);
        assert_eq!(Dimensionality::Two.active_axes(), &[Axis::X, Axis::Y]);
        assert_eq!(Dimensionality::Three.active_axes(), &Axis::ALL);
        assert!(!Dimensionality::Two.is_active(Axis::Z));
        assert!(Dimensionality::Three.is_active(Axis::Z));
    }

    #[test]
    fn display_names() {
        assert_eq!(Dimensionality::Two.to_string(), "2D");
        assert_eq!(Axis::Z.to_string(), "z");
    }
}

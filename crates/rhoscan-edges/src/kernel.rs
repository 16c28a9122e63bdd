//! 3×3 convolution kernels and the stacked 3×3×3 stencils built from them.
//!
//! Weights are flattened "horizontal, vertical" (or "horizontal, depth"):
//! entry `h * 3 + v` multiplies the cell at offset `h` along the first
//! plane axis and `v` along the second, matching [`crate::plane`].

use crate::error::EdgeError;

/// Side length of every kernel and window.
pub const WINDOW: usize = 3;

/// Number of weights in a 3×3 kernel.
pub const WINDOW_CELLS: usize = WINDOW * WINDOW;

/// Nine cell values read from one plane of the lattice.
pub type Plane3 = [f64; WINDOW_CELLS];

/// A flattened 3×3 kernel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Kernel3(pub [f64; WINDOW_CELLS]);

impl Kernel3 {
    /// The all-zero kernel.
    pub const ZERO: Kernel3 = Kernel3([0.0; WINDOW_CELLS]);

    /// Weights in flattened order.
    pub fn weights(&self) -> &[f64; WINDOW_CELLS] {
        &self.0
    }

    /// Dot product of the kernel with `plane`, accumulated in index order.
    #[inline]
    pub fn convolve(&self, plane: &Plane3) -> f64 {
        let mut acc = 0.0;
        for (k, p) in self.0.iter().zip(plane) {
            acc += k * p;
        }
        acc
    }

    /// Multiply every weight by `factor`.
    pub const fn scaled(self, factor: f64) -> Self {
        let mut weights = self.0;
        let mut i = 0;
        while i < WINDOW_CELLS {
            weights[i] = weights[i] * factor;
            i += 1;
        }
        Kernel3(weights)
    }
}

impl TryFrom<&[f64]> for Kernel3 {
    type Error = EdgeError;

    fn try_from(weights: &[f64]) -> Result<Self, Self::Error> {
        let array: [f64; WINDOW_CELLS] =
            weights.try_into().map_err(|_| EdgeError::ShapeMismatch {
                expected: WINDOW_CELLS,
                found: weights.len(),
            })?;
        Ok(Kernel3(array))
    }
}

/// Three kernels applied to three stacked planes (before, at, after the voxel).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StencilKernels {
    /// Applied to the plane one step below the voxel.
    pub minus: Kernel3,
    /// Applied to the plane through the voxel.
    pub mid: Kernel3,
    /// Applied to the plane one step above the voxel.
    pub plus: Kernel3,
}

impl StencilKernels {
    /// Build a stencil from three weight slices of nine entries each.
    ///
    /// # Errors
    ///
    /// [`EdgeError::ShapeMismatch`] if any slice is not exactly nine long.
    pub fn from_slices(minus: &[f64], mid: &[f64], plus: &[f64]) -> Result<Self, EdgeError> {
        Ok(Self {
            minus: Kernel3::try_from(minus)?,
            mid: Kernel3::try_from(mid)?,
            plus: Kernel3::try_from(plus)?,
        })
    }

    /// Kernels in plane order: minus, mid, plus.
    pub fn planes(&self) -> [&Kernel3; WINDOW] {
        [&self.minus, &self.mid, &self.plus]
    }

    /// Sum of all 27 weights.
    pub fn weight_sum(&self) -> f64 {
        self.planes()
            .iter()
            .flat_map(|k| k.weights().iter())
            .sum()
    }
}

/// Response along the stacking direction of XY planes.
pub const SOBEL_X: StencilKernels = StencilKernels {
    minus: Kernel3([-1.0, -3.0, -1.0, -3.0, -6.0, -3.0, -1.0, -3.0, -1.0]),
    mid: Kernel3::ZERO,
    plus: Kernel3([1.0, 3.0, 1.0, 3.0, 6.0, 3.0, 1.0, 3.0, 1.0]),
};

/// Response across the vertical offset of XY planes.
pub const SOBEL_Y: StencilKernels = StencilKernels {
    minus: Kernel3([-1.0, 0.0, 1.0, -3.0, 0.0, 3.0, -1.0, 0.0, 1.0]),
    mid: Kernel3([-3.0, 0.0, 3.0, -6.0, 0.0, 6.0, -3.0, 0.0, 3.0]),
    plus: Kernel3([-1.0, 0.0, 1.0, -3.0, 0.0, 3.0, -1.0, 0.0, 1.0]),
};

/// Response across the horizontal offset of XZ planes.
pub const SOBEL_Z: StencilKernels = StencilKernels {
    minus: Kernel3([1.0, 3.0, 1.0, 0.0, 0.0, 0.0, -1.0, -3.0, -1.0]),
    mid: Kernel3([3.0, 6.0, 3.0, 0.0, 0.0, 0.0, -3.0, -6.0, -3.0]),
    plus: Kernel3([1.0, 3.0, 1.0, 0.0, 0.0, 0.0, -1.0, -3.0, -1.0]),
};

/// Binomial `[1, 2, 1]³ / 64` smoothing stencil. Weights sum to 1.
pub const GAUSSIAN: StencilKernels = StencilKernels {
    minus: Kernel3([1.0, 2.0, 1.0, 2.0, 4.0, 2.0, 1.0, 2.0, 1.0]).scaled(1.0 / 64.0),
    mid: Kernel3([2.0, 4.0, 2.0, 4.0, 8.0, 4.0, 2.0, 4.0, 2.0]).scaled(1.0 / 64.0),
    plus: Kernel3([1.0, 2.0, 1.0, 2.0, 4.0, 2.0, 1.0, 2.0, 1.0]).scaled(1.0 / 64.0),
};

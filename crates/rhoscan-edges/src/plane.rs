//! Window extraction and stacked-plane convolution.
//!
//! Coordinates here are the 0-based corner of a 3×3×3 window in
//! halo-inclusive lattice coordinates: the window for interior voxel
//! `(x+1, y+1, z+1)` starts at `(x, y, z)`.

use crate::kernel::{Plane3, StencilKernels, WINDOW};
use rhoscan_lattice::LatticeGeometry;

/// Read the XY plane at depth `z`, x outer and y inner.
#[inline]
pub fn xy_plane(g: &LatticeGeometry, field: &[f64], x: usize, y: usize, z: usize) -> Plane3 {
    let mut plane = [0.0; WINDOW * WINDOW];
    let mut i = 0;
    for horizontal in 0..WINDOW {
        for vertical in 0..WINDOW {
            plane[i] = field[g.index(x + horizontal, y + vertical, z)];
            i += 1;
        }
    }
    plane
}

/// Read the XZ plane at height `y`, x outer and z inner.
#[inline]
pub fn xz_plane(g: &LatticeGeometry, field: &[f64], x: usize, y: usize, z: usize) -> Plane3 {
    let mut plane = [0.0; WINDOW * WINDOW];
    let mut i = 0;
    for horizontal in 0..WINDOW {
        for depth in 0..WINDOW {
            plane[i] = field[g.index(x + horizontal, y, z + depth)];
            i += 1;
        }
    }
    plane
}

/// Apply `kernels` to the XY planes at depths `z, z+1, z+2`.
#[inline]
pub fn stack_xy(
    g: &LatticeGeometry,
    field: &[f64],
    kernels: &StencilKernels,
    x: usize,
    y: usize,
    z: usize,
) -> f64 {
    let mut acc = kernels.minus.convolve(&xy_plane(g, field, x, y, z));
    acc += kernels.mid.convolve(&xy_plane(g, field, x, y, z + 1));
    acc += kernels.plus.convolve(&xy_plane(g, field, x, y, z + 2));
    acc
}

/// Apply `kernels` to the XZ planes at heights `y, y+1, y+2`.
#[inline]
pub fn stack_xz(
    g: &LatticeGeometry,
    field: &[f64],
    kernels: &StencilKernels,
    x: usize,
    y: usize,
    z: usize,
) -> f64 {
    let mut acc = kernels.minus.convolve(&xz_plane(g, field, x, y, z));
    acc += kernels.mid.convolve(&xz_plane(g, field, x, y + 1, z));
    acc += kernels.plus.convolve(&xz_plane(g, field, x, y + 2, z));
    acc
}

//! Gaussian pre-smoothing of a halo-padded density field.

use crate::kernel::GAUSSIAN;
use crate::plane::stack_xy;
use rhoscan_lattice::LatticeGeometry;

/// Blur the interior of `density` with the binomial 3×3×3 stencil.
///
/// Halo cells are copied through unchanged so the next stage still sees
/// the caller's boundary values. `density` must be `system_size` long.
pub fn gaussian_smooth(g: &LatticeGeometry, density: &[f64]) -> Vec<f64> {
    let mut out = density.to_vec();
    g.skip_bounds(|x, y, z| {
        out[g.index(x, y, z)] = stack_xy(g, density, &GAUSSIAN, x - 1, y - 1, z - 1);
    });
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rhoscan_lattice::{Dimensionality, Extents};

    fn cube(m: usize) -> LatticeGeometry {
        LatticeGeometry::new(Extents::new(m, m, m), Dimensionality::Three).unwrap()
    }

    #[test]
    fn uniform_field_is_fixed_point() {
        let g = cube(4);
        let density = vec![1.5; g.system_size()];
        let smoothed = gaussian_smooth(&g, &density);
        assert!(smoothed.iter().all(|&v| (v - 1.5).abs() < 1e-12));
    }

    #[test]
    fn halo_is_preserved() {
        let g = cube(3);
        let mut density = vec![0.0; g.system_size()];
        g.system_plus_bounds(|x, y, z| density[g.index(x, y, z)] = (x + y + z) as f64);
        let smoothed = gaussian_smooth(&g, &density);
        for face in rhoscan_lattice::Face::ALL {
            g.boundary(face, |x, y, z| {
                let i = g.index(x, y, z);
                assert_eq!(smoothed[i], density[i]);
            });
        }
    }

    #[test]
    fn spike_spreads_and_conserves_mass() {
        let g = cube(5);
        let mut density = vec![0.0; g.system_size()];
        density[g.index(3, 3, 3)] = 64.0;
        let smoothed = gaussian_smooth(&g, &density);
        assert_eq!(smoothed[g.index(3, 3, 3)], 8.0);
        assert_eq!(smoothed[g.index(2, 3, 3)], 4.0);
        assert_eq!(smoothed[g.index(2, 2, 2)], 1.0);
        let total: f64 = smoothed.iter().sum();
        assert_eq!(total, 64.0);
    }
}

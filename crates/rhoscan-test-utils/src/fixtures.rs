//! Reusable density-field fixtures.
//!
//! Every fixture returns a flat field of `system_size` cells with the halo
//! filled, ready to hand to an edge detector:
//!
//! - [`uniform_field`]: every cell, halo included, set to one value.
//! - [`spike_field`]: zero everywhere except one cell.
//! - [`slab_field`]: a step along x between two densities.
//! - [`random_field`]: seeded ChaCha8 noise in `[lo, hi)`.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rhoscan_lattice::LatticeGeometry;

/// Every cell set to `value`.
pub fn uniform_field(g: &LatticeGeometry, value: f64) -> Vec<f64> {
    vec![value; g.system_size()]
}

/// Zero everywhere except `value` at halo-inclusive `(x, y, z)`.
pub fn spike_field(g: &LatticeGeometry, (x, y, z): (usize, usize, usize), value: f64) -> Vec<f64> {
    let mut field = vec![0.0; g.system_size()];
    field[g.index(x, y, z)] = value;
    field
}

/// `low` for every cell with `x < split`, `high` from `split` on.
///
/// Halo cells follow the same rule, so the only gradient is the step.
pub fn slab_field(g: &LatticeGeometry, split: usize, low: f64, high: f64) -> Vec<f64> {
    let mut field = vec![0.0; g.system_size()];
    g.system_plus_bounds(|x, y, z| {
        field[g.index(x, y, z)] = if x < split { low } else { high };
    });
    field
}

/// Uniform noise in `[lo, hi)` from a ChaCha8 stream seeded with `seed`.
///
/// Identical seeds give bit-identical fields.
pub fn random_field(g: &LatticeGeometry, seed: u64, lo: f64, hi: f64) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..g.system_size())
        .map(|_| lo + (hi - lo) * rng.random::<f64>())
        .collect()
}

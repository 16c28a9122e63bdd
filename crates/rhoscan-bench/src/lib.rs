//! Benchmark profiles for rhoscan.
//!
//! - [`reference_profile`]: 32×32×32 interior with seeded noise
//! - [`stress_profile`]: 96×96×96 interior for sweep throughput

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use rhoscan_lattice::{Dimensionality, Extents, LatticeError, LatticeGeometry};
use rhoscan_test_utils::random_field;

/// A lattice plus a halo-inclusive density field to run against it.
pub struct Profile {
    /// Lattice the field is laid out on.
    pub geometry: LatticeGeometry,
    /// `geometry.system_size()` density values.
    pub density: Vec<f64>,
}

fn profile(m: usize, seed: u64) -> Result<Profile, LatticeError> {
    let geometry = LatticeGeometry::new(Extents::new(m, m, m), Dimensionality::Three)?;
    let density = random_field(&geometry, seed, 0.0, 1.0);
    Ok(Profile { geometry, density })
}

/// 32³ interior (32,768 voxels), noise in `[0, 1)`.
pub fn reference_profile(seed: u64) -> Result<Profile, LatticeError> {
    profile(32, seed)
}

/// 96³ interior (~885K voxels), noise in `[0, 1)`.
pub fn stress_profile(seed: u64) -> Result<Profile, LatticeError> {
    profile(96, seed)
}

//! Test utilities for rhoscan development.
//!
//! Provides deterministic density-field fixtures on halo-padded lattices
//! (see [`fixtures`]) and a [`cube`] shorthand for 3D geometries.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{random_field, slab_field, spike_field, uniform_field};

use rhoscan_lattice::{Dimensionality, Extents, LatticeGeometry};

/// A 3D geometry with interior extents `mx × my × mz`.
///
/// Panics on overflow; fixture sizes are always small.
pub fn cube(mx: usize, my: usize, mz: usize) -> LatticeGeometry {
    LatticeGeometry::new(Extents::new(mx, my, mz), Dimensionality::Three)
        .expect("fixture geometry must be valid")
}

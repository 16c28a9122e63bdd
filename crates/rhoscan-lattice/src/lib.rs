//! Lattice geometry for halo-padded density fields.
//!
//! A field on a lattice is a flat `[f64]` in depth-major order (the last
//! active axis varies fastest) with a one-cell halo around every axis.
//! [`LatticeGeometry`] owns the extents and strides of such a field and is
//! the only place addressing semantics live; the array itself carries no
//! shape.
//!
//! # Traversals
//!
//! - [`LatticeGeometry::interior`] / `skip_bounds`: interior cells only
//! - [`LatticeGeometry::with_halo`] / `system_plus_bounds`: every cell
//! - [`LatticeGeometry::face`] / `boundary`: one of the six halo [`Face`]s
//! - [`LatticeGeometry::sweep`] / `visit`: chosen by [`BoundaryMode`]

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod dimensionality;
pub mod error;
pub mod geometry;
pub mod sweep;

#[cfg(test)]
pub(crate) mod compliance;

pub use dimensionality::{Axis, Dimensionality};
pub use error::LatticeError;
pub use geometry::{Extents, LatticeCoord, LatticeGeometry, BOUNDARIES, HALO};
pub use sweep::{BoundaryMode, Face, Sweep};

//! Rhoscan: edge detection over halo-padded 3D lattice density fields.
//!
//! This is the facade crate that re-exports the public API of the rhoscan
//! sub-crates. Most users only need this one dependency.
//!
//! # Quick start
//!
//! ```rust
//! use rhoscan::prelude::*;
//!
//! // A 6×6×6 interior with a one-cell halo on every side.
//! let geometry = LatticeGeometry::new(Extents::new(6, 6, 6), Dimensionality::Three).unwrap();
//!
//! // Density is stored halo-inclusive; fill a bright cube in one corner.
//! let mut density = vec![0.0; geometry.system_size()];
//! geometry.skip_bounds(|x, y, z| {
//!     if x <= 3 && y <= 3 && z <= 3 {
//!         density[geometry.index(x, y, z)] = 1.0;
//!     }
//! });
//!
//! let detector = EdgeDetector::builder()
//!     .geometry(&geometry)
//!     .threshold(64)
//!     .build()
//!     .unwrap();
//! let edges = detector.detect_edges(&density).unwrap();
//!
//! assert_eq!(edges.values().len(), geometry.system_size());
//! assert!(edges.nonzero_count() > 0);
//! assert_eq!(edges.get(6, 6, 6), Some(0.0));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`lattice`] | `rhoscan-lattice` | Extents, halo addressing, traversals |
//! | [`edges`] | `rhoscan-edges` | Sobel kernels, normalization, the detector |
//!
//! # Features
//!
//! - `parallel`: sweep x-slabs of the lattice on the rayon thread pool.
//!   Output is identical to the sequential sweep.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Lattice geometry and traversal order (`rhoscan-lattice`).
///
/// [`lattice::LatticeGeometry`] maps halo-inclusive coordinates to flat
/// depth-major offsets and drives the interior, halo, and face sweeps.
pub use rhoscan_lattice as lattice;

/// Edge detection (`rhoscan-edges`).
///
/// [`edges::EdgeDetector`] runs the Sobel sweep, min-max normalization and
/// threshold cut-off, producing an [`edges::EdgeMap`].
pub use rhoscan_edges as edges;

/// Common imports for typical rhoscan usage.
///
/// ```rust
/// use rhoscan::prelude::*;
/// ```
pub mod prelude {
    // Lattice
    pub use rhoscan_lattice::{
        Axis, BoundaryMode, Dimensionality, Extents, Face, LatticeCoord, LatticeGeometry,
    };

    // Detection
    pub use rhoscan_edges::{DetectorConfig, EdgeDetector, EdgeMap, Smoothing};

    // Errors
    pub use rhoscan_edges::EdgeError;
    pub use rhoscan_lattice::LatticeError;
}

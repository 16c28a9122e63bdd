//! 3D Sobel edge detection over halo-padded lattice density fields.
//!
//! [`EdgeDetector`] convolves every interior voxel of a density field with
//! three stacked 3×3×3 Sobel stencils ([`kernel::SOBEL_X`],
//! [`kernel::SOBEL_Y`], [`kernel::SOBEL_Z`]), combines the responses as an
//! L1 magnitude, normalizes the whole field onto `[0, 255]` and zeroes
//! everything below a threshold. The result is an [`EdgeMap`] on the same
//! [`LatticeGeometry`](rhoscan_lattice::LatticeGeometry) as the input.
//!
//! A uniform density, or any field whose gradient magnitudes differ by no
//! more than rounding residue ([`normalize::MAGNITUDE_SLACK`] relative to
//! the largest absolute density), yields an all-zero map;
//! [`EdgeMap::is_degenerate`] reports it.
//!
//! # Features
//!
//! - `parallel`: split the interior sweep over x-slabs with rayon. Output
//!   is identical to the serial sweep.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod detector;
pub mod error;
pub mod kernel;
pub mod normalize;
pub mod plane;
pub mod smoothing;

pub use config::{DetectorConfig, Smoothing};
pub use detector::{EdgeDetector, EdgeDetectorBuilder, EdgeMap};
pub use error::EdgeError;
pub use kernel::{Kernel3, StencilKernels};

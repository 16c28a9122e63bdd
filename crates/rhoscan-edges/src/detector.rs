//! The 3D Sobel edge detector.
//!
//! Pipeline per [`EdgeDetector::detect_edges`] call:
//!
//! ```text
//! density ─▶ [optional Gaussian passes] ─▶ Sobel sweep (interior)
//!         ─▶ min-max normalize (whole field) ─▶ threshold ─▶ EdgeMap
//! ```
//!
//! For each interior voxel with 0-based window corner `(x, y, z)`:
//!
//! ```text
//! conv_x = Σ_d  Gx_d · XY-plane(z + d)
//! conv_y = Σ_d  Gy_d · XY-plane(z + d)
//! conv_z = Σ_d  Gz_d · XZ-plane(y + d)
//! edge(x+1, y+1, z+1) = |conv_x| + |conv_y| + |conv_z|
//! ```
//!
//! Halo cells of the output are never written and stay 0, and they take
//! part in the min/max used for normalization.
//!
//! A density with every cell equal short-circuits to an all-zero map.
//! Otherwise a raw range narrower than
//! [`MAGNITUDE_SLACK`](crate::normalize::MAGNITUDE_SLACK) times the largest
//! absolute density is treated as rounding residue and also yields zeros.

use crate::config::{DetectorConfig, Smoothing};
use crate::error::EdgeError;
use crate::kernel::{SOBEL_X, SOBEL_Y, SOBEL_Z};
use crate::normalize::{apply_threshold, density_scale, normalize, value_range};
use crate::plane::{stack_xy, stack_xz};
use crate::smoothing::gaussian_smooth;
use log::{debug, trace};
use rhoscan_lattice::{Axis, Dimensionality, LatticeCoord, LatticeGeometry};

/// Edge magnitudes on the same lattice as the density they came from.
///
/// Values are on the normalized `[0, 255]` scale with the threshold
/// already applied. Address them with [`geometry`](Self::geometry) or
/// [`get`](Self::get).
#[derive(Clone, Debug, PartialEq)]
pub struct EdgeMap {
    values: Vec<f64>,
    geometry: LatticeGeometry,
    threshold: u8,
    raw_range: (f64, f64),
    degenerate: bool,
}

impl EdgeMap {
    /// Flat edge values, `system_size` long.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Take ownership of the flat values.
    pub fn into_values(self) -> Vec<f64> {
        self.values
    }

    /// Geometry the values are addressed by.
    pub fn geometry(&self) -> &LatticeGeometry {
        &self.geometry
    }

    /// Edge value at halo-inclusive `(x, y, z)`, or `None` outside the
    /// halo-inclusive box.
    pub fn get(&self, x: usize, y: usize, z: usize) -> Option<f64> {
        self.geometry
            .checked_index(LatticeCoord::new(x, y, z))
            .ok()
            .map(|i| self.values[i])
    }

    /// Threshold that was applied.
    pub fn threshold(&self) -> u8 {
        self.threshold
    }

    /// Min and max of the raw gradient magnitudes, halo zeros included.
    /// `(0.0, 0.0)` when the density was uniform and no sweep ran.
    pub fn raw_range(&self) -> (f64, f64) {
        self.raw_range
    }

    /// `true` if every raw magnitude was equal, so the map is all zero.
    pub fn is_degenerate(&self) -> bool {
        self.degenerate
    }

    /// Number of cells with a nonzero edge value.
    pub fn nonzero_count(&self) -> usize {
        self.values.iter().filter(|&&v| v != 0.0).count()
    }
}

/// A 3D Sobel gradient-magnitude detector bound to one lattice.
///
/// Holds its own copy of the geometry. Each detection run is independent
/// and returns a fresh [`EdgeMap`].
///
/// # Examples
///
/// ```
/// use rhoscan_edges::{DetectorConfig, EdgeDetector};
/// use rhoscan_lattice::{Dimensionality, Extents, LatticeGeometry};
///
/// let g = LatticeGeometry::new(Extents::new(5, 5, 5), Dimensionality::Three).unwrap();
/// let detector = EdgeDetector::new(&g, DetectorConfig::with_threshold(10)).unwrap();
///
/// let mut density = vec![0.0; g.system_size()];
/// density[g.index(3, 3, 3)] = 1.0;
///
/// let edges = detector.detect_edges(&density).unwrap();
/// assert_eq!(edges.values().len(), g.system_size());
/// assert_eq!(edges.get(3, 3, 2), Some(255.0));
/// assert_eq!(edges.get(3, 3, 3), Some(0.0));
/// ```
#[derive(Clone, Debug)]
pub struct EdgeDetector {
    geometry: LatticeGeometry,
    config: DetectorConfig,
}

/// Builder for [`EdgeDetector`].
///
/// Required: `geometry`. Defaults come from [`DetectorConfig::default`].
pub struct EdgeDetectorBuilder {
    geometry: Option<LatticeGeometry>,
    config: DetectorConfig,
}

impl EdgeDetector {
    /// Create a detector for `geometry`, which is copied.
    ///
    /// # Errors
    ///
    /// - [`EdgeError::UnsupportedDimensionality`] unless the lattice is 3D.
    /// - [`EdgeError::InvalidConfig`] if `config` fails validation.
    pub fn new(geometry: &LatticeGeometry, config: DetectorConfig) -> Result<Self, EdgeError> {
        if geometry.dimensionality() != Dimensionality::Three {
            return Err(EdgeError::UnsupportedDimensionality {
                dimensionality: geometry.dimensionality(),
            });
        }
        config.validate()?;
        Ok(Self {
            geometry: geometry.clone(),
            config,
        })
    }

    /// Create a new builder.
    pub fn builder() -> EdgeDetectorBuilder {
        EdgeDetectorBuilder {
            geometry: None,
            config: DetectorConfig::default(),
        }
    }

    /// The detector's copy of the geometry.
    pub fn geometry(&self) -> &LatticeGeometry {
        &self.geometry
    }

    /// The detector's configuration.
    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    /// Run the full pipeline with the configured threshold.
    ///
    /// # Errors
    ///
    /// See [`detect_edges_with_threshold`](Self::detect_edges_with_threshold).
    pub fn detect_edges(&self, density: &[f64]) -> Result<EdgeMap, EdgeError> {
        self.detect_edges_with_threshold(density, self.config.threshold)
    }

    /// Run the full pipeline with `threshold` in place of the configured one.
    ///
    /// `density` must cover the lattice including its halo, with halo
    /// values already filled in by the caller.
    ///
    /// # Errors
    ///
    /// - [`EdgeError::FieldLengthMismatch`] if `density.len() != system_size`.
    /// - [`EdgeError::NonFiniteDensity`] if any cell is NaN or infinite.
    pub fn detect_edges_with_threshold(
        &self,
        density: &[f64],
        threshold: u8,
    ) -> Result<EdgeMap, EdgeError> {
        self.check_density(density)?;

        if let Some(&first) = density.first() {
            if density.iter().all(|&v| v == first) {
                debug!("uniform density {first}, edge map is all zero");
                return Ok(self.blank_map(threshold));
            }
        }

        let smoothed;
        let source = match self.config.smoothing {
            Smoothing::None => density,
            Smoothing::Gaussian { passes } => {
                let mut field = gaussian_smooth(&self.geometry, density);
                for _ in 1..passes {
                    field = gaussian_smooth(&self.geometry, &field);
                }
                smoothed = field;
                &smoothed
            }
        };

        let mut values = self.sweep(source);
        let raw_range = value_range(&values).unwrap_or((0.0, 0.0));
        debug!(
            "sobel sweep over {} voxels, raw magnitude range [{}, {}]",
            self.geometry.extents().interior_cells(),
            raw_range.0,
            raw_range.1,
        );

        let degenerate = normalize(&mut values, raw_range, density_scale(source));
        if degenerate {
            debug!("uniform gradient field, edge map is all zero");
        }
        let zeroed = apply_threshold(&mut values, threshold);
        trace!("threshold {threshold} zeroed {zeroed} cells");

        Ok(EdgeMap {
            values,
            geometry: self.geometry.clone(),
            threshold,
            raw_range,
            degenerate,
        })
    }

    fn blank_map(&self, threshold: u8) -> EdgeMap {
        EdgeMap {
            values: vec![0.0; self.geometry.system_size()],
            geometry: self.geometry.clone(),
            threshold,
            raw_range: (0.0, 0.0),
            degenerate: true,
        }
    }

    fn check_density(&self, density: &[f64]) -> Result<(), EdgeError> {
        let expected = self.geometry.system_size();
        if density.len() != expected {
            return Err(EdgeError::FieldLengthMismatch {
                expected,
                found: density.len(),
            });
        }
        if let Some((index, &value)) = density.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(EdgeError::NonFiniteDensity { index, value });
        }
        Ok(())
    }

    /// L1 gradient magnitude for the window with 0-based corner `(x, y, z)`.
    #[inline]
    fn magnitude(&self, field: &[f64], x: usize, y: usize, z: usize) -> f64 {
        let g = &self.geometry;
        let conv_x = stack_xy(g, field, &SOBEL_X, x, y, z);
        let conv_y = stack_xy(g, field, &SOBEL_Y, x, y, z);
        let conv_z = stack_xz(g, field, &SOBEL_Z, x, y, z);
        conv_x.abs() + conv_y.abs() + conv_z.abs()
    }

    /// Fill one x-slab of the output. `slab` covers halo-inclusive `hx`.
    fn fill_slab(&self, field: &[f64], hx: usize, slab: &mut [f64]) {
        let e = self.geometry.extents();
        if hx == 0 || hx > e.mx {
            return;
        }
        let jump_y = self.geometry.stride(Axis::Y);
        let jump_z = self.geometry.stride(Axis::Z);
        for y in 0..e.my {
            for z in 0..e.mz {
                slab[(y + 1) * jump_y + (z + 1) * jump_z] = self.magnitude(field, hx - 1, y, z);
            }
        }
    }

    /// Raw magnitudes for every interior voxel; halo cells stay 0.
    fn sweep(&self, field: &[f64]) -> Vec<f64> {
        let mut out = vec![0.0; self.geometry.system_size()];
        let slab_len = self.geometry.stride(Axis::X);

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            out.par_chunks_mut(slab_len)
                .enumerate()
                .for_each(|(hx, slab)| self.fill_slab(field, hx, slab));
        }
        #[cfg(not(feature = "parallel"))]
        for (hx, slab) in out.chunks_mut(slab_len).enumerate() {
            self.fill_slab(field, hx, slab);
        }

        out
    }
}

impl EdgeDetectorBuilder {
    /// Set the lattice geometry (copied).
    pub fn geometry(mut self, geometry: &LatticeGeometry) -> Self {
        self.geometry = Some(geometry.clone());
        self
    }

    /// Set the threshold on the normalized scale (default: 0).
    pub fn threshold(mut self, threshold: u8) -> Self {
        self.config.threshold = threshold;
        self
    }

    /// Set pre-smoothing (default: none).
    pub fn smoothing(mut self, smoothing: Smoothing) -> Self {
        self.config.smoothing = smoothing;
        self
    }

    /// Build the detector, validating all configuration.
    ///
    /// # Errors
    ///
    /// [`EdgeError::InvalidConfig`] if `geometry` is not set, plus
    /// everything [`EdgeDetector::new`] rejects.
    pub fn build(self) -> Result<EdgeDetector, EdgeError> {
        let geometry = self.geometry.ok_or_else(|| EdgeError::InvalidConfig {
            reason: "geometry is required".to_string(),
        })?;
        EdgeDetector::new(&geometry, self.config)
    }
}

//! Detector configuration and validation.

use crate::error::EdgeError;

/// Upper bound on Gaussian pre-smoothing passes.
pub const MAX_SMOOTHING_PASSES: u32 = 16;

/// Optional pre-smoothing applied to the density before the Sobel sweep.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Smoothing {
    /// Detect edges on the raw density. Bit-compatible with the plain pipeline.
    #[default]
    None,
    /// Run the binomial 3×3×3 blur `passes` times over the interior.
    Gaussian {
        /// Number of passes, `1..=MAX_SMOOTHING_PASSES`.
        passes: u32,
    },
}

/// Configuration for an [`EdgeDetector`](crate::EdgeDetector).
///
/// # Examples
///
/// ```
/// use rhoscan_edges::{DetectorConfig, Smoothing};
///
/// let config = DetectorConfig {
///     threshold: 40,
///     smoothing: Smoothing::Gaussian { passes: 2 },
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DetectorConfig {
    /// Cut-off on the normalized 0–255 scale; values strictly below it
    /// become 0. Default: 0 (keep everything).
    pub threshold: u8,
    /// Pre-smoothing. Default: [`Smoothing::None`].
    pub smoothing: Smoothing,
}

impl DetectorConfig {
    /// Configuration with the given threshold and no smoothing.
    pub fn with_threshold(threshold: u8) -> Self {
        Self {
            threshold,
            ..Self::default()
        }
    }

    /// Check configuration invariants.
    ///
    /// # Errors
    ///
    /// [`EdgeError::InvalidConfig`] if Gaussian smoothing asks for zero
    /// passes or more than [`MAX_SMOOTHING_PASSES`].
    pub fn validate(&self) -> Result<(), EdgeError> {
        if let Smoothing::Gaussian { passes } = self.smoothing {
            if passes == 0 || passes > MAX_SMOOTHING_PASSES {
                return Err(EdgeError::InvalidConfig {
                    reason: format!(
                        "smoothing passes must be in 1..={MAX_SMOOTHING_PASSES}, got {passes}"
                    ),
                });
            }
        }
        Ok(())
    }
}

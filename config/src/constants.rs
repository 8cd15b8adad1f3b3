//! # Configuration Constants
//!
//! Centralized constants for the kinetic hull pipeline. All numeric
//! tolerances, perturbation parameters, and scheduling thresholds are
//! defined here.
//!
//! ## Categories
//!
//! - **Precision**: Orientation tolerance and its magnitude scaling
//! - **Perturbation**: Rotation angle, jitter, and seed used to break ties
//! - **Scheduling**: When recursive halves are handed to the thread pool
//! - **Output**: Decimal places printed by the command line front-end

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Relative tolerance for XY orientation tests.
///
/// Orientation determinants grow with the square of the coordinate
/// magnitude, so the absolute band is obtained with [`scaled_tolerance`].
/// Points that coincide in the input are only separated by the jitter, and
/// their cross products are of order `PERTURBATION_JITTER²`; the band must
/// stay well below that, see [`TOLERANCE_JITTER_MARGIN`].
///
/// # Example
///
/// ```rust
/// use config::constants::{ORIENTATION_TOLERANCE, PERTURBATION_JITTER};
///
/// assert!(ORIENTATION_TOLERANCE < PERTURBATION_JITTER * PERTURBATION_JITTER);
/// ```
pub const ORIENTATION_TOLERANCE: f64 = 1e-16;

/// Largest accepted ratio between the orientation tolerance and the squared
/// jitter.
pub const TOLERANCE_JITTER_MARGIN: f64 = 1e-3;

/// Converts a relative tolerance into the absolute band for a cross product
/// over coordinates of magnitude `scale`.
///
/// A zero or non-finite scale is treated as `1.0`.
///
/// # Example
///
/// ```rust
/// use config::constants::scaled_tolerance;
///
/// assert_eq!(scaled_tolerance(0.5, 4.0), 8.0);
/// assert_eq!(scaled_tolerance(1e-12, 0.0), 1e-12);
/// ```
pub fn scaled_tolerance(tolerance: f64, scale: f64) -> f64 {
    let scale = if scale.is_finite() && scale > 0.0 {
        scale
    } else {
        1.0
    };
    tolerance * scale * scale
}

// =============================================================================
// PERTURBATION CONSTANTS
// =============================================================================

/// Angle in radians of each of the three plane rotations applied to the
/// working coordinates before sorting.
///
/// Rotation is rigid: it separates points sharing an x coordinate or an XY
/// projection without changing the hull.
pub const PERTURBATION_ANGLE: f64 = 1e-3;

/// Relative magnitude of the per-point jitter.
///
/// Each working coordinate moves by at most `PERTURBATION_JITTER * scale`,
/// which breaks exact coplanarity of four or more input points.
pub const PERTURBATION_JITTER: f64 = 1e-6;

/// Seed of the jitter generator. Jitter is drawn in id order, so equal ids
/// always receive equal offsets.
pub const PERTURBATION_SEED: u64 = 0x6b69_6e65_7469_6300;

// =============================================================================
// SCHEDULING CONSTANTS
// =============================================================================

/// Minimum number of points in a recursive range before its two halves are
/// built on separate rayon tasks.
///
/// # Example
///
/// ```rust
/// use config::constants::PARALLEL_THRESHOLD;
///
/// assert!(PARALLEL_THRESHOLD >= 2);
/// ```
pub const PARALLEL_THRESHOLD: usize = 8192;

// =============================================================================
// OUTPUT CONSTANTS
// =============================================================================

/// Decimal places used when printing distances and averages.
pub const OUTPUT_PRECISION: usize = 8;

// =============================================================================
// HULL CONFIGURATION
// =============================================================================

/// Immutable snapshot of the settings consumed by the hull builder.
///
/// # Examples
/// ```
/// use config::constants::HullConfig;
/// let config = HullConfig::default();
/// assert!(config.tolerance > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HullConfig {
    /// Relative orientation tolerance, see [`scaled_tolerance`].
    pub tolerance: f64,
    /// Rotation angle of the perturbation step, in radians.
    pub perturbation_angle: f64,
    /// Relative jitter magnitude of the perturbation step.
    pub perturbation_jitter: f64,
    /// Seed of the jitter generator.
    pub seed: u64,
    /// Range length at which recursive halves run in parallel.
    pub parallel_threshold: usize,
}

impl HullConfig {
    /// Builds a configuration, rejecting values the hull builder cannot use.
    ///
    /// # Examples
    /// ```
    /// use config::constants::HullConfig;
    /// let cfg = HullConfig::new(1.0e-17, 1.0e-3, 1.0e-6).expect("valid config");
    /// assert_eq!(cfg.tolerance, 1.0e-17);
    /// assert!(HullConfig::new(-1.0, 1.0e-3, 1.0e-6).is_err());
    /// assert!(HullConfig::new(1.0e-12, 1.0e-3, 1.0e-6).is_err());
    /// ```
    pub fn new(tolerance: f64, angle: f64, jitter: f64) -> Result<Self, ConfigError> {
        let config = Self {
            tolerance,
            perturbation_angle: angle,
            perturbation_jitter: jitter,
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Checks the numeric fields of a configuration, including one
    /// assembled by hand.
    ///
    /// With a non-zero jitter the tolerance must not exceed
    /// `TOLERANCE_JITTER_MARGIN * jitter²`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let (tolerance, angle, jitter) = (
            self.tolerance,
            self.perturbation_angle,
            self.perturbation_jitter,
        );
        if !(tolerance.is_finite() && tolerance >= 0.0) {
            return Err(ConfigError::InvalidTolerance(tolerance));
        }
        if !angle.is_finite() {
            return Err(ConfigError::InvalidAngle(angle));
        }
        if !(jitter.is_finite() && (0.0..1.0).contains(&jitter)) {
            return Err(ConfigError::InvalidJitter(jitter));
        }
        if jitter > 0.0 && tolerance > TOLERANCE_JITTER_MARGIN * jitter * jitter {
            return Err(ConfigError::ToleranceAboveJitter(tolerance, jitter));
        }
        Ok(())
    }

    /// Replaces the jitter seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Replaces the parallel threshold. `usize::MAX` keeps every build on
    /// the calling thread.
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold.max(2);
        self
    }
}

impl Default for HullConfig {
    fn default() -> Self {
        Self {
            tolerance: ORIENTATION_TOLERANCE,
            perturbation_angle: PERTURBATION_ANGLE,
            perturbation_jitter: PERTURBATION_JITTER,
            seed: PERTURBATION_SEED,
            parallel_threshold: PARALLEL_THRESHOLD,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// Raised when the tolerance is negative or not finite.
    InvalidTolerance(f64),
    /// Raised when the rotation angle is not finite.
    InvalidAngle(f64),
    /// Raised when the jitter is negative, not finite, or not below one.
    InvalidJitter(f64),
    /// Raised when the tolerance would absorb turns the jitter creates
    /// between coincident points. Holds the tolerance and the jitter.
    ToleranceAboveJitter(f64, f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidTolerance(value) => {
                write!(f, "tolerance must be finite and non-negative: {value}")
            }
            ConfigError::InvalidAngle(value) => {
                write!(f, "perturbation angle must be finite: {value}")
            }
            ConfigError::InvalidJitter(value) => {
                write!(f, "perturbation jitter must lie in [0, 1): {value}")
            }
            ConfigError::ToleranceAboveJitter(tolerance, jitter) => write!(
                f,
                "tolerance {tolerance} exceeds {TOLERANCE_JITTER_MARGIN} * jitter² for jitter {jitter}"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

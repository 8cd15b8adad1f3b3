//! # Config Crate
//!
//! Centralized configuration for the kinetic hull workspace.
//! Every tolerance and perturbation parameter lives here so the hull core,
//! the query crate, and the command line front-end agree on one policy.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{scaled_tolerance, HullConfig, ORIENTATION_TOLERANCE};
//!
//! let config = HullConfig::default();
//! assert_eq!(config.tolerance, ORIENTATION_TOLERANCE);
//!
//! // Absolute band for a cross product over coordinates up to 100 units.
//! let band = scaled_tolerance(config.tolerance, 100.0);
//! assert!(band > config.tolerance);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Magnitude Aware**: Tolerances are relative and scaled per input
//! - **Deterministic**: Perturbation is seeded, never time dependent

pub mod constants;

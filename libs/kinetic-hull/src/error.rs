//! # Hull Errors
//!
//! Error types for hull construction and validation.
//!
//! ## Error Policy
//!
//! - Input problems are reported before any geometry is touched
//! - A broken chain discovered during facet extraction is an error, never a
//!   silently dropped facet
//! - Validation failures carry the offending facet and point

use config::constants::ConfigError;
use thiserror::Error;

use crate::facet::Facet;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur while building or checking a hull.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum HullError {
    /// No points were supplied.
    #[error("hull requires at least one point")]
    EmptyInput,

    /// A point id does not index the input.
    #[error("point id {id} is out of range for {count} points")]
    IdOutOfRange {
        /// Offending id
        id: usize,
        /// Number of input points
        count: usize,
    },

    /// Two points share an id.
    #[error("point id {id} appears more than once")]
    DuplicateId {
        /// Offending id
        id: usize,
    },

    /// A coordinate is NaN or infinite.
    #[error("point {id} has a non-finite coordinate")]
    NonFiniteCoordinate {
        /// Offending id
        id: usize,
    },

    /// The facet set is not a closed, consistently oriented surface.
    #[error("invalid topology: {message}")]
    InvalidTopology {
        /// Description of the defect
        message: String,
    },

    /// A point lies outside the plane of a facet.
    #[error("point {id} lies {distance} outside facet {facet}")]
    NotConvex {
        /// Facet whose plane is violated
        facet: Facet,
        /// Point on the outward side
        id: usize,
        /// Distance to the facet plane
        distance: f64,
    },

    /// Rejected configuration.
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

impl HullError {
    /// Creates an invalid topology error.
    pub fn invalid_topology(message: impl Into<String>) -> Self {
        Self::InvalidTopology {
            message: message.into(),
        }
    }
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for hull operations.
pub type HullResult<T> = Result<T, HullError>;

// =============================================================================
// TESTS
// =============================================================================

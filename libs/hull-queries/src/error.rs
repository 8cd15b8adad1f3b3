//! # Query Errors

use kinetic_hull::HullError;
use thiserror::Error;

/// Errors raised by hull queries.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum QueryError {
    /// Building or checking the hull failed.
    #[error(transparent)]
    Hull(#[from] HullError),

    /// A query point has a NaN or infinite coordinate.
    #[error("query point has a non-finite coordinate")]
    NonFiniteQuery,

    /// The positions do not belong to the hull.
    #[error("hull was built over {expected} points but {actual} positions were given")]
    PointCountMismatch {
        /// Points the hull was built over
        expected: usize,
        /// Positions supplied
        actual: usize,
    },
}

/// Result type alias for query operations.
pub type QueryResult<T> = Result<T, QueryError>;

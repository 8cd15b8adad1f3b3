//! # CLI Errors

use config::constants::ConfigError;
use hull_queries::QueryError;
use thiserror::Error;

/// Malformed standard input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InputError {
    /// Input ended while a value was still expected.
    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEnd {
        /// What was being read
        expected: &'static str,
    },

    /// A token is not a number.
    #[error("invalid number `{token}`")]
    InvalidNumber {
        /// Offending token
        token: String,
    },

    /// A token is not a non-negative integer count.
    #[error("invalid count `{token}`")]
    InvalidCount {
        /// Offending token
        token: String,
    },
}

/// Every failure the command line reports.
#[derive(Debug, Error)]
pub enum CliError {
    /// Standard input could not be parsed.
    #[error(transparent)]
    Input(#[from] InputError),

    /// A flag value was rejected.
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// A hull query failed.
    #[error(transparent)]
    Query(#[from] QueryError),

    /// Encoding the facet list failed.
    #[error("failed to encode facets: {0}")]
    Json(#[from] serde_json::Error),

    /// Reading or writing a stream failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<kinetic_hull::HullError> for CliError {
    fn from(err: kinetic_hull::HullError) -> Self {
        Self::Query(err.into())
    }
}

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

//! # Error Types
//!
//! Errors surfaced by membership queries and set builders. Failed trials
//! inside the modulus search drive the search and are never reported; only
//! the outcomes below cross the crate boundary.
//!
//! ## Error Policy
//!
//! - NO silent loss of precision to produce an answer
//! - Every bounded search reports the bound it exceeded

use exact_real::RealError;
use thiserror::Error;

use crate::config::SolverConfigError;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur while building or querying compact sets.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompactError {
    /// The function could not be approximated at the evaluation point at all.
    #[error("function cannot be evaluated to 2^{precision} at the given point")]
    EvaluationInfeasible {
        /// Output precision that was requested.
        precision: i64,
    },

    /// A configured search bound was exceeded before the answer was found.
    #[error("precision 2^{precision} unattainable within budget: {reason}")]
    PrecisionUnattainable {
        /// Output precision that was requested.
        precision: i64,
        /// Which bound was exceeded.
        reason: String,
    },

    /// An interval was constructed with `a >= b`.
    #[error("interval requires a < b")]
    InvalidInterval,

    /// A map was evaluated at a parameter outside `[0, 1]^D`.
    #[error("parameter coordinate {coordinate} lies outside [0, 1]")]
    OutsideDomain {
        /// Index of the offending coordinate.
        coordinate: usize,
    },

    /// Solver configuration was rejected.
    #[error("invalid solver configuration: {0}")]
    InvalidConfig(#[from] SolverConfigError),

    /// The exact-real substrate gave up.
    #[error(transparent)]
    Real(#[from] RealError),
}

impl CompactError {
    /// Reports an exhausted substrate budget at `precision` as
    /// [`CompactError::PrecisionUnattainable`]. Other substrate errors are
    /// kept as [`CompactError::Real`].
    pub fn from_budget(precision: i64, err: RealError) -> Self {
        match err {
            RealError::Undecided { .. } | RealError::Unresolved { .. } => {
                CompactError::PrecisionUnattainable {
                    precision,
                    reason: err.to_string(),
                }
            }
            other => CompactError::Real(other),
        }
    }
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for compact-set operations.
pub type CompactResult<T> = Result<T, CompactError>;

//! # Error Types
//!
//! Errors raised by the exact-real substrate. Internal retries at higher
//! working precision are never reported; an error means the effort budget ran
//! out or an operation was applied outside its domain.
//!
//! ## Error Policy
//!
//! - NO floating-point fallback when a certificate cannot be produced
//! - Every exhausted budget is reported with the budget that was exhausted

use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur while evaluating or comparing exact reals.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RealError {
    /// No enclosure narrow enough for the requested tolerance was found
    /// before the working precision reached its limit.
    #[error("cannot certify an approximation within 2^{target} using at most {max_bits} working bits")]
    Unresolved {
        /// Exponent of the requested tolerance.
        target: i64,
        /// Working-precision limit that was reached.
        max_bits: u32,
    },

    /// Neither condition given to the decision oracle could be certified.
    #[error("neither condition could be certified within {max_bits} working bits")]
    Undecided {
        /// Working-precision limit that was reached.
        max_bits: u32,
    },

    /// An operation was applied to an enclosure outside its domain.
    #[error("{operation} is undefined on the given enclosure")]
    Domain {
        /// Name of the offending operation.
        operation: &'static str,
    },

    /// A rational was constructed with a zero denominator.
    #[error("ratio with zero denominator")]
    ZeroDenominator,

    /// An approximation sequence behind a limit failed to produce a term.
    #[error("approximation sequence failed: {message}")]
    Approximation {
        /// Description of the underlying failure.
        message: String,
    },
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for exact-real operations.
pub type RealResult<T> = Result<T, RealError>;

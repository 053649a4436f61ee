//! Centralized configuration values shared across the compact-set workspace.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.
//!
//! Precisions are signed exponents: a precision `p` denotes the tolerance
//! `2^p`, so more negative values are finer.

use std::fmt;

// =============================================================================
// WORKING PRECISION
// =============================================================================

/// Number of fractional bits used for the first evaluation attempt of an
/// exact real expression.
///
/// # Examples
/// ```
/// use config::constants::{DEFAULT_INITIAL_BITS, MIN_WORKING_BITS};
/// assert!(DEFAULT_INITIAL_BITS >= MIN_WORKING_BITS);
/// ```
pub const DEFAULT_INITIAL_BITS: u32 = 24;

/// Upper limit on the working precision of any single evaluation. Once the
/// schedule passes this many bits the substrate gives up with an explicit
/// error instead of retrying forever.
///
/// # Examples
/// ```
/// use config::constants::{DEFAULT_INITIAL_BITS, DEFAULT_MAX_BITS};
/// assert!(DEFAULT_MAX_BITS > DEFAULT_INITIAL_BITS);
/// ```
pub const DEFAULT_MAX_BITS: u32 = 4096;

/// Extra bits added on top of the requested tolerance when choosing the first
/// working precision for a target `2^t`.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_GUARD_BITS;
/// let target: i64 = -100;
/// let first = (-target) as u32 + DEFAULT_GUARD_BITS;
/// assert!(first > 100);
/// ```
pub const DEFAULT_GUARD_BITS: u32 = 32;

/// Smallest working precision accepted by [`PrecisionConfig::new`].
///
/// # Examples
/// ```
/// use config::constants::{MIN_WORKING_BITS, DEFAULT_INITIAL_BITS};
/// assert!(MIN_WORKING_BITS <= DEFAULT_INITIAL_BITS);
/// ```
pub const MIN_WORKING_BITS: u32 = 8;

// =============================================================================
// MODULUS SEARCH
// =============================================================================

/// Coarsest argument exponent the modulus search will report. `2^0 = 1` is the
/// size of the unit parameter domain, so a function that still looks constant
/// at that spacing is reported as constant rather than searched further.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_MODULUS_CEILING;
/// assert_eq!(DEFAULT_MODULUS_CEILING, 0);
/// ```
pub const DEFAULT_MODULUS_CEILING: i64 = 0;

/// Maximum number of downward steps of the modulus boundary search below the
/// requested output precision.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_SEARCH_DEPTH;
/// assert!(DEFAULT_SEARCH_DEPTH >= 64);
/// ```
pub const DEFAULT_SEARCH_DEPTH: u32 = 128;

/// Number of working-precision doublings a single modulus trial may use before
/// it counts as a failure.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_TRIAL_RETRIES;
/// assert!(DEFAULT_TRIAL_RETRIES >= 1);
/// ```
pub const DEFAULT_TRIAL_RETRIES: u32 = 2;

/// Precision at which the endpoints of an interval are checked for
/// `a < b` when the interval is constructed.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_ORDER_CHECK_PRECISION;
/// assert!(DEFAULT_ORDER_CHECK_PRECISION < 0);
/// ```
pub const DEFAULT_ORDER_CHECK_PRECISION: i64 = -64;

// =============================================================================
// MESH LIMITS
// =============================================================================

/// Finest mesh level: the parameter grid step never drops below
/// `2^-DEFAULT_MAX_MESH_LEVEL`.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_MAX_MESH_LEVEL;
/// let samples_per_axis = (1u64 << DEFAULT_MAX_MESH_LEVEL) + 1;
/// assert!(samples_per_axis > 1_000_000);
/// ```
pub const DEFAULT_MAX_MESH_LEVEL: u32 = 20;

/// Immutable snapshot of the working-precision settings shared between
/// crates.
///
/// # Examples
/// ```
/// use config::constants::PrecisionConfig;
/// let config = PrecisionConfig::default();
/// assert!(config.max_bits >= config.initial_bits);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrecisionConfig {
    /// Working bits of the first evaluation attempt.
    pub initial_bits: u32,
    /// Working bits after which evaluation gives up.
    pub max_bits: u32,
    /// Bits added on top of a requested tolerance.
    pub guard_bits: u32,
}

impl PrecisionConfig {
    /// Builds a configuration enforcing strict validation of the supplied
    /// bit counts.
    ///
    /// # Examples
    /// ```
    /// use config::constants::PrecisionConfig;
    /// let cfg = PrecisionConfig::new(24, 1024, 16).expect("valid config");
    /// assert_eq!(cfg.max_bits, 1024);
    /// ```
    pub fn new(initial_bits: u32, max_bits: u32, guard_bits: u32) -> Result<Self, ConfigError> {
        if initial_bits < MIN_WORKING_BITS {
            return Err(ConfigError::InvalidInitialBits(initial_bits));
        }
        if max_bits < initial_bits {
            return Err(ConfigError::InvalidBitRange {
                initial: initial_bits,
                max: max_bits,
            });
        }
        Ok(Self {
            initial_bits,
            max_bits,
            guard_bits,
        })
    }
}

impl Default for PrecisionConfig {
    fn default() -> Self {
        Self {
            initial_bits: DEFAULT_INITIAL_BITS,
            max_bits: DEFAULT_MAX_BITS,
            guard_bits: DEFAULT_GUARD_BITS,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Raised when the initial working precision is below [`MIN_WORKING_BITS`].
    InvalidInitialBits(u32),
    /// Raised when the maximum working precision is below the initial one.
    InvalidBitRange {
        /// Requested initial bits.
        initial: u32,
        /// Requested maximum bits.
        max: u32,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidInitialBits(value) => {
                write!(f, "initial_bits must be >= {MIN_WORKING_BITS}: {value}")
            }
            ConfigError::InvalidBitRange { initial, max } => {
                write!(f, "max_bits ({max}) must be >= initial_bits ({initial})")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests;

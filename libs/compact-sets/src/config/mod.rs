//! Solver-level configuration building on the shared `config` crate.
//!
//! Collects the working-precision budget and every search bound used by the
//! modulus solver and the mesh covers, so a caller can tune them in one place
//! or load them from JSON.

use config::constants::{
    ConfigError, PrecisionConfig, DEFAULT_GUARD_BITS, DEFAULT_INITIAL_BITS, DEFAULT_MAX_BITS,
    DEFAULT_MAX_MESH_LEVEL, DEFAULT_MODULUS_CEILING, DEFAULT_SEARCH_DEPTH, DEFAULT_TRIAL_RETRIES,
};
use exact_real::Effort;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Largest mesh level whose grid index still fits a shift of `u64`.
const MESH_LEVEL_LIMIT: u32 = 62;

/// Solver configuration.
///
/// # Examples
/// ```
/// use compact_sets::SolverConfig;
/// let cfg = SolverConfig::default().with_modulus_ceiling(-4);
/// assert_eq!(cfg.modulus_ceiling, -4);
/// assert!(cfg.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Working bits of the first evaluation attempt.
    pub initial_bits: u32,
    /// Working bits after which evaluation gives up.
    pub max_bits: u32,
    /// Bits added on top of a requested tolerance.
    pub guard_bits: u32,
    /// Coarsest argument exponent the modulus search reports.
    pub modulus_ceiling: i64,
    /// Downward search steps allowed below the requested precision.
    pub search_depth: u32,
    /// Precision doublings a single modulus trial may use.
    pub trial_retries: u32,
    /// The mesh step never drops below `2^-max_mesh_level`.
    pub max_mesh_level: u32,
}

impl SolverConfig {
    pub fn with_precision(mut self, precision: PrecisionConfig) -> Self {
        self.initial_bits = precision.initial_bits;
        self.max_bits = precision.max_bits;
        self.guard_bits = precision.guard_bits;
        self
    }

    pub fn with_modulus_ceiling(mut self, ceiling: i64) -> Self {
        self.modulus_ceiling = ceiling;
        self
    }

    pub fn with_search_depth(mut self, depth: u32) -> Self {
        self.search_depth = depth;
        self
    }

    pub fn with_trial_retries(mut self, retries: u32) -> Self {
        self.trial_retries = retries;
        self
    }

    pub fn with_max_mesh_level(mut self, level: u32) -> Self {
        self.max_mesh_level = level;
        self
    }

    pub fn precision(&self) -> PrecisionConfig {
        PrecisionConfig {
            initial_bits: self.initial_bits,
            max_bits: self.max_bits,
            guard_bits: self.guard_bits,
        }
    }

    /// The substrate budget described by this configuration.
    pub fn effort(&self) -> Effort {
        Effort::new(self.precision())
    }

    /// Checks the bit budget and the mesh level.
    ///
    /// # Examples
    /// ```
    /// use compact_sets::SolverConfig;
    /// let cfg = SolverConfig { max_bits: 8, ..SolverConfig::default() };
    /// assert!(cfg.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), SolverConfigError> {
        PrecisionConfig::new(self.initial_bits, self.max_bits, self.guard_bits)?;
        if self.max_mesh_level > MESH_LEVEL_LIMIT {
            return Err(SolverConfigError::MeshLevel(self.max_mesh_level));
        }
        Ok(())
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            initial_bits: DEFAULT_INITIAL_BITS,
            max_bits: DEFAULT_MAX_BITS,
            guard_bits: DEFAULT_GUARD_BITS,
            modulus_ceiling: DEFAULT_MODULUS_CEILING,
            search_depth: DEFAULT_SEARCH_DEPTH,
            trial_retries: DEFAULT_TRIAL_RETRIES,
            max_mesh_level: DEFAULT_MAX_MESH_LEVEL,
        }
    }
}

/// Error wrapper for invalid solver configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolverConfigError {
    #[error("{0}")]
    Precision(#[from] ConfigError),
    #[error("max_mesh_level must be <= {MESH_LEVEL_LIMIT}: {0}")]
    MeshLevel(u32),
}

#[cfg(test)]
mod tests;

//! # Config Crate
//!
//! Centralized configuration constants for the compact-set workspace.
//! Every working-precision default, effort budget and search limit used by
//! `exact-real`, `compact-sets` and `compact-raster` is defined here so the
//! crates agree on one set of numbers.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{PrecisionConfig, DEFAULT_INITIAL_BITS, DEFAULT_MODULUS_CEILING};
//!
//! let cfg = PrecisionConfig::default();
//! assert_eq!(cfg.initial_bits, DEFAULT_INITIAL_BITS);
//!
//! // The modulus search never reports a step coarser than the unit domain.
//! assert_eq!(DEFAULT_MODULUS_CEILING, 0);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Bounded Effort**: Every search loop in the workspace has a limit here
//! - **Exponent Convention**: A precision `p` always denotes the tolerance `2^p`

pub mod constants;

#[cfg(test)]
mod tests;

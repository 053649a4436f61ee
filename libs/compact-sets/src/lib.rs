//! # Compact Sets
//!
//! Computable compact subsets of `R^N` over exact reals.
//!
//! ## Architecture
//!
//! ```text
//! exact-real ──→ ModulusSolver ──→ MeshCover (Path, Surface)
//!      │                                  │
//!      └──────→ Compact (algebra) ←───────┘
//!                      ↓
//!            CompactSet::member(x, p)
//! ```
//!
//! A set is known through its membership test. For a precision exponent `p`,
//! `member(x, p)` is `true` for every `x` in the set and `false` for every `x`
//! farther than `1.5 · 2^p` from it. Sets are built from primitives
//! ([`singleton`], [`interval`], balls), combined with [`union`] and
//! [`intersection`], or given as images of continuous maps ([`Path`],
//! [`Surface`]) whose mesh is sized by the modulus-of-continuity solver.
//!
//! ## Usage
//!
//! ```rust
//! use compact_sets::{interval, CompactSet};
//! use exact_real::Real;
//!
//! let set = interval(Real::from(1), Real::pi()).unwrap();
//! assert!(set.member(&[Real::from(3)], -100).unwrap());
//! assert!(!set.member(&[Real::from(4)], -100).unwrap());
//! ```

pub mod compact;
pub mod config;
pub mod cover;
pub mod error;
pub mod euclidean;
pub mod extrema;
pub mod grid;
pub mod modulus;

pub use compact::{empty, intersection, interval, singleton, union, Compact, CompactBuilder, CompactSet};
pub use config::{SolverConfig, SolverConfigError};
pub use cover::{from_continuous_map, MeshCover, Path, Resolution, Surface};
pub use error::{CompactError, CompactResult};
pub use euclidean::Point;
pub use modulus::{compute_modulus, Modulus, ModulusOutcome, ModulusSolver};

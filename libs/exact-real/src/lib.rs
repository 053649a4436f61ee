//! # Exact Real
//!
//! Exact real arithmetic for the compact-set pipeline.
//!
//! ## Architecture
//!
//! ```text
//! Real (lazy expression) → Enclosure (outward-rounded interval) → Dyadic
//! ```
//!
//! A [`Real`] is evaluated on demand at a working precision. Results carry
//! rigorous error bounds: every [`Enclosure`] contains the exact value.
//! Precision is increased along an [`Effort`] schedule until a request is
//! certified or the budget runs out, in which case an explicit
//! [`RealError`] is returned.
//!
//! Order comparisons go through the decision oracle [`choose`], which never
//! answers a comparison it cannot certify.
//!
//! ## Usage
//!
//! ```rust
//! use exact_real::{choose, Choice, Effort, Real};
//!
//! let pi = Real::pi();
//! let effort = Effort::default();
//! let inside = choose(&pi.lt(&Real::from(4)), &pi.gt(&Real::from(3)), -20, &effort);
//! assert_eq!(inside.unwrap(), Choice::First);
//! ```

pub mod decide;
pub mod dyadic;
pub mod effort;
pub mod enclosure;
pub mod error;
pub mod error_bound;
pub mod real;

pub use decide::{choose, Choice, Condition, Truth};
pub use dyadic::Dyadic;
pub use effort::{Effort, Schedule};
pub use enclosure::Enclosure;
pub use error::{RealError, RealResult};
pub use error_bound::ErrorBound;
pub use real::Real;

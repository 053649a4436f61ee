//! # Compact Sets
//!
//! A compact subset of `R^N` is represented by its membership test.
//! `member(x, p)` answers `true` for every point of the set and `false` for
//! every point farther than `1.5 · 2^p` from it. Points in between may get
//! either answer, but the answer is always definite.
//!
//! ## Usage
//!
//! ```rust
//! use compact_sets::{interval, union, CompactSet};
//! use exact_real::Real;
//!
//! let a = interval(Real::from(1), Real::pi()).unwrap();
//! let b = interval(Real::from(3), Real::from(4)).unwrap();
//! let both = union(a, b);
//! assert!(both.member(&[Real::ratio(7, 2).unwrap()], -40).unwrap());
//! ```

use std::fmt;
use std::sync::Arc;

use config::constants::DEFAULT_ORDER_CHECK_PRECISION;
use exact_real::{choose, Choice, Effort, Real};

use crate::config::SolverConfig;
use crate::error::{CompactError, CompactResult};
use crate::euclidean::{distance, Point};

/// A set with a precision-indexed membership test.
pub trait CompactSet<const N: usize> {
    /// Whether `point` is within `2^precision` of the set, under the
    /// two-sided contract described in the module docs.
    fn member(&self, point: &Point<N>, precision: i64) -> CompactResult<bool>;
}

impl<const N: usize, T: CompactSet<N> + ?Sized> CompactSet<N> for &T {
    fn member(&self, point: &Point<N>, precision: i64) -> CompactResult<bool> {
        (**self).member(point, precision)
    }
}

impl<const N: usize, T: CompactSet<N> + ?Sized> CompactSet<N> for Arc<T> {
    fn member(&self, point: &Point<N>, precision: i64) -> CompactResult<bool> {
        (**self).member(point, precision)
    }
}

type Membership<const N: usize> = dyn Fn(&Point<N>, i64) -> CompactResult<bool> + Send + Sync;

/// A compact set given by a characteristic function.
#[derive(Clone)]
pub struct Compact<const N: usize> {
    membership: Arc<Membership<N>>,
}

impl<const N: usize> Compact<N> {
    /// Wraps a characteristic function. The caller is responsible for the
    /// two-sided contract.
    pub fn from_predicate<F>(predicate: F) -> Self
    where
        F: Fn(&Point<N>, i64) -> CompactResult<bool> + Send + Sync + 'static,
    {
        Self {
            membership: Arc::new(predicate),
        }
    }

    /// The empty set.
    pub fn empty() -> Self {
        Self::from_predicate(|_, _| Ok(false))
    }
}

impl<const N: usize> CompactSet<N> for Compact<N> {
    fn member(&self, point: &Point<N>, precision: i64) -> CompactResult<bool> {
        (self.membership)(point, precision)
    }
}

impl<const N: usize> fmt::Debug for Compact<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Compact<{N}>(..)")
    }
}

/// Builds primitive sets whose decisions use a given effort budget.
#[derive(Debug, Clone, Copy)]
pub struct CompactBuilder {
    effort: Effort,
}

impl CompactBuilder {
    pub fn new(config: SolverConfig) -> CompactResult<Self> {
        config.validate()?;
        Ok(Self {
            effort: config.effort(),
        })
    }

    /// `{center}`: true when the distance to `center` is certified below
    /// `2^p`, false when it is certified positive.
    pub fn singleton<const N: usize>(&self, center: Point<N>) -> Compact<N> {
        let effort = self.effort;
        Compact::from_predicate(move |point, precision| {
            let d = distance(point, &center);
            let radius = Real::pow2(precision);
            let choice = choose(&d.lt(&radius), &d.gt(&Real::zero()), precision, &effort)
                .map_err(|err| CompactError::from_budget(precision, err))?;
            Ok(choice == Choice::First)
        })
    }

    /// The closed ball of radius `radius` around `center`.
    pub fn ball<const N: usize>(&self, center: Point<N>, radius: Real) -> Compact<N> {
        let effort = self.effort;
        Compact::from_predicate(move |point, precision| {
            let d = distance(point, &center);
            let margin = Real::pow2(precision);
            let choice = choose(
                &d.lt(&(&radius + &margin)),
                &d.gt(&radius),
                precision,
                &effort,
            )
            .map_err(|err| CompactError::from_budget(precision, err))?;
            Ok(choice == Choice::First)
        })
    }

    /// The closed interval `[a, b]`.
    ///
    /// # Errors
    ///
    /// [`CompactError::InvalidInterval`] unless `a < b` is certified;
    /// endpoints closer than `2^-64` are treated as equal.
    pub fn interval(&self, a: Real, b: Real) -> CompactResult<Compact<1>> {
        let gap = Real::pow2(DEFAULT_ORDER_CHECK_PRECISION);
        let ordered = choose(
            &a.lt(&b),
            &b.lt(&(&a + &gap)),
            DEFAULT_ORDER_CHECK_PRECISION,
            &self.effort,
        )
        .map_err(|err| CompactError::from_budget(DEFAULT_ORDER_CHECK_PRECISION, err))?;
        if ordered == Choice::Second {
            return Err(CompactError::InvalidInterval);
        }
        let effort = self.effort;
        Ok(Compact::from_predicate(move |point: &Point<1>, precision: i64| {
            let z = &point[0];
            let margin = Real::pow2(precision);
            let inside = z.lt(&(&b + &margin)).and(z.gt(&(&a - &margin)));
            let outside = z.lt(&a).or(z.gt(&b));
            let choice = choose(&inside, &outside, precision, &effort)
                .map_err(|err| CompactError::from_budget(precision, err))?;
            Ok(choice == Choice::First)
        }))
    }
}

impl Default for CompactBuilder {
    fn default() -> Self {
        Self {
            effort: SolverConfig::default().effort(),
        }
    }
}

/// The empty set of `R^N`.
pub fn empty<const N: usize>() -> Compact<N> {
    Compact::empty()
}

/// `{x}` with the default effort budget.
pub fn singleton<const N: usize>(x: Point<N>) -> Compact<N> {
    CompactBuilder::default().singleton(x)
}

/// `[a, b]` with the default effort budget.
///
/// # Examples
/// ```
/// use compact_sets::{interval, CompactError};
/// use exact_real::Real;
/// assert_eq!(interval(Real::from(2), Real::from(1)).unwrap_err(), CompactError::InvalidInterval);
/// ```
pub fn interval(a: Real, b: Real) -> CompactResult<Compact<1>> {
    CompactBuilder::default().interval(a, b)
}

/// `A ∩ B`: members of both, tested at the same point and precision.
pub fn intersection<const N: usize, A, B>(a: A, b: B) -> Compact<N>
where
    A: CompactSet<N> + Send + Sync + 'static,
    B: CompactSet<N> + Send + Sync + 'static,
{
    Compact::from_predicate(move |point, precision| {
        Ok(a.member(point, precision)? && b.member(point, precision)?)
    })
}

/// `A ∪ B`: members of either, tested at the same point and precision.
pub fn union<const N: usize, A, B>(a: A, b: B) -> Compact<N>
where
    A: CompactSet<N> + Send + Sync + 'static,
    B: CompactSet<N> + Send + Sync + 'static,
{
    Compact::from_predicate(move |point, precision| {
        Ok(a.member(point, precision)? || b.member(point, precision)?)
    })
}

//! # Exact Reals
//!
//! A [`Real`] is an immutable expression over exact constants. Nothing is
//! computed when an expression is built; [`Real::enclose`] evaluates it at a
//! chosen working precision into an [`Enclosure`] guaranteed to contain the
//! exact value, and [`Real::approx`] retries along an [`Effort`] schedule
//! until the enclosure is narrow enough.
//!
//! ## Example
//!
//! ```rust
//! use exact_real::{Effort, Real};
//!
//! let two = Real::from(2);
//! let root = two.sqrt();
//! let approx = root.approx(-40, &Effort::default()).unwrap();
//! assert!((approx.to_f64() - std::f64::consts::SQRT_2).abs() < 1e-12);
//! ```

mod ops;
mod transcendental;

use std::fmt;
use std::sync::Arc;

use config::constants::DEFAULT_GUARD_BITS;
use log::trace;
use num_bigint::BigInt;
use num_traits::Zero;

use crate::decide::Condition;
use crate::dyadic::Dyadic;
use crate::effort::Effort;
use crate::enclosure::Enclosure;
use crate::error::{RealError, RealResult};
use crate::error_bound::ErrorBound;

/// A sequence of approximations: the element for `p` lies within `2^p` of the
/// limit.
type ApproximationFn = dyn Fn(i64) -> RealResult<Real> + Send + Sync;

#[derive(Clone)]
struct Approximations(Arc<ApproximationFn>);

impl fmt::Debug for Approximations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Approximations(..)")
    }
}

#[derive(Debug)]
enum Node {
    Exact(Dyadic),
    Ratio(BigInt, BigInt),
    Pi,
    Neg(Real),
    Add(Real, Real),
    Sub(Real, Real),
    Mul(Real, Real),
    Div(Real, Real),
    Square(Real),
    Sqrt(Real),
    Abs(Real),
    Min(Real, Real),
    Max(Real, Real),
    Sin(Real),
    Cos(Real),
    Scale(Real, i64),
    Widen(Real, Dyadic),
    Limit(Approximations),
}

/// An exact real number, evaluated lazily to any precision.
///
/// Cloning is cheap: the expression is shared.
#[derive(Clone, Debug)]
pub struct Real {
    node: Arc<Node>,
}

impl Real {
    fn from_node(node: Node) -> Self {
        Self {
            node: Arc::new(node),
        }
    }

    /// An exact dyadic constant.
    pub fn exact(value: Dyadic) -> Self {
        Self::from_node(Node::Exact(value))
    }

    pub fn zero() -> Self {
        Self::exact(Dyadic::zero())
    }

    pub fn one() -> Self {
        Self::exact(Dyadic::one())
    }

    /// The exact constant `2^exponent`.
    pub fn pow2(exponent: i64) -> Self {
        Self::exact(Dyadic::pow2(exponent))
    }

    /// The rational `numerator / denominator`.
    ///
    /// # Examples
    /// ```
    /// use exact_real::Real;
    /// let x = Real::ratio(16, 5).unwrap(); // 3.2
    /// assert!(Real::ratio(1, 0).is_err());
    /// # let _ = x;
    /// ```
    pub fn ratio(numerator: i64, denominator: i64) -> RealResult<Self> {
        Self::big_ratio(BigInt::from(numerator), BigInt::from(denominator))
    }

    pub fn big_ratio(numerator: BigInt, denominator: BigInt) -> RealResult<Self> {
        if denominator.is_zero() {
            return Err(RealError::ZeroDenominator);
        }
        Ok(Self::from_node(Node::Ratio(numerator, denominator)))
    }

    /// The circle constant π.
    pub fn pi() -> Self {
        Self::from_node(Node::Pi)
    }

    /// The limit of `approximation(p)` as `p → -∞`, where the element for `p`
    /// must lie within `2^p` of the limit.
    pub fn from_approximations<F>(approximation: F) -> Self
    where
        F: Fn(i64) -> RealResult<Real> + Send + Sync + 'static,
    {
        Self::from_node(Node::Limit(Approximations(Arc::new(approximation))))
    }

    /// The exact value, if this real is a dyadic constant.
    pub fn as_exact(&self) -> Option<&Dyadic> {
        match &*self.node {
            Node::Exact(value) => Some(value),
            _ => None,
        }
    }

    pub fn square(&self) -> Real {
        match self.as_exact() {
            Some(x) => Real::exact(x * x),
            None => Real::from_node(Node::Square(self.clone())),
        }
    }

    pub fn sqrt(&self) -> Real {
        Real::from_node(Node::Sqrt(self.clone()))
    }

    pub fn abs(&self) -> Real {
        match self.as_exact() {
            Some(x) => Real::exact(x.abs()),
            None => Real::from_node(Node::Abs(self.clone())),
        }
    }

    pub fn min(&self, other: &Real) -> Real {
        Real::from_node(Node::Min(self.clone(), other.clone()))
    }

    pub fn max(&self, other: &Real) -> Real {
        Real::from_node(Node::Max(self.clone(), other.clone()))
    }

    pub fn sin(&self) -> Real {
        Real::from_node(Node::Sin(self.clone()))
    }

    pub fn cos(&self) -> Real {
        Real::from_node(Node::Cos(self.clone()))
    }

    /// Multiplies by `2^k`.
    pub fn scale(&self, k: i64) -> Real {
        match self.as_exact() {
            Some(x) => Real::exact(x.shift(k)),
            None => Real::from_node(Node::Scale(self.clone(), k)),
        }
    }

    /// The same value with its error bound grown by `bound`: every enclosure
    /// of the result contains the `bound`-neighbourhood of the original.
    pub fn with_added_error(&self, bound: &ErrorBound) -> Real {
        if bound.is_zero() {
            return self.clone();
        }
        Real::from_node(Node::Widen(self.clone(), bound.to_dyadic()))
    }

    /// Midpoint and error bound of the first enclosure the effort schedule
    /// produces.
    pub fn ball(&self, effort: &Effort) -> RealResult<(Dyadic, ErrorBound)> {
        if let Some(x) = self.as_exact() {
            return Ok((x.clone(), ErrorBound::zero()));
        }
        let enclosure = self.first_enclosure(effort)?;
        Ok((
            enclosure.midpoint(),
            ErrorBound::from_dyadic(&enclosure.radius()),
        ))
    }

    /// Midpoint and error bound of the first enclosure of radius at most
    /// `2^target`, or of the finest one the effort allows.
    ///
    /// Fails only when no enclosure exists within the budget.
    pub fn ball_within(&self, target: i64, effort: &Effort) -> RealResult<(Dyadic, ErrorBound)> {
        if let Some(x) = self.as_exact() {
            return Ok((x.clone(), ErrorBound::zero()));
        }
        let tolerance = Dyadic::pow2(target);
        let mut finest: Option<Enclosure> = None;
        let mut last = RealError::Unresolved {
            target,
            max_bits: effort.max_bits(),
        };
        for bits in effort.schedule(target) {
            match self.enclose(bits) {
                Ok(enclosure) => {
                    let done = enclosure.radius() <= tolerance;
                    finest = Some(enclosure);
                    if done {
                        break;
                    }
                }
                Err(err @ RealError::Domain { .. }) => last = err,
                Err(err) => return Err(err),
            }
        }
        let enclosure = finest.ok_or(last)?;
        trace!("ball within 2^{target}: radius {}", enclosure.radius());
        Ok((
            enclosure.midpoint(),
            ErrorBound::from_dyadic(&enclosure.radius()),
        ))
    }

    /// Current error bound of this real at the effort's initial precision.
    pub fn error_bound(&self, effort: &Effort) -> RealResult<ErrorBound> {
        self.ball(effort).map(|(_, error)| error)
    }

    fn first_enclosure(&self, effort: &Effort) -> RealResult<Enclosure> {
        let mut last = RealError::Unresolved {
            target: 0,
            max_bits: effort.max_bits(),
        };
        for bits in effort.initial_schedule() {
            match self.enclose(bits) {
                Ok(enclosure) => return Ok(enclosure),
                Err(err @ RealError::Domain { .. }) => last = err,
                Err(err) => return Err(err),
            }
        }
        Err(last)
    }

    /// A dyadic `d` with `|d - self| <= 2^target`.
    ///
    /// Fails with [`RealError::Unresolved`] when no enclosure of radius at most
    /// `2^target` is found within the effort budget.
    pub fn approx(&self, target: i64, effort: &Effort) -> RealResult<Dyadic> {
        if let Some(x) = self.as_exact() {
            return Ok(x.clone());
        }
        let tolerance = Dyadic::pow2(target);
        for bits in effort.schedule(target) {
            match self.enclose(bits) {
                Ok(enclosure) if enclosure.radius() <= tolerance => {
                    return Ok(enclosure.midpoint());
                }
                Ok(enclosure) => {
                    trace!("approx 2^{target}: {bits} bits gave radius {}", enclosure.radius());
                }
                Err(RealError::Domain { operation }) => {
                    trace!("approx 2^{target}: {operation} undefined at {bits} bits");
                }
                Err(err) => return Err(err),
            }
        }
        Err(RealError::Unresolved {
            target,
            max_bits: effort.max_bits(),
        })
    }

    /// Floating-point rendering for diagnostics and tests. Never used for
    /// decisions.
    pub fn to_f64_approx(&self) -> RealResult<f64> {
        self.approx(-60, &Effort::default()).map(|d| d.to_f64())
    }

    /// The condition `self < other`.
    pub fn lt(&self, other: &Real) -> Condition {
        Condition::less(self.clone(), other.clone())
    }

    /// The condition `self > other`.
    pub fn gt(&self, other: &Real) -> Condition {
        Condition::less(other.clone(), self.clone())
    }

    /// Evaluates the expression with every rounding performed on the grid
    /// `2^-bits`. The result contains the exact value.
    pub fn enclose(&self, bits: u32) -> RealResult<Enclosure> {
        let grid = -(bits as i64);
        match &*self.node {
            Node::Exact(value) => Ok(Enclosure::point(value.clone())),
            Node::Ratio(numerator, denominator) => {
                let numerator = Dyadic::from(numerator.clone());
                let denominator = Dyadic::from(denominator.clone());
                Ok(Enclosure::new(
                    Dyadic::div_floor_to(&numerator, &denominator, grid),
                    Dyadic::div_ceil_to(&numerator, &denominator, grid),
                ))
            }
            Node::Pi => Ok(transcendental::pi(bits)),
            Node::Neg(x) => Ok(x.enclose(bits)?.neg()),
            Node::Add(a, b) => Ok(a.enclose(bits)?.add(&b.enclose(bits)?)),
            Node::Sub(a, b) => Ok(a.enclose(bits)?.sub(&b.enclose(bits)?)),
            Node::Mul(a, b) => Ok(a.enclose(bits)?.mul(&b.enclose(bits)?, bits)),
            Node::Div(a, b) => a.enclose(bits)?.div(&b.enclose(bits)?, bits),
            Node::Square(x) => Ok(x.enclose(bits)?.square(bits)),
            Node::Sqrt(x) => x.enclose(bits)?.sqrt(bits),
            Node::Abs(x) => Ok(x.enclose(bits)?.abs()),
            Node::Min(a, b) => Ok(a.enclose(bits)?.min(&b.enclose(bits)?)),
            Node::Max(a, b) => Ok(a.enclose(bits)?.max(&b.enclose(bits)?)),
            Node::Sin(x) => transcendental::sin(&x.enclose(bits)?, bits),
            Node::Cos(x) => transcendental::cos(&x.enclose(bits)?, bits),
            Node::Scale(x, k) => Ok(x.enclose(bits)?.scale(*k)),
            Node::Widen(x, amount) => Ok(x.enclose(bits)?.widen(amount)),
            Node::Limit(approximations) => {
                // The term is asked for slightly less than the working
                // precision so limits stay cheap when the caller only needs a
                // coarse answer.
                let precision = i64::from(DEFAULT_GUARD_BITS) - 2 + grid;
                let term = (approximations.0)(precision)?;
                Ok(term.enclose(bits)?.widen(&Dyadic::pow2(precision)))
            }
        }
    }
}

impl From<Dyadic> for Real {
    fn from(value: Dyadic) -> Self {
        Real::exact(value)
    }
}

impl From<&Dyadic> for Real {
    fn from(value: &Dyadic) -> Self {
        Real::exact(value.clone())
    }
}

impl From<i64> for Real {
    fn from(value: i64) -> Self {
        Real::exact(Dyadic::from(value))
    }
}

impl From<i32> for Real {
    fn from(value: i32) -> Self {
        Real::exact(Dyadic::from(value))
    }
}

impl From<u32> for Real {
    fn from(value: u32) -> Self {
        Real::exact(Dyadic::from(u64::from(value)))
    }
}

//! # Dyadic Numbers
//!
//! Exact rationals of the form `m · 2^e` with an arbitrary-precision mantissa.
//! Addition, subtraction and multiplication are exact; division and square
//! roots are only available with an explicit rounding direction and grid.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, ToPrimitive, Zero};

/// An exact dyadic rational `mantissa · 2^exponent`.
///
/// # Examples
/// ```
/// use exact_real::Dyadic;
/// let three_quarters = Dyadic::new(3, -2);
/// assert_eq!(three_quarters.to_f64(), 0.75);
/// ```
#[derive(Clone, Debug)]
pub struct Dyadic {
    mantissa: BigInt,
    exponent: i64,
}

impl Dyadic {
    /// Creates `mantissa · 2^exponent`.
    pub fn new(mantissa: impl Into<BigInt>, exponent: i64) -> Self {
        Self {
            mantissa: mantissa.into(),
            exponent,
        }
    }

    pub fn zero() -> Self {
        Self::new(0, 0)
    }

    pub fn one() -> Self {
        Self::new(1, 0)
    }

    /// Returns `2^exponent`.
    pub fn pow2(exponent: i64) -> Self {
        Self::new(1, exponent)
    }

    pub fn mantissa(&self) -> &BigInt {
        &self.mantissa
    }

    pub fn exponent(&self) -> i64 {
        self.exponent
    }

    pub fn is_zero(&self) -> bool {
        self.mantissa.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.mantissa.is_negative()
    }

    pub fn is_positive(&self) -> bool {
        self.mantissa.is_positive()
    }

    pub fn abs(&self) -> Self {
        Self::new(self.mantissa.abs(), self.exponent)
    }

    /// Multiplies by `2^k`. Always exact.
    pub fn shift(&self, k: i64) -> Self {
        Self::new(self.mantissa.clone(), self.exponent + k)
    }

    /// Halves the value exactly.
    pub fn half(&self) -> Self {
        self.shift(-1)
    }

    /// Largest multiple of `2^exponent` not above `self`.
    pub fn floor_to(&self, exponent: i64) -> Self {
        if self.exponent >= exponent {
            return self.clone();
        }
        let divisor = BigInt::one() << shift_amount(exponent - self.exponent);
        Self::new(self.mantissa.div_floor(&divisor), exponent)
    }

    /// Smallest multiple of `2^exponent` not below `self`.
    pub fn ceil_to(&self, exponent: i64) -> Self {
        -(-self).floor_to(exponent)
    }

    /// `numerator / denominator` rounded down to a multiple of `2^exponent`.
    ///
    /// The denominator must be non-zero; callers check this before dividing.
    pub fn div_floor_to(numerator: &Dyadic, denominator: &Dyadic, exponent: i64) -> Self {
        let (quotient, _) = Self::div_mod_to(numerator, denominator, exponent);
        Self::new(quotient, exponent)
    }

    /// `numerator / denominator` rounded up to a multiple of `2^exponent`.
    pub fn div_ceil_to(numerator: &Dyadic, denominator: &Dyadic, exponent: i64) -> Self {
        let (quotient, remainder) = Self::div_mod_to(numerator, denominator, exponent);
        if remainder.is_zero() {
            Self::new(quotient, exponent)
        } else {
            Self::new(quotient + BigInt::one(), exponent)
        }
    }

    fn div_mod_to(numerator: &Dyadic, denominator: &Dyadic, exponent: i64) -> (BigInt, BigInt) {
        let shift = numerator.exponent - denominator.exponent - exponent;
        let (num, den) = if shift >= 0 {
            (
                &numerator.mantissa << shift_amount(shift),
                denominator.mantissa.clone(),
            )
        } else {
            (
                numerator.mantissa.clone(),
                &denominator.mantissa << shift_amount(-shift),
            )
        };
        num.div_mod_floor(&den)
    }

    /// `sqrt(self)` rounded down to a multiple of `2^exponent`. `self` must be
    /// non-negative.
    pub fn sqrt_floor_to(&self, exponent: i64) -> Self {
        let scaled = self.floor_to(2 * exponent).mantissa_at(2 * exponent);
        Self::new(scaled.sqrt(), exponent)
    }

    /// `sqrt(self)` rounded up to a multiple of `2^exponent`. `self` must be
    /// non-negative.
    pub fn sqrt_ceil_to(&self, exponent: i64) -> Self {
        let scaled = self.ceil_to(2 * exponent).mantissa_at(2 * exponent);
        let root = scaled.sqrt();
        if &root * &root < scaled {
            Self::new(root + BigInt::one(), exponent)
        } else {
            Self::new(root, exponent)
        }
    }

    // Integer n with self == n · 2^exponent; self must lie on that grid.
    fn mantissa_at(&self, exponent: i64) -> BigInt {
        debug_assert!(self.exponent >= exponent || self.is_zero());
        if self.exponent >= exponent {
            &self.mantissa << shift_amount(self.exponent - exponent)
        } else {
            BigInt::zero()
        }
    }

    /// `floor(log2(|self|))`, or `None` for zero.
    ///
    /// # Examples
    /// ```
    /// use exact_real::Dyadic;
    /// assert_eq!(Dyadic::new(5, 0).floor_log2(), Some(2));
    /// assert_eq!(Dyadic::new(1, -3).floor_log2(), Some(-3));
    /// ```
    pub fn floor_log2(&self) -> Option<i64> {
        if self.is_zero() {
            return None;
        }
        Some(self.mantissa.bits() as i64 - 1 + self.exponent)
    }

    /// Smallest `e` with `2^e >= |self|`, or `None` for zero.
    pub fn ceil_log2(&self) -> Option<i64> {
        let floor = self.floor_log2()?;
        let magnitude = self.mantissa.magnitude();
        let is_power_of_two = magnitude.trailing_zeros() == Some(magnitude.bits() - 1);
        Some(if is_power_of_two { floor } else { floor + 1 })
    }

    /// Nearest `f64`, for diagnostics only.
    pub fn to_f64(&self) -> f64 {
        let bits = self.mantissa.bits() as i64;
        let (mantissa, exponent) = if bits > 64 {
            let drop = bits - 64;
            (&self.mantissa >> shift_amount(drop), self.exponent + drop)
        } else {
            (self.mantissa.clone(), self.exponent)
        };
        let value = mantissa.to_f64().unwrap_or(f64::NAN);
        let exponent = exponent.clamp(i32::MIN as i64, i32::MAX as i64) as i32;
        value * 2f64.powi(exponent)
    }

    /// `floor(self)` as a machine integer, if it fits.
    pub fn to_i64_floor(&self) -> Option<i64> {
        self.floor_to(0).mantissa_at(0).to_i64()
    }

    fn aligned(&self, other: &Dyadic) -> (BigInt, BigInt, i64) {
        let exponent = self.exponent.min(other.exponent);
        let lhs = &self.mantissa << shift_amount(self.exponent - exponent);
        let rhs = &other.mantissa << shift_amount(other.exponent - exponent);
        (lhs, rhs, exponent)
    }
}

fn shift_amount(bits: i64) -> usize {
    usize::try_from(bits).unwrap_or(0)
}

impl PartialEq for Dyadic {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Dyadic {}

impl PartialOrd for Dyadic {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Dyadic {
    fn cmp(&self, other: &Self) -> Ordering {
        let (lhs, rhs, _) = self.aligned(other);
        lhs.cmp(&rhs)
    }
}

impl From<i64> for Dyadic {
    fn from(value: i64) -> Self {
        Self::new(value, 0)
    }
}

impl From<i32> for Dyadic {
    fn from(value: i32) -> Self {
        Self::new(value, 0)
    }
}

impl From<u64> for Dyadic {
    fn from(value: u64) -> Self {
        Self::new(value, 0)
    }
}

impl From<BigInt> for Dyadic {
    fn from(value: BigInt) -> Self {
        Self::new(value, 0)
    }
}

impl Add for &Dyadic {
    type Output = Dyadic;

    fn add(self, rhs: &Dyadic) -> Dyadic {
        let (lhs, rhs, exponent) = self.aligned(rhs);
        Dyadic::new(lhs + rhs, exponent)
    }
}

impl Sub for &Dyadic {
    type Output = Dyadic;

    fn sub(self, rhs: &Dyadic) -> Dyadic {
        let (lhs, rhs, exponent) = self.aligned(rhs);
        Dyadic::new(lhs - rhs, exponent)
    }
}

impl Mul for &Dyadic {
    type Output = Dyadic;

    fn mul(self, rhs: &Dyadic) -> Dyadic {
        Dyadic::new(&self.mantissa * &rhs.mantissa, self.exponent + rhs.exponent)
    }
}

impl Neg for &Dyadic {
    type Output = Dyadic;

    fn neg(self) -> Dyadic {
        Dyadic::new(-&self.mantissa, self.exponent)
    }
}

impl Neg for Dyadic {
    type Output = Dyadic;

    fn neg(self) -> Dyadic {
        Dyadic::new(-self.mantissa, self.exponent)
    }
}

impl fmt::Display for Dyadic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}*2^{}", self.mantissa, self.exponent)
    }
}

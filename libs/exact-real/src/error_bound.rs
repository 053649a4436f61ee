//! # Error Bounds
//!
//! Compact `mantissa · 2^exponent` upper bounds on the error of a value, the
//! form in which error bounds are inspected and added to arguments.

use std::fmt;

use num_bigint::BigInt;
use num_traits::{Signed, ToPrimitive};

use crate::dyadic::Dyadic;

/// An upper bound `mantissa · 2^exponent` with a 32-bit mantissa.
///
/// # Examples
/// ```
/// use exact_real::ErrorBound;
/// let sum = ErrorBound::pow2(-10).add(&ErrorBound::pow2(-10));
/// assert_eq!(sum.normalize(), ErrorBound::pow2(-9));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ErrorBound {
    mantissa: u32,
    exponent: i64,
}

impl ErrorBound {
    pub fn zero() -> Self {
        Self {
            mantissa: 0,
            exponent: 0,
        }
    }

    /// The bound `mantissa · 2^exponent`, stored with an odd mantissa so
    /// equal bounds compare equal.
    pub fn new(mantissa: u32, exponent: i64) -> Self {
        if mantissa == 0 {
            return Self::zero();
        }
        let shift = mantissa.trailing_zeros();
        Self {
            mantissa: mantissa >> shift,
            exponent: exponent + i64::from(shift),
        }
    }

    /// The bound `1 · 2^exponent`.
    pub fn pow2(exponent: i64) -> Self {
        Self::new(1, exponent)
    }

    pub fn mantissa(&self) -> u32 {
        self.mantissa
    }

    pub fn exponent(&self) -> i64 {
        self.exponent
    }

    pub fn is_zero(&self) -> bool {
        self.mantissa == 0
    }

    /// Sum of two bounds, rounded up so the result still bounds the exact sum.
    pub fn add(&self, other: &ErrorBound) -> ErrorBound {
        if self.is_zero() {
            return *other;
        }
        if other.is_zero() {
            return *self;
        }
        // Exact when the exponents are within 31 of each other; otherwise the
        // smaller term is rounded up onto the finest grid that still fits.
        let exponent = (self.exponent.max(other.exponent) - 31).max(self.exponent.min(other.exponent));
        Self::from_wide(self.aligned(exponent) + other.aligned(exponent), exponent)
    }

    // Mantissa on the grid 2^exponent, rounded up. The left shift is at most 31.
    fn aligned(&self, exponent: i64) -> u64 {
        let mantissa = u64::from(self.mantissa);
        if self.exponent >= exponent {
            mantissa << (self.exponent - exponent)
        } else {
            shift_right_ceil(mantissa, exponent - self.exponent)
        }
    }

    /// Shifts the mantissa down to one, truncating, and moves the exponent up
    /// accordingly. The exponent of the result is `floor(log2(bound))`.
    pub fn normalize(&self) -> ErrorBound {
        if self.is_zero() {
            return *self;
        }
        let mut mantissa = self.mantissa;
        let mut exponent = self.exponent;
        while mantissa > 1 {
            mantissa >>= 1;
            exponent += 1;
        }
        Self { mantissa, exponent }
    }

    /// Smallest representable bound not below `|value|`.
    pub fn from_dyadic(value: &Dyadic) -> ErrorBound {
        if value.is_zero() {
            return Self::zero();
        }
        let magnitude: BigInt = value.mantissa().abs();
        let bits = magnitude.bits() as i64;
        if bits <= 32 {
            let mantissa = magnitude.to_u32().unwrap_or(u32::MAX);
            return Self::new(mantissa, value.exponent());
        }
        let grid = value.exponent() + bits - 32;
        let rounded = Dyadic::new(magnitude, value.exponent()).ceil_to(grid);
        let wide = rounded.mantissa().to_u64().unwrap_or(u64::MAX);
        Self::from_wide(wide, grid)
    }

    pub fn to_dyadic(&self) -> Dyadic {
        if self.is_zero() {
            Dyadic::zero()
        } else {
            Dyadic::new(self.mantissa, self.exponent)
        }
    }

    fn from_wide(mut mantissa: u64, mut exponent: i64) -> ErrorBound {
        while mantissa > u32::MAX as u64 {
            mantissa = shift_right_ceil(mantissa, 1);
            exponent += 1;
        }
        Self::new(mantissa as u32, exponent)
    }
}

fn shift_right_ceil(value: u64, shift: i64) -> u64 {
    if shift <= 0 {
        return value;
    }
    if shift >= 64 {
        return u64::from(value != 0);
    }
    let kept = value >> shift;
    let lost = value & ((1u64 << shift) - 1);
    kept + u64::from(lost != 0)
}

impl Default for ErrorBound {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for ErrorBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}*2^{}", self.mantissa, self.exponent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearby_exponents_add_exactly() {
        let sum = ErrorBound::new(3, 0).add(&ErrorBound::new(1, -4));
        assert_eq!(sum, ErrorBound::new(49, -4));
    }

    #[test]
    fn distant_exponents_round_up_the_smaller_term() {
        let sum = ErrorBound::pow2(0).add(&ErrorBound::pow2(-100));
        assert_eq!(sum, ErrorBound::new((1 << 31) + 1, -31));
        assert_eq!(sum.normalize(), ErrorBound::pow2(0));
    }

    #[test]
    fn equal_bounds_have_one_representation() {
        assert_eq!(ErrorBound::new(2, -5), ErrorBound::pow2(-4));
        assert_eq!(ErrorBound::new(12, 0), ErrorBound::new(3, 2));
        assert_eq!(ErrorBound::pow2(-5).add(&ErrorBound::pow2(-5)), ErrorBound::pow2(-4));
        let radius = Dyadic::new(2, -5);
        assert_eq!(ErrorBound::from_dyadic(&radius), ErrorBound::pow2(-4));
    }

    #[test]
    fn zero_is_the_additive_identity() {
        let bound = ErrorBound::new(5, -3);
        assert_eq!(bound.add(&ErrorBound::zero()), bound);
        assert_eq!(ErrorBound::zero().add(&bound), bound);
    }

    #[test]
    fn normalize_truncates_to_a_power_of_two() {
        assert_eq!(ErrorBound::new(3, -10).normalize(), ErrorBound::pow2(-9));
        assert_eq!(ErrorBound::new(1, -10).normalize(), ErrorBound::pow2(-10));
    }

    #[test]
    fn from_dyadic_never_underestimates() {
        let value = Dyadic::new((1u64 << 40) + 1, -50);
        let bound = ErrorBound::from_dyadic(&value);
        assert!(bound.to_dyadic() >= value);
    }

    #[test]
    fn wide_sums_stay_representable() {
        let big = ErrorBound::new(u32::MAX, 0);
        let sum = big.add(&big);
        assert!(sum.to_dyadic() >= &big.to_dyadic() + &big.to_dyadic());
    }
}

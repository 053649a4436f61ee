//! # Enclosures
//!
//! Closed dyadic intervals `[lo, hi]` known to contain a real value. Every
//! operation rounds outward, so the result always contains the exact result
//! of the operation applied to any points of the operands.

use std::fmt;

use crate::dyadic::Dyadic;
use crate::error::{RealError, RealResult};

/// A closed interval with dyadic endpoints.
///
/// # Examples
/// ```
/// use exact_real::{Dyadic, Enclosure};
/// let unit = Enclosure::new(Dyadic::zero(), Dyadic::one());
/// assert_eq!(unit.midpoint(), Dyadic::new(1, -1));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Enclosure {
    lo: Dyadic,
    hi: Dyadic,
}

impl Enclosure {
    /// Creates `[lo, hi]`, swapping the endpoints if given in the wrong order.
    pub fn new(lo: Dyadic, hi: Dyadic) -> Self {
        if lo <= hi {
            Self { lo, hi }
        } else {
            Self { lo: hi, hi: lo }
        }
    }

    /// The degenerate interval `[value, value]`.
    pub fn point(value: Dyadic) -> Self {
        Self {
            lo: value.clone(),
            hi: value,
        }
    }

    pub fn lo(&self) -> &Dyadic {
        &self.lo
    }

    pub fn hi(&self) -> &Dyadic {
        &self.hi
    }

    pub fn midpoint(&self) -> Dyadic {
        (&self.lo + &self.hi).half()
    }

    pub fn radius(&self) -> Dyadic {
        (&self.hi - &self.lo).half()
    }

    /// Largest absolute value attained on the interval.
    pub fn magnitude(&self) -> Dyadic {
        self.lo.abs().max(self.hi.abs())
    }

    pub fn contains_zero(&self) -> bool {
        !self.lo.is_positive() && !self.hi.is_negative()
    }

    /// Every point of `self` is strictly below every point of `other`.
    pub fn certainly_lt(&self, other: &Enclosure) -> bool {
        self.hi < other.lo
    }

    /// No point of `self` is strictly below any point of `other`.
    pub fn certainly_ge(&self, other: &Enclosure) -> bool {
        self.lo >= other.hi
    }

    pub fn add(&self, other: &Enclosure) -> Enclosure {
        Enclosure {
            lo: &self.lo + &other.lo,
            hi: &self.hi + &other.hi,
        }
    }

    pub fn sub(&self, other: &Enclosure) -> Enclosure {
        Enclosure {
            lo: &self.lo - &other.hi,
            hi: &self.hi - &other.lo,
        }
    }

    pub fn neg(&self) -> Enclosure {
        Enclosure {
            lo: -&self.hi,
            hi: -&self.lo,
        }
    }

    /// Multiplies by `2^k`. Exact.
    pub fn scale(&self, k: i64) -> Enclosure {
        Enclosure {
            lo: self.lo.shift(k),
            hi: self.hi.shift(k),
        }
    }

    /// Grows the interval by `amount` on both sides.
    pub fn widen(&self, amount: &Dyadic) -> Enclosure {
        Enclosure::new(&self.lo - amount, &self.hi + amount)
    }

    /// Rounds the endpoints outward to multiples of `2^-bits`.
    pub fn round_outward(&self, bits: u32) -> Enclosure {
        let grid = -(bits as i64);
        Enclosure {
            lo: self.lo.floor_to(grid),
            hi: self.hi.ceil_to(grid),
        }
    }

    pub fn mul(&self, other: &Enclosure, bits: u32) -> Enclosure {
        let products = [
            &self.lo * &other.lo,
            &self.lo * &other.hi,
            &self.hi * &other.lo,
            &self.hi * &other.hi,
        ];
        Self::hull(products).round_outward(bits)
    }

    /// `x²`, which is never negative even when the interval straddles zero.
    pub fn square(&self, bits: u32) -> Enclosure {
        let lo_sq = &self.lo * &self.lo;
        let hi_sq = &self.hi * &self.hi;
        let enclosure = if self.contains_zero() {
            Enclosure {
                lo: Dyadic::zero(),
                hi: lo_sq.max(hi_sq),
            }
        } else {
            Enclosure::new(lo_sq.clone().min(hi_sq.clone()), lo_sq.max(hi_sq))
        };
        enclosure.round_outward(bits)
    }

    pub fn div(&self, other: &Enclosure, bits: u32) -> RealResult<Enclosure> {
        if other.contains_zero() {
            return Err(RealError::Domain {
                operation: "division",
            });
        }
        let grid = -(bits as i64);
        let corners = [
            (&self.lo, &other.lo),
            (&self.lo, &other.hi),
            (&self.hi, &other.lo),
            (&self.hi, &other.hi),
        ];
        let lo = corners
            .iter()
            .map(|(n, d)| Dyadic::div_floor_to(n, d, grid))
            .min()
            .unwrap_or_else(Dyadic::zero);
        let hi = corners
            .iter()
            .map(|(n, d)| Dyadic::div_ceil_to(n, d, grid))
            .max()
            .unwrap_or_else(Dyadic::zero);
        Ok(Enclosure { lo, hi })
    }

    /// Square root. A lower end below zero by at most one unit of the
    /// rounding grid `2^-bits` is clipped to zero; an interval reaching
    /// further below zero is a domain error.
    pub fn sqrt(&self, bits: u32) -> RealResult<Enclosure> {
        let grid = -(bits as i64);
        if self.lo < -Dyadic::pow2(grid) {
            return Err(RealError::Domain { operation: "sqrt" });
        }
        let lo = if self.lo.is_positive() {
            self.lo.sqrt_floor_to(grid)
        } else {
            Dyadic::zero()
        };
        Ok(Enclosure {
            lo,
            hi: self.hi.sqrt_ceil_to(grid),
        })
    }

    pub fn abs(&self) -> Enclosure {
        if !self.lo.is_negative() {
            self.clone()
        } else if !self.hi.is_positive() {
            self.neg()
        } else {
            Enclosure {
                lo: Dyadic::zero(),
                hi: self.magnitude(),
            }
        }
    }

    pub fn min(&self, other: &Enclosure) -> Enclosure {
        Enclosure {
            lo: self.lo.clone().min(other.lo.clone()),
            hi: self.hi.clone().min(other.hi.clone()),
        }
    }

    pub fn max(&self, other: &Enclosure) -> Enclosure {
        Enclosure {
            lo: self.lo.clone().max(other.lo.clone()),
            hi: self.hi.clone().max(other.hi.clone()),
        }
    }

    /// Intersects with `[lo, hi]`; used to apply known ranges such as
    /// `sin ∈ [-1, 1]`. Returns `self` unchanged if the result would be empty.
    pub fn clamp(&self, lo: &Dyadic, hi: &Dyadic) -> Enclosure {
        let new_lo = self.lo.clone().max(lo.clone());
        let new_hi = self.hi.clone().min(hi.clone());
        if new_lo <= new_hi {
            Enclosure {
                lo: new_lo,
                hi: new_hi,
            }
        } else {
            self.clone()
        }
    }

    fn hull(values: [Dyadic; 4]) -> Enclosure {
        let [a, b, c, d] = values;
        let lo = a.clone().min(b.clone()).min(c.clone()).min(d.clone());
        let hi = a.max(b).max(c).max(d);
        Enclosure { lo, hi }
    }
}

impl fmt::Display for Enclosure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.lo.to_f64(), self.hi.to_f64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn iv(lo: i64, hi: i64) -> Enclosure {
        Enclosure::new(Dyadic::from(lo), Dyadic::from(hi))
    }

    #[test]
    fn multiplication_covers_sign_changes() {
        let product = iv(-2, 3).mul(&iv(-5, 4), 16);
        assert_eq!(product, iv(-15, 12));
    }

    #[test]
    fn square_of_straddling_interval_starts_at_zero() {
        let square = iv(-3, 2).square(16);
        assert_eq!(square, iv(0, 9));
    }

    #[test]
    fn division_by_interval_containing_zero_is_a_domain_error() {
        let err = iv(1, 2).div(&iv(-1, 1), 16).unwrap_err();
        assert_eq!(err, RealError::Domain { operation: "division" });
    }

    #[test]
    fn division_rounds_outward() {
        let third = iv(1, 1).div(&iv(3, 3), 10).unwrap();
        let three = Enclosure::point(Dyadic::from(3));
        let back = third.mul(&three, 40);
        assert!(back.lo() <= &Dyadic::one());
        assert!(back.hi() >= &Dyadic::one());
    }

    #[test]
    fn sqrt_clips_only_rounding_below_zero() {
        let rounded = Enclosure::new(-Dyadic::pow2(-8), Dyadic::from(4));
        assert_eq!(rounded.sqrt(8).unwrap(), iv(0, 2));
        assert_eq!(
            iv(-1, 4).sqrt(8).unwrap_err(),
            RealError::Domain { operation: "sqrt" }
        );
        assert!(iv(-4, -1).sqrt(8).is_err());
    }

    #[test]
    fn ordering_predicates_are_strict_where_documented() {
        assert!(iv(0, 1).certainly_lt(&iv(2, 3)));
        assert!(!iv(0, 2).certainly_lt(&iv(2, 3)));
        assert!(iv(3, 4).certainly_ge(&iv(2, 3)));
    }
}

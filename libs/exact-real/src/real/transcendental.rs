//! Enclosures of π, sine and cosine.

use num_bigint::BigInt;
use num_traits::Zero;

use crate::dyadic::Dyadic;
use crate::enclosure::Enclosure;
use crate::error::RealResult;

const EXTRA_BITS: u32 = 16;

/// π enclosed on the grid `2^-bits`, from Machin's formula
/// `π = 16·atan(1/5) − 4·atan(1/239)`.
pub(super) fn pi(bits: u32) -> Enclosure {
    let scale = u64::from(bits + EXTRA_BITS);
    let (atan5, terms5) = atan_inverse(5, scale);
    let (atan239, terms239) = atan_inverse(239, scale);
    let value = atan5 * 16 - atan239 * 4;
    let ulps = 32 * (terms5 + terms239 + 1);
    let exponent = -(scale as i64);
    let mid = Dyadic::new(value, exponent);
    let radius = Dyadic::new(ulps, exponent);
    Enclosure::new(&mid - &radius, &mid + &radius).round_outward(bits)
}

// Fixed-point `atan(1/n) · 2^scale` and the number of series terms used. The
// result is within `2·terms + 1` units of the exact value.
fn atan_inverse(n: u32, scale: u64) -> (BigInt, u64) {
    let n_squared = BigInt::from(u64::from(n) * u64::from(n));
    let mut power = (BigInt::from(1) << scale) / BigInt::from(n);
    let mut sum = BigInt::zero();
    let mut k: u64 = 0;
    while !power.is_zero() {
        let term = &power / BigInt::from(2 * k + 1);
        if k % 2 == 0 {
            sum += term;
        } else {
            sum -= term;
        }
        power /= &n_squared;
        k += 1;
    }
    (sum, k)
}

pub(super) fn sin(x: &Enclosure, bits: u32) -> RealResult<Enclosure> {
    periodic(x, bits, Series::Sine)
}

pub(super) fn cos(x: &Enclosure, bits: u32) -> RealResult<Enclosure> {
    periodic(x, bits, Series::Cosine)
}

#[derive(Clone, Copy)]
enum Series {
    Sine,
    Cosine,
}

// Both functions are 1-Lipschitz, so the value at the midpoint widened by the
// radius encloses the image of the whole interval.
fn periodic(x: &Enclosure, bits: u32, series: Series) -> RealResult<Enclosure> {
    let working = bits + EXTRA_BITS;
    let grid = -(working as i64);
    let (reduced, reduction_error) = reduce(&x.midpoint(), working)?;
    let center = reduced.floor_to(grid);
    let widening = &(&x.radius() + &reduction_error) + &(&reduced - &center);
    let value = taylor(&center, working, series)?.widen(&widening);
    Ok(value
        .clamp(&Dyadic::from(-1), &Dyadic::one())
        .round_outward(bits))
}

// Subtracts the nearest multiple of 2π from large arguments. Returns the
// reduced argument and a bound on the error the reduction introduced.
fn reduce(m: &Dyadic, working: u32) -> RealResult<(Dyadic, Dyadic)> {
    if m.abs() <= Dyadic::from(4) {
        return Ok((m.clone(), Dyadic::zero()));
    }
    let magnitude_bits = m.floor_log2().unwrap_or(0).max(0) as u32;
    let pi = pi(working + magnitude_bits + 4);
    let two_pi = pi.midpoint().shift(1);
    let shifted = m + &pi.midpoint();
    let turns = Dyadic::div_floor_to(&shifted, &two_pi, 0);
    let period = Enclosure::point(turns).mul(&pi.scale(1), working + magnitude_bits + 4);
    let reduced = Enclosure::point(m.clone()).sub(&period);
    Ok((reduced.midpoint(), reduced.radius()))
}

fn taylor(x: &Dyadic, working: u32, series: Series) -> RealResult<Enclosure> {
    let point = Enclosure::point(x.clone());
    let x_squared = point.square(working);
    let (mut term, mut n) = match series {
        Series::Sine => (point, 1u64),
        Series::Cosine => (Enclosure::point(Dyadic::one()), 0u64),
    };
    let mut sum = Enclosure::point(Dyadic::zero());
    let tolerance = Dyadic::pow2(-(working as i64));
    let bound = x.abs();
    let mut negate = false;
    loop {
        let signed = if negate { term.neg() } else { term.clone() };
        sum = sum.add(&signed);
        let divisor = Dyadic::from((n + 1) * (n + 2));
        term = term
            .mul(&x_squared, working)
            .div(&Enclosure::point(divisor), working)?;
        n += 2;
        negate = !negate;
        // Once n exceeds |x| the terms decrease, and the remainder of the
        // alternating series is bounded by the next term.
        if Dyadic::from(n) > bound && term.magnitude() <= tolerance {
            return Ok(sum.widen(&term.magnitude()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pi_enclosure_contains_pi() {
        let enclosure = pi(64);
        assert!(enclosure.lo().to_f64() <= std::f64::consts::PI);
        assert!(enclosure.hi().to_f64() >= std::f64::consts::PI);
        assert!(enclosure.radius() <= Dyadic::pow2(-60));
    }

    #[test]
    fn sine_of_small_point() {
        let x = Enclosure::point(Dyadic::new(1, -1));
        let s = sin(&x, 60).unwrap();
        let expected = 0.5f64.sin();
        assert!(s.lo().to_f64() <= expected && expected <= s.hi().to_f64());
    }

    #[test]
    fn cosine_reduces_large_arguments() {
        let x = Enclosure::point(Dyadic::from(1000));
        let c = cos(&x, 60).unwrap();
        let expected = 1000f64.cos();
        assert!((c.midpoint().to_f64() - expected).abs() < 1e-9);
        assert!(c.radius() <= Dyadic::pow2(-40));
    }
}

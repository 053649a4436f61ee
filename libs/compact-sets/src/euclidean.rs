//! Points of `R^N` with exact coordinates and the Euclidean metric.

use exact_real::{Dyadic, Real};

/// A point of `R^N`.
pub type Point<const N: usize> = [Real; N];

/// The origin of `R^N`.
pub fn origin<const N: usize>() -> Point<N> {
    std::array::from_fn(|_| Real::zero())
}

/// A point with exact dyadic coordinates.
pub fn dyadic_point<const N: usize>(coordinates: [Dyadic; N]) -> Point<N> {
    coordinates.map(Real::exact)
}

/// Euclidean distance `sqrt(Σ (x_i - y_i)²)`.
///
/// # Examples
/// ```
/// use compact_sets::euclidean::distance;
/// use exact_real::Real;
/// let d = distance(&[Real::from(0), Real::from(0)], &[Real::from(3), Real::from(4)]);
/// assert_eq!(d.to_f64_approx().unwrap(), 5.0);
/// ```
pub fn distance<const N: usize>(x: &Point<N>, y: &Point<N>) -> Real {
    let sum = x
        .iter()
        .zip(y.iter())
        .map(|(a, b)| (a - b).square())
        .fold(Real::zero(), |acc, sq| acc + sq);
    sum.sqrt()
}

/// Extra halvings of the per-coordinate tolerance needed so that
/// coordinate-wise variation `2^(p - s)` keeps Euclidean variation within
/// `2^(p - 1)`: the least `s >= 1` with `N <= 4^(s - 1)`.
pub fn coordinate_slack(dimension: usize) -> i64 {
    let mut slack = 1;
    let mut capacity: usize = 1;
    while capacity < dimension {
        capacity = capacity.saturating_mul(4);
        slack += 1;
    }
    slack
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slack_grows_with_dimension() {
        assert_eq!(coordinate_slack(1), 1);
        assert_eq!(coordinate_slack(2), 2);
        assert_eq!(coordinate_slack(4), 2);
        assert_eq!(coordinate_slack(5), 3);
    }

    #[test]
    fn distance_to_self_is_zero() {
        let p = [Real::ratio(1, 3).unwrap(), Real::pi()];
        let d = distance(&p, &p).to_f64_approx().unwrap();
        assert!(d.abs() < 1e-9);
    }

    #[test]
    fn origin_has_zero_coordinates() {
        let o = origin::<3>();
        assert!(o.iter().all(|c| c.as_exact().is_some_and(Dyadic::is_zero)));
    }
}

//! Extrema of continuous functions on the unit interval.
//!
//! The `p`-th approximation walks `x` from 0 to 1 in steps of the modulus of
//! continuity at `x`, so every point of `[0, 1]` is within one step of a
//! sample whose value is known to `2^(p-2)`.

use exact_real::{Dyadic, Real, RealError};
use log::debug;

use crate::config::SolverConfig;
use crate::error::{CompactError, CompactResult};
use crate::modulus::ModulusSolver;

/// `min f` over `[0, 1]` as an exact real.
///
/// # Examples
/// ```
/// use compact_sets::{extrema, SolverConfig};
/// use exact_real::{Effort, Real};
///
/// let low = extrema::minimum(|x: &Real| x + &Real::from(10), SolverConfig::default());
/// let value = low.approx(-6, &Effort::default()).unwrap();
/// assert!((value.to_f64() - 10.0).abs() < 0.05);
/// ```
pub fn minimum<F>(f: F, config: SolverConfig) -> Real
where
    F: Fn(&Real) -> Real + Send + Sync + 'static,
{
    Real::from_approximations(move |precision| {
        minimum_approx(&f, precision, &config).map(Real::exact).map_err(into_real_error)
    })
}

/// `max f` over `[0, 1]` as an exact real.
pub fn maximum<F>(f: F, config: SolverConfig) -> Real
where
    F: Fn(&Real) -> Real + Send + Sync + 'static,
{
    Real::from_approximations(move |precision| {
        maximum_approx(&f, precision, &config).map(Real::exact).map_err(into_real_error)
    })
}

/// A dyadic within `2^precision` of `min f` over `[0, 1]`.
pub fn minimum_approx<F>(f: &F, precision: i64, config: &SolverConfig) -> CompactResult<Dyadic>
where
    F: Fn(&Real) -> Real,
{
    walk(f, precision, config, Dyadic::min)
}

/// A dyadic within `2^precision` of `max f` over `[0, 1]`.
pub fn maximum_approx<F>(f: &F, precision: i64, config: &SolverConfig) -> CompactResult<Dyadic>
where
    F: Fn(&Real) -> Real,
{
    walk(f, precision, config, Dyadic::max)
}

fn walk<F>(
    f: &F,
    precision: i64,
    config: &SolverConfig,
    fold: fn(Dyadic, Dyadic) -> Dyadic,
) -> CompactResult<Dyadic>
where
    F: Fn(&Real) -> Real,
{
    let mut solver = ModulusSolver::new(*config)?;
    let effort = config.effort();
    let target = precision - 2;
    let unit = Dyadic::one();

    let mut x = Dyadic::zero();
    let mut best = f(&Real::zero()).approx(target, &effort)?;
    let mut samples = 1u64;
    loop {
        let modulus = solver.compute_modulus(f, &Real::exact(x.clone()), precision - 1)?;
        x = &x + &Dyadic::pow2(modulus.exponent);
        if x >= unit {
            break;
        }
        let value = f(&Real::exact(x.clone())).approx(target, &effort)?;
        best = fold(best, value);
        samples += 1;
    }
    debug!("extremum at 2^{precision} from {samples} samples: {best}");
    Ok(best)
}

fn into_real_error(err: CompactError) -> RealError {
    match err {
        CompactError::Real(inner) => inner,
        other => RealError::Approximation {
            message: other.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use exact_real::Effort;

    use super::*;

    const TOLERANCE: f64 = 1.0 / 64.0;

    fn value(x: Real) -> f64 {
        x.approx(-6, &Effort::default()).unwrap().to_f64()
    }

    #[test]
    fn square_on_the_unit_interval() {
        let config = SolverConfig::default();
        assert_abs_diff_eq!(value(minimum(|x: &Real| x.square(), config)), 0.0, epsilon = TOLERANCE);
        assert_abs_diff_eq!(value(maximum(|x: &Real| x.square(), config)), 1.0, epsilon = TOLERANCE);
    }

    #[test]
    fn shifted_identity() {
        let config = SolverConfig::default();
        let shift = |x: &Real| x + &Real::from(10);
        assert_abs_diff_eq!(value(minimum(shift, config)), 10.0, epsilon = TOLERANCE);
        assert_abs_diff_eq!(value(maximum(shift, config)), 11.0, epsilon = TOLERANCE);
    }

    #[test]
    fn constant_function_terminates() {
        let config = SolverConfig::default();
        let constant = |_: &Real| Real::from(42);
        let low = minimum_approx(&constant, -20, &config).unwrap();
        let high = maximum_approx(&constant, -20, &config).unwrap();
        assert_eq!(low, Dyadic::from(42));
        assert_eq!(high, Dyadic::from(42));
    }

    #[test]
    fn solver_errors_become_approximation_failures() {
        let config = SolverConfig::default().with_search_depth(1);
        let root = maximum(|x: &Real| x.abs().sqrt(), config);
        let err = root.approx(-6, &Effort::default()).unwrap_err();
        assert!(matches!(err, RealError::Approximation { .. }), "{err:?}");
    }
}

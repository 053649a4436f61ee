//! # Modulus of Continuity
//!
//! Given `f`, a point `x` and an output precision `p`, finds an exponent `q`
//! such that `|x - z| <= 2^q` implies `|f(x) - f(z)| <= 2^p`.
//!
//! ## Algorithm
//!
//! The search works on the error bound of the argument. A *trial* at
//! `p_arg` widens the argument by `2^p_arg` and asks the substrate to
//! approximate `f` on the widened argument to `2^(p-1)` within a small
//! budget. If that succeeds, every `z` in the widened argument has `f(z)`
//! within `2^(p-1)` of one dyadic, so `|f(x) - f(z)| <= 2^p`.
//!
//! ```text
//! first trial at min(p, ceiling)
//!   ok     → increase p_arg until a trial fails or the ceiling is reached
//!   failed → decrease p_arg until a trial succeeds or the depth runs out
//! ```
//!
//! The argument's own error is added back at the end and the sum is rounded
//! down to a power of two.

mod grid;

use exact_real::{Dyadic, Effort, ErrorBound, Real, RealError};
use log::{debug, trace};

use crate::config::SolverConfig;
use crate::error::{CompactError, CompactResult};
use crate::euclidean::Point;

/// How a modulus search ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModulusOutcome {
    /// A trial failed just above the reported exponent.
    Resolved,
    /// Every trial up to the configured ceiling succeeded; the function
    /// appears constant at this resolution.
    AppearsConstant,
}

/// Result of a modulus search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Modulus {
    /// Argument variation `2^exponent` keeps the output within `2^p`.
    pub exponent: i64,
    pub outcome: ModulusOutcome,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct ModulusKey {
    centers: Vec<Dyadic>,
    error: ErrorBound,
    precision: i64,
}

/// Single-slot memo of the last outermost modulus query.
#[derive(Debug, Default)]
pub struct ModulusCache {
    slot: Option<(ModulusKey, Modulus)>,
    hits: u64,
}

impl ModulusCache {
    fn get(&mut self, key: &ModulusKey) -> Option<Modulus> {
        match &self.slot {
            Some((cached, modulus)) if cached == key => {
                self.hits += 1;
                Some(*modulus)
            }
            _ => None,
        }
    }

    fn put(&mut self, key: ModulusKey, modulus: Modulus) {
        self.slot = Some((key, modulus));
    }

    /// Number of queries answered from the slot.
    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn is_empty(&self) -> bool {
        self.slot.is_none()
    }

    pub fn clear(&mut self) {
        self.slot = None;
    }
}

/// Modulus-of-continuity solver owning its result cache.
///
/// # Examples
/// ```
/// use compact_sets::modulus::{ModulusOutcome, ModulusSolver};
/// use exact_real::Real;
///
/// let mut solver = ModulusSolver::default();
/// let modulus = solver
///     .compute_modulus(|x| x + &Real::from(10), &Real::pow2(-1), -20)
///     .unwrap();
/// assert_eq!(modulus.exponent, -21);
/// assert_eq!(modulus.outcome, ModulusOutcome::Resolved);
/// ```
#[derive(Debug)]
pub struct ModulusSolver {
    config: SolverConfig,
    effort: Effort,
    cache: ModulusCache,
    nesting: u32,
}

impl ModulusSolver {
    pub fn new(config: SolverConfig) -> CompactResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            effort: config.effort(),
            cache: ModulusCache::default(),
            nesting: 0,
        })
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    pub fn cache(&self) -> &ModulusCache {
        &self.cache
    }

    /// Finds `q` with `|x - z| <= 2^q ⇒ |f(x) - f(z)| <= 2^precision`.
    ///
    /// # Errors
    ///
    /// [`CompactError::EvaluationInfeasible`] if `f` cannot be approximated
    /// at `x` at all, [`CompactError::PrecisionUnattainable`] if no trial
    /// succeeds within the configured search depth.
    pub fn compute_modulus<F>(&mut self, f: F, x: &Real, precision: i64) -> CompactResult<Modulus>
    where
        F: Fn(&Real) -> Real,
    {
        // the argument's own error must leave room for the search below 2^p
        let (center, error) = x
            .ball_within(precision - 3, &self.effort)
            .map_err(|err| match err {
                RealError::Domain { .. } | RealError::Unresolved { .. } => {
                    CompactError::EvaluationInfeasible { precision }
                }
                other => other.into(),
            })?;
        let map = |t: &[Real; 1]| [f(&t[0])];
        self.modulus_at(&map, &[center], error, precision)
    }

    // Cached unless called from inside a grid solve.
    fn modulus_at<const D: usize, const N: usize, F>(
        &mut self,
        f: &F,
        centers: &[Dyadic; D],
        error: ErrorBound,
        precision: i64,
    ) -> CompactResult<Modulus>
    where
        F: Fn(&[Real; D]) -> Point<N> + ?Sized,
    {
        if self.nesting > 0 {
            return self.search(f, centers, error, precision);
        }
        let key = ModulusKey {
            centers: centers.to_vec(),
            error,
            precision,
        };
        if let Some(modulus) = self.cache.get(&key) {
            trace!("modulus for 2^{precision} served from cache");
            return Ok(modulus);
        }
        let modulus = self.search(f, centers, error, precision)?;
        self.cache.put(key, modulus);
        Ok(modulus)
    }

    fn search<const D: usize, const N: usize, F>(
        &self,
        f: &F,
        centers: &[Dyadic; D],
        error: ErrorBound,
        precision: i64,
    ) -> CompactResult<Modulus>
    where
        F: Fn(&[Real; D]) -> Point<N> + ?Sized,
    {
        let ceiling = self.config.modulus_ceiling;
        let target = precision - 1;

        let widened = if error.is_zero() {
            error
        } else {
            error.add(&ErrorBound::pow2(error.exponent()))
        };
        if !self.trial(f, centers, &widened, target, &self.effort)? {
            return Err(CompactError::EvaluationInfeasible { precision });
        }

        let budget = self.effort.limited(target, self.config.trial_retries);
        let attempt = |p_arg: i64| -> CompactResult<bool> {
            // x lies within `error` of the center and z within 2^q of x
            let radius = error.add(&error.add(&ErrorBound::pow2(p_arg)));
            let ok = self.trial(f, centers, &radius, target, &budget)?;
            trace!("modulus trial 1*2^{p_arg} + {error}: {}", if ok { "ok" } else { "failed" });
            Ok(ok)
        };

        let floor = precision.saturating_sub(i64::from(self.config.search_depth));
        let mut p_arg = precision.min(ceiling);
        let outcome = if attempt(p_arg)? {
            if precision >= ceiling {
                // the search started at the ceiling, nothing above it was tried
                ModulusOutcome::Resolved
            } else {
                loop {
                    if p_arg >= ceiling {
                        break ModulusOutcome::AppearsConstant;
                    }
                    if !attempt(p_arg + 1)? {
                        break ModulusOutcome::Resolved;
                    }
                    p_arg += 1;
                }
            }
        } else {
            loop {
                p_arg -= 1;
                if p_arg < floor {
                    return Err(CompactError::PrecisionUnattainable {
                        precision,
                        reason: format!("no argument error above 2^{floor} keeps the output within bound"),
                    });
                }
                if attempt(p_arg)? {
                    break ModulusOutcome::Resolved;
                }
            }
        };

        let exponent = error
            .add(&ErrorBound::pow2(p_arg))
            .normalize()
            .exponent()
            .min(ceiling);
        debug!("modulus for 2^{precision}: 2^{exponent} ({outcome:?})");
        Ok(Modulus { exponent, outcome })
    }

    // Whether every coordinate of f on the widened argument approximates to
    // 2^target within `effort`.
    fn trial<const D: usize, const N: usize, F>(
        &self,
        f: &F,
        centers: &[Dyadic; D],
        radius: &ErrorBound,
        target: i64,
        effort: &Effort,
    ) -> CompactResult<bool>
    where
        F: Fn(&[Real; D]) -> Point<N> + ?Sized,
    {
        let argument: [Real; D] =
            std::array::from_fn(|axis| Real::exact(centers[axis].clone()).with_added_error(radius));
        for coordinate in f(&argument).iter() {
            match coordinate.approx(target, effort) {
                Ok(_) => {}
                Err(RealError::Unresolved { .. }) => return Ok(false),
                Err(err) => return Err(err.into()),
            }
        }
        Ok(true)
    }
}

impl Default for ModulusSolver {
    fn default() -> Self {
        let config = SolverConfig::default();
        Self {
            config,
            effort: config.effort(),
            cache: ModulusCache::default(),
            nesting: 0,
        }
    }
}

/// [`ModulusSolver::compute_modulus`] with a fresh default solver.
pub fn compute_modulus<F>(f: F, x: &Real, precision: i64) -> CompactResult<Modulus>
where
    F: Fn(&Real) -> Real,
{
    ModulusSolver::default().compute_modulus(f, x, precision)
}

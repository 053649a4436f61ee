//! # Mesh Covers
//!
//! The image of a continuous map `[0, 1]^D → R^N` as a compact set. The
//! image is covered by balls of radius `2^p` centred at the images of a
//! uniform parameter grid. The grid step is chosen with the modulus solver so
//! that every image point lies within `2^(p-1)` of some centre; a query point
//! is then a member as soon as one centre is certified closer than `2^p`.
//!
//! Mesh steps are cached per instance and only refined toward finer
//! precision.
//!
//! ## Usage
//!
//! ```rust
//! use compact_sets::{CompactSet, Path};
//! use exact_real::Real;
//!
//! let diagonal = Path::new(|t: &Real| [t.clone(), t.clone()]);
//! let half = Real::ratio(1, 2).unwrap();
//! assert!(diagonal.member(&[half.clone(), half], -4).unwrap());
//! assert!(!diagonal.member(&[Real::from(2), Real::from(2)], -4).unwrap());
//! ```

mod cache;

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use exact_real::{choose, Choice, Dyadic, Real};
use log::{debug, trace};

pub use cache::{RefinementCache, Resolution};

use crate::compact::CompactSet;
use crate::config::SolverConfig;
use crate::error::{CompactError, CompactResult};
use crate::euclidean::{coordinate_slack, distance, Point};
use crate::grid::Mesh;
use crate::modulus::ModulusSolver;

type ContinuousMap<const D: usize, const N: usize> = dyn Fn(&[Real; D]) -> Point<N> + Send + Sync;

/// The image of a continuous map from `[0, 1]^D` into `R^N`.
pub struct MeshCover<const D: usize, const N: usize> {
    map: Arc<ContinuousMap<D, N>>,
    config: SolverConfig,
    cache: Mutex<RefinementCache>,
}

/// A parametric curve `[0, 1] → R^N`.
pub type Path<const N: usize> = MeshCover<1, N>;

/// A parametric surface `[0, 1]² → R^N`.
pub type Surface<const N: usize> = MeshCover<2, N>;

impl<const D: usize, const N: usize> MeshCover<D, N> {
    /// Wraps a map taking all parameters at once.
    pub fn from_map<F>(map: F) -> Self
    where
        F: Fn(&[Real; D]) -> Point<N> + Send + Sync + 'static,
    {
        Self {
            map: Arc::new(map),
            config: SolverConfig::default(),
            cache: Mutex::new(RefinementCache::default()),
        }
    }

    /// Replaces the solver configuration and forgets any cached resolution.
    pub fn with_config(mut self, config: SolverConfig) -> CompactResult<Self> {
        config.validate()?;
        self.config = config;
        self.cache = Mutex::new(RefinementCache::default());
        Ok(self)
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// The image of `parameter`.
    ///
    /// # Errors
    ///
    /// [`CompactError::OutsideDomain`] if a coordinate lies outside `[0, 1]`.
    pub fn point_at(&self, parameter: &[Dyadic; D]) -> CompactResult<Point<N>> {
        let unit = Dyadic::one();
        if let Some(coordinate) = parameter
            .iter()
            .position(|t| t.is_negative() || *t > unit)
        {
            return Err(CompactError::OutsideDomain { coordinate });
        }
        Ok((self.map)(&parameter.clone().map(Real::exact)))
    }

    /// Number of refinements performed so far.
    pub fn generation(&self) -> u64 {
        self.lock().generation()
    }

    pub fn resolution(&self) -> Option<Resolution> {
        self.lock().current()
    }

    /// A resolution valid for `precision`, refining the cached one if it is
    /// too coarse.
    pub fn refine(&self, precision: i64) -> CompactResult<Resolution> {
        let mut cache = self.lock();
        if let Some(resolution) = cache.lookup(precision) {
            return Ok(resolution);
        }
        let target = precision - coordinate_slack(N);
        let mut solver = ModulusSolver::new(self.config)?;
        let step = solver.grid_step(&*self.map, target, cache.previous_step())?;
        let resolution = Resolution { precision, step };
        cache.store(resolution);
        debug!(
            "cover refined to step 2^{step} for precision 2^{precision} (generation {})",
            cache.generation()
        );
        Ok(resolution)
    }

    fn lock(&self) -> MutexGuard<'_, RefinementCache> {
        self.cache.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<const N: usize> MeshCover<1, N> {
    /// A curve from a map of one parameter.
    pub fn new<F>(map: F) -> Self
    where
        F: Fn(&Real) -> Point<N> + Send + Sync + 'static,
    {
        Self::from_map(move |t: &[Real; 1]| map(&t[0]))
    }
}

impl<const N: usize> MeshCover<2, N> {
    /// A surface from a map of two parameters.
    pub fn new<F>(map: F) -> Self
    where
        F: Fn(&Real, &Real) -> Point<N> + Send + Sync + 'static,
    {
        Self::from_map(move |uv: &[Real; 2]| map(&uv[0], &uv[1]))
    }
}

impl<const D: usize, const N: usize> CompactSet<N> for MeshCover<D, N> {
    fn member(&self, point: &Point<N>, precision: i64) -> CompactResult<bool> {
        let resolution = self.refine(precision)?;
        let effort = self.config.effort();
        let radius = Real::pow2(precision);
        let half = Real::pow2(precision - 1);
        for parameter in Mesh::<D>::new(resolution.step).points() {
            let center = (self.map)(&parameter.map(Real::exact));
            let d = distance(point, &center);
            let choice = choose(&d.lt(&radius), &d.gt(&half), precision - 1, &effort)
                .map_err(|err| CompactError::from_budget(precision, err))?;
            if choice == Choice::First {
                trace!("member at 2^{precision}: covered by a ball on the 2^{} mesh", resolution.step);
                return Ok(true);
            }
        }
        Ok(false)
    }
}

impl<const D: usize, const N: usize> fmt::Debug for MeshCover<D, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MeshCover")
            .field("domain", &D)
            .field("dimension", &N)
            .field("resolution", &self.resolution())
            .finish()
    }
}

/// The image of `map` as a compact set; a [`Path`] for `D = 1` and a
/// [`Surface`] for `D = 2`.
pub fn from_continuous_map<const D: usize, const N: usize, F>(map: F) -> MeshCover<D, N>
where
    F: Fn(&[Real; D]) -> Point<N> + Send + Sync + 'static,
{
    MeshCover::from_map(map)
}

#[cfg(test)]
mod tests;

//! Uniform modulus over the whole parameter domain.
//!
//! A single mesh step valid at every point of `[0, 1]^D` is found as a
//! fixed point: the modulus is computed at every point of the current mesh,
//! and the mesh is refined to the smallest of them until no point asks for a
//! finer one.

use exact_real::{ErrorBound, Real};
use log::debug;

use super::ModulusSolver;
use crate::error::{CompactError, CompactResult};
use crate::euclidean::Point;
use crate::grid::Mesh;

impl ModulusSolver {
    /// Mesh step `s` such that moving by at most `2^s` from a point of the
    /// mesh of step `s` changes every coordinate of `f` by at most
    /// `2^target`.
    ///
    /// The search starts from `previous` (or the unit step) and only ever
    /// refines. The result cache is bypassed for the whole solve.
    ///
    /// # Errors
    ///
    /// [`CompactError::PrecisionUnattainable`] when the step would drop below
    /// `2^-max_mesh_level`.
    pub fn grid_step<const D: usize, const N: usize, F>(
        &mut self,
        f: &F,
        target: i64,
        previous: Option<i64>,
    ) -> CompactResult<i64>
    where
        F: Fn(&[Real; D]) -> Point<N> + ?Sized,
    {
        self.nesting += 1;
        let result = self.refine_grid(f, target, previous);
        self.nesting -= 1;
        result
    }

    fn refine_grid<const D: usize, const N: usize, F>(
        &mut self,
        f: &F,
        target: i64,
        previous: Option<i64>,
    ) -> CompactResult<i64>
    where
        F: Fn(&[Real; D]) -> Point<N> + ?Sized,
    {
        let finest = -i64::from(self.config.max_mesh_level);
        let mut step = previous.unwrap_or(0).min(0);
        loop {
            let mut needed = i64::MAX;
            for point in Mesh::<D>::new(step).points() {
                let modulus = self.modulus_at(f, &point, ErrorBound::zero(), target)?;
                needed = needed.min(modulus.exponent);
            }
            if needed >= step {
                debug!("mesh step 2^{step} holds for 2^{target}");
                return Ok(step);
            }
            if needed < finest {
                return Err(CompactError::PrecisionUnattainable {
                    precision: target,
                    reason: format!("mesh step 2^{needed} is finer than 2^{finest}"),
                });
            }
            debug!("refining mesh from 2^{step} to 2^{needed} for 2^{target}");
            step = needed;
        }
    }
}

//! Monotone refinement state of a mesh cover.

/// A precision together with a mesh step that realizes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    /// Finest membership precision the step is valid for.
    pub precision: i64,
    /// Parameter-domain grid step exponent.
    pub step: i64,
}

/// The current resolution of a cover and how often it was refined.
///
/// A resolution serves its own precision and every coarser one; it is
/// replaced only by a finer one.
#[derive(Debug, Default)]
pub struct RefinementCache {
    current: Option<Resolution>,
    generation: u64,
}

impl RefinementCache {
    pub fn current(&self) -> Option<Resolution> {
        self.current
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The cached resolution if it is valid for `precision`.
    pub fn lookup(&self, precision: i64) -> Option<Resolution> {
        self.current.filter(|resolution| resolution.precision <= precision)
    }

    /// Step to resume a refinement from.
    pub fn previous_step(&self) -> Option<i64> {
        self.current.map(|resolution| resolution.step)
    }

    pub fn store(&mut self, resolution: Resolution) {
        debug_assert!(self.lookup(resolution.precision).is_none());
        self.current = Some(resolution);
        self.generation += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coarser_requests_reuse_the_resolution() {
        let mut cache = RefinementCache::default();
        assert_eq!(cache.lookup(-4), None);
        cache.store(Resolution {
            precision: -8,
            step: -9,
        });
        assert_eq!(cache.lookup(-8).map(|r| r.step), Some(-9));
        assert_eq!(cache.lookup(-2).map(|r| r.step), Some(-9));
        assert_eq!(cache.lookup(-9), None);
        assert_eq!(cache.generation(), 1);
    }
}

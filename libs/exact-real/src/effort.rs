//! # Effort Budgets
//!
//! The retry budget of the substrate. A computation aiming at a tolerance
//! `2^t` is first attempted at `max(initial, guard - t)` working bits and the
//! working precision doubles after every failed attempt until it passes the
//! maximum.

use config::constants::PrecisionConfig;

/// Working-precision budget for evaluations and decisions.
///
/// # Examples
/// ```
/// use exact_real::Effort;
/// let effort = Effort::default();
/// let bits: Vec<u32> = effort.schedule(-100).take(2).collect();
/// assert_eq!(bits[1], 2 * bits[0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Effort {
    initial_bits: u32,
    max_bits: u32,
    guard_bits: u32,
}

impl Effort {
    pub fn new(config: PrecisionConfig) -> Self {
        Self {
            initial_bits: config.initial_bits,
            max_bits: config.max_bits.max(config.initial_bits),
            guard_bits: config.guard_bits,
        }
    }

    pub fn initial_bits(&self) -> u32 {
        self.initial_bits
    }

    pub fn max_bits(&self) -> u32 {
        self.max_bits
    }

    pub fn guard_bits(&self) -> u32 {
        self.guard_bits
    }

    /// Working precision of the first attempt for a target tolerance `2^target`.
    pub fn first_bits(&self, target: i64) -> u32 {
        let wanted = (self.guard_bits as i64).saturating_sub(target);
        wanted.clamp(self.initial_bits as i64, self.max_bits as i64) as u32
    }

    /// The working precisions tried for a target tolerance `2^target`.
    pub fn schedule(&self, target: i64) -> Schedule {
        Schedule {
            next: Some(self.first_bits(target)),
            max_bits: self.max_bits,
        }
    }

    /// The working precisions tried when no particular tolerance is wanted.
    pub fn initial_schedule(&self) -> Schedule {
        Schedule {
            next: Some(self.initial_bits),
            max_bits: self.max_bits,
        }
    }

    /// A budget for the same target that allows at most `doublings`
    /// precision increases after the first attempt.
    pub fn limited(&self, target: i64, doublings: u32) -> Effort {
        let first = self.first_bits(target) as u64;
        let limit = first.saturating_mul(1u64 << doublings.min(32));
        Effort {
            max_bits: limit.min(self.max_bits as u64) as u32,
            ..*self
        }
    }
}

impl Default for Effort {
    fn default() -> Self {
        Self::new(PrecisionConfig::default())
    }
}

impl From<PrecisionConfig> for Effort {
    fn from(config: PrecisionConfig) -> Self {
        Self::new(config)
    }
}

/// Iterator over the working precisions of an [`Effort`].
#[derive(Debug, Clone)]
pub struct Schedule {
    next: Option<u32>,
    max_bits: u32,
}

impl Iterator for Schedule {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        let current = self.next?;
        self.next = if current >= self.max_bits {
            None
        } else {
            Some(current.saturating_mul(2).min(self.max_bits))
        };
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn effort(initial: u32, max: u32, guard: u32) -> Effort {
        Effort::new(PrecisionConfig {
            initial_bits: initial,
            max_bits: max,
            guard_bits: guard,
        })
    }

    #[test]
    fn schedule_doubles_up_to_the_maximum() {
        let bits: Vec<u32> = effort(24, 200, 8).schedule(0).collect();
        assert_eq!(bits, vec![24, 48, 96, 192, 200]);
    }

    #[test]
    fn fine_targets_start_above_their_tolerance() {
        let first = effort(24, 4096, 32).first_bits(-100);
        assert_eq!(first, 132);
    }

    #[test]
    fn coarse_targets_start_at_the_initial_precision() {
        assert_eq!(effort(24, 4096, 32).first_bits(10), 24);
    }

    #[test]
    fn schedule_always_makes_one_attempt() {
        let bits: Vec<u32> = effort(24, 64, 32).schedule(-1000).collect();
        assert_eq!(bits, vec![64]);
    }

    #[test]
    fn limited_budget_caps_the_doublings() {
        let limited = effort(24, 4096, 8).limited(-16, 2);
        let bits: Vec<u32> = limited.schedule(-16).collect();
        assert_eq!(bits, vec![24, 48, 96]);
    }
}

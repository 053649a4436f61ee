//! # Decisions
//!
//! Order comparisons between exact reals are only semi-decidable: `x < y` can
//! be certified when it holds, but never refuted when `x = y`. A [`Condition`]
//! is therefore evaluated to a three-valued [`Truth`] at each working
//! precision, and [`choose`] turns a pair of conditions into a definite
//! answer by racing them along the effort schedule.

use log::trace;

use crate::effort::Effort;
use crate::error::{RealError, RealResult};
use crate::real::Real;

/// Kleene truth value of a condition at one working precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Truth {
    True,
    False,
    Unknown,
}

impl Truth {
    pub fn and(self, other: Truth) -> Truth {
        match (self, other) {
            (Truth::False, _) | (_, Truth::False) => Truth::False,
            (Truth::True, Truth::True) => Truth::True,
            _ => Truth::Unknown,
        }
    }

    pub fn or(self, other: Truth) -> Truth {
        match (self, other) {
            (Truth::True, _) | (_, Truth::True) => Truth::True,
            (Truth::False, Truth::False) => Truth::False,
            _ => Truth::Unknown,
        }
    }
}

/// A condition over exact reals, built from strict comparisons.
///
/// # Examples
/// ```
/// use exact_real::{Real, Truth};
/// let c = Real::from(1).lt(&Real::from(2)).and(Real::from(3).gt(&Real::from(0)));
/// assert_eq!(c.evaluate(32).unwrap(), Truth::True);
/// ```
#[derive(Debug, Clone)]
pub enum Condition {
    Less(Real, Real),
    And(Box<Condition>, Box<Condition>),
    Or(Box<Condition>, Box<Condition>),
}

impl Condition {
    /// The condition `lhs < rhs`.
    pub fn less(lhs: Real, rhs: Real) -> Condition {
        Condition::Less(lhs, rhs)
    }

    pub fn and(self, other: Condition) -> Condition {
        Condition::And(Box::new(self), Box::new(other))
    }

    pub fn or(self, other: Condition) -> Condition {
        Condition::Or(Box::new(self), Box::new(other))
    }

    /// Evaluates the condition at `bits` working bits. Comparisons whose
    /// operands are undefined at this precision are [`Truth::Unknown`].
    pub fn evaluate(&self, bits: u32) -> RealResult<Truth> {
        match self {
            Condition::Less(lhs, rhs) => {
                let (lhs, rhs) = match (lhs.enclose(bits), rhs.enclose(bits)) {
                    (Ok(lhs), Ok(rhs)) => (lhs, rhs),
                    (Err(RealError::Domain { .. }), _) | (_, Err(RealError::Domain { .. })) => {
                        return Ok(Truth::Unknown)
                    }
                    (Err(err), _) | (_, Err(err)) => return Err(err),
                };
                Ok(if lhs.certainly_lt(&rhs) {
                    Truth::True
                } else if lhs.certainly_ge(&rhs) {
                    Truth::False
                } else {
                    Truth::Unknown
                })
            }
            Condition::And(a, b) => Ok(a.evaluate(bits)?.and(b.evaluate(bits)?)),
            Condition::Or(a, b) => Ok(a.evaluate(bits)?.or(b.evaluate(bits)?)),
        }
    }
}

/// Which of two conditions [`choose`] certified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    First,
    Second,
}

/// Returns a condition that holds, given that at least one of them does.
///
/// Both conditions are evaluated at increasing working precision, starting
/// where a separation of `2^precision` becomes visible. The first one
/// certified true wins; on a tie `first` is preferred. The answer is only
/// meaningful when at least one condition is true; if neither can be
/// certified within the budget the result is [`RealError::Undecided`].
///
/// # Examples
/// ```
/// use exact_real::{choose, Choice, Effort, Real};
/// let x = Real::ratio(1, 3).unwrap();
/// let choice = choose(&x.lt(&Real::from(1)), &x.gt(&Real::from(2)), -10, &Effort::default());
/// assert_eq!(choice.unwrap(), Choice::First);
/// ```
pub fn choose(
    first: &Condition,
    second: &Condition,
    precision: i64,
    effort: &Effort,
) -> RealResult<Choice> {
    for bits in effort.schedule(precision) {
        if first.evaluate(bits)? == Truth::True {
            trace!("choose: first certified at {bits} bits");
            return Ok(Choice::First);
        }
        if second.evaluate(bits)? == Truth::True {
            trace!("choose: second certified at {bits} bits");
            return Ok(Choice::Second);
        }
    }
    Err(RealError::Undecided {
        max_bits: effort.max_bits(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kleene_tables() {
        assert_eq!(Truth::True.and(Truth::Unknown), Truth::Unknown);
        assert_eq!(Truth::False.and(Truth::Unknown), Truth::False);
        assert_eq!(Truth::True.or(Truth::Unknown), Truth::True);
        assert_eq!(Truth::False.or(Truth::Unknown), Truth::Unknown);
    }

    #[test]
    fn equality_is_never_refuted() {
        let third = Real::ratio(1, 3).unwrap();
        let also_third = Real::from(1) / Real::from(3);
        let cond = third.lt(&also_third);
        for bits in [24, 64, 256] {
            assert_eq!(cond.evaluate(bits).unwrap(), Truth::Unknown);
        }
    }

    #[test]
    fn prefers_first_when_both_hold() {
        let x = Real::from(1);
        let choice = choose(&x.lt(&Real::from(2)), &x.gt(&Real::from(0)), 0, &Effort::default());
        assert_eq!(choice.unwrap(), Choice::First);
    }

    #[test]
    fn picks_the_only_certifiable_condition() {
        let x = Real::from(5);
        let choice = choose(&x.lt(&Real::from(2)), &x.gt(&Real::from(4)), 0, &Effort::default());
        assert_eq!(choice.unwrap(), Choice::Second);
    }

    #[test]
    fn exhausted_budget_is_undecided() {
        let third = Real::ratio(1, 3).unwrap();
        let same = Real::from(1) / Real::from(3);
        let effort = Effort::default().limited(-10, 1);
        let err = choose(&third.lt(&same), &third.gt(&same), -10, &effort).unwrap_err();
        assert!(matches!(err, RealError::Undecided { .. }));
    }
}

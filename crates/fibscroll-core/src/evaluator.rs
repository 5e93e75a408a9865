//! Bidirectional Fibonacci evaluation with a permanent memo table.
//!
//! Non-negative terms follow the additive recurrence; negative terms use
//! the identity `F(-n) = (-1)^(n+1) * F(n)`. Both halves are stored in dense
//! tables that only ever grow, so overlapping viewport windows are served
//! from the cache after the first build. Tables are filled iteratively;
//! there is no recursion and therefore no stack depth proportional to the
//! index.

use std::ops::RangeInclusive;

use tracing::trace;

use crate::constants::{DEFAULT_PREWARM_MAX, DEFAULT_PREWARM_MIN};

/// Position of a term in the extended sequence.
pub type Index = i64;

/// Value of a term.
///
/// Exact up to `|index| = 78`; beyond that only the magnitude is meaningful,
/// and past `|index| = 1476` the value overflows to infinity.
pub type Term = f64;

/// Source of sequence terms, consumed by the viewport builder and the
/// colour mapper.
pub trait Sequence {
    /// Term at `index`.
    fn term(&mut self, index: Index) -> Term;
}

/// Memoizing evaluator for the extended Fibonacci sequence.
///
/// # Example
/// ```
/// use fibscroll_core::evaluator::SequenceEvaluator;
///
/// let mut fib = SequenceEvaluator::new();
/// assert_eq!(fib.evaluate(7), 13.0);
/// assert_eq!(fib.evaluate(-6), -8.0);
/// ```
#[derive(Debug, Clone)]
pub struct SequenceEvaluator {
    /// `F(0), F(1), F(2), ...` up to the last finite term computed so far.
    non_negative: Vec<Term>,
    /// `F(-1), F(-2), ...` up to the last finite term computed so far.
    negative: Vec<Term>,
    /// Number of terms computed (as opposed to served from cache).
    computed: u64,
}

impl SequenceEvaluator {
    /// Create an evaluator holding only the base cases `F(0)` and `F(1)`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            non_negative: vec![0.0, 1.0],
            negative: Vec::new(),
            computed: 0,
        }
    }

    /// Create an evaluator with `range` already computed.
    #[must_use]
    pub fn prewarmed(range: RangeInclusive<Index>) -> Self {
        let mut evaluator = Self::new();
        evaluator.prewarm(range);
        evaluator
    }

    /// Eagerly compute every term in `range`.
    pub fn prewarm(&mut self, range: RangeInclusive<Index>) {
        let (start, end) = range.into_inner();
        // Computing the extremes fills every table slot in between.
        if start < 0 {
            self.evaluate(start.min(end));
        }
        if end >= 0 {
            self.evaluate(end);
        }
        trace!(start, end, cached = self.cached_len(), "prewarmed sequence cache");
    }

    /// Term at `index`.
    pub fn evaluate(&mut self, index: Index) -> Term {
        if index >= 0 {
            usize::try_from(index).map_or(Term::INFINITY, |n| self.non_negative_term(n))
        } else {
            let magnitude = index.unsigned_abs();
            usize::try_from(magnitude).map_or_else(
                |_| negative_sign(magnitude) * Term::INFINITY,
                |n| self.negative_term(n),
            )
        }
    }

    /// Number of terms computed so far, excluding cache hits and the
    /// two base cases.
    #[must_use]
    pub fn computations(&self) -> u64 {
        self.computed
    }

    /// Number of cached entries across both halves of the sequence.
    #[must_use]
    pub fn cached_len(&self) -> usize {
        self.non_negative.len() + self.negative.len()
    }

    /// Whether `index` is already in the cache.
    #[must_use]
    pub fn is_cached(&self, index: Index) -> bool {
        if index >= 0 {
            usize::try_from(index).is_ok_and(|n| n < self.non_negative.len())
        } else {
            usize::try_from(index.unsigned_abs()).is_ok_and(|n| n <= self.negative.len())
        }
    }

    fn non_negative_term(&mut self, n: usize) -> Term {
        while self.non_negative.len() <= n {
            let len = self.non_negative.len();
            let next = self.non_negative[len - 1] + self.non_negative[len - 2];
            if next.is_infinite() {
                // Every later term overflows too; nothing more worth caching.
                return Term::INFINITY;
            }
            self.non_negative.push(next);
            self.computed += 1;
        }
        self.non_negative[n]
    }

    fn negative_term(&mut self, n: usize) -> Term {
        while self.negative.len() < n {
            let magnitude = self.negative.len() + 1;
            let positive = self.non_negative_term(magnitude);
            let value = negative_sign(magnitude as u64) * positive;
            if value.is_infinite() {
                return negative_sign(n as u64) * Term::INFINITY;
            }
            self.negative.push(value);
            self.computed += 1;
        }
        self.negative[n - 1]
    }
}

impl Default for SequenceEvaluator {
    /// An evaluator prewarmed over the default startup range.
    fn default() -> Self {
        Self::prewarmed(DEFAULT_PREWARM_MIN..=DEFAULT_PREWARM_MAX)
    }
}

impl Sequence for SequenceEvaluator {
    fn term(&mut self, index: Index) -> Term {
        self.evaluate(index)
    }
}

/// `(-1)^(n+1)`: positive for odd `n`, negative for even `n`.
fn negative_sign(n: u64) -> Term {
    if n % 2 == 1 {
        1.0
    } else {
        -1.0
    }
}

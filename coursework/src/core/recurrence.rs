//! The coupled linear recurrence
//!
//! ```text
//! (a_1, b_1) = (1, 1)
//! a_k = 2·b_(k-1) + a_(k-1)
//! b_k = 2·a_(k-1) + b_(k-1)
//! ```
//!
//! evaluated by recursion and by iteration. Terms grow geometrically, so both
//! components are [`BigUint`].

use std::fmt;

use num_bigint::BigUint;
use num_traits::One;
use thiserror::Error;

/// Caller supplied an index outside the recurrence's domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RecurrenceError {
    #[error("k must be a natural number (k >= 1), got {0}")]
    InvalidIndex(i64),
}

/// One term `(a_k, b_k)` of the recurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecurrencePair {
    pub a: BigUint,
    pub b: BigUint,
}

impl RecurrencePair {
    /// The term for `k = 1`.
    pub fn seed() -> Self {
        Self {
            a: BigUint::one(),
            b: BigUint::one(),
        }
    }

    /// The term following `self`.
    pub fn step(&self) -> Self {
        Self {
            a: &self.b * 2u32 + &self.a,
            b: &self.a * 2u32 + &self.b,
        }
    }
}

impl fmt::Display for RecurrencePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a={} b={}", self.a, self.b)
    }
}

fn check_index(k: i64) -> Result<(), RecurrenceError> {
    if k < 1 {
        return Err(RecurrenceError::InvalidIndex(k));
    }
    Ok(())
}

/// Compute `(a_k, b_k)` from `(a_(k-1), b_(k-1))` recursively.
///
/// Uses `k` stack frames; prefer [`pair_iterative`] for large `k`.
pub fn pair_recursive(k: i64) -> Result<RecurrencePair, RecurrenceError> {
    check_index(k)?;
    Ok(pair_recursive_inner(k))
}

fn pair_recursive_inner(k: i64) -> RecurrencePair {
    if k == 1 {
        return RecurrencePair::seed();
    }
    pair_recursive_inner(k - 1).step()
}

/// Compute `(a_k, b_k)` by stepping forward from the seed, keeping only the
/// latest term.
pub fn pair_iterative(k: i64) -> Result<RecurrencePair, RecurrenceError> {
    check_index(k)?;
    let mut current = RecurrencePair::seed();
    for _ in 2..=k {
        current = current.step();
    }
    Ok(current)
}

/// Infinite iterator over `(k, pair)` starting at `k = 1`.
pub fn pairs() -> impl Iterator<Item = (i64, RecurrencePair)> {
    std::iter::successors(Some((1, RecurrencePair::seed())), |(k, pair)| {
        Some((k + 1, pair.step()))
    })
}

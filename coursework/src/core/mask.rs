//! Brute-force search for numbers matching a digit mask.
//!
//! A mask such as `12345??8?` fixes some decimal digits and leaves each `?`
//! free to be any single digit.

use thiserror::Error;

/// Longest mask whose every substitution still fits in a `u64`.
pub const MAX_MASK_LEN: usize = 19;
/// Bound on free positions, keeping the search at 10^7 candidates or fewer.
pub const MAX_WILDCARDS: usize = 7;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MaskError {
    #[error("mask must not be empty")]
    EmptyPattern,
    #[error("mask contains '{0}'; only digits and '?' are allowed")]
    InvalidChar(char),
    #[error("mask has {0} positions; at most {MAX_MASK_LEN} are supported")]
    TooLong(usize),
    #[error("mask has {0} wildcards; at most {MAX_WILDCARDS} are supported")]
    TooManyWildcards(usize),
    #[error("divisor must be > 0")]
    ZeroDivisor,
}

/// A number matching the mask, with its quotient by the divisor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaskMatch {
    pub value: u64,
    pub quotient: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaskSearch {
    digits: Vec<Option<u8>>,
    divisor: u64,
    limit: u64,
}

impl MaskSearch {
    pub fn new(pattern: &str, divisor: u64, limit: u64) -> Result<Self, MaskError> {
        if pattern.is_empty() {
            return Err(MaskError::EmptyPattern);
        }
        let digits = pattern
            .chars()
            .map(|c| match c {
                '?' => Ok(None),
                '0'..='9' => Ok(Some(c as u8 - b'0')),
                other => Err(MaskError::InvalidChar(other)),
            })
            .collect::<Result<Vec<_>, _>>()?;
        if digits.len() > MAX_MASK_LEN {
            return Err(MaskError::TooLong(digits.len()));
        }
        let wildcards = digits.iter().filter(|digit| digit.is_none()).count();
        if wildcards > MAX_WILDCARDS {
            return Err(MaskError::TooManyWildcards(wildcards));
        }
        if divisor == 0 {
            return Err(MaskError::ZeroDivisor);
        }
        Ok(Self {
            digits,
            divisor,
            limit,
        })
    }

    pub fn wildcards(&self) -> usize {
        self.digits.iter().filter(|digit| digit.is_none()).count()
    }

    /// Every substitution `<= limit` divisible by the divisor, ascending.
    ///
    /// Wildcards are filled like an odometer with the leftmost wildcard
    /// turning slowest, which enumerates substitutions in increasing order.
    pub fn matches(&self) -> Vec<MaskMatch> {
        let mut found = Vec::new();
        let mut fill = vec![0u8; self.wildcards()];
        loop {
            let value = self.substitute(&fill);
            if value <= self.limit && value % self.divisor == 0 {
                found.push(MaskMatch {
                    value,
                    quotient: value / self.divisor,
                });
            }
            if !advance(&mut fill) {
                break;
            }
        }
        found
    }

    fn substitute(&self, fill: &[u8]) -> u64 {
        let mut free = fill.iter();
        self.digits.iter().fold(0u64, |acc, digit| {
            let digit = digit.or_else(|| free.next().copied()).unwrap_or(0);
            acc * 10 + u64::from(digit)
        })
    }
}

/// Step the decimal odometer; false once it wraps back to all zeros.
fn advance(fill: &mut [u8]) -> bool {
    for slot in fill.iter_mut().rev() {
        if *slot < 9 {
            *slot += 1;
            return true;
        }
        *slot = 0;
    }
    false
}

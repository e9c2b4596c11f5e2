//! Positional notation in arbitrary bases and digit statistics.

use std::collections::BTreeSet;

use num_bigint::BigUint;
use num_traits::Zero;
use thiserror::Error;

const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RadixError {
    #[error("base must be between 2 and 36, got {0}")]
    UnsupportedBase(u32),
}

/// Render `n` in `base` by repeated division, most significant digit first.
pub fn to_base(n: &BigUint, base: u32) -> Result<String, RadixError> {
    if !(2..=36).contains(&base) {
        return Err(RadixError::UnsupportedBase(base));
    }
    if n.is_zero() {
        return Ok("0".to_string());
    }
    let mut digits = Vec::new();
    let mut rest = n.clone();
    while !rest.is_zero() {
        let remainder = &rest % base;
        let digit = remainder.iter_u32_digits().next().unwrap_or(0);
        digits.push(DIGITS[digit as usize]);
        rest /= base;
    }
    digits.reverse();
    Ok(digits.into_iter().map(char::from).collect())
}

/// Number of different digits used when writing `n` in `base`.
pub fn distinct_digits(n: &BigUint, base: u32) -> Result<usize, RadixError> {
    let rendered = to_base(n, base)?;
    Ok(rendered.chars().collect::<BTreeSet<_>>().len())
}

/// The lab value `216^6 + 216^4 + 36^6 - 6^14 - 24`.
pub fn lab_value() -> BigUint {
    let six = BigUint::from(6u32);
    let positive = BigUint::from(216u32).pow(6)
        + BigUint::from(216u32).pow(4)
        + BigUint::from(36u32).pow(6);
    positive - six.pow(14) - 24u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn zero_is_a_single_digit() {
        for base in [2, 6, 10, 36] {
            assert_eq!(to_base(&BigUint::zero(), base).expect("base"), "0");
        }
    }

    #[test]
    fn renders_small_values() {
        assert_eq!(to_base(&BigUint::from(255u32), 16).expect("hex"), "ff");
        assert_eq!(to_base(&BigUint::from(5u32), 2).expect("binary"), "101");
        assert_eq!(to_base(&BigUint::from(35u32), 36).expect("base36"), "z");
    }

    #[test]
    fn lab_value_in_base_six() {
        let value = lab_value();
        assert_eq!(value, BigUint::from(101_485_946_068_968u64));
        assert_eq!(to_base(&value, 6).expect("base6"), "555501555555555520");
        assert_eq!(distinct_digits(&value, 6), Ok(4));
    }

    #[test]
    fn rejects_unsupported_bases() {
        let n = BigUint::from(10u32);
        assert_eq!(to_base(&n, 0), Err(RadixError::UnsupportedBase(0)));
        assert_eq!(to_base(&n, 1), Err(RadixError::UnsupportedBase(1)));
        assert_eq!(distinct_digits(&n, 37), Err(RadixError::UnsupportedBase(37)));
    }

    proptest! {
        #[test]
        fn agrees_with_bigint_formatting(
            bytes in prop::collection::vec(any::<u8>(), 0..24),
            base in 2u32..=36
        ) {
            let n = BigUint::from_bytes_be(&bytes);
            prop_assert_eq!(to_base(&n, base).expect("supported"), n.to_str_radix(base));
        }
    }
}

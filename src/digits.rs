//! Based-integer digit strings.
//!
//! Digits use a fixed, case-sensitive alphabet: `0-9` are 0..=9, `a-z` are
//! 10..=35 and `A-Z` are 36..=61. Upper-case letters are therefore only
//! valid digits once the base exceeds 36.

use lazy_static::lazy_static;
use num_bigint::{BigInt, BigUint};
use num_traits::Zero;

use crate::error::SolveError;

pub const MIN_BASE: u32 = 2;
pub const MAX_BASE: u32 = 62;

const DIGIT_ALPHABET: &str = "0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

lazy_static! {
    static ref DIGIT_CHARS: Vec<char> = DIGIT_ALPHABET.chars().collect();
    static ref DIGIT_VALUES: [Option<u8>; 128] = {
        let mut table = [None; 128];
        for (value, byte) in DIGIT_ALPHABET.bytes().enumerate() {
            table[byte as usize] = Some(value as u8);
        }
        table
    };
}

fn lookup(ch: char) -> Option<u32> {
    if !ch.is_ascii() {
        return None;
    }
    DIGIT_VALUES[ch as usize].map(u32::from)
}

/// Value of a single digit character, independent of any base.
///
/// A lone character is reported at position 0 when it is not a digit.
pub fn digit_value(ch: char) -> Result<u32, SolveError> {
    lookup(ch).ok_or(SolveError::InvalidDigit { ch, position: 0 })
}

pub fn check_base(base: u32) -> Result<(), SolveError> {
    if !(MIN_BASE..=MAX_BASE).contains(&base) {
        return Err(SolveError::InvalidBase(base.to_string()));
    }
    Ok(())
}

/// Decode `digits` written in `base` into a non-negative integer.
///
/// Accumulates left to right as `value * base + digit`, so arbitrarily long
/// strings decode without loss.
pub fn decode(digits: &str, base: u32) -> Result<BigInt, SolveError> {
    check_base(base)?;
    if digits.is_empty() {
        return Err(SolveError::EmptyValue);
    }

    let radix = BigInt::from(base);
    let mut value = BigInt::zero();
    for (position, ch) in digits.chars().enumerate() {
        let digit = lookup(ch).ok_or(SolveError::InvalidDigit { ch, position })?;
        if digit >= base {
            return Err(SolveError::DigitOutOfRange {
                ch,
                position,
                value: digit,
                base,
            });
        }
        value = value * &radix + BigInt::from(digit);
    }
    Ok(value)
}

/// Render `value` in `base` using the same alphabet as [`decode`].
pub fn encode(value: &BigUint, base: u32) -> Result<String, SolveError> {
    check_base(base)?;
    if value.is_zero() {
        return Ok("0".to_string());
    }
    Ok(value
        .to_radix_be(base)
        .into_iter()
        .map(|digit| DIGIT_CHARS[digit as usize])
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::str::FromStr;

    fn big(s: &str) -> BigInt {
        BigInt::from_str(s).unwrap()
    }

    #[test]
    fn digit_alphabet_boundaries() {
        assert_eq!(digit_value('0').unwrap(), 0);
        assert_eq!(digit_value('9').unwrap(), 9);
        assert_eq!(digit_value('a').unwrap(), 10);
        assert_eq!(digit_value('z').unwrap(), 35);
        assert_eq!(digit_value('A').unwrap(), 36);
        assert_eq!(digit_value('Z').unwrap(), 61);
    }

    #[test]
    fn non_alphanumeric_characters_are_rejected() {
        for ch in ['-', '+', ' ', '_', 'é', '٣'] {
            assert_eq!(
                digit_value(ch),
                Err(SolveError::InvalidDigit { ch, position: 0 })
            );
        }
    }

    #[test]
    fn decodes_hand_computed_values() {
        assert_eq!(decode("111", 2).unwrap(), BigInt::from(7));
        assert_eq!(decode("1011", 2).unwrap(), BigInt::from(11));
        assert_eq!(decode("213", 4).unwrap(), BigInt::from(39));
        assert_eq!(decode("0042", 10).unwrap(), BigInt::from(42));
        assert_eq!(decode("ff", 16).unwrap(), BigInt::from(255));
        assert_eq!(decode("zz", 36).unwrap(), BigInt::from(35 * 36 + 35));
        assert_eq!(decode("1A", 40).unwrap(), BigInt::from(76));
        assert_eq!(decode("10", 62).unwrap(), BigInt::from(62));
        assert_eq!(decode("ZZ", 62).unwrap(), BigInt::from(61 * 62 + 61));
    }

    #[test]
    fn long_strings_do_not_lose_precision() {
        let digits = format!("1{}", "0".repeat(40));
        assert_eq!(decode(&digits, 10).unwrap(), big(&digits));

        // 2^128 - 1
        let ones = "1".repeat(128);
        assert_eq!(
            decode(&ones, 2).unwrap(),
            big("340282366920938463463374607431768211455")
        );
    }

    #[test]
    fn upper_case_is_out_of_range_below_base_37() {
        assert_eq!(
            decode("FF", 16),
            Err(SolveError::DigitOutOfRange {
                ch: 'F',
                position: 0,
                value: 41,
                base: 16,
            })
        );
        assert_eq!(decode("A", 37).unwrap(), BigInt::from(36));
    }

    #[test]
    fn reports_offending_position() {
        assert_eq!(
            decode("1012", 2),
            Err(SolveError::DigitOutOfRange {
                ch: '2',
                position: 3,
                value: 2,
                base: 2,
            })
        );
        assert_eq!(
            decode("12.5", 10),
            Err(SolveError::InvalidDigit {
                ch: '.',
                position: 2
            })
        );
    }

    #[test]
    fn rejects_bad_base_and_empty_value() {
        assert_eq!(decode("1", 1), Err(SolveError::InvalidBase("1".into())));
        assert_eq!(decode("1", 63), Err(SolveError::InvalidBase("63".into())));
        assert_eq!(decode("", 10), Err(SolveError::EmptyValue));
    }

    proptest! {
        #[test]
        fn decode_matches_positional_value(
            base in MIN_BASE..=MAX_BASE,
            raw in prop::collection::vec(any::<u32>(), 1..60),
        ) {
            let digits: Vec<u8> = raw.iter().map(|d| (d % base) as u8).collect();
            let text: String = digits.iter().map(|&d| DIGIT_CHARS[d as usize]).collect();
            let expected = BigUint::from_radix_be(&digits, base).unwrap();
            prop_assert_eq!(decode(&text, base).unwrap(), BigInt::from(expected));
        }
    }

    #[test]
    fn encode_uses_the_same_alphabet() {
        assert_eq!(encode(&BigUint::from(76u32), 40).unwrap(), "1A");
        assert_eq!(encode(&BigUint::from(255u32), 16).unwrap(), "ff");
        assert_eq!(encode(&BigUint::from(0u32), 7).unwrap(), "0");
        assert_eq!(
            encode(&BigUint::from(1u32), 0),
            Err(SolveError::InvalidBase("0".into()))
        );

        let value = BigUint::from_str("98765432109876543210987654321").unwrap();
        let text = encode(&value, 62).unwrap();
        assert_eq!(decode(&text, 62).unwrap(), BigInt::from(value));
    }
}

// SPDX-License-Identifier: CC0-1.0

//! # Radix Digits
//!
//! Decodes arbitrary-precision integers written as digit strings in any base
//! from 2 to 36, and encodes them back. Digits are the usual `0-9a-z`
//! alphabet; decoding is case-insensitive and encoding emits lowercase.
//!
//! ```
//! use num_bigint::BigInt;
//!
//! assert_eq!(radix_digits::decode(16, "ff").unwrap(), BigInt::from(255));
//! assert_eq!(radix_digits::encode(&BigInt::from(-255), 16).unwrap(), "-ff");
//! ```

#![deny(unsafe_code)]
#![deny(missing_docs)]

use num_bigint::{BigInt, Sign};
use thiserror::Error;

/// Smallest supported base
pub const MIN_BASE: u32 = 2;
/// Largest supported base
pub const MAX_BASE: u32 = 36;

/// Errors produced while decoding or encoding a digit string
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RadixError {
    /// Base outside of 2..=36
    #[error("Unsupported base: {0} (expected 2 to 36)")]
    UnsupportedBase(u32),
    /// No digits after trimming and removing the sign
    #[error("Empty digit string")]
    Empty,
    /// A character that is not a digit of the base
    #[error("Invalid digit '{digit}' for base {base}")]
    InvalidDigit {
        /// The first offending character
        digit: char,
        /// The base being decoded
        base: u32,
    },
}

/// Decodes `digits` written in `base` into a signed integer.
///
/// Surrounding whitespace is ignored and a single leading `+` or `-` is allowed.
pub fn decode(base: u32, digits: &str) -> Result<BigInt, RadixError> {
    check_base(base)?;

    let trimmed = digits.trim();
    let (sign, body) = match trimmed.as_bytes().first() {
        Some(b'-') => (Sign::Minus, &trimmed[1..]),
        Some(b'+') => (Sign::Plus, &trimmed[1..]),
        _ => (Sign::Plus, trimmed),
    };

    if body.is_empty() {
        return Err(RadixError::Empty);
    }

    // Validated up front so that separators like '_' are rejected too
    let mut values = Vec::with_capacity(body.len());
    for digit in body.chars() {
        match digit.to_digit(base) {
            Some(value) => values.push(value as u8),
            None => return Err(RadixError::InvalidDigit { digit, base }),
        }
    }

    let magnitude = BigInt::from_radix_be(Sign::Plus, &values, base)
        .ok_or(RadixError::UnsupportedBase(base))?;

    Ok(if sign == Sign::Minus { -magnitude } else { magnitude })
}

/// Encodes `value` in `base` using lowercase digits and a leading `-` for negatives.
pub fn encode(value: &BigInt, base: u32) -> Result<String, RadixError> {
    check_base(base)?;
    Ok(value.to_str_radix(base))
}

fn check_base(base: u32) -> Result<(), RadixError> {
    if !(MIN_BASE..=MAX_BASE).contains(&base) {
        return Err(RadixError::UnsupportedBase(base));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::Zero;

    #[test]
    fn test_decode_common_bases() {
        assert_eq!(decode(10, "4").unwrap(), BigInt::from(4));
        assert_eq!(decode(2, "111").unwrap(), BigInt::from(7));
        assert_eq!(decode(16, "ff").unwrap(), BigInt::from(255));
        assert_eq!(decode(16, "FF").unwrap(), BigInt::from(255));
        assert_eq!(decode(36, "z").unwrap(), BigInt::from(35));
        assert_eq!(decode(7, "213").unwrap(), BigInt::from(2 * 49 + 7 + 3));
    }

    #[test]
    fn test_decode_sign_and_whitespace() {
        assert_eq!(decode(10, "  42\n").unwrap(), BigInt::from(42));
        assert_eq!(decode(10, "-42").unwrap(), BigInt::from(-42));
        assert_eq!(decode(16, "+a").unwrap(), BigInt::from(10));
        assert_eq!(decode(10, "-0").unwrap(), BigInt::zero());
    }

    #[test]
    fn test_decode_large_value() {
        let digits = "123456789012345678901234567890123456789";
        let value = decode(10, digits).unwrap();
        assert_eq!(value.to_string(), digits);
        assert_eq!(decode(16, &value.to_str_radix(16)).unwrap(), value);
    }

    #[test]
    fn test_decode_invalid_inputs() {
        assert_eq!(decode(1, "0"), Err(RadixError::UnsupportedBase(1)));
        assert_eq!(decode(37, "0"), Err(RadixError::UnsupportedBase(37)));
        assert_eq!(decode(10, ""), Err(RadixError::Empty));
        assert_eq!(
            decode(10, "- 5"),
            Err(RadixError::InvalidDigit { digit: ' ', base: 10 })
        );
        assert_eq!(decode(10, "-"), Err(RadixError::Empty));
        assert_eq!(
            decode(2, "102"),
            Err(RadixError::InvalidDigit { digit: '2', base: 2 })
        );
        assert_eq!(
            decode(10, "1_000"),
            Err(RadixError::InvalidDigit { digit: '_', base: 10 })
        );
    }

    #[test]
    fn test_encode() {
        assert_eq!(encode(&BigInt::from(255), 16).unwrap(), "ff");
        assert_eq!(encode(&BigInt::from(-255), 16).unwrap(), "-ff");
        assert_eq!(encode(&BigInt::zero(), 2).unwrap(), "0");
        assert_eq!(encode(&BigInt::from(7), 2).unwrap(), "111");
        assert!(encode(&BigInt::from(7), 40).is_err());
    }
}

//! Parsing of user-typed addresses and integers.
//!
//! Both parsers accept exactly what a browser wallet front-end accepts for the same
//! field, so a form that validates here validates there.

use alloy_primitives::{Address, U256};

/// Errors returned when a form value is not an unsigned 256-bit integer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The value contains characters that are not digits of its radix.
    #[error("not an integer: {0:?}")]
    InvalidInteger(String),
    /// The value is a negative integer.
    #[error("negative integer: {0:?}")]
    NegativeInteger(String),
    /// The value does not fit in 256 bits.
    #[error("integer does not fit in 256 bits: {0:?}")]
    IntegerOverflow(String),
}

/// Returns the address if `value` is `0x` followed by 40 hex digits.
///
/// An address containing uppercase hex digits must carry a valid EIP-55 checksum.
#[must_use]
pub fn is_address(value: &str) -> Option<Address> {
    let body = value.strip_prefix("0x")?;
    if body.len() != 40 || !body.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    if body.bytes().any(|b| b.is_ascii_uppercase()) {
        Address::parse_checksummed(value, None).ok()
    } else {
        value.parse().ok()
    }
}

/// Returns the address in `value`, or the zero address if it is not address-shaped.
#[must_use]
pub fn address_or_zero(value: &str) -> Address {
    is_address(value).unwrap_or(Address::ZERO)
}

/// Parses `value` as an unsigned 256-bit integer.
///
/// Surrounding whitespace is ignored and the empty string is zero. A `0x`, `0o` or `0b`
/// prefix selects radix 16, 8 or 2; otherwise the value must be base 10 with an optional
/// sign.
///
/// # Errors
/// Returns an error if the value is not an integer, is negative or overflows 256 bits.
pub fn parse_big_int(value: &str) -> Result<U256, ParseError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(U256::ZERO);
    }

    let (digits, radix, negative) = split_radix(trimmed);
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return Err(ParseError::InvalidInteger(value.to_string()));
    }

    let parsed = U256::from_str_radix(digits, u64::from(radix))
        .map_err(|_| ParseError::IntegerOverflow(value.to_string()))?;

    if negative && !parsed.is_zero() {
        return Err(ParseError::NegativeInteger(value.to_string()));
    }
    Ok(parsed)
}

fn split_radix(value: &str) -> (&str, u32, bool) {
    let bytes = value.as_bytes();
    if bytes.len() >= 2 && bytes[0] == b'0' {
        let radix = match bytes[1] {
            b'x' | b'X' => Some(16),
            b'o' | b'O' => Some(8),
            b'b' | b'B' => Some(2),
            _ => None,
        };
        if let Some(radix) = radix {
            return (&value[2..], radix, false);
        }
    }

    value.strip_prefix('-').map_or_else(
        || (value.strip_prefix('+').unwrap_or(value), 10, false),
        |rest| (rest, 10, true),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::address;
    use rstest::rstest;

    #[rstest]
    #[case::lowercase("0xd8da6bf26964af9d7eed9e03e53415d37aa96045")]
    #[case::checksummed("0xd8dA6BF26964aF9D7eEd9e03E53415D37aA96045")]
    fn test_is_address_accepts(#[case] value: &str) {
        assert_eq!(
            is_address(value),
            Some(address!("0xd8dA6BF26964aF9D7eEd9e03E53415D37aA96045"))
        );
    }

    #[rstest]
    #[case::missing_prefix("d8da6bf26964af9d7eed9e03e53415d37aa96045")]
    #[case::uppercase_prefix("0Xd8da6bf26964af9d7eed9e03e53415d37aa96045")]
    #[case::too_short("0xd8da6bf26964af9d7eed9e03e53415d37aa9604")]
    #[case::too_long("0xd8da6bf26964af9d7eed9e03e53415d37aa960450")]
    #[case::non_hex("0xg8da6bf26964af9d7eed9e03e53415d37aa96045")]
    #[case::bad_checksum("0xD8dA6BF26964aF9D7eEd9e03E53415D37aA96045")]
    #[case::empty("")]
    fn test_is_address_rejects(#[case] value: &str) {
        assert_eq!(is_address(value), None);
        assert_eq!(address_or_zero(value), Address::ZERO);
    }

    #[rstest]
    #[case::decimal("86400", 86_400)]
    #[case::whitespace("  10\n", 10)]
    #[case::empty("", 0)]
    #[case::plus("+5", 5)]
    #[case::negative_zero("-0", 0)]
    #[case::hex("0x10", 16)]
    #[case::octal("0o17", 15)]
    #[case::binary("0b101", 5)]
    #[case::leading_zeros("007", 7)]
    fn test_parse_big_int(#[case] value: &str, #[case] expected: u64) {
        assert_eq!(parse_big_int(value), Ok(U256::from(expected)));
    }

    #[rstest]
    #[case::fraction("1.5")]
    #[case::exponent("1e3")]
    #[case::words("ten")]
    #[case::bare_prefix("0x")]
    #[case::underscore("1_000")]
    #[case::inner_space("1 0")]
    fn test_parse_big_int_invalid(#[case] value: &str) {
        assert_eq!(
            parse_big_int(value),
            Err(ParseError::InvalidInteger(value.to_string()))
        );
    }

    #[test]
    fn test_parse_big_int_negative() {
        assert_eq!(
            parse_big_int("-5"),
            Err(ParseError::NegativeInteger("-5".to_string()))
        );
    }

    #[test]
    fn test_parse_big_int_bounds() {
        let max = U256::MAX.to_string();
        assert_eq!(parse_big_int(&max), Ok(U256::MAX));

        let overflow = format!("0x1{}", "0".repeat(64));
        assert_eq!(
            parse_big_int(&overflow),
            Err(ParseError::IntegerOverflow(overflow.clone()))
        );
    }
}

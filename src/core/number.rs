//! Integers ⇄ hex.
//!
//! Numbers encode as their unpadded base-16 magnitude (`255` → `0xff`, `0` → `0x0`).
//! Negative values carry a sign marker in front of the prefix (`-255` → `-0xff`);
//! no two's-complement form is ever produced.

use super::validation::{is_valid_hex, strip_hex_prefix, HEX_PREFIX};
use crate::error::{constants, CodecError, Result};

/// Lower bound of the `f64` values that convert to `i64` without saturating
const I64_MIN_F64: f64 = i64::MIN as f64;

/// Exclusive upper bound (2^63) of the `f64` values that fit in `i64`
const I64_END_F64: f64 = 9_223_372_036_854_775_808.0;

/// Encode an integer as `0x`-prefixed lowercase hex without zero padding.
///
/// ```rust
/// use hex_converter::core::number_to_hex;
///
/// assert_eq!(number_to_hex(255), "0xff");
/// assert_eq!(number_to_hex(0), "0x0");
/// assert_eq!(number_to_hex(-255), "-0xff");
/// ```
pub fn number_to_hex(num: i64) -> String {
    let magnitude = num.unsigned_abs();
    if num < 0 {
        format!("-{HEX_PREFIX}{magnitude:x}")
    } else {
        format!("{HEX_PREFIX}{magnitude:x}")
    }
}

/// Encode a floating-point number that holds an integer value.
///
/// `-0.0` encodes as `0x0`.
///
/// # Errors
/// - `CodecError::InvalidInput` for NaN, infinities and fractional values
/// - `CodecError::NumberOutOfRange` for integral values outside the `i64` range
pub fn float_to_hex(num: f64) -> Result<String> {
    if !num.is_finite() {
        return Err(CodecError::InvalidInput(format!(
            "{}: {num}",
            constants::ERR_NOT_FINITE
        )));
    }
    if num.fract() != 0.0 {
        return Err(CodecError::InvalidInput(format!(
            "{}: {num}",
            constants::ERR_FRACTIONAL
        )));
    }
    if !(I64_MIN_F64..I64_END_F64).contains(&num) {
        return Err(CodecError::NumberOutOfRange(format!(
            "{}: {num}",
            constants::ERR_NUMBER_RANGE
        )));
    }

    Ok(number_to_hex(num as i64))
}

/// Parse a hex string as an unsigned integer.
///
/// Empty input yields `0`. Leading zeros are accepted.
///
/// # Errors
/// - `CodecError::MalformedHex` if any character is not a hex digit, or the
///   input is a bare `0x`
/// - `CodecError::NumberOutOfRange` if the value exceeds `u64::MAX`
pub fn hex_to_number(hex: &str) -> Result<u64> {
    if hex.is_empty() {
        return Ok(0);
    }
    if !is_valid_hex(hex) {
        return Err(CodecError::MalformedHex(format!(
            "{}: {hex:?}",
            constants::ERR_INVALID_HEX
        )));
    }

    u64::from_str_radix(strip_hex_prefix(hex), 16).map_err(|_| {
        CodecError::NumberOutOfRange(format!("{}: {hex}", constants::ERR_NUMBER_RANGE))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[allow(clippy::unwrap_used)]
    fn test_255() {
        assert_eq!(number_to_hex(255), "0xff");
        assert_eq!(hex_to_number("0xff").unwrap(), 255);
    }

    #[test]
    #[allow(clippy::unwrap_used)]
    fn test_zero() {
        assert_eq!(number_to_hex(0), "0x0");
        assert_eq!(hex_to_number("0x0").unwrap(), 0);
        assert_eq!(hex_to_number("").unwrap(), 0);
    }

    #[test]
    #[allow(clippy::unwrap_used)]
    fn test_large_number_roundtrip() {
        let hex = number_to_hex(1_234_567_890);
        assert_eq!(hex, "0x499602d2");
        assert_eq!(hex_to_number(&hex).unwrap(), 1_234_567_890);
    }

    #[test]
    fn test_negative_sign_marker() {
        assert_eq!(number_to_hex(-1), "-0x1");
        assert_eq!(number_to_hex(i64::MIN), "-0x8000000000000000");
        assert_eq!(number_to_hex(i64::MAX), "0x7fffffffffffffff");
    }

    #[test]
    #[allow(clippy::unwrap_used)]
    fn test_float_integral_values() {
        assert_eq!(float_to_hex(255.0).unwrap(), "0xff");
        assert_eq!(float_to_hex(-16.0).unwrap(), "-0x10");
        assert_eq!(float_to_hex(-0.0).unwrap(), "0x0");
        assert_eq!(float_to_hex(-9_223_372_036_854_775_808.0).unwrap(), "-0x8000000000000000");
    }

    #[test]
    fn test_float_rejects_fractional_and_non_finite() {
        assert!(matches!(float_to_hex(1.5), Err(CodecError::InvalidInput(_))));
        assert!(matches!(float_to_hex(f64::NAN), Err(CodecError::InvalidInput(_))));
        assert!(matches!(
            float_to_hex(f64::INFINITY),
            Err(CodecError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_float_out_of_range() {
        assert!(matches!(
            float_to_hex(9_223_372_036_854_775_808.0),
            Err(CodecError::NumberOutOfRange(_))
        ));
        assert!(matches!(float_to_hex(1e300), Err(CodecError::NumberOutOfRange(_))));
    }

    #[test]
    #[allow(clippy::unwrap_used)]
    fn test_hex_to_number_accepts_case_and_leading_zeros() {
        assert_eq!(hex_to_number("FF").unwrap(), 255);
        assert_eq!(hex_to_number("0x00000000000000000000ff").unwrap(), 255);
        assert_eq!(hex_to_number("0xffffffffffffffff").unwrap(), u64::MAX);
    }

    #[test]
    fn test_hex_to_number_strict() {
        assert!(matches!(hex_to_number("0x"), Err(CodecError::MalformedHex(_))));
        assert!(matches!(hex_to_number("0x12g4"), Err(CodecError::MalformedHex(_))));
        assert!(matches!(hex_to_number("+ff"), Err(CodecError::MalformedHex(_))));
        assert!(matches!(
            hex_to_number("0x10000000000000000"),
            Err(CodecError::NumberOutOfRange(_))
        ));
    }
}

//! Raw byte sequences ⇄ hex.

use super::validation::{strip_hex_prefix, HEX_PREFIX};
use crate::error::Result;

/// Render each byte as two lowercase hex digits, prefixed with `0x`.
///
/// A zero-length slice encodes as `"0x"`, so `hex_to_buffer(&buffer_to_hex(b)) == b`
/// holds for every `b`.
pub fn buffer_to_hex(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(HEX_PREFIX.len() + bytes.len() * 2);
    out.push_str(HEX_PREFIX);
    out.push_str(&hex::encode(bytes));
    out
}

/// Decode a hex string (optional `0x`, either case) into bytes.
///
/// Empty input and a bare `0x` both decode to an empty vector.
///
/// # Errors
/// Returns `CodecError::MalformedHex` on an odd digit count or a non-hex character.
pub fn hex_to_buffer(hex: &str) -> Result<Vec<u8>> {
    let digits = strip_hex_prefix(hex);
    if digits.is_empty() {
        return Ok(Vec::new());
    }
    Ok(hex::decode(digits)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CodecError;

    #[test]
    #[allow(clippy::unwrap_used)]
    fn test_buffer_hello() {
        let buffer = [0x48, 0x65, 0x6c, 0x6c, 0x6f];
        let hex = buffer_to_hex(&buffer);
        assert_eq!(hex, "0x48656c6c6f");
        assert_eq!(hex_to_buffer(&hex).unwrap(), buffer);
    }

    #[test]
    fn test_zero_padding_per_byte() {
        assert_eq!(buffer_to_hex(&[5, 0, 255, 16]), "0x0500ff10");
    }

    #[test]
    #[allow(clippy::unwrap_used)]
    fn test_empty_buffer() {
        assert_eq!(buffer_to_hex(&[]), "0x");
        assert!(hex_to_buffer("").unwrap().is_empty());
        assert!(hex_to_buffer("0x").unwrap().is_empty());
    }

    #[test]
    #[allow(clippy::unwrap_used)]
    fn test_decode_accepts_uppercase_and_no_prefix() {
        assert_eq!(hex_to_buffer("DEADbeef").unwrap(), vec![0xde, 0xad, 0xbe, 0xef]);
    }

    #[test]
    fn test_decode_rejects_odd_length() {
        assert!(matches!(
            hex_to_buffer("0xabc"),
            Err(CodecError::MalformedHex(_))
        ));
    }

    #[test]
    fn test_decode_rejects_non_hex() {
        assert!(matches!(
            hex_to_buffer("0xzz"),
            Err(CodecError::MalformedHex(_))
        ));
    }
}

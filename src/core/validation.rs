//! Hex prefix handling, validation and left-padding.

use crate::error::{CodecError, Result};

/// Prefix carried by every hex string the codec produces
pub const HEX_PREFIX: &str = "0x";

/// Remove a single leading `0x`, if present.
///
/// Only the lowercase prefix is recognised; `0X` is left in place and will fail
/// validation because `X` is not a hex digit.
#[inline]
pub fn strip_hex_prefix(hex: &str) -> &str {
    hex.strip_prefix(HEX_PREFIX).unwrap_or(hex)
}

/// Returns true iff `hex`, after stripping an optional `0x`, is a non-empty run
/// of hex digits in either case.
///
/// ```rust
/// use hex_converter::core::is_valid_hex;
///
/// assert!(is_valid_hex("0xff"));
/// assert!(is_valid_hex("FF"));
/// assert!(!is_valid_hex("0x"));
/// assert!(!is_valid_hex(""));
/// ```
pub fn is_valid_hex(hex: &str) -> bool {
    let digits = strip_hex_prefix(hex);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Left-pad `hex` with zeros to `byte_length` bytes (`byte_length * 2` digits).
///
/// The output is always lowercase and `0x`-prefixed. Input that is already
/// longer than the target passes through untruncated.
///
/// # Errors
/// Returns `CodecError::MalformedHex` if the digits contain a non-hex character.
pub fn pad_hex(hex: &str, byte_length: usize) -> Result<String> {
    let digits = strip_hex_prefix(hex);

    if let Some((index, c)) = digits.char_indices().find(|(_, c)| !c.is_ascii_hexdigit()) {
        return Err(CodecError::MalformedHex(format!(
            "Invalid character {c:?} at position {index}"
        )));
    }

    // Built by hand: formatter widths are limited to u16::MAX.
    let fill = byte_length.saturating_mul(2).saturating_sub(digits.len());
    let mut padded = String::with_capacity(HEX_PREFIX.len() + fill + digits.len());
    padded.push_str(HEX_PREFIX);
    padded.extend(std::iter::repeat('0').take(fill));
    padded.push_str(&digits.to_ascii_lowercase());
    Ok(padded)
}

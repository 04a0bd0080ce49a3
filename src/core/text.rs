//! UTF-8 text ⇄ hex.

use super::bytes::{buffer_to_hex, hex_to_buffer};
use crate::error::Result;

/// Encode the UTF-8 bytes of `text` as a `0x`-prefixed lowercase hex string.
///
/// Empty text yields `""`, not `"0x"`.
///
/// ```rust
/// use hex_converter::core::string_to_hex;
///
/// assert_eq!(string_to_hex("test"), "0x74657374");
/// assert_eq!(string_to_hex("你好"), "0xe4bda0e5a5bd");
/// assert_eq!(string_to_hex(""), "");
/// ```
pub fn string_to_hex(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    buffer_to_hex(text.as_bytes())
}

/// Decode a hex string back into text.
///
/// Empty input yields `""`. Byte sequences that are not valid UTF-8 are decoded
/// with U+FFFD replacement characters rather than failing.
///
/// # Errors
/// Returns `CodecError::MalformedHex` on an odd digit count or a non-hex character.
pub fn hex_to_string(hex: &str) -> Result<String> {
    if hex.is_empty() {
        return Ok(String::new());
    }
    let bytes = hex_to_buffer(hex)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Same as [`string_to_hex`].
#[inline]
pub fn utf8_to_hex(text: &str) -> String {
    string_to_hex(text)
}

/// Same as [`hex_to_string`].
#[inline]
pub fn hex_to_utf8(hex: &str) -> Result<String> {
    hex_to_string(hex)
}

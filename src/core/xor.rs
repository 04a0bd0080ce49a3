//! Cyclic-key XOR transform.
//!
//! `output[i] = data[i] ^ key[i % key.len()]`. Applying the transform twice with
//! the same key restores the data. This is reversible obfuscation only; it gives
//! no confidentiality.

use super::bytes::{buffer_to_hex, hex_to_buffer};
use super::validation::is_valid_hex;
use crate::error::{constants, CodecError, Result};

/// XOR `data` with `key` repeated cyclically. The output has `data.len()` bytes.
///
/// # Errors
/// Returns `CodecError::InvalidInput` if `key` is empty.
pub fn xor_bytes(data: &[u8], key: &[u8]) -> Result<Vec<u8>> {
    if key.is_empty() {
        return Err(CodecError::InvalidInput(constants::ERR_EMPTY_KEY.to_string()));
    }

    Ok(data
        .iter()
        .zip(key.iter().cycle())
        .map(|(d, k)| d ^ k)
        .collect())
}

/// XOR two hex operands and return canonical hex of the result.
///
/// ```rust
/// use hex_converter::core::{string_to_hex, xor_encrypt_decrypt};
///
/// let data = string_to_hex("Hello World");
/// let key = string_to_hex("secret");
/// let masked = xor_encrypt_decrypt(&data, &key).unwrap();
/// assert_eq!(xor_encrypt_decrypt(&masked, &key).unwrap(), data);
/// ```
///
/// # Errors
/// - `CodecError::InvalidInput` if either operand fails [`is_valid_hex`]; the
///   message names both operands
/// - `CodecError::MalformedHex` if an operand has an odd number of digits
pub fn xor_encrypt_decrypt(data_hex: &str, key_hex: &str) -> Result<String> {
    if !is_valid_hex(data_hex) || !is_valid_hex(key_hex) {
        return Err(CodecError::InvalidInput(format!(
            "{} (data: {data_hex:?}, key: {key_hex:?})",
            constants::ERR_XOR_OPERANDS
        )));
    }

    let data = hex_to_buffer(data_hex)?;
    let key = hex_to_buffer(key_hex)?;
    let out = xor_bytes(&data, &key)?;

    Ok(buffer_to_hex(&out))
}

//! # Codec Core
//!
//! Pure, stateless conversions between text, numbers, byte sequences and hex strings.
//!
//! Nothing in this module performs I/O, logs, caches or keeps state between calls,
//! so every function is safe to call concurrently from any number of threads.
//!
//! ## Components
//! - **Text**: UTF-8 text ⇄ hex (`string_to_hex`, `hex_to_string` and the `utf8_*` aliases)
//! - **Number**: integers ⇄ hex (`number_to_hex`, `float_to_hex`, `hex_to_number`)
//! - **Bytes**: raw bytes ⇄ hex (`buffer_to_hex`, `hex_to_buffer`)
//! - **Validation**: prefix stripping, `is_valid_hex`, `pad_hex`
//! - **XOR**: cyclic-key XOR transform over hex operands
//!
//! ## Hex Format
//! ```text
//! 0x [0-9a-f]{2}*      produced: lowercase, 0x-prefixed, two digits per byte
//! (0x)? [0-9a-fA-F]*   accepted: optional prefix, either case
//! ```
//!
//! `string_to_hex("")` returns `""` rather than `"0x"`; empty text short-circuits
//! to empty output in both directions.

pub mod bytes;
pub mod number;
pub mod text;
pub mod validation;
pub mod xor;

pub use bytes::{buffer_to_hex, hex_to_buffer};
pub use number::{float_to_hex, hex_to_number, number_to_hex};
pub use text::{hex_to_string, hex_to_utf8, string_to_hex, utf8_to_hex};
pub use validation::{is_valid_hex, pad_hex, strip_hex_prefix, HEX_PREFIX};
pub use xor::{xor_bytes, xor_encrypt_decrypt};

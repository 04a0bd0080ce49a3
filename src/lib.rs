//! # hex-converter
//!
//! Hexadecimal, UTF-8, number and byte-sequence codec utilities.
//!
//! The [`core`] module holds the codec itself: small, pure functions with no I/O
//! and no state. The [`converter`] module wraps them in a mode-driven front-end
//! with input checks, metrics and logging, which the `hexconv` binary exposes on
//! the command line.
//!
//! ## Quick Start
//! ```rust
//! use hex_converter::core::{hex_to_string, number_to_hex, string_to_hex, xor_encrypt_decrypt};
//!
//! let hex = string_to_hex("test");
//! assert_eq!(hex, "0x74657374");
//! assert_eq!(hex_to_string(&hex).unwrap(), "test");
//! assert_eq!(number_to_hex(255), "0xff");
//!
//! let key = string_to_hex("secret");
//! let masked = xor_encrypt_decrypt(&hex, &key).unwrap();
//! assert_eq!(xor_encrypt_decrypt(&masked, &key).unwrap(), hex);
//! ```
//!
//! ## Converter
//! ```rust
//! use hex_converter::{ConversionMode, Converter};
//!
//! let converter = Converter::default();
//! assert_eq!(converter.convert_mode(ConversionMode::HexToNumber, "0xff").unwrap(), "255");
//! ```

pub mod config;
pub mod converter;
pub mod core;
pub mod error;
pub mod utils;

pub use crate::config::{CodecConfig, ConverterConfig, LoggingConfig};
pub use crate::converter::{
    presets, ConversionMode, ConversionOutput, ConversionRequest, Converter, Preset,
};
pub use crate::error::{CodecError, Result};

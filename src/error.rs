//! # Error Types
//!
//! Error handling for the hex codec and the converter built on top of it.
//!
//! Every codec function either returns a value or fails synchronously with one
//! of the variants below. There are no partial results and nothing to retry:
//! all operations are deterministic and local.
//!
//! ## Error Categories
//! - **Invalid input**: wrong kind of argument, or a hex operand that fails
//!   validation where validation is required (XOR transform, converter modes)
//! - **Malformed hex**: odd digit count or non-hex characters reaching a decoder
//! - **Range errors**: numbers that do not fit the native integer types
//! - **Configuration / logging**: problems loading config or installing a subscriber
//! - **Custom**: converter internals such as a poisoned dispatcher lock
//!
//! Invalid UTF-8 encountered while decoding bytes to text is *not* an error:
//! it is replaced with U+FFFD, the same way a standard UTF-8 decoder does.
//!
//! ## Example Usage
//! ```rust
//! use hex_converter::core::hex_to_string;
//! use hex_converter::error::CodecError;
//!
//! match hex_to_string("0x746") {
//!     Ok(text) => println!("decoded {text}"),
//!     Err(CodecError::MalformedHex(reason)) => println!("bad hex: {reason}"),
//!     Err(e) => println!("other failure: {e}"),
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error message constants shared by the codec and converter.
pub mod constants {
    /// Validation errors
    pub const ERR_INVALID_HEX: &str = "Invalid hex string";
    pub const ERR_INVALID_NUMBER: &str = "Invalid number";
    pub const ERR_XOR_OPERANDS: &str = "Data and key must be valid hex strings";
    pub const ERR_EMPTY_KEY: &str = "XOR key must contain at least one byte";
    pub const ERR_MISSING_KEY: &str = "XOR conversion requires a key";

    /// Number errors
    pub const ERR_NOT_FINITE: &str = "Number must be finite";
    pub const ERR_FRACTIONAL: &str = "Number must be an integer";
    pub const ERR_NUMBER_RANGE: &str = "Number does not fit in a 64-bit integer";

    /// Byte list errors
    pub const ERR_BYTE_RANGE: &str = "Byte values must be between 0 and 255";

    /// Limits
    pub const ERR_INPUT_TOO_LARGE: &str = "Input exceeds the configured maximum size";
    pub const ERR_PAD_LENGTH: &str = "Pad length must be between 1 and the maximum pad length";
}

/// CodecError is the error type for every codec and converter operation
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CodecError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Malformed hex: {0}")]
    MalformedHex(String),

    #[error("Number out of range: {0}")]
    NumberOutOfRange(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Logging error: {0}")]
    LoggingError(String),

    #[error("Custom error: {0}")]
    Custom(String),
}

impl From<hex::FromHexError> for CodecError {
    fn from(err: hex::FromHexError) -> Self {
        CodecError::MalformedHex(err.to_string())
    }
}

/// Type alias for Results using CodecError
pub type Result<T> = std::result::Result<T, CodecError>;

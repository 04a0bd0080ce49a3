//! # Conversion Modes
//!
//! The set of conversions the front-end offers, with the stable names used on
//! the command line, in config files and in serialized requests.
//!
//! Name parsing ignores case, `-` and `_`, so `hexToString`, `hex-to-string`
//! and `HEX_TO_STRING` all select [`ConversionMode::HexToString`].

use crate::error::CodecError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supported conversions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ConversionMode {
    /// Text → hex (default)
    #[default]
    #[serde(rename = "stringToHex")]
    StringToHex,
    #[serde(rename = "hexToString")]
    HexToString,
    #[serde(rename = "utf8ToHex")]
    Utf8ToHex,
    #[serde(rename = "hexToUtf8")]
    HexToUtf8,
    /// Decimal number → hex
    #[serde(rename = "numberToHex")]
    NumberToHex,
    #[serde(rename = "hexToNumber")]
    HexToNumber,
    /// Comma/space separated byte list → hex
    #[serde(rename = "bufferToHex")]
    BufferToHex,
    #[serde(rename = "hexToBuffer")]
    HexToBuffer,
    #[serde(rename = "isValidHex")]
    ValidateHex,
    #[serde(rename = "padHex")]
    PadHex,
    /// Cyclic-key XOR, needs a key
    #[serde(rename = "xorEncryptDecrypt")]
    Xor,
}

impl ConversionMode {
    /// Every mode, in menu order
    pub const ALL: [ConversionMode; 11] = [
        ConversionMode::StringToHex,
        ConversionMode::HexToString,
        ConversionMode::Utf8ToHex,
        ConversionMode::HexToUtf8,
        ConversionMode::NumberToHex,
        ConversionMode::HexToNumber,
        ConversionMode::BufferToHex,
        ConversionMode::HexToBuffer,
        ConversionMode::ValidateHex,
        ConversionMode::PadHex,
        ConversionMode::Xor,
    ];

    /// Stable camelCase name
    pub fn name(self) -> &'static str {
        match self {
            ConversionMode::StringToHex => "stringToHex",
            ConversionMode::HexToString => "hexToString",
            ConversionMode::Utf8ToHex => "utf8ToHex",
            ConversionMode::HexToUtf8 => "hexToUtf8",
            ConversionMode::NumberToHex => "numberToHex",
            ConversionMode::HexToNumber => "hexToNumber",
            ConversionMode::BufferToHex => "bufferToHex",
            ConversionMode::HexToBuffer => "hexToBuffer",
            ConversionMode::ValidateHex => "isValidHex",
            ConversionMode::PadHex => "padHex",
            ConversionMode::Xor => "xorEncryptDecrypt",
        }
    }

    /// Short human-readable label
    pub fn label(self) -> &'static str {
        match self {
            ConversionMode::StringToHex => "String → Hex",
            ConversionMode::HexToString => "Hex → String",
            ConversionMode::Utf8ToHex => "UTF-8 → Hex",
            ConversionMode::HexToUtf8 => "Hex → UTF-8",
            ConversionMode::NumberToHex => "Number → Hex",
            ConversionMode::HexToNumber => "Hex → Number",
            ConversionMode::BufferToHex => "Bytes → Hex",
            ConversionMode::HexToBuffer => "Hex → Bytes",
            ConversionMode::ValidateHex => "Validate Hex",
            ConversionMode::PadHex => "Pad Hex",
            ConversionMode::Xor => "XOR",
        }
    }

    /// Whether the input must pass `is_valid_hex` before conversion
    pub fn takes_hex_input(self) -> bool {
        matches!(
            self,
            ConversionMode::HexToString
                | ConversionMode::HexToUtf8
                | ConversionMode::HexToNumber
                | ConversionMode::HexToBuffer
        )
    }

    /// Look a mode up by name, ignoring case, `-` and `_`
    pub fn from_name(name: &str) -> Option<Self> {
        let wanted = normalize(name);
        Self::ALL
            .into_iter()
            .find(|mode| normalize(mode.name()) == wanted)
            .or_else(|| match wanted.as_str() {
                "validatehex" => Some(ConversionMode::ValidateHex),
                "xor" => Some(ConversionMode::Xor),
                _ => None,
            })
    }
}

fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| *c != '-' && *c != '_')
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

impl fmt::Display for ConversionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ConversionMode {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
            .ok_or_else(|| CodecError::InvalidInput(format!("Unknown conversion mode: {s}")))
    }
}

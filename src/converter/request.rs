use super::mode::ConversionMode;
use serde::{Deserialize, Serialize};

/// One conversion asked of the converter
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ConversionRequest {
    pub mode: ConversionMode,
    pub input: String,
    /// XOR key (hex), only read by `xorEncryptDecrypt`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// Target byte length, only read by `padHex`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pad_bytes: Option<usize>,
}

impl ConversionRequest {
    pub fn new(mode: ConversionMode, input: impl Into<String>) -> Self {
        Self {
            mode,
            input: input.into(),
            key: None,
            pad_bytes: None,
        }
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn with_pad_bytes(mut self, pad_bytes: usize) -> Self {
        self.pad_bytes = Some(pad_bytes);
        self
    }
}

/// Result of a successful conversion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionOutput {
    pub mode: ConversionMode,
    pub input: String,
    pub output: String,
}

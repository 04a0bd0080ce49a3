//! # Converter
//!
//! Interactive front-end over the codec core: pick a [`ConversionMode`], hand
//! over user-typed text, get back the converted value or an error to show.
//!
//! ## Components
//! - **Mode**: named conversions and their parsing
//! - **Request**: input text plus optional XOR key / padding length
//! - **Dispatcher**: mode → handler routing
//! - **Converter**: input checks, dispatch, metrics and logging
//! - **Presets**: ready-made inputs for a quick tour
//!
//! ## Input checks
//! - Inputs larger than `codec.max_input_bytes` are rejected
//! - A per-request pad length must lie in `1..=MAX_PAD_BYTES`, the same bound
//!   `codec.default_pad_bytes` is validated against
//! - Hex-reading modes require `is_valid_hex` input, so `0x` and `""` are
//!   reported as "Invalid hex string" rather than decoded to an empty value

pub mod dispatcher;
pub mod mode;
pub mod request;

pub use dispatcher::Dispatcher;
pub use mode::ConversionMode;
pub use request::{ConversionOutput, ConversionRequest};

use crate::config::{CodecConfig, ConverterConfig, MAX_PAD_BYTES};
use crate::core::is_valid_hex;
use crate::error::{constants, CodecError, Result};
use crate::utils::metrics::{ConversionMetrics, MetricsSnapshot, Timer};
use serde::Serialize;
use tracing::{debug, warn};

/// A sample input shown alongside the converter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Preset {
    pub label: &'static str,
    pub value: &'static str,
    pub mode: ConversionMode,
}

impl Preset {
    pub fn request(&self) -> ConversionRequest {
        ConversionRequest::new(self.mode, self.value)
    }
}

static PRESETS: [Preset; 6] = [
    Preset {
        label: "English \"test\"",
        value: "test",
        mode: ConversionMode::StringToHex,
    },
    Preset {
        label: "Chinese \"你好\"",
        value: "你好",
        mode: ConversionMode::StringToHex,
    },
    Preset {
        label: "Mixed \"Hello世界\"",
        value: "Hello世界",
        mode: ConversionMode::StringToHex,
    },
    Preset {
        label: "Emoji \"🎉🎊\"",
        value: "🎉🎊",
        mode: ConversionMode::StringToHex,
    },
    Preset {
        label: "Number 255",
        value: "255",
        mode: ConversionMode::NumberToHex,
    },
    Preset {
        label: "Hex \"0x74657374\"",
        value: "0x74657374",
        mode: ConversionMode::HexToString,
    },
];

/// Built-in sample inputs
pub fn presets() -> &'static [Preset] {
    &PRESETS
}

/// Converter front-end. Cheap to share behind an `Arc`; every method takes `&self`.
pub struct Converter {
    config: ConverterConfig,
    dispatcher: Dispatcher,
    metrics: ConversionMetrics,
}

impl Default for Converter {
    fn default() -> Self {
        Self::new(ConverterConfig::default())
    }
}

impl Converter {
    pub fn new(config: ConverterConfig) -> Self {
        Self::with_dispatcher(config, Dispatcher::with_builtin_handlers())
    }

    /// Build a converter around a caller-supplied dispatcher
    pub fn with_dispatcher(config: ConverterConfig, dispatcher: Dispatcher) -> Self {
        Self {
            config,
            dispatcher,
            metrics: ConversionMetrics::new(),
        }
    }

    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    pub fn metrics(&self) -> MetricsSnapshot {
        self.metrics.snapshot()
    }

    pub fn log_metrics(&self) {
        self.metrics.log_summary();
    }

    /// Run one conversion.
    ///
    /// # Errors
    /// - `CodecError::InvalidInput` for oversized input, invalid hex in a
    ///   hex-reading mode, unparseable numbers or byte lists, or a missing XOR key
    /// - any error the codec function for the mode returns
    pub fn convert(&self, request: &ConversionRequest) -> Result<ConversionOutput> {
        let _timer = Timer::start("convert");
        self.metrics.conversion_attempt(request.input.len() as u64);

        let result = check_request(request, &self.config.codec)
            .and_then(|()| self.dispatcher.dispatch(request, &self.config.codec));

        match result {
            Ok(output) => {
                self.metrics.conversion_success(output.len() as u64);
                debug!(
                    mode = %request.mode,
                    input_len = request.input.len(),
                    output_len = output.len(),
                    "Conversion succeeded"
                );
                Ok(ConversionOutput {
                    mode: request.mode,
                    input: request.input.clone(),
                    output,
                })
            }
            Err(e) => {
                let validation = matches!(
                    e,
                    CodecError::InvalidInput(_) | CodecError::MalformedHex(_)
                );
                self.metrics.conversion_failed(validation);
                warn!(mode = %request.mode, error = %e, "Conversion failed");
                Err(e)
            }
        }
    }

    /// Shorthand for a request with no key or padding override
    pub fn convert_mode(&self, mode: ConversionMode, input: &str) -> Result<String> {
        self.convert(&ConversionRequest::new(mode, input))
            .map(|out| out.output)
    }

    /// Result text for display: the output, or the error prefixed with ❌
    pub fn render(&self, request: &ConversionRequest) -> String {
        match self.convert(request) {
            Ok(out) => out.output,
            Err(e) => format!("❌ {e}"),
        }
    }
}

fn check_request(request: &ConversionRequest, config: &CodecConfig) -> Result<()> {
    let key_len = request.key.as_ref().map_or(0, String::len);
    let largest = request.input.len().max(key_len);
    if largest > config.max_input_bytes {
        return Err(CodecError::InvalidInput(format!(
            "{}: {largest} > {} bytes",
            constants::ERR_INPUT_TOO_LARGE,
            config.max_input_bytes
        )));
    }

    if let Some(pad_bytes) = request.pad_bytes {
        if pad_bytes == 0 || pad_bytes > MAX_PAD_BYTES {
            return Err(CodecError::InvalidInput(format!(
                "{}: {pad_bytes} (maximum: {MAX_PAD_BYTES})",
                constants::ERR_PAD_LENGTH
            )));
        }
    }

    if request.mode.takes_hex_input() && !is_valid_hex(&request.input) {
        return Err(CodecError::InvalidInput(
            constants::ERR_INVALID_HEX.to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[allow(clippy::unwrap_used)]
    fn test_presets_all_convert() {
        let converter = Converter::default();
        let outputs: Vec<String> = presets()
            .iter()
            .map(|p| converter.convert(&p.request()).unwrap().output)
            .collect();
        assert_eq!(outputs[0], "0x74657374");
        assert_eq!(outputs[1], "0xe4bda0e5a5bd");
        assert_eq!(outputs[4], "0xff");
        assert_eq!(outputs[5], "test");
    }

    #[test]
    fn test_hex_mode_prevalidates() {
        let converter = Converter::default();
        for input in ["", "0x", "xyz", "0x12 34"] {
            let err = converter
                .convert_mode(ConversionMode::HexToString, input)
                .unwrap_err();
            assert_eq!(
                err,
                CodecError::InvalidInput(constants::ERR_INVALID_HEX.to_string())
            );
        }
    }

    #[test]
    fn test_render_prefixes_errors() {
        let converter = Converter::default();
        let rendered = converter.render(&ConversionRequest::new(ConversionMode::NumberToHex, "abc"));
        assert!(rendered.starts_with("❌ "));
        assert!(rendered.contains(constants::ERR_INVALID_NUMBER));
    }

    #[test]
    fn test_size_cap() {
        let config = ConverterConfig::default_with_overrides(|c| c.codec.max_input_bytes = 4);
        let converter = Converter::new(config);
        assert!(converter.convert_mode(ConversionMode::StringToHex, "tiny").is_ok());
        assert!(matches!(
            converter.convert_mode(ConversionMode::StringToHex, "toolong"),
            Err(CodecError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_metrics_track_outcomes() {
        let converter = Converter::default();
        let _ = converter.convert_mode(ConversionMode::StringToHex, "ab");
        let _ = converter.convert_mode(ConversionMode::HexToNumber, "0xzz");

        let snap = converter.metrics();
        assert_eq!(snap.conversions_total, 2);
        assert_eq!(snap.conversions_success, 1);
        assert_eq!(snap.conversions_failed, 1);
        assert_eq!(snap.validation_failures, 1);
        assert_eq!(snap.bytes_in, 6);
        assert_eq!(snap.bytes_out, 6);
    }
}

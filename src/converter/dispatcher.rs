use super::mode::ConversionMode;
use super::request::ConversionRequest;
use crate::config::CodecConfig;
use crate::core::{
    buffer_to_hex, float_to_hex, hex_to_buffer, hex_to_number, hex_to_string, hex_to_utf8,
    is_valid_hex, pad_hex, string_to_hex, utf8_to_hex, xor_encrypt_decrypt,
};
use crate::error::{constants, CodecError, Result};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

type HandlerFn = dyn Fn(&ConversionRequest, &CodecConfig) -> Result<String> + Send + Sync + 'static;

/// Routes a request to the handler registered for its mode.
pub struct Dispatcher {
    handlers: Arc<RwLock<HashMap<ConversionMode, Box<HandlerFn>>>>,
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::with_builtin_handlers()
    }
}

impl Dispatcher {
    /// A dispatcher with no handlers
    pub fn new() -> Self {
        Self {
            handlers: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// A dispatcher with one codec-backed handler per mode
    pub fn with_builtin_handlers() -> Self {
        let mut map: HashMap<ConversionMode, Box<HandlerFn>> = HashMap::new();
        for mode in ConversionMode::ALL {
            map.insert(mode, builtin_handler(mode));
        }
        Self {
            handlers: Arc::new(RwLock::new(map)),
        }
    }

    /// Register (or replace) the handler for `mode`
    pub fn register<F>(&self, mode: ConversionMode, handler: F) -> Result<()>
    where
        F: Fn(&ConversionRequest, &CodecConfig) -> Result<String> + Send + Sync + 'static,
    {
        let mut handlers = self.handlers.write().map_err(|_| {
            CodecError::Custom("Failed to acquire write lock on dispatcher".to_string())
        })?;

        handlers.insert(mode, Box::new(handler));
        Ok(())
    }

    pub fn dispatch(&self, request: &ConversionRequest, config: &CodecConfig) -> Result<String> {
        let handlers = self.handlers.read().map_err(|_| {
            CodecError::Custom("Failed to acquire read lock on dispatcher".to_string())
        })?;

        handlers
            .get(&request.mode)
            .ok_or_else(|| {
                CodecError::Custom(format!("No handler registered for {}", request.mode))
            })
            .and_then(|handler| handler(request, config))
    }
}

fn builtin_handler(mode: ConversionMode) -> Box<HandlerFn> {
    match mode {
        ConversionMode::StringToHex => Box::new(handle_string_to_hex),
        ConversionMode::HexToString => Box::new(handle_hex_to_string),
        ConversionMode::Utf8ToHex => Box::new(handle_utf8_to_hex),
        ConversionMode::HexToUtf8 => Box::new(handle_hex_to_utf8),
        ConversionMode::NumberToHex => Box::new(handle_number_to_hex),
        ConversionMode::HexToNumber => Box::new(handle_hex_to_number),
        ConversionMode::BufferToHex => Box::new(handle_buffer_to_hex),
        ConversionMode::HexToBuffer => Box::new(handle_hex_to_buffer),
        ConversionMode::ValidateHex => Box::new(handle_validate_hex),
        ConversionMode::PadHex => Box::new(handle_pad_hex),
        ConversionMode::Xor => Box::new(handle_xor),
    }
}

fn handle_string_to_hex(req: &ConversionRequest, _: &CodecConfig) -> Result<String> {
    Ok(string_to_hex(&req.input))
}

fn handle_hex_to_string(req: &ConversionRequest, _: &CodecConfig) -> Result<String> {
    hex_to_string(&req.input)
}

fn handle_utf8_to_hex(req: &ConversionRequest, _: &CodecConfig) -> Result<String> {
    Ok(utf8_to_hex(&req.input))
}

fn handle_hex_to_utf8(req: &ConversionRequest, _: &CodecConfig) -> Result<String> {
    hex_to_utf8(&req.input)
}

fn handle_number_to_hex(req: &ConversionRequest, _: &CodecConfig) -> Result<String> {
    let num = req.input.trim().parse::<f64>().map_err(|_| {
        CodecError::InvalidInput(format!(
            "{}: {:?}",
            constants::ERR_INVALID_NUMBER,
            req.input
        ))
    })?;
    float_to_hex(num)
}

fn handle_hex_to_number(req: &ConversionRequest, _: &CodecConfig) -> Result<String> {
    hex_to_number(&req.input).map(|n| n.to_string())
}

fn handle_buffer_to_hex(req: &ConversionRequest, _: &CodecConfig) -> Result<String> {
    parse_byte_list(&req.input).map(|bytes| buffer_to_hex(&bytes))
}

fn handle_hex_to_buffer(req: &ConversionRequest, _: &CodecConfig) -> Result<String> {
    hex_to_buffer(&req.input).map(|bytes| format_byte_list(&bytes))
}

fn handle_validate_hex(req: &ConversionRequest, _: &CodecConfig) -> Result<String> {
    Ok(is_valid_hex(&req.input).to_string())
}

fn handle_pad_hex(req: &ConversionRequest, config: &CodecConfig) -> Result<String> {
    pad_hex(
        &req.input,
        req.pad_bytes.unwrap_or(config.default_pad_bytes),
    )
}

fn handle_xor(req: &ConversionRequest, _: &CodecConfig) -> Result<String> {
    let key = req
        .key
        .as_deref()
        .ok_or_else(|| CodecError::InvalidInput(constants::ERR_MISSING_KEY.to_string()))?;
    xor_encrypt_decrypt(&req.input, key)
}

/// Parse `72, 101 0x6c` style byte lists. Surrounding brackets are ignored.
pub fn parse_byte_list(input: &str) -> Result<Vec<u8>> {
    input
        .trim()
        .trim_start_matches('[')
        .trim_end_matches(']')
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| {
            let parsed = match token.strip_prefix("0x") {
                Some(digits) => u8::from_str_radix(digits, 16),
                None => token.parse::<u8>(),
            };
            parsed.map_err(|_| {
                CodecError::InvalidInput(format!("{}: {token:?}", constants::ERR_BYTE_RANGE))
            })
        })
        .collect()
}

/// Render bytes as `[72, 101, 108]`
pub fn format_byte_list(bytes: &[u8]) -> String {
    let items: Vec<String> = bytes.iter().map(u8::to_string).collect();
    format!("[{}]", items.join(", "))
}

#![no_main]

use hex_converter::core::{hex_to_buffer, hex_to_number, hex_to_string, is_valid_hex, pad_hex};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Decoders must reject malformed input without panicking
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };

    let valid = is_valid_hex(input);
    let bytes = hex_to_buffer(input);
    if valid && input.strip_prefix("0x").unwrap_or(input).len() % 2 == 0 {
        assert!(bytes.is_ok());
    }

    let _ = hex_to_string(input);
    let _ = hex_to_number(input);
    let _ = pad_hex(input, 32);
});

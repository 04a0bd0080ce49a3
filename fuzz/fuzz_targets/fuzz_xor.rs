#![no_main]

use hex_converter::core::{buffer_to_hex, xor_encrypt_decrypt};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Split the input into data and key; XOR twice must restore the data
    if data.len() < 2 {
        return;
    }
    let split = (data[0] as usize % (data.len() - 1)) + 1;
    let (payload, key) = data[1..].split_at(split.min(data.len() - 1));
    if payload.is_empty() || key.is_empty() {
        return;
    }

    let payload_hex = buffer_to_hex(payload);
    let key_hex = buffer_to_hex(key);
    if let Ok(masked) = xor_encrypt_decrypt(&payload_hex, &key_hex) {
        assert_eq!(xor_encrypt_decrypt(&masked, &key_hex).ok(), Some(payload_hex));
    }
});

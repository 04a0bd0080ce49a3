//! End-to-end scenarios for the codec core: the documented examples plus
//! realistic payloads (wallet info, multilingual text, contract signatures).

#![allow(clippy::expect_used, clippy::unwrap_used)]

use hex_converter::core::{
    buffer_to_hex, hex_to_buffer, hex_to_number, hex_to_string, hex_to_utf8, is_valid_hex,
    number_to_hex, pad_hex, string_to_hex, utf8_to_hex, xor_encrypt_decrypt,
};
use serde_json::json;

// ============================================================================
// DOCUMENTED EXAMPLES
// ============================================================================

#[test]
fn test_string_test_roundtrip() {
    assert_eq!(string_to_hex("test"), "0x74657374");
    assert_eq!(hex_to_string("0x74657374").unwrap(), "test");
}

#[test]
fn test_chinese_encoding() {
    assert_eq!(string_to_hex("你好"), "0xe4bda0e5a5bd");
    assert_eq!(hex_to_string("0xe4bda0e5a5bd").unwrap(), "你好");
}

#[test]
fn test_number_255() {
    assert_eq!(number_to_hex(255), "0xff");
    assert_eq!(hex_to_number("0xff").unwrap(), 255);
}

#[test]
fn test_number_zero() {
    assert_eq!(number_to_hex(0), "0x0");
    assert_eq!(hex_to_number("0x0").unwrap(), 0);
}

#[test]
fn test_number_1234567890() {
    let hex = number_to_hex(1_234_567_890);
    assert_eq!(hex_to_number(&hex).unwrap(), 1_234_567_890);
}

#[test]
fn test_buffer_hello() {
    let buffer = [0x48, 0x65, 0x6c, 0x6c, 0x6f];
    let hex = buffer_to_hex(&buffer);
    assert_eq!(hex, "0x48656c6c6f");

    let decoded = hex_to_buffer(&hex).unwrap();
    assert_eq!(decoded.len(), buffer.len());
    assert_eq!(decoded, buffer);
}

#[test]
fn test_pad_to_word() {
    let padded = pad_hex("0x1234", 32).unwrap();
    assert_eq!(padded.len(), 66);
    assert!(padded.starts_with("0x00000000000000"));
}

#[test]
fn test_xor_hello_world() {
    let original = string_to_hex("Hello World");
    let key = string_to_hex("secret");

    let encrypted = xor_encrypt_decrypt(&original, &key).unwrap();
    let decrypted = xor_encrypt_decrypt(&encrypted, &key).unwrap();

    assert_eq!(decrypted, original);
    assert_eq!(hex_to_string(&decrypted).unwrap(), "Hello World");
}

#[test]
fn test_validation_boundary() {
    assert!(!is_valid_hex(""));
    assert!(!is_valid_hex("0x"));
    assert!(is_valid_hex("0xff"));
    assert!(is_valid_hex("FF"));
}

// ============================================================================
// REALISTIC PAYLOADS
// ============================================================================

#[test]
fn test_wallet_info_json_roundtrip() {
    let wallet_info = json!({
        "address": "0x742d35Cc6634C0532925a3b844Bc9e7595f0bEb",
        "balance": "1.5 ETH",
    });

    let encoded = string_to_hex(&wallet_info.to_string());
    let decoded = hex_to_string(&encoded).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&decoded).unwrap();

    assert_eq!(parsed["address"], wallet_info["address"]);
    assert_eq!(parsed["balance"], wallet_info["balance"]);
}

#[test]
fn test_multilingual_text() {
    let texts = ["你好", "Hello", "こんにちは", "안녕하세요", "Привет", "🎉🎊🎈"];
    for text in texts {
        let hex = string_to_hex(text);
        assert_eq!(hex_to_string(&hex).unwrap(), text, "{text} should roundtrip");
    }
}

#[test]
fn test_contract_signature_text() {
    let signature = "transfer(address,uint256)";
    let hex = string_to_hex(signature);
    assert_eq!(hex_to_string(&hex).unwrap(), signature);
}

#[test]
fn test_long_string() {
    let long = "A".repeat(1000);
    let hex = string_to_hex(&long);
    assert_eq!(hex.len(), 2 + 2000);
    assert_eq!(hex_to_string(&hex).unwrap(), long);
}

#[test]
fn test_control_characters() {
    let text = "Line 1\nLine 2\tTabbed\r\nWindows Line";
    assert_eq!(hex_to_string(&string_to_hex(text)).unwrap(), text);
}

#[test]
fn test_unicode_symbols() {
    let symbols = "©®™€£¥§¶†‡";
    assert_eq!(hex_to_string(&string_to_hex(symbols)).unwrap(), symbols);
}

#[test]
fn test_utf8_aliases_match() {
    for text in ["test", "你好", "Hello世界", "🎉"] {
        assert_eq!(string_to_hex(text), utf8_to_hex(text));
        assert_eq!(hex_to_utf8(&utf8_to_hex(text)).unwrap(), text);
    }
}
